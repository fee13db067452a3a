//! Load-state machine shared by the view-models.

/// Phase of an asynchronous fetch.
///
/// Every new request re-enters [`LoadState::Loading`]; `Ready` and `Failed`
/// are terminal for that request and only a new request leaves them.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// A fetch is in flight. This is also the initial phase.
    Loading,
    /// The fetch delivered a value.
    Ready(T),
    /// The fetch failed. Carries the user-facing message, not the raw error.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// The loaded value, when ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, when failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// Identifies one fetch request for last-request-wins bookkeeping.
///
/// Tickets are handed out in increasing order by the view-model that owns
/// the request. A result applied under an old ticket is discarded because a
/// newer request has superseded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Mints tickets and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub(crate) struct TicketCounter(u64);

impl TicketCounter {
    pub(crate) fn next(&mut self) -> LoadTicket {
        self.0 += 1;
        LoadTicket(self.0)
    }

    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state: LoadState<Vec<u32>> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_ready_accessors() {
        let state = LoadState::Ready(vec![1, 2, 3]);
        assert!(state.is_ready());
        assert!(!state.is_loading());
        assert_eq!(state.ready(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_failed_accessors() {
        let state: LoadState<u32> = LoadState::Failed("something broke".to_string());
        assert!(state.is_failed());
        assert_eq!(state.error(), Some("something broke"));
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_tickets_increase() {
        let mut counter = TicketCounter::default();
        let first = counter.next();
        let second = counter.next();
        assert!(second > first);
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut counter = TicketCounter::default();
        let first = counter.next();
        let second = counter.next();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
