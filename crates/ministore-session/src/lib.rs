//! Session state containers for the MiniStore storefront.
//!
//! The presentation layer owns one [`StorefrontSession`] and drives it from
//! user-interaction events. Criteria changes recompute the listing's view
//! list synchronously from products already in memory; fetches go through a
//! [`CatalogApi`](ministore_data::CatalogApi) implementation, and a result
//! arriving for a superseded fetch is discarded so the screen always
//! reflects the most recent request.
//!
//! ```rust,ignore
//! use ministore_data::CatalogClient;
//! use ministore_session::StorefrontSession;
//!
//! let client = CatalogClient::new()?;
//! let mut session = StorefrontSession::new();
//!
//! session.listing.refresh(&client).await;
//! if let Some(product) = session.listing.visible().first() {
//!     session.cart.add(product);
//! }
//! ```

mod detail;
mod listing;
mod load;
mod session;

pub use detail::{ProductDetail, FETCH_DETAIL_ERROR, PRODUCT_NOT_FOUND};
pub use listing::{ProductListing, FETCH_PRODUCTS_ERROR};
pub use load::{LoadState, LoadTicket};
pub use session::StorefrontSession;
