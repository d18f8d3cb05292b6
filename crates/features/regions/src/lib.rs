//! Regions feature slice: browse Canadian provinces and territories.
//!
//! * [`source`] talks to the regions API (one `GET` per selection, no retries).
//! * [`state`] is the explicit application state the view is rendered from.
//! * [`visibility`] tracks which cards currently reveal their capital.
//! * `components` (feature `client`) is the Dioxus view tree.
//!
//! ## Headless usage
//! ```rust,no_run
//! use atlas_domain::config::ClientConfig;
//! use atlas_domain::region::Category;
//! use atlas_regions::{AppState, HttpRegionSource, controller};
//!
//! # async fn example() {
//! let config = ClientConfig::default();
//! let source = HttpRegionSource::new(&config.api);
//! let mut state = AppState::new(config.fetch.stale_policy);
//!
//! controller::select_and_load(&mut state, &source, Category::Territories).await;
//! for region in state.regions() {
//!     println!("{} ({})", region.name, region.capital);
//! }
//! # }
//! ```

#[cfg(feature = "client")]
pub mod components;
pub mod controller;
mod error;
pub mod source;
pub mod state;
pub mod visibility;

pub use crate::error::{RegionsError, RegionsErrorExt, Result};
pub use crate::source::{HttpRegionSource, RegionSource};
pub use crate::state::{AppState, FetchTicket, Resolution};
pub use crate::visibility::CapitalVisibility;
