//! Dioxus view tree for the regions slice.
//!
//! [`RegionsApp`] is the root: it owns the [`AppState`](crate::AppState) signal and
//! issues requests. Everything below it is presentational.

mod app;
mod card;
mod list;
mod picker;

pub use app::RegionsApp;
pub use card::RegionCard;
pub use list::RegionList;
pub use picker::CategoryPicker;
