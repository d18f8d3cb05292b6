//! Facade crate for Atlas features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `atlas` with the `client` feature to get the Dioxus view tree.
//! - Hosts launch [`App`] and may provide a [`domain::config::ClientConfig`] through context.

pub use atlas_domain as domain;
pub use atlas_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use atlas_regions as regions;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "regions",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Root component of the application.
#[cfg(feature = "client")]
pub use atlas_regions::components::RegionsApp as App;
