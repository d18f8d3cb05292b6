//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts config loading and the error-context helpers
//! every slice formats its messages with.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use atlas_kernel::config::load_config;
//!     use atlas_kernel::domain::config::ClientConfig;
//!     let cfg: ClientConfig = load_config(Some("atlas")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;

pub use atlas_domain as domain;
