//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or rendering, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod region;
