//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies
//! (`serde`, `bitflags`, `strum`). Keep it lean: no I/O, networking, or heavy
//! logic—just data and simple helpers.
//!
//! The module catalog, the subscription tiers, and the access resolver live
//! here so every other crate agrees on a single source of truth for
//! "which package unlocks what".

pub mod config;
pub mod constants;
pub mod modules;
pub mod registry;
pub mod tiers;
