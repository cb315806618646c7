//! splashgen - cordova splashscreen generation
//!
//! Detects which mobile platforms were added to a cordova project, verifies
//! the required input files, and resizes `splash.png` into every
//! per-platform, per-resolution splashscreen the project needs.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Best practices
    clippy::inefficient_to_string,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]

pub mod api;
pub mod catalog;
pub mod checks;
pub mod defaults;
pub mod descriptor;
pub mod display;
pub mod exceptions;
pub mod exit_codes;
pub mod generator;
pub mod logger;
pub mod pipeline;
pub mod version;

// Re-export main API types
pub use api::{PlatformOutcome, RunSummary, Settings, generate_splashes};
pub use exceptions::{Result, SplashError};

// Re-export catalog types for advanced usage
pub use catalog::{PlatformSpec, SplashSpec};
