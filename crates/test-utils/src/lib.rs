//! # GraphQL Test Utilities
//!
//! Shared test infrastructure for the typed files modules plugin.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::doc_markdown)]
//!
//! ## Modules
//!
//! - [`fixtures`] - The document sets the plugin is exercised against
//! - [`assertions`] - Helpers for inspecting generated declaration output
//!
//! ## Re-exports
//!
//! `insta` is re-exported for snapshot testing.

pub mod assertions;
pub mod fixtures;

pub use assertions::declared_modules;

// Re-export insta for snapshot testing
pub use insta;

/// Install a test-friendly tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}
