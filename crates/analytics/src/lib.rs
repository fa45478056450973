//! # Sales Analytics Engine
//!
//! This crate provides the tools for computing per-seller sales statistics
//! from a flat in-memory dataset. It acts as the "scoreboard" of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` and the injected
//!   capabilities from `strategies`.
//! - **Stateless Calculation:** The `SalesAnalyzer` is a stateless
//!   calculator. It takes a dataset plus a capability bundle as input and
//!   produces ranked `SellerSummary` records as output. This makes it
//!   highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `SalesAnalyzer`: The main struct that contains the analysis pipeline.
//! - `SellerSummary` / `TopProduct`: The ranked output records.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SalesAnalyzer;
pub use error::AnalyticsError;
pub use report::{SellerSummary, TopProduct};
