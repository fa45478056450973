//! # Sales Strategy Library
//!
//! This crate contains the pluggable calculation policies for the sales
//! analytics system. It defines the `RevenueStrategy` and `BonusStrategy`
//! traits and provides the stock implementations of both.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   data loading or rendering. It depends only on `core-types` and
//!   `configuration`.
//! - **Strategy Agnostic Engine:** By coding against the two traits, the
//!   analytics engine can apply any revenue formula or bonus schedule
//!   without knowing its internal details.
//! - **Extensibility:** Substituting a formula involves implementing the
//!   relevant trait and installing it on an `AnalysisOptions` bundle.
//!
//! ## Public API
//!
//! The primary public components are:
//! - `RevenueStrategy` / `BonusStrategy`: the capability traits.
//! - `SimpleRevenue` / `TieredBonus`: the stock implementations.
//! - `AnalysisOptions`: the bundle that injects both into the analyzer.

// Declare all the modules that constitute this crate.
pub mod error;
pub mod options;
pub mod simple_revenue;
pub mod tiered_bonus;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use options::AnalysisOptions;
pub use simple_revenue::SimpleRevenue;
pub use tiered_bonus::TieredBonus;

// Re-export BonusTiers from configuration
pub use configuration::BonusTiers;

use core_types::{LineItem, Product};
use rust_decimal::Decimal;

/// The revenue half of the capability pair.
///
/// Implementations compute the net revenue of a single line item. The
/// `Send + Sync` bounds are required to allow strategies to be shared by
/// harnesses that analyze many datasets in parallel.
pub trait RevenueStrategy: Send + Sync {
    /// Computes the net revenue for one line item and its product.
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - the net revenue of the item.
    /// * `Err(StrategyError)` - if the item violates the strategy's input
    ///   constraints.
    fn line_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, StrategyError>;
}

/// The bonus half of the capability pair.
pub trait BonusStrategy: Send + Sync {
    /// Computes the bonus for the seller at `rank` out of `total` ranked
    /// sellers, given the seller's finalized profit.
    ///
    /// Ranks are 0-based and assigned over sellers sorted descending by
    /// profit, so rank 0 is the most profitable seller.
    fn bonus(&self, rank: usize, total: usize, profit: Decimal) -> Result<Decimal, StrategyError>;
}
