use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product and the cumulative quantity a seller moved of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u32,
}

/// The finalized summary of one seller's performance.
///
/// This struct is the output of the `SalesAnalyzer` and serves as the
/// data transfer object for analysis results. Monetary fields are rounded
/// to two decimal places; summaries are ordered descending by profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: usize,
    /// Up to ten products, quantity-descending.
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}
