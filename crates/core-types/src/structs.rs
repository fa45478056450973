use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer present in the sales dataset.
///
/// The analysis itself never reads individual customer fields, but a dataset
/// arriving without its customer export is rejected up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

/// Immutable product reference data, identified by a unique SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// The price the business paid to acquire one unit (the cost basis).
    pub purchase_price: Decimal,
    /// The listed per-unit sale price.
    pub sale_price: Decimal,
}

/// A seller whose performance the analysis summarizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

/// One product-quantity-price entry within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The SKU of the product this item references.
    pub sku: String,
    pub quantity: u32,
    /// The per-unit price the item actually sold at.
    pub sale_price: Decimal,
    /// Discount percentage. 0-100 is the expected range; only non-negativity
    /// is enforced downstream.
    pub discount: Decimal,
}

/// A single sale: the seller who made it and the items that were sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: u64,
    pub items: Vec<LineItem>,
    /// The record-level total as stated by the source system. Accumulated
    /// into seller revenue as-is, independently of per-item revenue.
    pub total_amount: Decimal,
}

/// The full flat dataset the analyzer consumes.
///
/// All four collections are required and must be non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}
