use crate::error::AnalyticsError;
use crate::report::{SellerSummary, TopProduct};
use core_types::{Product, SalesData, Seller};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use strategies::{AnalysisOptions, BonusStrategy, RevenueStrategy};

/// Number of entries kept in each seller's top-product list.
const TOP_PRODUCTS_LIMIT: usize = 10;

/// A stateless calculator for deriving per-seller statistics from sales activity.
#[derive(Debug, Default)]
pub struct SalesAnalyzer {}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for computing the per-seller analysis.
    ///
    /// # Arguments
    ///
    /// * `data` - The full dataset: customers, products, sellers, and purchase records.
    /// * `options` - The injected capability pair for revenue and bonus calculations.
    ///
    /// # Returns
    ///
    /// A `Result` containing one `SellerSummary` per input seller, ordered
    /// descending by profit, or an `AnalyticsError`. Any failure aborts the
    /// whole analysis; no partial statistics are returned.
    pub fn analyze(
        &self,
        data: &SalesData,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerSummary>, AnalyticsError> {
        // --- 1. Validation ---
        let (revenue_strategy, bonus_strategy) = self.validate(data, options)?;

        tracing::debug!(
            "Analyzing {} purchase records across {} sellers",
            data.purchase_records.len(),
            data.sellers.len()
        );

        // --- 2. Aggregation ---
        let mut stats = self.aggregate(data, revenue_strategy)?;

        // --- 3. Ranking ---
        // Stable sort, so sellers tied on profit keep their input order.
        stats.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));

        // --- 4. Bonus assignment and projection ---
        self.finalize(stats, bonus_strategy)
    }

    /// Fails fast on an unusable dataset or an incomplete capability bundle,
    /// before any aggregation work is done.
    fn validate<'a>(
        &self,
        data: &SalesData,
        options: &'a AnalysisOptions,
    ) -> Result<(&'a dyn RevenueStrategy, &'a dyn BonusStrategy), AnalyticsError> {
        for (name, is_empty) in [
            ("customers", data.customers.is_empty()),
            ("products", data.products.is_empty()),
            ("sellers", data.sellers.is_empty()),
            ("purchase_records", data.purchase_records.is_empty()),
        ] {
            if is_empty {
                return Err(AnalyticsError::InvalidInput(format!(
                    "dataset collection '{}' must not be empty",
                    name
                )));
            }
        }

        let revenue = options.revenue().ok_or_else(|| {
            AnalyticsError::MissingCapability("revenue strategy is not installed".to_string())
        })?;
        let bonus = options.bonus().ok_or_else(|| {
            AnalyticsError::MissingCapability("bonus strategy is not installed".to_string())
        })?;

        Ok((revenue, bonus))
    }

    /// Folds every purchase record, exactly once and in input order, into
    /// the per-seller accumulators.
    fn aggregate(
        &self,
        data: &SalesData,
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<Vec<SellerStat>, AnalyticsError> {
        // SKU -> product lookup; a duplicated SKU keeps its last occurrence.
        let mut product_index: HashMap<&str, &Product> =
            HashMap::with_capacity(data.products.len());
        for product in &data.products {
            product_index.insert(product.sku.as_str(), product);
        }

        let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();
        let seller_index: HashMap<u64, usize> = stats
            .iter()
            .enumerate()
            .map(|(slot, stat)| (stat.id, slot))
            .collect();

        for record in &data.purchase_records {
            let stat = match seller_index.get(&record.seller_id) {
                Some(&slot) => &mut stats[slot],
                None => {
                    // Records for unknown sellers are dropped, not reported.
                    tracing::debug!(
                        "Skipping purchase record for unknown seller id {}",
                        record.seller_id
                    );
                    continue;
                }
            };

            stat.sales_count += 1;
            // Seller revenue tracks the record-level total as stated by the
            // source; it is not reconciled with the per-item revenue below.
            stat.revenue += record.total_amount;

            for item in &record.items {
                let product = match product_index.get(item.sku.as_str()) {
                    Some(&product) => product,
                    None => {
                        tracing::debug!("Skipping line item with unknown sku {}", item.sku);
                        continue;
                    }
                };

                let cost = product.purchase_price * Decimal::from(item.quantity);
                let line_revenue = revenue_strategy.line_revenue(item, product)?;
                stat.profit += line_revenue - cost;
                *stat.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
            }
        }

        Ok(stats)
    }

    /// Assigns rank-based bonuses and projects the accumulators into the
    /// immutable output summaries.
    fn finalize(
        &self,
        stats: Vec<SellerStat>,
        bonus_strategy: &dyn BonusStrategy,
    ) -> Result<Vec<SellerSummary>, AnalyticsError> {
        let total = stats.len();
        let mut summaries = Vec::with_capacity(total);

        for (rank, stat) in stats.iter().enumerate() {
            let bonus = bonus_strategy.bonus(rank, total, stat.profit)?;

            summaries.push(SellerSummary {
                seller_id: stat.id.to_string(),
                name: stat.name.clone(),
                revenue: round_money(stat.revenue),
                profit: round_money(stat.profit),
                sales_count: stat.sales_count,
                top_products: stat.top_products(),
                bonus: round_money(bonus),
            });
        }

        Ok(summaries)
    }
}

/// The per-seller accumulator mutated during the aggregation pass.
///
/// Instances live for exactly one `analyze` invocation and never escape it;
/// callers only ever see the projected `SellerSummary`.
#[derive(Debug)]
struct SellerStat {
    id: u64,
    name: String,
    revenue: Decimal,
    profit: Decimal,
    sales_count: usize,
    products_sold: BTreeMap<String, u32>,
}

impl SellerStat {
    fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id,
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: BTreeMap::new(),
        }
    }

    /// Converts the cumulative per-SKU quantities into the ranked
    /// top-product list, quantity-descending, capped at the limit.
    ///
    /// The stable sort runs over the map's sku-ascending iteration, so
    /// quantity ties break by sku and repeated runs produce identical lists.
    fn top_products(&self) -> Vec<TopProduct> {
        let mut volumes: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();
        volumes.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        volumes.truncate(TOP_PRODUCTS_LIMIT);
        volumes
    }
}

/// Rounds a monetary amount to two decimal places, half away from zero.
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
