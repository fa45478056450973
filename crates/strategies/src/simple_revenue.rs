use crate::RevenueStrategy;
use crate::error::StrategyError;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The standard discount-adjusted revenue formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevenueStrategy for SimpleRevenue {
    /// `revenue = sale_price * quantity * (1 - discount / 100)`.
    ///
    /// Discount is a percentage. 0-100 is the expected range but only
    /// non-negativity is enforced, so a discount above 100 yields a
    /// negative revenue rather than an error.
    fn line_revenue(&self, item: &LineItem, _product: &Product) -> Result<Decimal, StrategyError> {
        if item.discount < Decimal::ZERO {
            return Err(StrategyError::InvalidInput(format!(
                "line item discount must not be negative, got {}",
                item.discount
            )));
        }
        if item.sale_price < Decimal::ZERO {
            return Err(StrategyError::InvalidInput(format!(
                "line item sale price must not be negative, got {}",
                item.sale_price
            )));
        }

        let discount_multiplier = Decimal::ONE - item.discount / dec!(100);
        Ok(item.sale_price * Decimal::from(item.quantity) * discount_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, sale_price: Decimal, discount: Decimal) -> LineItem {
        LineItem {
            sku: "SKU-1".to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn product() -> Product {
        Product {
            sku: "SKU-1".to_string(),
            purchase_price: dec!(10),
            sale_price: dec!(20),
        }
    }

    #[test]
    fn undiscounted_revenue_is_price_times_quantity() {
        let strategy = SimpleRevenue::new();
        let revenue = strategy
            .line_revenue(&item(5, dec!(20), dec!(0)), &product())
            .unwrap();
        assert_eq!(revenue, dec!(100));
    }

    #[test]
    fn discount_is_applied_as_a_percentage() {
        let strategy = SimpleRevenue::new();
        let revenue = strategy
            .line_revenue(&item(5, dec!(20), dec!(50)), &product())
            .unwrap();
        assert_eq!(revenue, dec!(50.0));
    }

    #[test]
    fn full_discount_yields_zero_revenue() {
        let strategy = SimpleRevenue::new();
        let revenue = strategy
            .line_revenue(&item(3, dec!(20), dec!(100)), &product())
            .unwrap();
        assert_eq!(revenue, dec!(0.0));
    }

    #[test]
    fn zero_quantity_yields_zero_revenue() {
        let strategy = SimpleRevenue::new();
        let revenue = strategy
            .line_revenue(&item(0, dec!(20), dec!(0)), &product())
            .unwrap();
        assert_eq!(revenue, dec!(0));
    }

    #[test]
    fn discount_above_one_hundred_goes_negative() {
        // Values above 100 are not rejected; the formula is applied as-is.
        let strategy = SimpleRevenue::new();
        let revenue = strategy
            .line_revenue(&item(5, dec!(20), dec!(150)), &product())
            .unwrap();
        assert_eq!(revenue, dec!(-50.0));
    }

    #[test]
    fn negative_discount_is_rejected() {
        let strategy = SimpleRevenue::new();
        let result = strategy.line_revenue(&item(5, dec!(20), dec!(-1)), &product());
        assert!(matches!(result, Err(StrategyError::InvalidInput(_))));
    }

    #[test]
    fn negative_sale_price_is_rejected() {
        let strategy = SimpleRevenue::new();
        let result = strategy.line_revenue(&item(5, dec!(-20), dec!(0)), &product());
        assert!(matches!(result, Err(StrategyError::InvalidInput(_))));
    }
}
