use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the analysis library.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bonus_tiers: BonusTiers,
}

/// The rank-dependent percentage-of-profit reward schedule.
///
/// Rates are fractions of profit (0.15 corresponds to 15%). The seller
/// ranked last receives no bonus regardless of these rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BonusTiers {
    /// Rate paid to the most profitable seller.
    pub first_place_rate: Decimal,
    /// Rate paid to the sellers ranked second and third.
    pub podium_rate: Decimal,
    /// Rate paid to every other ranked seller.
    pub base_rate: Decimal,
}

impl Default for BonusTiers {
    fn default() -> Self {
        Self {
            first_place_rate: dec!(0.15),
            podium_rate: dec!(0.10),
            base_rate: dec!(0.05),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_match_canonical_schedule() {
        let tiers = BonusTiers::default();
        assert_eq!(tiers.first_place_rate, dec!(0.15));
        assert_eq!(tiers.podium_rate, dec!(0.10));
        assert_eq!(tiers.base_rate, dec!(0.05));
    }

    #[test]
    fn default_config_carries_default_tiers() {
        let config = Config::default();
        assert_eq!(config.bonus_tiers.first_place_rate, dec!(0.15));
    }
}
