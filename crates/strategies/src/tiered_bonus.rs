use crate::BonusStrategy;
use crate::error::StrategyError;
use configuration::BonusTiers;
use rust_decimal::Decimal;

/// The rank-tiered bonus schedule.
///
/// Ranks are 0-based over sellers sorted descending by profit: the leader
/// earns the first-place rate, second and third earn the podium rate, the
/// last place earns nothing, and everyone in between earns the base rate.
/// The last-place rule wins when it coincides with a named tier, so with
/// three or fewer ranked sellers the lowest rank is unpaid even though its
/// index would otherwise qualify for 15% or 10%.
#[derive(Debug, Clone)]
pub struct TieredBonus {
    tiers: BonusTiers,
}

impl TieredBonus {
    /// Creates a new `TieredBonus` with the given schedule.
    ///
    /// It performs validation to ensure the rates are logical.
    pub fn new(tiers: BonusTiers) -> Result<Self, StrategyError> {
        for (name, rate) in [
            ("first_place_rate", tiers.first_place_rate),
            ("podium_rate", tiers.podium_rate),
            ("base_rate", tiers.base_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(StrategyError::InvalidParameters(format!(
                    "{} must be between 0 and 1, got {}",
                    name, rate
                )));
            }
        }

        Ok(Self { tiers })
    }
}

impl Default for TieredBonus {
    fn default() -> Self {
        Self {
            tiers: BonusTiers::default(),
        }
    }
}

impl BonusStrategy for TieredBonus {
    fn bonus(&self, rank: usize, total: usize, profit: Decimal) -> Result<Decimal, StrategyError> {
        if total == 0 {
            return Err(StrategyError::InvalidInput(
                "total number of ranked sellers must be greater than zero".to_string(),
            ));
        }
        if rank >= total {
            return Err(StrategyError::InvalidInput(format!(
                "rank {} is out of range for {} ranked sellers",
                rank, total
            )));
        }
        if profit < Decimal::ZERO {
            return Err(StrategyError::InvalidInput(format!(
                "seller profit must not be negative, got {}",
                profit
            )));
        }

        let bonus = if rank == total - 1 {
            // Last place is unpaid, even when it doubles as a podium rank.
            Decimal::ZERO
        } else if rank == 0 {
            profit * self.tiers.first_place_rate
        } else if rank == 1 || rank == 2 {
            profit * self.tiers.podium_rate
        } else {
            profit * self.tiers.base_rate
        };

        tracing::debug!("TieredBonus: rank {} of {} -> bonus {}", rank, total, bonus);

        Ok(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn schedule_pays_out_by_rank() {
        let strategy = TieredBonus::default();
        let profit = dec!(100);
        // Six sellers: leader, two podium places, two base places, unpaid last.
        assert_eq!(strategy.bonus(0, 6, profit).unwrap(), dec!(15.00));
        assert_eq!(strategy.bonus(1, 6, profit).unwrap(), dec!(10.00));
        assert_eq!(strategy.bonus(2, 6, profit).unwrap(), dec!(10.00));
        assert_eq!(strategy.bonus(3, 6, profit).unwrap(), dec!(5.00));
        assert_eq!(strategy.bonus(4, 6, profit).unwrap(), dec!(5.00));
        assert_eq!(strategy.bonus(5, 6, profit).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn sole_seller_is_also_the_unpaid_last_place() {
        let strategy = TieredBonus::default();
        assert_eq!(strategy.bonus(0, 1, dec!(100)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn last_place_rule_overrides_podium_tier() {
        let strategy = TieredBonus::default();
        // With two sellers the runner-up is last, not a 10% podium place.
        assert_eq!(strategy.bonus(0, 2, dec!(50)).unwrap(), dec!(7.50));
        assert_eq!(strategy.bonus(1, 2, dec!(50)).unwrap(), Decimal::ZERO);
        // With three sellers rank 2 is both "index 2" and last; last wins.
        assert_eq!(strategy.bonus(2, 3, dec!(100)).unwrap(), Decimal::ZERO);
        assert_eq!(strategy.bonus(1, 3, dec!(100)).unwrap(), dec!(10.00));
    }

    #[test]
    fn zero_total_is_rejected() {
        let strategy = TieredBonus::default();
        let result = strategy.bonus(0, 0, dec!(100));
        assert!(matches!(result, Err(StrategyError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_rank_is_rejected() {
        let strategy = TieredBonus::default();
        let result = strategy.bonus(3, 3, dec!(100));
        assert!(matches!(result, Err(StrategyError::InvalidInput(_))));
    }

    #[test]
    fn negative_profit_is_rejected() {
        let strategy = TieredBonus::default();
        let result = strategy.bonus(0, 5, dec!(-0.01));
        assert!(matches!(result, Err(StrategyError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_rates_are_rejected() {
        let tiers = BonusTiers {
            first_place_rate: dec!(1.5),
            ..BonusTiers::default()
        };
        assert!(matches!(
            TieredBonus::new(tiers),
            Err(StrategyError::InvalidParameters(_))
        ));

        let tiers = BonusTiers {
            base_rate: dec!(-0.05),
            ..BonusTiers::default()
        };
        assert!(matches!(
            TieredBonus::new(tiers),
            Err(StrategyError::InvalidParameters(_))
        ));
    }

    #[test]
    fn custom_rates_are_applied() {
        let tiers = BonusTiers {
            first_place_rate: dec!(0.20),
            podium_rate: dec!(0.10),
            base_rate: dec!(0.01),
        };
        let strategy = TieredBonus::new(tiers).unwrap();
        assert_eq!(strategy.bonus(0, 5, dec!(200)).unwrap(), dec!(40.00));
        assert_eq!(strategy.bonus(3, 5, dec!(200)).unwrap(), dec!(2.00));
    }
}
