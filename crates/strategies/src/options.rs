use crate::simple_revenue::SimpleRevenue;
use crate::tiered_bonus::TieredBonus;
use crate::{BonusStrategy, RevenueStrategy};

/// The capability bundle handed to the analyzer.
///
/// Both slots must be filled before an analysis can run; the analyzer
/// reports an unset slot as a missing capability rather than falling back
/// to a default formula.
#[derive(Default)]
pub struct AnalysisOptions {
    revenue: Option<Box<dyn RevenueStrategy>>,
    bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Creates an empty bundle with no capabilities installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle with the stock strategies installed: the
    /// discount-adjusted revenue formula and the default tiered schedule.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue::new())
            .with_bonus(TieredBonus::default())
    }

    /// Installs the revenue capability, replacing any previous one.
    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(strategy));
        self
    }

    /// Installs the bonus capability, replacing any previous one.
    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(strategy));
        self
    }

    /// The installed revenue strategy, if any.
    pub fn revenue(&self) -> Option<&dyn RevenueStrategy> {
        self.revenue.as_deref()
    }

    /// The installed bonus strategy, if any.
    pub fn bonus(&self) -> Option<&dyn BonusStrategy> {
        self.bonus.as_deref()
    }
}
