use rust_decimal::Decimal;
use serde::Serialize;

/// One-off capital required to launch.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub development: Decimal,
    pub legal_compliance: Decimal,
    pub marketing: Decimal,
    pub contingency: Decimal,
    pub total: Decimal,
}

/// Recurring monthly operating cost.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BurnBreakdown {
    pub server_ai: Decimal,
    pub psych_admin: Decimal,
    pub operations: Decimal,
    pub total: Decimal,
}

/// Simplified per-premium-user cost view, used for display only. Deliberately
/// not reconciled with the per-active-user figures in `BurnBreakdown`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UnitEconomics {
    pub match_processing: Decimal,
    pub chat_storage: Decimal,
    pub cost_per_premium_user: Decimal,
    /// `None` when the premium price is zero.
    pub margin_percent: Option<Decimal>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProfitSnapshot {
    pub premium_users: u64,
    pub monthly_revenue: Decimal,
    pub monthly_profit: Decimal,
    pub unit_economics: UnitEconomics,
}

/// One month of the year projection. `users` may be fractional; revenue,
/// cost and profit are rounded to whole currency units when the point is
/// built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionPoint {
    pub month: u32,
    pub users: Decimal,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

/// Monthly burn and profit snapshot side by side.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OperatingReport {
    pub burn: BurnBreakdown,
    pub snapshot: ProfitSnapshot,
}

/// Everything derived from one scenario.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub data_source: String,
    pub capital: CostBreakdown,
    pub burn: BurnBreakdown,
    pub snapshot: ProfitSnapshot,
    pub break_even_month: Option<u32>,
    pub projection: Vec<ProjectionPoint>,
}
