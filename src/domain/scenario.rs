use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Development scale tier, each with a fixed one-off build cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevComplexity {
    Mvp,
    Standard,
    Enterprise,
}

impl DevComplexity {
    pub fn development_cost(&self) -> Decimal {
        match self {
            DevComplexity::Mvp => dec!(75000),
            DevComplexity::Standard => dec!(150000),
            DevComplexity::Enterprise => dec!(350000),
        }
    }
}

impl std::fmt::Display for DevComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DevComplexity::Mvp => "MVP",
            DevComplexity::Standard => "Standard",
            DevComplexity::Enterprise => "Enterprise",
        };
        write!(f, "{label}")
    }
}

/// The full set of user-chosen business parameters driving all derived
/// figures. Counts are unsigned; range enforcement beyond that is left to
/// whoever edits the scenario file.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub dev_complexity: DevComplexity,
    pub initial_users: u32,
    pub psychiatrist_count: u32,
    pub premium_price: Decimal,
    pub conversion_rate_percent: Decimal,
    pub deep_ai_enabled: bool,
}

impl Scenario {
    /// Blended per-user monthly AI cost. Deep matching roughly triples the
    /// inference spend per active user.
    pub fn ai_cost_per_user(&self) -> Decimal {
        if self.deep_ai_enabled {
            dec!(1.50)
        } else {
            dec!(0.50)
        }
    }
}
