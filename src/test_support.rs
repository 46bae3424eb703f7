use rust_decimal_macros::dec;

use crate::domain::scenario::{DevComplexity, Scenario};

/// The baseline what-if scenario: Standard build, 1000 users, 5
/// psychiatrists, 19.99 at 5% conversion, deep AI on.
pub fn build_scenario() -> Scenario {
    Scenario {
        dev_complexity: DevComplexity::Standard,
        initial_users: 1000,
        psychiatrist_count: 5,
        premium_price: dec!(19.99),
        conversion_rate_percent: dec!(5),
        deep_ai_enabled: true,
    }
}

pub fn build_scenario_with_users(initial_users: u32) -> Scenario {
    Scenario {
        initial_users,
        ..build_scenario()
    }
}
