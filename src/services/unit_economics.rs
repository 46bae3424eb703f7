use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::domain::scenario::Scenario;
use crate::services::report_types::{BurnBreakdown, ProfitSnapshot, UnitEconomics};
use crate::services::rounding::nearest_whole;

const DEEP_MATCH_PROCESSING: Decimal = dec!(1.20);
const BASIC_MATCH_PROCESSING: Decimal = dec!(0.20);
const CHAT_STORAGE: Decimal = dec!(0.15);

const PERCENT: Decimal = dec!(100);

/// Number of users on the paid tier. Fractional counts truncate; 999 users
/// at 5% is 49 premium users, not 50.
pub fn premium_users(users: Decimal, conversion_rate_percent: Decimal) -> u64 {
    (users * conversion_rate_percent / PERCENT)
        .floor()
        .to_u64()
        .unwrap_or(0)
}

/// Revenue and profit at the scenario's starting user count, plus the
/// per-premium-user margin view.
pub fn profit_snapshot(scenario: &Scenario, burn: &BurnBreakdown) -> ProfitSnapshot {
    let premium_users = premium_users(
        Decimal::from(scenario.initial_users),
        scenario.conversion_rate_percent,
    );
    let monthly_revenue = Decimal::from(premium_users) * scenario.premium_price;
    let monthly_profit = monthly_revenue - burn.total;

    ProfitSnapshot {
        premium_users,
        monthly_revenue,
        monthly_profit,
        unit_economics: unit_economics(scenario),
    }
}

fn unit_economics(scenario: &Scenario) -> UnitEconomics {
    let match_processing = if scenario.deep_ai_enabled {
        DEEP_MATCH_PROCESSING
    } else {
        BASIC_MATCH_PROCESSING
    };
    let cost_per_premium_user = match_processing + CHAT_STORAGE;

    UnitEconomics {
        match_processing,
        chat_storage: CHAT_STORAGE,
        cost_per_premium_user,
        margin_percent: margin_percent(scenario.premium_price, cost_per_premium_user),
    }
}

fn margin_percent(premium_price: Decimal, cost_per_premium_user: Decimal) -> Option<Decimal> {
    if premium_price.is_zero() {
        return None;
    }
    Some(nearest_whole(
        (premium_price - cost_per_premium_user) / premium_price * PERCENT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::costing::monthly_burn;
    use crate::test_support::{build_scenario, build_scenario_with_users};

    #[test]
    fn profit_snapshot_matches_baseline_scenario() {
        let scenario = build_scenario();
        let burn = monthly_burn(&scenario);
        let snapshot = profit_snapshot(&scenario, &burn);

        assert_eq!(snapshot.premium_users, 50);
        assert_eq!(snapshot.monthly_revenue, dec!(999.50));
        assert_eq!(snapshot.monthly_profit, dec!(-7600.50));
        assert_eq!(snapshot.unit_economics.margin_percent, Some(dec!(93)));
    }

    #[test]
    fn premium_users_truncate_fractional_counts() {
        assert_eq!(premium_users(dec!(1000), dec!(5)), 50);
        assert_eq!(premium_users(dec!(1000), dec!(1)), 10);
        assert_eq!(premium_users(dec!(1000), dec!(0.5)), 5);
        // 999 * 5% = 49.95 truncates, never rounds up
        assert_eq!(premium_users(dec!(999), dec!(5)), 49);
    }

    #[test]
    fn unit_cost_follows_deep_ai_toggle() {
        let mut scenario = build_scenario();
        let burn = monthly_burn(&scenario);
        let deep = profit_snapshot(&scenario, &burn).unit_economics;
        assert_eq!(deep.match_processing, dec!(1.20));
        assert_eq!(deep.chat_storage, dec!(0.15));
        assert_eq!(deep.cost_per_premium_user, dec!(1.35));

        scenario.deep_ai_enabled = false;
        let burn = monthly_burn(&scenario);
        let basic = profit_snapshot(&scenario, &burn).unit_economics;
        assert_eq!(basic.cost_per_premium_user, dec!(0.35));
    }

    #[test]
    fn unit_cost_components_sum_to_cost_per_premium_user() {
        let scenario = build_scenario();
        let burn = monthly_burn(&scenario);
        let economics = profit_snapshot(&scenario, &burn).unit_economics;
        assert_eq!(
            economics.match_processing + economics.chat_storage,
            economics.cost_per_premium_user
        );
    }

    #[test]
    fn margin_is_undefined_for_zero_price() {
        let mut scenario = build_scenario();
        scenario.premium_price = Decimal::ZERO;
        let burn = monthly_burn(&scenario);
        let snapshot = profit_snapshot(&scenario, &burn);
        assert_eq!(snapshot.unit_economics.margin_percent, None);
    }

    #[test]
    fn snapshot_is_deterministic() {
        let scenario = build_scenario_with_users(4500);
        let burn = monthly_burn(&scenario);
        assert_eq!(
            profit_snapshot(&scenario, &burn),
            profit_snapshot(&scenario, &burn)
        );
    }
}
