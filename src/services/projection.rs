use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::scenario::Scenario;
use crate::services::costing::{HOSTING_PER_USER, psych_admin_cost};
use crate::services::report_types::ProjectionPoint;
use crate::services::rounding::nearest_whole;
use crate::services::unit_economics::premium_users;

pub const PROJECTION_MONTHS: u32 = 12;

/// Growth is linear: every month adds 15% of the original base, it does not
/// compound month over month.
const MONTHLY_GROWTH: Decimal = dec!(0.15);

/// Server base and operations overhead folded into one constant for the
/// projection view.
const PROJECTED_OVERHEAD: Decimal = dec!(5500);

/// Projects users, revenue, cost and profit for months 0 through 12. Each
/// point is derived independently from the scenario; nothing carries over
/// between iterations.
pub fn project_year(scenario: &Scenario) -> Vec<ProjectionPoint> {
    (0..=PROJECTION_MONTHS)
        .map(|month| point_at(scenario, month))
        .collect()
}

/// First month whose projected profit is non-negative, if the scenario ever
/// breaks even within the projected year.
pub fn break_even_month(points: &[ProjectionPoint]) -> Option<u32> {
    points
        .iter()
        .find(|point| point.profit >= Decimal::ZERO)
        .map(|point| point.month)
}

fn point_at(scenario: &Scenario, month: u32) -> ProjectionPoint {
    let base = Decimal::from(scenario.initial_users);
    let users = base + Decimal::from(month) * base * MONTHLY_GROWTH;
    let premium = premium_users(users, scenario.conversion_rate_percent);
    let revenue = Decimal::from(premium) * scenario.premium_price;
    let cost = PROJECTED_OVERHEAD
        + users * HOSTING_PER_USER
        + users * scenario.ai_cost_per_user()
        + psych_admin_cost(scenario);

    ProjectionPoint {
        month,
        users,
        revenue: nearest_whole(revenue),
        cost: nearest_whole(cost),
        profit: nearest_whole(revenue - cost),
    }
}
