use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::scenario::Scenario;
use crate::services::report_types::{BurnBreakdown, CostBreakdown};

// Launch capital constants.
const LEGAL_BASE: Decimal = dec!(25000);
const PSYCHIATRIST_ONBOARDING: Decimal = dec!(500);
const MARKETING_PER_USER: Decimal = dec!(15);
const CONTINGENCY: Decimal = dec!(20000);

// Monthly burn constants.
const SERVER_BASE: Decimal = dec!(500);
pub(crate) const HOSTING_PER_USER: Decimal = dec!(0.10);
const PSYCH_ADMIN_RETAINER: Decimal = dec!(300);
const OPERATIONS_OVERHEAD: Decimal = dec!(5000);

/// One-off capital required to launch: build, legal/compliance, launch
/// marketing and a fixed contingency.
pub fn capital_breakdown(scenario: &Scenario) -> CostBreakdown {
    let development = scenario.dev_complexity.development_cost();
    let legal_compliance =
        LEGAL_BASE + Decimal::from(scenario.psychiatrist_count) * PSYCHIATRIST_ONBOARDING;
    let marketing = Decimal::from(scenario.initial_users) * MARKETING_PER_USER;
    let total = development + legal_compliance + marketing + CONTINGENCY;

    CostBreakdown {
        development,
        legal_compliance,
        marketing,
        contingency: CONTINGENCY,
        total,
    }
}

/// Recurring monthly operating cost: hosting + AI per active user,
/// psychiatrist network administration, and a fixed operations overhead.
pub fn monthly_burn(scenario: &Scenario) -> BurnBreakdown {
    let users = Decimal::from(scenario.initial_users);
    let server_ai = SERVER_BASE + users * HOSTING_PER_USER + users * scenario.ai_cost_per_user();
    let psych_admin = psych_admin_cost(scenario);
    let total = server_ai + psych_admin + OPERATIONS_OVERHEAD;

    BurnBreakdown {
        server_ai,
        psych_admin,
        operations: OPERATIONS_OVERHEAD,
        total,
    }
}

/// Verification and retainer admin for the psychiatrist network. The
/// platform pays per session, not salary, so this is the only recurring
/// per-psychiatrist cost.
pub(crate) fn psych_admin_cost(scenario: &Scenario) -> Decimal {
    Decimal::from(scenario.psychiatrist_count) * PSYCH_ADMIN_RETAINER
}
