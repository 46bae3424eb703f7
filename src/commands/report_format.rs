use crate::domain::scenario::Scenario;
use crate::services::report_types::ScenarioReport;

pub fn format_scenario_report(scenario: &Scenario, report: &ScenarioReport) -> String {
    let margin = match report.snapshot.unit_economics.margin_percent {
        Some(value) => format!("{value}%"),
        None => "n/a".to_string(),
    };
    let break_even = match report.break_even_month {
        Some(month) => format!("month {month}"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Scenario Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Development tier: {}", scenario.dev_complexity));
    lines.push(format!("Initial users: {}", scenario.initial_users));
    lines.push(format!("Premium users: {}", report.snapshot.premium_users));
    lines.push(String::new());
    lines.push(format!("Capital required: {:.2}", report.capital.total));
    lines.push(format!("Monthly burn: {:.2}", report.burn.total));
    lines.push(format!(
        "Monthly revenue: {:.2}",
        report.snapshot.monthly_revenue
    ));
    lines.push(format!(
        "Monthly profit: {:.2}",
        report.snapshot.monthly_profit
    ));
    lines.push(format!("Unit margin: {margin}"));
    lines.push(format!("Break-even: {break_even}"));
    lines.push(String::new());
    lines.push("Capital breakdown:".to_string());
    lines.push("Component | Amount".to_string());
    lines.push("----------|-------".to_string());
    lines.push(format_component_row("Development", report.capital.development));
    lines.push(format_component_row(
        "Legal & compliance",
        report.capital.legal_compliance,
    ));
    lines.push(format_component_row("Marketing", report.capital.marketing));
    lines.push(format_component_row("Contingency", report.capital.contingency));
    lines.push(String::new());
    lines.push("Monthly burn breakdown:".to_string());
    lines.push("Component | Amount".to_string());
    lines.push("----------|-------".to_string());
    lines.push(format_component_row("AI & server", report.burn.server_ai));
    lines.push(format_component_row(
        "Psych network admin",
        report.burn.psych_admin,
    ));
    lines.push(format_component_row("Operations", report.burn.operations));

    lines.join("\n")
}

fn format_component_row(label: &str, amount: rust_decimal::Decimal) -> String {
    format!("{label} | {amount:.2}")
}
