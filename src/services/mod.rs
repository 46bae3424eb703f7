pub mod breakdown_plot;
pub mod costing;
pub mod projection;
pub mod projection_plot;
pub mod projection_yaml;
pub mod report_types;
pub mod rounding;
pub mod scenario_yaml;
pub mod unit_economics;
