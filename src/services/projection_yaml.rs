use std::io::{self, Write};

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::services::report_types::ProjectionPoint;

#[derive(Error, Debug)]
pub enum ProjectionYamlError {
    #[error("failed to serialize projection yaml: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("failed to write projection yaml: {0}")]
    Write(#[from] io::Error),
}

/// Month indexes become calendar labels here, at the serialization boundary;
/// the projection points themselves stay index-based.
#[derive(Serialize)]
struct ProjectionRecord {
    month: String,
    users: Decimal,
    revenue: Decimal,
    cost: Decimal,
    profit: Decimal,
}

pub fn serialize_projection_to_yaml<W: Write>(
    writer: &mut W,
    points: &[ProjectionPoint],
    start_date: NaiveDate,
) -> Result<(), ProjectionYamlError> {
    let records: Vec<ProjectionRecord> = points
        .iter()
        .map(|point| ProjectionRecord {
            month: month_label(start_date, point.month),
            users: point.users,
            revenue: point.revenue,
            cost: point.cost,
            profit: point.profit,
        })
        .collect();

    let yaml = serde_yaml::to_string(&records)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

pub(crate) fn month_label(start_date: NaiveDate, months_ahead: u32) -> String {
    (start_date + Months::new(months_ahead))
        .format("%Y-%m")
        .to_string()
}
