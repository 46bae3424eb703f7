use chrono::NaiveDate;
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

use crate::services::projection_yaml::month_label;
use crate::services::report_types::ProjectionPoint;

#[derive(Error, Debug)]
pub enum ProjectionPlotError {
    #[error("projection data is empty")]
    EmptyProjection,
    #[error("failed to render projection chart: {0}")]
    Render(String),
}

// The revenue/cost/profit palette of the dashboard this chart replaces.
const REVENUE_COLOR: RGBColor = RGBColor(16, 185, 129);
const COST_COLOR: RGBColor = RGBColor(239, 68, 68);
const PROFIT_COLOR: RGBColor = RGBColor(59, 130, 246);

/// Renders revenue, cost and profit as line series over the projected year.
pub fn write_projection_png(
    output_path: &str,
    points: &[ProjectionPoint],
    start_date: NaiveDate,
) -> Result<(), ProjectionPlotError> {
    if points.is_empty() {
        return Err(ProjectionPlotError::EmptyProjection);
    }

    let values: Vec<(i64, i64, i64)> = points
        .iter()
        .map(|point| {
            (
                point.revenue.to_i64().unwrap_or(0),
                point.cost.to_i64().unwrap_or(0),
                point.profit.to_i64().unwrap_or(0),
            )
        })
        .collect();

    let min_y = values
        .iter()
        .map(|(revenue, cost, profit)| *revenue.min(cost).min(profit))
        .min()
        .unwrap_or(0)
        .min(0);
    let max_y = values
        .iter()
        .map(|(revenue, cost, profit)| *revenue.max(cost).max(profit))
        .max()
        .unwrap_or(1)
        .max(1);
    let padding = ((max_y - min_y) / 10).max(1);
    let max_x = (points.len() - 1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("12-Month Projection", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, (min_y - padding)..(max_y + padding))
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Amount")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(points.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            month_label(start_date, *index as u32)
        })
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    let series = [
        ("Revenue", REVENUE_COLOR, 0usize),
        ("Cost", COST_COLOR, 1),
        ("Profit", PROFIT_COLOR, 2),
    ];
    for (name, color, field) in series {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(index, value)| {
                    let y = match field {
                        0 => value.0,
                        1 => value.1,
                        _ => value.2,
                    };
                    (index as i32, y)
                }),
                color.stroke_width(3),
            ))
            .map_err(|e| ProjectionPlotError::Render(e.to_string()))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| ProjectionPlotError::Render(e.to_string()))?;
    Ok(())
}
