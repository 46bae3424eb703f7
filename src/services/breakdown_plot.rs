use plotters::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakdownPlotError {
    #[error("failed to render breakdown chart: {0}")]
    Render(String),
}

/// Draws one bar per breakdown component, labeled with the component name.
pub fn write_breakdown_png(
    output_path: &str,
    caption: &str,
    components: &[(&str, Decimal)],
) -> Result<(), BreakdownPlotError> {
    if components.is_empty() {
        return Ok(());
    }

    let max_value = components
        .iter()
        .map(|(_, value)| value.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);
    let max_y = if max_value <= 0.0 { 1.0 } else { max_value * 1.1 };
    let max_x = components.len() as i32;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BreakdownPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| BreakdownPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc("Amount")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(components.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            components
                .get(*index as usize)
                .map(|(name, _)| (*name).to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| BreakdownPlotError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(components.iter().enumerate().map(|(index, (_, value))| {
            Rectangle::new(
                [
                    (index as i32, 0.0),
                    (index as i32 + 1, value.to_f64().unwrap_or(0.0)),
                ],
                bar_style,
            )
        }))
        .map_err(|e| BreakdownPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| BreakdownPlotError::Render(e.to_string()))?;
    Ok(())
}
