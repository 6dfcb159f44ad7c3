//! Repository growth timeline drawn as an SVG bar chart.

use crate::api::Result;
use anyhow::anyhow;
use plotters::prelude::*;
use std::collections::BTreeMap;

const CHART_SIZE: (u32, u32) = (800, 400);

/// One bar per creation year, count on the y axis. Years without repositories between the first and
/// last one get an empty slot so the x axis stays continuous.
pub fn growth_chart_svg(yearly: &BTreeMap<i32, usize>) -> Result<String> {
    let first = yearly.keys().next().copied().unwrap_or(0);
    let last = yearly.keys().next_back().copied().unwrap_or(first);
    let max_count = yearly.values().copied().max().unwrap_or(0) as u32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|err| anyhow!("Failed to draw growth chart: {}", err))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Repository Growth Timeline", ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((first..last + 1).into_segmented(), 0u32..max_count + 1)
            .map_err(|err| anyhow!("Failed to draw growth chart: {}", err))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Year")
            .y_desc("Repositories Created")
            .x_label_formatter(&|year| match year {
                SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(|err| anyhow!("Failed to draw growth chart: {}", err))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(RGBColor(60, 179, 113).filled())
                    .margin(10)
                    .data(yearly.iter().map(|(year, count)| (*year, *count as u32))),
            )
            .map_err(|err| anyhow!("Failed to draw growth chart: {}", err))?;

        root.present().map_err(|err| anyhow!("Failed to draw growth chart: {}", err))?;
    }
    Ok(svg)
}
