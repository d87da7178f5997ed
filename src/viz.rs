use crate::summary::LabelSummary;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

pub fn draw_label_distribution(summary: &LabelSummary, png_path: &Path) -> Result<()> {
    let labels: Vec<&String> = summary.labels.keys().collect();
    let max_count = summary.largest() as u64;

    let root = BitMapBackend::new(png_path, (1280, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Images per Class ({} total)", summary.total),
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..labels.len()).into_segmented(),
            0u64..(max_count + max_count / 10 + 1),
        )?;

    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|i| match i {
            SegmentValue::Exact(val) | SegmentValue::CenterOf(val) => labels
                .get(*val)
                .map(|l| l.to_string())
                .unwrap_or_default(),
            _ => "".to_string(),
        })
        .y_desc("Images")
        .draw()?;

    for (idx, count) in summary.labels.values().enumerate() {
        let color = Palette99::pick(idx);
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(idx), 0),
                (SegmentValue::Exact(idx + 1), *count as u64),
            ],
            color.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}
