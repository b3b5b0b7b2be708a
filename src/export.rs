use std::ops::Range;
use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::color;
use crate::data::model::{Figure, Y_LABEL};

// ---------------------------------------------------------------------------
// SVG export
// ---------------------------------------------------------------------------

/// Pixel size of the exported figure (three stacked panels).
const FIGURE_SIZE: (u32, u32) = (960, 1080);

/// Persist the figure as a vertically stacked multi-panel SVG.
///
/// The destination directory must already exist. Export happens exactly
/// once; when this returns `Ok` the file is complete on disk.
pub fn save_figure(figure: &Figure, path: &Path) -> Result<()> {
    // The backend only touches the filesystem inside `present`, and its
    // Drop impl retries a failed save. Reject a missing destination here,
    // while no backend exists yet.
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.is_dir() {
            bail!(
                "could not write {}: {} does not exist",
                path.display(),
                dir.display()
            );
        }
    }

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((figure.panels.len(), 1));
    for (index, (area, panel)) in areas.iter().zip(&figure.panels).enumerate() {
        let (r, g, b) = color::operation_color(panel.operation);
        let style = RGBColor(r, g, b).stroke_width(2);

        let mut chart = ChartBuilder::on(area)
            .caption(panel.operation.name(), ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(60)
            .build_cartesian_2d(
                figure.sweep.first()..figure.sweep.last(),
                y_range(&panel.values),
            )?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label)
            .y_desc(Y_LABEL)
            .draw()?;

        chart.draw_series(LineSeries::new(figure.points(index), style))?;
    }

    root.present()
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(())
}

/// Y span from zero to slightly above the largest value, so flat series do
/// not collapse into a zero-height range.
fn y_range(values: &[f64]) -> Range<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return 0.0..1.0;
    }
    0.0..max * 1.05
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sweep;

    fn small_figure() -> Figure {
        Figure::new(
            "degree",
            Sweep::new(1, 4, 1),
            vec![1.0, 2.0, 3.0],
            vec![3.0, 2.0, 1.0],
            vec![2.0, 2.0, 2.0],
        )
        .expect("matching lengths")
    }

    #[test]
    fn writes_a_non_empty_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("performance.svg");

        save_figure(&small_figure(), &path).expect("export");

        let meta = std::fs::metadata(&path).expect("exported file");
        assert!(meta.len() > 0);
    }

    #[test]
    fn missing_destination_directory_is_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("doc/res/performance.svg");

        let err = save_figure(&small_figure(), &path).expect_err("no destination dir");
        assert!(err.to_string().contains("could not write"));
        assert!(!path.exists());
    }

    #[test]
    fn flat_series_get_a_visible_y_span() {
        let range = y_range(&[5.0; 99]);
        assert_eq!(range.start, 0.0);
        assert!(range.end > 5.0);
    }
}
