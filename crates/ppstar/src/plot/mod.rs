//! Scatter plot of pp against star rating.
//!
//! SVG output carries the caption and axis labels. PNG output is unlabeled:
//! the bitmap backend is built without a font rasterizer, so its text calls
//! draw nothing. SVG is the default format for that reason.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::plot as plot_config;
use crate::error::{Error, Result};
use crate::extract::ScatterData;

/// Image formats the renderer can write, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(Error::Plot(format!(
                "unsupported output format for {} (use .png or .svg)",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(plot_config::DEFAULT_OUTPUT),
            width: plot_config::WIDTH,
            height: plot_config::HEIGHT,
            title: "pp by star rating".to_string(),
        }
    }
}

/// Render `data` as a scatter plot (x = star rating, y = pp) to `options.output`.
pub fn render_scatter(data: &ScatterData, options: &PlotOptions) -> Result<()> {
    let format = ImageFormat::from_path(&options.output)?;
    let size = (options.width, options.height);

    tracing::debug!(
        "Rendering {} points to {} ({:?})",
        data.len(),
        options.output.display(),
        format
    );

    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(&options.output, size).into_drawing_area();
            draw_scatter(root, data, &options.title)
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(&options.output, size).into_drawing_area();
            draw_scatter(root, data, &options.title)
        }
    }
}

/// Axis ranges with a little padding. Falls back to fixed ranges when empty.
fn axis_ranges(data: &ScatterData) -> ((f64, f64), (f64, f64)) {
    if data.is_empty() {
        return ((0.0, 10.0), (0.0, 100.0));
    }

    let min_x = data.difficulties.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = data.difficulties.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_y = data.pps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let x = ((min_x - 0.5).max(0.0), max_x + 0.5);
    let y = (0.0, (max_y * 1.1).max(1.0));
    (x, y)
}

fn draw_scatter<DB>(
    root: DrawingArea<DB, Shift>,
    data: &ScatterData,
    title: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(data);

    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Star rating")
        .y_desc("pp")
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    let marker = RGBColor(255, 102, 170).mix(0.7).filled();
    chart
        .draw_series(
            data.points()
                .map(|p| Circle::new((p.difficulty, p.pp), 4, marker)),
        )
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn plot_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}
