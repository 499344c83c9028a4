//! CPU history chart: the shared chart state and the renderer bound to it.

use crate::core::domain::model::history::HistorySeries;

pub const DATASET_LABEL: &str = "CPU Usage (%)";
const BORDER_COLOR: &str = "rgba(75,192,192,1)";

/// Kind of chart drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Display options handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub kind: ChartKind,
    pub x: Axis,
    pub y: Axis,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            x: Axis {
                title: "Time".to_string(),
                min: None,
                max: None,
            },
            y: Axis {
                title: DATASET_LABEL.to_string(),
                min: Some(0.0),
                max: Some(100.0),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub fill: bool,
}

/// Labels, the single CPU dataset and the display options.
///
/// Lives as long as the page. The only way to change what is plotted is
/// [`ChartState::replace_series`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    labels: Vec<String>,
    dataset: Dataset,
    options: ChartOptions,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            dataset: Dataset {
                label: DATASET_LABEL.to_string(),
                data: Vec::new(),
                border_color: BORDER_COLOR.to_string(),
                fill: false,
            },
            options: ChartOptions::default(),
        }
    }
}

impl ChartState {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn data(&self) -> &[f64] {
        &self.dataset.data
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Swaps in a new series wholesale. Nothing of the previous one is kept.
    pub fn replace_series(&mut self, series: HistorySeries) {
        self.labels = series.labels;
        self.dataset.data = series.data;
    }
}

/// What a renderer last drew.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Handle to the chart drawn on a canvas element.
///
/// Painting snapshots the chart state; the drawing itself belongs to the
/// host page's charting library. [`ChartRenderer::render_text`] gives a
/// plain-text rendition of the last frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderer {
    options: ChartOptions,
    paint_count: u64,
    last_frame: Option<ChartFrame>,
}

impl ChartRenderer {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            paint_count: 0,
            last_frame: None,
        }
    }

    /// Number of times the chart was painted since construction.
    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    pub fn last_frame(&self) -> Option<&ChartFrame> {
        self.last_frame.as_ref()
    }

    pub fn paint(&mut self, state: &ChartState) {
        self.paint_count += 1;
        self.last_frame = Some(ChartFrame {
            labels: state.labels.clone(),
            data: state.dataset.data.clone(),
        });
    }

    /// One line per plotted point: label, a bar scaled to the y range, value.
    pub fn render_text(&self, width: usize) -> String {
        let Some(frame) = &self.last_frame else {
            return String::new();
        };
        let min = self.options.y.min.unwrap_or(0.0);
        let max = self.options.y.max.unwrap_or(100.0);
        let span = (max - min).max(f64::EPSILON);
        let label_width = frame.labels.iter().map(String::len).max().unwrap_or(0);

        frame
            .labels
            .iter()
            .zip(&frame.data)
            .map(|(label, value)| {
                let ratio = ((value - min) / span).clamp(0.0, 1.0);
                let bar = "#".repeat((ratio * width as f64).round() as usize);
                format!("{:>label_width$} |{:<width$}| {}", label, bar, value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
