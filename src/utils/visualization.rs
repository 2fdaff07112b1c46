//! Visualization utilities for escape_planner
//!
//! Plots steering rollouts, the sample-space position box and the
//! seed/goal pair using gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{idx, EscapeError, EscapeResult, State};
use crate::heuristics::SampleSpace;
use crate::planner::Rollout;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const SEED: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const REACHED: &str = RED;
    pub const UNREACHED: &str = GRAY;
    pub const SAMPLE_SPACE: &str = BLACK;
    pub const VEHICLE: &str = "#35C788";
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::REACHED, "Rollout")
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// One data series, drawn when the figure is rendered
#[derive(Debug, Clone)]
enum Series {
    Lines {
        x: Vec<f64>,
        y: Vec<f64>,
        caption: Option<String>,
        color: String,
        width: f64,
    },
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        caption: Option<String>,
        color: String,
        symbol: char,
        size: f64,
    },
}

/// Main visualizer struct
///
/// Plot calls only record series; everything lands on a single set of axes
/// when the figure is rendered.
pub struct Visualizer {
    figure: Figure,
    series: Vec<Series>,
    title: String,
    aspect_ratio: Option<f64>,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            series: Vec::new(),
            title: String::new(),
            aspect_ratio: Some(1.0),
            x_range: None,
            y_range: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Plot the xy track of a rollout
    pub fn plot_rollout(&mut self, rollout: &Rollout, style: &PathStyle) -> &mut Self {
        self.series.push(Series::Lines {
            x: rollout.x_coords(),
            y: rollout.y_coords(),
            caption: Some(style.caption.clone()),
            color: style.color.clone(),
            width: style.line_width,
        });
        self
    }

    /// Outline the position part of a sample space
    pub fn plot_sample_space(&mut self, space: &SampleSpace) -> &mut Self {
        let (x, y) = (space.bounds[idx::X], space.bounds[idx::Y]);
        self.series.push(Series::Lines {
            x: vec![x.min, x.max, x.max, x.min, x.min],
            y: vec![y.min, y.min, y.max, y.max, y.min],
            caption: Some("Sample space".to_string()),
            color: colors::SAMPLE_SPACE.to_string(),
            width: 1.0,
        });
        self
    }

    pub fn plot_point(&mut self, x: f64, y: f64, style: &PointStyle) -> &mut Self {
        self.series.push(Series::Points {
            x: vec![x],
            y: vec![y],
            caption: Some(style.caption.clone()),
            color: style.color.clone(),
            symbol: style.symbol,
            size: style.size,
        });
        self
    }

    /// Plot a pose with a heading tick
    pub fn plot_vehicle(&mut self, state: &State, size: f64) -> &mut Self {
        let (x, y, heading) = (state[idx::X], state[idx::Y], state[idx::HEADING]);
        self.plot_point(x, y, &PointStyle::new(colors::VEHICLE, "Vehicle").with_size(size));

        let arrow_len = size * 0.5;
        self.series.push(Series::Lines {
            x: vec![x, x + arrow_len * heading.cos()],
            y: vec![y, y + arrow_len * heading.sin()],
            caption: None,
            color: colors::VEHICLE.to_string(),
            width: 2.0,
        });
        self
    }

    pub fn plot_seed(&mut self, state: &State) -> &mut Self {
        self.plot_point(state[idx::X], state[idx::Y], &PointStyle::new(colors::SEED, "Seed").with_size(1.5))
    }

    pub fn plot_goal(&mut self, state: &State) -> &mut Self {
        self.plot_point(state[idx::X], state[idx::Y], &PointStyle::new(colors::GOAL, "Goal").with_size(1.5))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> EscapeResult<()> {
        self.render();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| EscapeError::VisualizationError(e.to_string()))
    }

    /// Rebuild the figure as one axes holding every recorded series
    fn render(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();

        for series in &self.series {
            match series {
                Series::Lines { x, y, caption, color, width } => {
                    let mut options = vec![Color(color.as_str()), LineWidth(*width)];
                    if let Some(caption) = caption {
                        options.push(Caption(caption.as_str()));
                    }
                    axes.lines(x, y, &options);
                }
                Series::Points { x, y, caption, color, symbol, size } => {
                    let mut options = vec![Color(color.as_str()), PointSymbol(*symbol), PointSize(*size)];
                    if let Some(caption) = caption {
                        options.push(Caption(caption.as_str()));
                    }
                    axes.points(x, y, &options);
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("X [m]", &[]);
        axes.set_y_label("Y [m]", &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
