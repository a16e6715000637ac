//! Pie Layout Module
//! Computes wedge angles, percentage labels and label anchors for a pie chart.
//!
//! Geometry is expressed on the unit circle with the y axis pointing up.
//! Renderers scale by their own radius and flip y where the target surface
//! needs it.

use thiserror::Error;

/// Radius (relative to the pie) at which holding labels are placed
pub const LABEL_DISTANCE: f64 = 1.1;
/// Radius (relative to the pie) at which percentage labels are placed
pub const PCT_DISTANCE: f64 = 0.6;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Got {labels} labels for {values} values")]
    LengthMismatch { labels: usize, values: usize },
    #[error("Wedge '{label}' has invalid size {value}; sizes must be finite and non-negative")]
    InvalidValue { label: String, value: f64 },
    #[error("Total of wedge sizes is zero")]
    ZeroTotal,
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to open chart window: {0}")]
    Display(String),
}

/// Horizontal alignment of an outer label relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Right,
}

/// A single slice of the pie.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub label: String,
    /// Share of total, 0..=1
    pub fraction: f64,
    /// Start angle in degrees, counter-clockwise from +x
    pub theta1: f64,
    /// End angle in degrees
    pub theta2: f64,
    precision: usize,
}

impl Wedge {
    /// Angle of the wedge bisector in degrees.
    pub fn mid_angle(&self) -> f64 {
        (self.theta1 + self.theta2) / 2.0
    }

    /// Share of total as a percentage.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Percentage text, e.g. "55.0%".
    pub fn percent_label(&self) -> String {
        format!("{:.*}%", self.precision, self.percent())
    }

    /// Anchor for the holding label.
    pub fn label_anchor(&self) -> [f64; 2] {
        polar(self.mid_angle(), LABEL_DISTANCE)
    }

    /// Anchor for the percentage label.
    pub fn percent_anchor(&self) -> [f64; 2] {
        polar(self.mid_angle(), PCT_DISTANCE)
    }

    /// Labels on the right half of the pie grow away from it to the right.
    pub fn label_align(&self) -> LabelAlign {
        if self.label_anchor()[0] > 0.0 {
            LabelAlign::Left
        } else {
            LabelAlign::Right
        }
    }

    /// Closed wedge outline: the centre followed by points along the arc.
    ///
    /// `segments` is the number of arc steps for a full circle; a wedge
    /// gets a proportional share, with at least one step.
    pub fn outline(&self, segments: usize) -> Vec<[f64; 2]> {
        let sweep = self.theta2 - self.theta1;
        let steps = ((segments as f64 * sweep / 360.0).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = self.theta1 + sweep * i as f64 / steps as f64;
            points.push(polar(angle, 1.0));
        }
        points
    }
}

/// Wedges for a whole pie, in input order.
#[derive(Debug, Clone)]
pub struct PieLayout {
    wedges: Vec<Wedge>,
}

impl PieLayout {
    /// Lay out a pie from parallel label and value sequences.
    ///
    /// The first wedge starts at `start_angle` degrees and wedges proceed
    /// counter-clockwise. Each wedge sweeps `360 * value / total` degrees.
    pub fn new(
        labels: &[String],
        values: &[f64],
        start_angle: f64,
        precision: usize,
    ) -> Result<Self, ChartError> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        if let Some((label, &value)) = labels
            .iter()
            .zip(values)
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ChartError::InvalidValue {
                label: label.clone(),
                value,
            });
        }

        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return Err(ChartError::ZeroTotal);
        }

        let mut theta = start_angle;
        let wedges = labels
            .iter()
            .zip(values)
            .map(|(label, &value)| {
                let fraction = value / total;
                let theta1 = theta;
                theta += 360.0 * fraction;
                Wedge {
                    label: label.clone(),
                    fraction,
                    theta1,
                    theta2: theta,
                    precision,
                }
            })
            .collect();

        Ok(Self { wedges })
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }
}

/// Point at `radius` along `angle_deg` on a y-up plane.
pub fn polar(angle_deg: f64, radius: f64) -> [f64; 2] {
    let rad = angle_deg.to_radians();
    [radius * rad.cos(), radius * rad.sin()]
}
