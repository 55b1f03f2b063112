//! Bulge falloff ramp.
//!
//! An ordered list of control points sampled by position in `[0, 1]`.
//! Each span between two entries is interpolated according to the
//! left entry's mode, mirroring a host curve-ramp attribute.

use serde::{Deserialize, Serialize};

/// How a span is interpolated towards the next entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Hold the left value (step).
    None,
    Linear,
    /// Smoothstep-eased linear blend.
    Smooth,
    /// Catmull-Rom through the neighbouring values.
    #[default]
    Spline,
}

/// One ramp control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampPoint {
    pub position: f32,
    pub value: f32,
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl RampPoint {
    pub fn new(position: f32, value: f32, interpolation: Interpolation) -> Self {
        Self {
            position,
            value,
            interpolation,
        }
    }
}

/// A falloff curve, kept sorted by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulgeRamp {
    entries: Vec<RampPoint>,
}

impl BulgeRamp {
    /// An empty ramp. Samples to zero everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default bulge falloff: rises to 0.9 at a quarter of the
    /// bulge distance and decays to zero at its edge.
    pub fn default_falloff() -> Self {
        let mut ramp = Self::new();
        ramp.set_entries(Self::default_entries());
        ramp
    }

    pub fn default_entries() -> Vec<RampPoint> {
        vec![
            RampPoint::new(0.0, 0.0, Interpolation::Spline),
            RampPoint::new(0.25, 0.9, Interpolation::Spline),
            RampPoint::new(1.0, 0.0, Interpolation::Spline),
        ]
    }

    /// Adds control points, keeping the ramp sorted. Non-finite
    /// positions are dropped.
    pub fn add_entries<I: IntoIterator<Item = RampPoint>>(&mut self, points: I) {
        self.entries
            .extend(points.into_iter().filter(|p| p.position.is_finite()));
        // Stable: equal positions keep insertion order
        self.entries
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Replaces every control point.
    pub fn set_entries<I: IntoIterator<Item = RampPoint>>(&mut self, points: I) {
        self.entries.clear();
        self.add_entries(points);
    }

    /// Control points in ascending position order.
    pub fn entries(&self) -> &[RampPoint] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sample the ramp at `position`.
    ///
    /// Positions outside the entry range take the nearest end value.
    pub fn value_at(&self, position: f32) -> f32 {
        let pts = &self.entries;
        let (first, last) = match (pts.first(), pts.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };
        if position.is_nan() || position <= first.position {
            return first.value;
        }
        if position >= last.position {
            return last.value;
        }

        // First entry strictly right of `position`; i is the span's left entry
        let right = pts.partition_point(|p| p.position <= position);
        let i = right - 1;
        let (p1, p2) = (pts[i], pts[right]);

        let span = p2.position - p1.position;
        if span <= 0.0 {
            return p2.value;
        }
        let t = (position - p1.position) / span;

        match p1.interpolation {
            Interpolation::None => p1.value,
            Interpolation::Linear => lerp(p1.value, p2.value, t),
            Interpolation::Smooth => lerp(p1.value, p2.value, t * t * (3.0 - 2.0 * t)),
            Interpolation::Spline => {
                let n = pts.len();
                let v0 = pts[i.saturating_sub(1)].value;
                let v3 = pts[(right + 1).min(n - 1)].value;
                catmull_rom(v0, p1.value, p2.value, v3, t)
            }
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform Catmull-Rom segment between `v1` and `v2`.
#[inline]
fn catmull_rom(v0: f32, v1: f32, v2: f32, v3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * v1
        + (-v0 + v2) * t
        + (2.0 * v0 - 5.0 * v1 + 4.0 * v2 - v3) * t2
        + (-v0 + 3.0 * v1 - 3.0 * v2 + v3) * t3)
}
