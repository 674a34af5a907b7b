//! Linear mapping between domain values and positions on the drawable track.
//!
//! Pixel positions are relative to the start of the track, i.e. after the left
//! margin. Views add `left_margin_px` themselves when placing handles.

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::SelectorError;

/// Fixed pixel dimensions of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryFields")]
pub struct Geometry {
    track_width_px: f64,
    left_margin_px: f64,
    right_margin_px: f64,
}

#[derive(Deserialize)]
struct GeometryFields {
    track_width_px: f64,
    left_margin_px: f64,
    right_margin_px: f64,
}

impl TryFrom<GeometryFields> for Geometry {
    type Error = SelectorError;

    fn try_from(raw: GeometryFields) -> Result<Self, Self::Error> {
        Geometry::new(raw.track_width_px, raw.left_margin_px, raw.right_margin_px)
    }
}

impl Default for Geometry {
    /// 250px wide with a 25px left and 10px right margin.
    fn default() -> Self {
        Self {
            track_width_px: 250.0,
            left_margin_px: 25.0,
            right_margin_px: 10.0,
        }
    }
}

impl Geometry {
    /// Build a geometry whose effective track width is strictly positive.
    pub fn new(
        track_width_px: f64,
        left_margin_px: f64,
        right_margin_px: f64,
    ) -> Result<Self, SelectorError> {
        let invalid = SelectorError::InvalidGeometry {
            track_width: track_width_px,
            left: left_margin_px,
            right: right_margin_px,
        };
        let all_finite = [track_width_px, left_margin_px, right_margin_px]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite || left_margin_px < 0.0 || right_margin_px < 0.0 {
            return Err(invalid);
        }
        if track_width_px <= left_margin_px + right_margin_px {
            return Err(invalid);
        }
        Ok(Self {
            track_width_px,
            left_margin_px,
            right_margin_px,
        })
    }

    pub fn track_width_px(&self) -> f64 {
        self.track_width_px
    }

    pub fn left_margin_px(&self) -> f64 {
        self.left_margin_px
    }

    pub fn right_margin_px(&self) -> f64 {
        self.right_margin_px
    }

    /// Width left for the track once both margins are removed.
    pub fn effective_width(&self) -> f64 {
        self.track_width_px - self.left_margin_px - self.right_margin_px
    }
}

/// Linear scale from `[min, max]` onto `[0, effective_width]`.
///
/// Cheap to build; the selector derives a fresh one from its current domain
/// whenever it needs pixels, so the mapping can never drift from the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    span: f64,
    width: f64,
}

impl LinearScale {
    pub fn new(domain: &Domain, geometry: &Geometry) -> Self {
        Self {
            min: domain.min(),
            span: domain.span(),
            width: geometry.effective_width(),
        }
    }

    pub fn domain_to_pixel(&self, v: f64) -> f64 {
        if self.span == 0.0 {
            return 0.0;
        }
        (v - self.min) / self.span * self.width
    }

    /// Inverse of [`domain_to_pixel`](Self::domain_to_pixel). Not clamped.
    pub fn pixel_to_domain(&self, px: f64) -> f64 {
        if self.span == 0.0 {
            return self.min;
        }
        self.min + px / self.width * self.span
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}
