//! Value types: domain, selection, endpoints, and the host-facing range limits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

/// Inclusive numeric range `[min, max]` the selector represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainBounds")]
pub struct Domain {
    min: f64,
    max: f64,
}

/// Unchecked wire shape of [`Domain`]; deserialization validates through `Domain::new`.
#[derive(Deserialize)]
struct DomainBounds {
    min: f64,
    max: f64,
}

impl TryFrom<DomainBounds> for Domain {
    type Error = SelectorError;

    fn try_from(raw: DomainBounds) -> Result<Self, Self::Error> {
        Domain::new(raw.min, raw.max)
    }
}

impl Domain {
    /// Build a domain. Both bounds and the span must be finite, and `min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, SelectorError> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(SelectorError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Currently chosen sub-range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub start: f64,
    pub end: f64,
}

impl Selection {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The whole domain.
    pub fn full(domain: &Domain) -> Self {
        Self {
            start: domain.min(),
            end: domain.max(),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> f64 {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    /// Clamp both bounds into `domain`, then collapse `end` onto `start` if they crossed.
    pub fn clamped_to(&self, domain: &Domain) -> Self {
        let start = domain.clamp(self.start);
        let end = domain.clamp(self.end);
        Self {
            start,
            end: if end < start { start } else { end },
        }
    }

    /// True when both bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// True when `min <= start <= end <= max`.
    pub fn is_within(&self, domain: &Domain) -> bool {
        domain.contains(self.start) && domain.contains(self.end) && self.start <= self.end
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// One of the two selection bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn other(self) -> Endpoint {
        match self {
            Endpoint::Start => Endpoint::End,
            Endpoint::End => Endpoint::Start,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Range limits as supplied by the host: the domain plus an optional brush.
///
/// A missing brush bound means "no brush on that side" and falls back to the
/// domain bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeLimits {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub min_brush: Option<f64>,
    #[serde(default)]
    pub max_brush: Option<f64>,
}

impl RangeLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_brush: None,
            max_brush: None,
        }
    }

    pub fn with_brush(mut self, start: f64, end: f64) -> Self {
        self.min_brush = Some(start);
        self.max_brush = Some(end);
        self
    }

    pub fn domain(&self) -> Result<Domain, SelectorError> {
        Domain::new(self.min, self.max)
    }

    /// The brush as a selection, or `None` when neither side is brushed.
    pub fn selection(&self) -> Option<Selection> {
        if self.min_brush.is_none() && self.max_brush.is_none() {
            return None;
        }
        Some(Selection {
            start: self.min_brush.unwrap_or(self.min),
            end: self.max_brush.unwrap_or(self.max),
        })
    }
}
