//! Pure parsing of the control panel fields into a [`BoxSpec`].
//!
//! DOM access stays in `dom.rs`; this module only sees strings so the
//! host-side tests can include it directly.

use plenum_core::{BoxSpec, DEFAULT_BOX, DEFAULT_ZONE};

/// Raw field values as read from the page. Radio groups with nothing
/// checked come through as `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub width_a: String,
    pub width_b: String,
    pub height: String,
    pub end_cap: Option<String>,
    pub lip_size: Option<String>,
    pub zone: Option<String>,
}

#[inline]
pub fn parse_number(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

#[inline]
pub fn parse_end_cap(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("yes" | "true" | "1"))
}

impl FormValues {
    /// Clamped spec for these fields. Unparseable dimensions fall back to the
    /// default box so a half-typed number never blanks the preview.
    pub fn to_spec(&self) -> BoxSpec {
        let a = parse_number(&self.width_a).unwrap_or(DEFAULT_BOX[0]);
        let b = parse_number(&self.width_b).unwrap_or(DEFAULT_BOX[1]);
        let h = parse_number(&self.height).unwrap_or(DEFAULT_BOX[2]);
        let lip = self
            .lip_size
            .as_deref()
            .and_then(parse_number)
            .unwrap_or(0.0);
        BoxSpec::new(a, b, h)
            .with_end_cap(parse_end_cap(self.end_cap.as_deref()))
            .with_lip_size(lip)
            .clamped()
    }

    pub fn zone(&self) -> &str {
        match self.zone.as_deref().map(str::trim) {
            Some(z) if !z.is_empty() => z,
            _ => DEFAULT_ZONE,
        }
    }
}

#[inline]
pub fn format_cost(total: f64) -> String {
    format!("Total: ${:.2}", total)
}
