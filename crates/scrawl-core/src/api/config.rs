use serde::Deserialize;

/// Sequence-level tracing parameters, provided by the host.
///
/// Per-path `tolerance` is not here: it is set where the path is
/// authored (see `PathModel::new`).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Fraction of a stroke's arc length that must be covered before the
    /// stroke counts as complete. Clamped to [0.5, 1.0].
    pub required_progress: f32,
    /// Extra allowance beyond the path tolerance when checking the first
    /// touch against the stroke's start point.
    pub start_tolerance: f32,
    /// Minimum spacing between rendered trail points. A density hint for
    /// the presentation layer only, never part of validation.
    pub min_render_spacing: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            required_progress: 0.9,
            start_tolerance: 15.0,
            min_render_spacing: 4.0,
        }
    }
}

impl TraceConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Required progress with the [0.5, 1.0] bound applied.
    pub fn required_progress_clamped(&self) -> f32 {
        self.required_progress.clamp(0.5, 1.0)
    }
}
