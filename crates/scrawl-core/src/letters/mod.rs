use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;

use crate::api::config::TraceConfig;
use crate::path::model::PathModel;
use crate::session::sequencer::TracingSequencer;

/// A set of baked letter guides, as exported by the letter editor.
///
/// Each letter is a list of strokes in authored order; each stroke is a
/// list of [x, y] points in normalized [0, 1] space, y-down.
#[derive(Debug, Deserialize)]
pub struct LetterSet {
    letters: HashMap<String, LetterDef>,
}

/// Guide data for a single letter.
#[derive(Debug, Deserialize)]
pub struct LetterDef {
    /// Strokes in the order they must be traced.
    pub strokes: Vec<Vec<[f32; 2]>>,
    /// Optional per-letter on-path tolerance override, in normalized
    /// units (scaled with the letter when mapped to world space).
    #[serde(default)]
    pub tolerance: Option<f32>,
}

impl LetterSet {
    /// Parse a baked letter JSON blob.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this set has guide data for a character.
    pub fn has_letter(&self, ch: char) -> bool {
        self.letters.contains_key(&ch.to_string())
    }

    /// Number of letters in the set.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Guide data for a character, if present.
    pub fn letter(&self, ch: char) -> Option<&LetterDef> {
        self.letters.get(&ch.to_string())
    }

    /// All letter keys in the set, sorted.
    pub fn available(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.letters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Build world-space guide paths for a character.
    ///
    /// Normalized points are mapped into a square of `size` world units
    /// at `origin`. The per-letter tolerance override (if any) wins over
    /// `default_tolerance`; both are normalized values scaled by `size`.
    pub fn stroke_paths(
        &self,
        ch: char,
        origin: Vec2,
        size: f32,
        default_tolerance: f32,
    ) -> Option<Vec<PathModel>> {
        let letter = self.letter(ch)?;
        let tolerance = letter.tolerance.unwrap_or(default_tolerance) * size;
        let paths = letter
            .strokes
            .iter()
            .map(|stroke| {
                let points = stroke
                    .iter()
                    .map(|&[x, y]| origin + Vec2::new(x, y) * size)
                    .collect();
                PathModel::new(points, tolerance)
            })
            .collect();
        Some(paths)
    }

    /// Build a ready-to-run tracing sequence for a character.
    pub fn sequencer_for(
        &self,
        ch: char,
        origin: Vec2,
        size: f32,
        default_tolerance: f32,
        config: TraceConfig,
    ) -> Option<TracingSequencer> {
        let paths = self.stroke_paths(ch, origin, size, default_tolerance)?;
        Some(TracingSequencer::new(paths, config))
    }
}
