use glam::Vec2;

/// Feedback event emitted by the tracing core.
///
/// The presentation layer drains these each tick and maps them to audio
/// cues, particles, trail rendering, and guide visibility. The core never
/// depends on any specific audio/animation/UI system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceEvent {
    /// The first touch was too far from the stroke's start point.
    StartRejected { stroke: usize, pos: Vec2 },
    /// A mid-stroke sample strayed off the path; the attempt was cancelled.
    SampleRejected { stroke: usize, pos: Vec2 },
    /// A sample was accepted. `render` recommends appending a trail point
    /// (spaced by `min_render_spacing`) — a density hint, not a decision.
    SampleAccepted { stroke: usize, pos: Vec2, render: bool },
    /// The stroke at `stroke` reached its required progress.
    StrokeCompleted { stroke: usize },
    /// Every stroke in the sequence is complete. Fired exactly once.
    SequenceCompleted,
    /// Show the guide visuals for a stroke.
    GuideShown { stroke: usize },
    /// Hide the guide visuals for a completed stroke.
    GuideHidden { stroke: usize },
}
