use glam::Vec2;

use crate::api::config::TraceConfig;
use crate::path::model::PathModel;

/// State of a single stroke trace attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceState {
    /// Waiting for the user to start drawing.
    Idle,
    /// Samples are being accepted.
    Active,
    /// Stroke completed successfully. Terminal until reset.
    Complete,
}

/// Outcome of feeding one pointer sample to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleResult {
    /// Sample accepted. `render` recommends appending a trail point.
    Accepted { render: bool },
    /// First touch was too far from the stroke's start point.
    StartRejected,
    /// Sample strayed off the path; the attempt was cancelled.
    Rejected,
    /// This sample pushed progress past the required fraction.
    StrokeComplete,
    /// No action (wrong state, or degenerate path).
    Ignored,
}

/// One in-progress or completed attempt at tracing a stroke.
///
/// Owns the stroke's `PathModel` and the running maximum of accumulated
/// arc-length progress. Progress never regresses within an attempt, even
/// when the user backtracks; cancellation zeroes it, so there is no
/// partial credit across attempts.
pub struct StrokeSession {
    path: PathModel,
    config: TraceConfig,
    state: TraceState,
    /// Farthest arc-length position reached by any accepted sample.
    max_progress: f32,
    /// Last sample the render hint fired for.
    last_render_point: Option<Vec2>,
}

impl StrokeSession {
    pub fn new(path: PathModel, config: TraceConfig) -> Self {
        Self {
            path,
            config,
            state: TraceState::Idle,
            max_progress: 0.0,
            last_render_point: None,
        }
    }

    /// Handle the first touch of an attempt. Valid only from `Idle`.
    ///
    /// Accepts when the touch lands within `tolerance + start_tolerance`
    /// of the stroke's start point, then immediately validates the sample
    /// like any other.
    pub fn begin(&mut self, pos: Vec2) -> SampleResult {
        if self.state != TraceState::Idle || self.path.is_degenerate() {
            return SampleResult::Ignored;
        }

        let start_dist = pos.distance(self.path.start_point());
        if start_dist > self.path.tolerance() + self.config.start_tolerance {
            log::debug!("start rejected: {start_dist:.1} from stroke start");
            return SampleResult::StartRejected;
        }

        self.state = TraceState::Active;
        self.max_progress = 0.0;
        self.last_render_point = None;
        self.accept_or_cancel(pos)
    }

    /// Handle a drag sample. Valid only from `Active`.
    pub fn process(&mut self, pos: Vec2) -> SampleResult {
        if self.state != TraceState::Active {
            return SampleResult::Ignored;
        }
        self.accept_or_cancel(pos)
    }

    /// Handle pointer lift. Lifting before the required progress is
    /// reached cancels the attempt; after completion it is a no-op.
    pub fn end(&mut self) -> SampleResult {
        match self.state {
            TraceState::Active => {
                self.cancel();
                SampleResult::Rejected
            }
            _ => SampleResult::Ignored,
        }
    }

    /// Return to `Idle` and clear all progress. Valid from any state.
    pub fn reset(&mut self) {
        self.cancel();
    }

    pub fn state(&self) -> TraceState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TraceState::Complete
    }

    /// Farthest accumulated arc-length distance reached this attempt.
    pub fn max_progress(&self) -> f32 {
        self.max_progress
    }

    /// Current progress as a fraction of the path's arc length, in [0, 1].
    pub fn progress_fraction(&self) -> f32 {
        self.path.progress_ratio(self.max_progress)
    }

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    /// Validate one sample against the path. A single off-path sample
    /// aborts the whole attempt; there is no leniency window.
    fn accept_or_cancel(&mut self, pos: Vec2) -> SampleResult {
        let prox = self.path.query_proximity(pos);
        if !prox.is_on_path {
            log::debug!(
                "off path: {:.1} > {:.1}",
                prox.perpendicular_distance,
                self.path.tolerance()
            );
            self.cancel();
            return SampleResult::Rejected;
        }

        if prox.accumulated_distance > self.max_progress {
            self.max_progress = prox.accumulated_distance;
        }

        let render = match self.last_render_point {
            Some(last) => last.distance(pos) >= self.config.min_render_spacing,
            None => true,
        };
        if render {
            self.last_render_point = Some(pos);
        }

        if self.progress_fraction() >= self.config.required_progress_clamped() {
            self.state = TraceState::Complete;
            return SampleResult::StrokeComplete;
        }

        SampleResult::Accepted { render }
    }

    fn cancel(&mut self) {
        self.state = TraceState::Idle;
        self.max_progress = 0.0;
        self.last_render_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_session(tolerance: f32, required: f32) -> StrokeSession {
        let path = PathModel::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(2.0, 0.0),
            ],
            tolerance,
        );
        let config = TraceConfig {
            required_progress: required,
            start_tolerance: 0.1,
            min_render_spacing: 0.0,
        };
        StrokeSession::new(path, config)
    }

    #[test]
    fn begin_near_start_activates() {
        let mut session = straight_session(0.1, 0.85);
        let result = session.begin(Vec2::new(0.0, 0.0));
        assert_eq!(result, SampleResult::Accepted { render: true });
        assert_eq!(session.state(), TraceState::Active);
        assert_eq!(session.max_progress(), 0.0);
    }

    #[test]
    fn begin_far_from_start_is_rejected() {
        let mut session = straight_session(0.1, 0.85);
        let result = session.begin(Vec2::new(1.5, 0.0));
        assert_eq!(result, SampleResult::StartRejected);
        assert_eq!(session.state(), TraceState::Idle);
    }

    #[test]
    fn begin_while_active_is_ignored() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        assert_eq!(session.begin(Vec2::new(0.0, 0.0)), SampleResult::Ignored);
    }

    #[test]
    fn progress_to_required_fraction_completes() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        let result = session.process(Vec2::new(1.8, 0.0));
        assert_eq!(result, SampleResult::StrokeComplete);
        assert_eq!(session.state(), TraceState::Complete);
        assert!((session.progress_fraction() - 0.9).abs() < 1e-5);
    }

    #[test]
    fn off_path_sample_cancels_and_zeroes_progress() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        session.process(Vec2::new(0.8, 0.0));
        assert!(session.max_progress() > 0.0);

        let result = session.process(Vec2::new(1.0, 0.5));
        assert_eq!(result, SampleResult::Rejected);
        assert_eq!(session.state(), TraceState::Idle);
        assert_eq!(session.max_progress(), 0.0);

        // A new attempt must pass the start check again.
        assert_eq!(
            session.begin(Vec2::new(1.0, 0.0)),
            SampleResult::StartRejected
        );
    }

    #[test]
    fn progress_never_regresses_on_backtrack() {
        let mut session = straight_session(0.1, 0.95);
        session.begin(Vec2::new(0.0, 0.0));
        session.process(Vec2::new(1.5, 0.0));
        let reached = session.max_progress();
        session.process(Vec2::new(0.5, 0.0));
        assert_eq!(session.max_progress(), reached);
        assert_eq!(session.state(), TraceState::Active);
    }

    #[test]
    fn lift_before_completion_cancels() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        session.process(Vec2::new(1.0, 0.0));
        assert_eq!(session.end(), SampleResult::Rejected);
        assert_eq!(session.state(), TraceState::Idle);
        assert_eq!(session.max_progress(), 0.0);
    }

    #[test]
    fn lift_after_completion_is_ignored() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        session.process(Vec2::new(1.8, 0.0));
        assert_eq!(session.end(), SampleResult::Ignored);
        assert_eq!(session.state(), TraceState::Complete);
    }

    #[test]
    fn process_while_idle_is_ignored() {
        let mut session = straight_session(0.1, 0.85);
        assert_eq!(session.process(Vec2::new(0.0, 0.0)), SampleResult::Ignored);
    }

    #[test]
    fn reset_from_any_state_returns_to_idle() {
        let mut session = straight_session(0.1, 0.85);
        session.begin(Vec2::new(0.0, 0.0));
        session.process(Vec2::new(1.8, 0.0));
        assert_eq!(session.state(), TraceState::Complete);

        session.reset();
        assert_eq!(session.state(), TraceState::Idle);
        assert_eq!(session.max_progress(), 0.0);
        assert_eq!(
            session.begin(Vec2::new(0.0, 0.0)),
            SampleResult::Accepted { render: true }
        );
    }

    #[test]
    fn degenerate_path_never_starts() {
        let path = PathModel::new(vec![Vec2::new(0.0, 0.0)], 10.0);
        let mut session = StrokeSession::new(path, TraceConfig::default());
        assert_eq!(session.begin(Vec2::new(0.0, 0.0)), SampleResult::Ignored);
        assert_eq!(session.state(), TraceState::Idle);
    }

    #[test]
    fn render_hint_respects_spacing() {
        let path = PathModel::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
            5.0,
        );
        let config = TraceConfig {
            required_progress: 1.0,
            start_tolerance: 1.0,
            min_render_spacing: 10.0,
        };
        let mut session = StrokeSession::new(path, config);
        session.begin(Vec2::new(0.0, 0.0));

        // Too close to the last rendered point: accepted but not rendered.
        assert_eq!(
            session.process(Vec2::new(3.0, 0.0)),
            SampleResult::Accepted { render: false }
        );
        // Far enough: rendered again.
        assert_eq!(
            session.process(Vec2::new(12.0, 0.0)),
            SampleResult::Accepted { render: true }
        );
    }
}
