use glam::Vec2;

use crate::api::config::TraceConfig;
use crate::api::events::TraceEvent;
use crate::input::queue::{InputQueue, PointerEvent};
use crate::path::model::PathModel;
use crate::session::stroke::{SampleResult, StrokeSession};

/// Walks an ordered list of stroke sessions, advancing on completion.
///
/// Strokes must be completed strictly in authored order: only the session
/// at the cursor is ever queried, and the cursor moves forward by exactly
/// one per completed stroke. Collaborator feedback is buffered as
/// `TraceEvent`s for the host to drain each tick.
pub struct TracingSequencer {
    strokes: Vec<StrokeSession>,
    config: TraceConfig,
    current: usize,
    /// Set once the sequence-complete event has fired.
    complete: bool,
    events: Vec<TraceEvent>,
}

impl TracingSequencer {
    /// Build a sequencer over one stroke session per path, in order.
    pub fn new(paths: Vec<PathModel>, config: TraceConfig) -> Self {
        let strokes = paths
            .into_iter()
            .map(|path| StrokeSession::new(path, config))
            .collect();
        Self {
            strokes,
            config,
            current: 0,
            complete: false,
            events: Vec::with_capacity(32),
        }
    }

    /// Start (or restart) the sequence: cursor to 0, all sessions reset,
    /// guides shown. An empty sequence completes immediately.
    pub fn initialize(&mut self) {
        self.current = 0;
        self.complete = false;
        for (index, stroke) in self.strokes.iter_mut().enumerate() {
            stroke.reset();
            self.events.push(TraceEvent::GuideShown { stroke: index });
        }
        log::info!("tracing sequence started: {} strokes", self.strokes.len());
        if self.strokes.is_empty() {
            self.complete = true;
            self.events.push(TraceEvent::SequenceCompleted);
        }
    }

    /// Identical to `initialize`; the name the host's restart button wants.
    pub fn reset_all(&mut self) {
        self.initialize();
    }

    /// Dispatch one pointer event to the current stroke.
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.dispatch_begin(Vec2::new(x, y)),
            PointerEvent::Move { x, y } => self.dispatch_sample(Vec2::new(x, y)),
            PointerEvent::Up { .. } => self.dispatch_end(),
        }
    }

    /// Drain an input queue, dispatching every pending event in order.
    pub fn pump(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            self.dispatch(event);
        }
    }

    pub fn dispatch_begin(&mut self, pos: Vec2) {
        if self.current >= self.strokes.len() {
            return;
        }
        let index = self.current;
        let result = self.strokes[index].begin(pos);
        self.handle_result(index, pos, result);
    }

    pub fn dispatch_sample(&mut self, pos: Vec2) {
        if self.current >= self.strokes.len() {
            return;
        }
        let index = self.current;
        let result = self.strokes[index].process(pos);
        self.handle_result(index, pos, result);
    }

    pub fn dispatch_end(&mut self) {
        if self.current >= self.strokes.len() {
            return;
        }
        let index = self.current;
        let result = self.strokes[index].end();
        // The lift position is irrelevant; rejection feedback points at
        // the stroke start.
        let pos = self.strokes[index].path().start_point();
        self.handle_result(index, pos, result);
    }

    /// Take all buffered feedback events, clearing the buffer.
    pub fn drain_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Index of the stroke currently being traced. Equals `stroke_count`
    /// once the sequence is complete.
    pub fn current_stroke(&self) -> usize {
        self.current
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Read-only view of the sessions, for rendering decisions.
    pub fn strokes(&self) -> &[StrokeSession] {
        &self.strokes
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    fn handle_result(&mut self, index: usize, pos: Vec2, result: SampleResult) {
        match result {
            SampleResult::Accepted { render } => {
                self.events.push(TraceEvent::SampleAccepted {
                    stroke: index,
                    pos,
                    render,
                });
            }
            SampleResult::StartRejected => {
                self.events.push(TraceEvent::StartRejected { stroke: index, pos });
            }
            SampleResult::Rejected => {
                self.events.push(TraceEvent::SampleRejected { stroke: index, pos });
            }
            SampleResult::StrokeComplete => {
                self.events.push(TraceEvent::SampleAccepted {
                    stroke: index,
                    pos,
                    render: true,
                });
                self.events.push(TraceEvent::GuideHidden { stroke: index });
                self.events.push(TraceEvent::StrokeCompleted { stroke: index });
                self.current += 1;
                if self.current == self.strokes.len() && !self.complete {
                    self.complete = true;
                    self.events.push(TraceEvent::SequenceCompleted);
                    log::info!("tracing sequence complete");
                }
            }
            SampleResult::Ignored => {}
        }
    }
}
