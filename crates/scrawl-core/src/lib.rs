pub mod api;
pub mod input;
pub mod letters;
pub mod path;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::config::TraceConfig;
pub use api::events::TraceEvent;
pub use input::queue::{InputQueue, PointerEvent};
pub use letters::{LetterDef, LetterSet};
pub use path::model::{PathModel, ProximityResult};
pub use session::sequencer::TracingSequencer;
pub use session::stroke::{SampleResult, StrokeSession, TraceState};
