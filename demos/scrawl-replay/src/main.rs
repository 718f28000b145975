use glam::Vec2;
use scrawl_core::{InputQueue, LetterSet, PathModel, PointerEvent, TraceConfig, TraceEvent};

const LETTERS_JSON: &str = include_str!("../assets/letters.json");

// World-space placement of the letter card.
const ORIGIN: Vec2 = Vec2::new(200.0, 100.0);
const SIZE: f32 = 400.0;
// Normalized tolerance; scales to 24 world units at SIZE = 400.
const DEFAULT_TOLERANCE: f32 = 0.06;

fn main() {
    let letters = LetterSet::from_json(LETTERS_JSON).expect("embedded letter data is valid");

    let arg = std::env::args().nth(1).unwrap_or_else(|| "A".to_string());
    let ch = arg.chars().next().unwrap_or('A');

    let Some(mut seq) = letters.sequencer_for(
        ch,
        ORIGIN,
        SIZE,
        DEFAULT_TOLERANCE,
        TraceConfig::default(),
    ) else {
        eprintln!(
            "No guide data for {:?}. Available letters: {}",
            ch,
            letters.available().join(", ")
        );
        std::process::exit(1);
    };

    println!("Tracing letter {:?} ({} strokes).", ch, seq.stroke_count());
    seq.initialize();
    report(seq.drain_events());

    // A touch nowhere near the stroke start, to show the rejection path.
    let far_corner = ORIGIN + Vec2::splat(SIZE * 2.0);
    seq.dispatch_begin(far_corner);
    report(seq.drain_events());

    // Replay a clean trace of every stroke, in authored order.
    let scripts: Vec<Vec<PointerEvent>> = seq
        .strokes()
        .iter()
        .map(|stroke| stroke_script(stroke.path()))
        .collect();
    let mut input = InputQueue::new();
    for script in scripts {
        for event in script {
            input.push(event);
        }
        seq.pump(&mut input);
        report(seq.drain_events());
    }

    if seq.is_complete() {
        println!("Letter {:?} traced.", ch);
    } else {
        println!(
            "Trace incomplete: stroke {}/{} still open.",
            seq.current_stroke(),
            seq.stroke_count()
        );
    }
}

/// Build the pointer events for one clean pass over a stroke's guide
/// path: touch down at the start, drag through each segment, lift at the
/// end.
fn stroke_script(path: &PathModel) -> Vec<PointerEvent> {
    const STEPS_PER_SEGMENT: usize = 4;

    let points = path.points();
    let mut events = Vec::new();
    let Some(&start) = points.first() else {
        return events;
    };
    events.push(PointerEvent::Down {
        x: start.x,
        y: start.y,
    });
    for pair in points.windows(2) {
        for step in 1..=STEPS_PER_SEGMENT {
            let t = step as f32 / STEPS_PER_SEGMENT as f32;
            let p = pair[0].lerp(pair[1], t);
            events.push(PointerEvent::Move { x: p.x, y: p.y });
        }
    }
    let last = points[points.len() - 1];
    events.push(PointerEvent::Up {
        x: last.x,
        y: last.y,
    });
    events
}

fn report(events: Vec<TraceEvent>) {
    for event in events {
        match event {
            TraceEvent::GuideShown { stroke } => println!("  guide shown for stroke {stroke}"),
            TraceEvent::GuideHidden { stroke } => println!("  guide hidden for stroke {stroke}"),
            TraceEvent::StartRejected { stroke, pos } => {
                println!("  start rejected on stroke {stroke} at ({:.0}, {:.0})", pos.x, pos.y)
            }
            TraceEvent::SampleRejected { stroke, pos } => {
                println!("  off path on stroke {stroke} at ({:.0}, {:.0})", pos.x, pos.y)
            }
            TraceEvent::SampleAccepted { render: true, pos, .. } => {
                println!("  trail point at ({:.0}, {:.0})", pos.x, pos.y)
            }
            TraceEvent::SampleAccepted { render: false, .. } => {}
            TraceEvent::StrokeCompleted { stroke } => println!("  stroke {stroke} complete"),
            TraceEvent::SequenceCompleted => println!("  sequence complete"),
        }
    }
}
