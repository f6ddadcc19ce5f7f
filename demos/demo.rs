//! Scripted end-to-end drill.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=vocab_drill=debug` to see every session transition)
//!
//! The demo imports a small lesson from spreadsheet rows, starts a seeded
//! PT→EN drill, and plays a learner who:
//!
//! - answers some prompts exactly,
//! - drops accents or the "to " infinitive marker,
//! - makes a near miss (scored `close`) and a plain mistake,
//! - skips one prompt,
//!
//! retyping the revealed answer whenever the engine asks for it. At the end
//! the summary is published to in-memory progress and telemetry sinks.

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;
use vocab_drill::drill_engine::lesson::import_rows;
use vocab_drill::{
    publish, start_lesson_drill, AttemptReport, Direction, DrillRequest, Lesson, Progress,
    ProgressSink, SessionSummary, SubmitOutcome, TelemetrySink,
};

struct PrintSink;

impl ProgressSink for PrintSink {
    fn record_progress(&mut self, summary: &SessionSummary) {
        println!("  progress: {} over {} prompts", summary.score, summary.total_prompts);
    }
}

impl TelemetrySink for PrintSink {
    fn record_attempt(&mut self, report: &AttemptReport) {
        match serde_json::to_string(report) {
            Ok(json) => println!("  telemetry: {json}"),
            Err(e) => println!("  telemetry: unserializable report ({e})"),
        }
    }
}

fn rows() -> Vec<Vec<String>> {
    [
        ["Portuguese", "English", "Sentence PT", "Sentence EN"],
        ["comer", "to eat", "Eu gosto de comer.", "I like to eat."],
        ["três", "three", "Três pessoas.", "Three people."],
        ["cem", "one hundred", "Cem pessoas.", "One hundred people."],
        ["casa", "house", "A casa da Maria.", "Maria's house."],
        ["lembrar de", "to remember", "Eu lembro de você.", "I remember you."],
    ]
    .iter()
    .map(|r| r.iter().map(|c| c.to_string()).collect())
    .collect()
}

/// What the scripted learner types first for each Portuguese prompt.
/// `None` means "press skip".
fn first_attempts() -> HashMap<&'static str, Option<&'static str>> {
    HashMap::from([
        ("comer", Some("eat")),
        ("três", Some("Three!")),
        ("cem", Some("one hundrd")),
        ("casa", Some("home")),
        ("lembrar de", None),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lesson = Lesson::new("Demo lesson", import_rows(&rows())?);
    let request = DrillRequest::new(Direction::PtEn).with_seed(42);
    let mut session = start_lesson_drill(request, &[lesson])?;
    let attempts = first_attempts();

    println!("━━━ {} drill, {} prompts ━━━", request.direction, session.deck_len());

    while let Some(prompt) = session.current_prompt().cloned() {
        println!();
        println!("  [{}/{}] {}", session.deck_index() + 1, session.deck_len(), prompt.source);
        if let Some(hint) = session.spell_hint() {
            println!("  spelling: {hint}");
        }
        if let Some(target) = session.sentence_hint().and_then(|h| h.target) {
            println!("  sentence: {target}");
        }

        let outcome = match attempts.get(prompt.source.as_str()).copied().flatten() {
            Some(answer) => {
                println!("  > {answer}");
                session.submit(answer)?
            }
            None => {
                println!("  > (skip)");
                session.skip()?
            }
        };

        match outcome {
            SubmitOutcome::Correct { advance_after } => {
                println!("  ✓ correct (next in {} ms)", advance_after.as_millis());
                if let Progress::Complete(score) = session.advance()? {
                    println!("  done: {score}");
                }
            }
            SubmitOutcome::Missed { verdict, revealed } => {
                println!("  ✗ {verdict}, answer was \"{revealed}\"");
                println!("  > {revealed}");
                if let SubmitOutcome::RetypeConfirmed(Progress::Complete(score)) =
                    session.submit(&revealed)?
                {
                    println!("  done: {score}");
                }
            }
            SubmitOutcome::RetypeConfirmed(_) | SubmitOutcome::Ignored => {}
        }
    }

    println!();
    publish(&session, &mut PrintSink, &mut PrintSink)?;
    Ok(())
}
