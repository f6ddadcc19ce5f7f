//! Scenario tests for the `vocab_drill` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Properties | normalize idempotence; similarity identity and symmetry; self-evaluation |
//! | Policy | infinitive shortcut; 85% threshold boundaries from worked examples |
//! | Deck | shuffle returns a permutation; seeded sessions are reproducible |
//! | End to end | all-correct run; wrong → retype; skip → retype; mixed run |
//! | Presets | grammar test answered in Portuguese; close credited as correct |
//! | Sinks | completion published once with the final counts |

use crate::drill_engine::{
    deck::shuffle_seeded,
    evaluate, find_preset, normalize, publish, similarity, start_drill, start_lesson_drill,
    start_preset_test, AttemptReport, Direction, DrillError, DrillRequest, DrillSession,
    EvaluationPolicy, Lesson, Progress, ProgressSink, Prompt, SessionScore, SessionSummary,
    SubmitOutcome, TelemetrySink, Verdict, VocabEntry,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// The three-word numbers lesson used by the end-to-end scenarios.
fn numbers_lesson() -> Lesson {
    Lesson::new(
        "Numbers",
        vec![
            VocabEntry::new("um", "one"),
            VocabEntry::new("dois", "two"),
            VocabEntry::new("três", "three"),
        ],
    )
}

/// Unshuffled PT→EN session over the numbers lesson.
fn numbers_session() -> DrillSession {
    DrillSession::start(numbers_lesson().prompts(Direction::PtEn)).unwrap()
}

/// Answer the current prompt correctly and advance.
fn answer_correctly(session: &mut DrillSession) -> Progress {
    let target = session.current_prompt().unwrap().target.clone();
    assert!(matches!(session.submit(&target).unwrap(), SubmitOutcome::Correct { .. }));
    session.advance().unwrap()
}

/// Phrases covering accents, punctuation, multi-word and non-Latin input.
const PHRASES: [&str; 9] = [
    "Você lembra disso?",
    "O carro dele é novo.",
    "to take care of",
    "beside / next to",
    "ÁÉÍÓÚ âêô ãõ ç",
    "  padded  ",
    "日本語",
    "",
    "x",
];

// ── properties ───────────────────────────────────────────────────────────────

#[test]
fn normalize_is_idempotent() {
    for s in PHRASES {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn similarity_of_a_normalized_phrase_with_itself_is_100() {
    for s in PHRASES {
        let n = normalize(s);
        assert_eq!(similarity(&n, &n), 100.0, "self-similarity failed for {s:?}");
    }
}

#[test]
fn similarity_is_symmetric() {
    for a in PHRASES {
        for b in PHRASES {
            let (a, b) = (normalize(a), normalize(b));
            assert_eq!(similarity(&a, &b), similarity(&b, &a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn every_non_blank_target_evaluates_correct_against_itself() {
    for s in PHRASES.iter().filter(|s| !s.trim().is_empty()) {
        assert_eq!(evaluate(s, s), Ok(Verdict::Correct), "self-evaluation failed for {s:?}");
    }
}

// ── policy ───────────────────────────────────────────────────────────────────

#[test]
fn infinitive_prefix_may_be_dropped() {
    assert_eq!(evaluate("eat", "to eat"), Ok(Verdict::Correct));
}

#[test]
fn worked_threshold_examples() {
    assert_eq!(similarity("caza", "casa"), 75.0);
    assert_eq!(evaluate("caza", "casa"), Ok(Verdict::Wrong));

    assert_eq!(similarity("gatto", "gato"), 80.0);
    assert_eq!(evaluate("gatto", "gato"), Ok(Verdict::Wrong));

    assert_eq!(similarity("gaot", "gato"), 50.0);
    assert_eq!(evaluate("gaot", "gato"), Ok(Verdict::Wrong));
}

#[test]
fn threshold_is_inclusive_at_85() {
    // 20 chars, one substitution: exactly 95%.
    assert_eq!(evaluate("abcdefghijklmnopqrsx", "abcdefghijklmnopqrst"), Ok(Verdict::Close));
    // 20 chars, three substitutions: exactly 85%.
    assert_eq!(similarity("abcdefghijklmnopqxyz", "abcdefghijklmnopqrst"), 85.0);
    assert_eq!(evaluate("abcdefghijklmnopqxyz", "abcdefghijklmnopqrst"), Ok(Verdict::Close));
    // Four substitutions: 80%.
    assert_eq!(evaluate("abcdefghijklmnopwxyz", "abcdefghijklmnopqrst"), Ok(Verdict::Wrong));
}

// ── deck ─────────────────────────────────────────────────────────────────────

#[test]
fn shuffle_returns_a_permutation() {
    let prompts = numbers_lesson().prompts(Direction::PtEn);
    let shuffled = shuffle_seeded(&prompts, None);
    assert_eq!(shuffled.len(), prompts.len());
    for p in &prompts {
        let in_input = prompts.iter().filter(|q| *q == p).count();
        let in_output = shuffled.iter().filter(|q| *q == p).count();
        assert_eq!(in_input, in_output, "multiset mismatch for {p:?}");
    }
}

#[test]
fn seeded_sessions_share_deck_order() {
    let request = DrillRequest::new(Direction::EnPt).with_seed(12345);
    let a = start_lesson_drill(request, &[numbers_lesson()]).unwrap();
    let b = start_lesson_drill(request, &[numbers_lesson()]).unwrap();
    assert_eq!(a.deck(), b.deck());
    assert!(a.deck().iter().all(|p| ["um", "dois", "três"].contains(&p.target.as_str())));
}

#[test]
fn empty_prompt_pool_cannot_start() {
    let request = DrillRequest::new(Direction::PtEn);
    assert_eq!(start_drill(request, &[]).unwrap_err(), DrillError::EmptyDeck);
    let empty = Lesson::new("Empty", Vec::new());
    assert_eq!(start_lesson_drill(request, &[empty]).unwrap_err(), DrillError::EmptyDeck);
}

// ── end to end ───────────────────────────────────────────────────────────────

#[test]
fn all_correct_run_completes_with_full_score() {
    let mut session = numbers_session();
    for (answer, expected_index) in [("one", 1usize), ("two", 2)] {
        assert!(matches!(session.submit(answer).unwrap(), SubmitOutcome::Correct { .. }));
        assert_eq!(session.advance().unwrap(), Progress::Next(expected_index));
    }
    assert!(matches!(session.submit("three").unwrap(), SubmitOutcome::Correct { .. }));
    assert!(!session.is_complete(), "completion waits for the auto-advance");

    let expected = SessionScore { correct: 3, close: 0, wrong: 0 };
    assert_eq!(session.advance().unwrap(), Progress::Complete(expected));
    assert!(session.is_complete());
    assert_eq!(session.score(), expected);
}

#[test]
fn shuffled_run_completes_regardless_of_order() {
    let request = DrillRequest::new(Direction::PtEn).with_seed(7);
    let mut session = start_lesson_drill(request, &[numbers_lesson()]).unwrap();
    let mut last = None;
    while !session.is_complete() {
        last = Some(answer_correctly(&mut session));
    }
    assert_eq!(last, Some(Progress::Complete(SessionScore { correct: 3, close: 0, wrong: 0 })));
}

#[test]
fn wrong_answer_blocks_until_revealed_answer_is_retyped() {
    let mut session = numbers_session();
    assert_eq!(
        session.submit("uno").unwrap(),
        SubmitOutcome::Missed { verdict: Verdict::Wrong, revealed: "one".into() }
    );
    assert!(session.awaiting_retype());

    for attempt in ["uno", "two", "o n e"] {
        session.submit(attempt).unwrap();
        assert_eq!(session.deck_index(), 0, "advanced on mismatched retype {attempt:?}");
    }

    assert_eq!(session.submit("One").unwrap(), SubmitOutcome::RetypeConfirmed(Progress::Next(1)));
    assert_eq!(session.score(), SessionScore { correct: 0, close: 0, wrong: 1 });
}

#[test]
fn accent_insensitive_retype_in_reverse_direction() {
    let lesson = numbers_lesson();
    let prompts: Vec<Prompt> = lesson
        .prompts(Direction::EnPt)
        .into_iter()
        .filter(|p| p.target == "três")
        .collect();
    let mut session = DrillSession::start(prompts).unwrap();

    assert_eq!(session.current_prompt().unwrap().source, "three");
    session.skip().unwrap();
    assert_eq!(session.revealed_answer(), Some("três"));
    assert!(matches!(
        session.submit("TRES").unwrap(),
        SubmitOutcome::RetypeConfirmed(Progress::Complete(_))
    ));
}

#[test]
fn skip_records_wrong_and_requires_retype() {
    let mut session = numbers_session();
    session.skip().unwrap();
    assert_eq!(session.score().wrong, 1);
    assert!(session.awaiting_retype());
    assert_eq!(session.deck_index(), 0);
    assert_eq!(session.submit("one").unwrap(), SubmitOutcome::RetypeConfirmed(Progress::Next(1)));
}

#[test]
fn mixed_run_counts_only_first_verdicts() {
    let lesson = Lesson::new(
        "Mixed",
        vec![
            VocabEntry::new("cem", "one hundred"),
            VocabEntry::new("comer", "to eat"),
            VocabEntry::new("casa", "house"),
        ],
    );
    let mut session = DrillSession::start(lesson.prompts(Direction::PtEn)).unwrap();

    // close, then retype
    session.submit("one hundrd").unwrap();
    session.submit("one hundred").unwrap();
    // correct via infinitive shortcut
    session.submit("eat").unwrap();
    session.advance().unwrap();
    // wrong, a failed retype, then the real retype
    session.submit("home").unwrap();
    session.submit("hose").unwrap();
    let last = session.submit("house").unwrap();

    let expected = SessionScore { correct: 1, close: 1, wrong: 1 };
    assert_eq!(last, SubmitOutcome::RetypeConfirmed(Progress::Complete(expected)));
    assert_eq!(session.summary().unwrap().score.total(), 3);
}

// ── presets ──────────────────────────────────────────────────────────────────

#[test]
fn preset_test_run_credits_close_and_still_demands_retype() {
    let preset = find_preset("preset-prepositions-de").unwrap();
    let mut session = start_preset_test(Some(3), &preset).unwrap();
    assert_eq!(session.policy(), EvaluationPolicy::PresetTest);
    assert_eq!(session.deck_len(), preset.tests.len());

    // First question: swap the last character. Long answers land inside the
    // threshold, short ones miss outright.
    let target = session.current_prompt().unwrap().target.clone();
    assert!(session.current_prompt().unwrap().note.is_some());
    let near: String = target.chars().take(target.chars().count() - 1).collect();
    let (verdict, revealed) = match session.submit(&format!("{near}x")).unwrap() {
        SubmitOutcome::Missed { verdict, revealed } => (verdict, revealed),
        other => panic!("expected a miss, got {other:?}"),
    };
    assert_eq!(revealed, target);
    assert!(session.awaiting_retype());
    session.submit(&target).unwrap();

    let mut last = None;
    while !session.is_complete() {
        last = Some(answer_correctly(&mut session));
    }

    let n = preset.tests.len() as u32;
    let expected = match verdict {
        Verdict::Close => SessionScore { correct: n, close: 0, wrong: 0 },
        _ => SessionScore { correct: n - 1, close: 0, wrong: 1 },
    };
    assert_eq!(last, Some(Progress::Complete(expected)));
}

#[test]
fn preset_test_has_no_infinitive_shortcut_and_targets_portuguese() {
    let preset = find_preset("preset-verbs-de").unwrap();
    let session = start_preset_test(None, &preset).unwrap();
    for prompt in session.deck() {
        assert!(preset.tests.iter().any(|q| q.en == prompt.source && q.pt == prompt.target));
    }
    let deck = vec![Prompt::new("to like", "to like")];
    let mut s = DrillSession::start_with_policy(deck, EvaluationPolicy::PresetTest).unwrap();
    assert!(matches!(s.submit("like").unwrap(), SubmitOutcome::Missed { .. }));
}

// ── sinks ────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Store {
    totals: SessionScore,
    sessions: u32,
}

impl ProgressSink for Store {
    fn record_progress(&mut self, summary: &SessionSummary) {
        self.totals.correct += summary.score.correct;
        self.totals.close += summary.score.close;
        self.totals.wrong += summary.score.wrong;
        self.sessions += 1;
    }
}

#[derive(Default)]
struct Analytics(Vec<AttemptReport>);

impl TelemetrySink for Analytics {
    fn record_attempt(&mut self, report: &AttemptReport) {
        self.0.push(report.clone());
    }
}

#[test]
fn completed_session_is_published_to_both_sinks() {
    let mut session = numbers_session();
    answer_correctly(&mut session);
    session.skip().unwrap();
    session.submit("two").unwrap();
    answer_correctly(&mut session);

    let mut store = Store::default();
    let mut analytics = Analytics::default();
    let summary = publish(&session, &mut store, &mut analytics).unwrap();

    assert_eq!(summary.total_prompts, 3);
    assert_eq!(store.sessions, 1);
    assert_eq!(store.totals, SessionScore { correct: 2, close: 0, wrong: 1 });

    let report = &analytics.0[0];
    assert_eq!(report.total, 3);
    assert_eq!(report.correct, 2);
    assert_eq!(report.incorrect, 1);
    assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-9);
}
