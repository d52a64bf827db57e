//! Gate Invariant Tests
//!
//! Cross-module properties of the gate sequence, driven through the
//! public controller API:
//! - Banned phrases reject regardless of surrounding words
//! - Completed entries hold only detector-accepted text and an edge score
//! - A low edge score and a full trace always come together
//! - Denied or abandoned attempts leave the record untouched
//! - Gate 1 blocks entry work until a passing score
//! - Gate 4 runs at most once per day

use chrono::NaiveDate;
use zenloop::config::EngineConfig;
use zenloop::enforcement::{DailyOutcome, EntryOutcome, LoopController, StateOutcome};
use zenloop::gates::{
    ChainAnswers, DebugAnswers, GateError, Precondition, RejectionReason, Stage, Step,
};
use zenloop::language::{VagueLanguageDetector, DEFAULT_BANNED_PHRASES};
use zenloop::model::{Category, DayRecord};

// =============================================================================
// Helper Functions
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
}

fn controller() -> LoopController {
    LoopController::new(&EngineConfig::default(), today())
}

/// Intention set and Gate 1 passed at 8.
fn ready_day(c: &LoopController) -> DayRecord {
    let day = c.open_day(today(), 12);
    let day = c
        .set_intention(&day, "ship the session refresh fix")
        .unwrap()
        .into_record()
        .unwrap();
    c.evaluate_state(&day, 8).unwrap().into_record().unwrap()
}

fn chain(confirmed: bool) -> ChainAnswers {
    ChainAnswers::new(
        "implemented token refresh for session X",
        "wrote the refresh handler and its retry test",
        "expired sessions now renew without logout",
        confirmed,
    )
}

fn trace() -> DebugAnswers {
    DebugAnswers {
        bad_result: Some("refresh loop hammered the auth service".into()),
        wrong_action: Some("merged without running the load test".into()),
        wrong_words: Some("told myself the retry cap was obvious".into()),
        wrong_attention: Some("watching the release channel instead".into()),
        root_cause_state: Some("anxious about the deadline".into()),
    }
}

fn commit(c: &LoopController, day: &DayRecord, category: Category, edge: i64) -> DayRecord {
    let debug = if edge < 5 { trace() } else { DebugAnswers::default() };
    match c.record_entry(day, category, &chain(true), edge, &debug).unwrap() {
        EntryOutcome::Committed { record, .. } => record,
        other => panic!("expected Committed, got {:?}", other),
    }
}

fn assert_entry_invariants(day: &DayRecord, detector: &VagueLanguageDetector) {
    for (_, entry) in day.entries() {
        if entry.is_completed() {
            for text in [entry.attention(), entry.action(), entry.result()] {
                assert!(!text.is_empty());
                assert!(detector.check(text).is_accepted(), "{:?}", text);
            }
            assert!(entry.edge_score().is_some());
        }
        let low = entry.edge_score().map_or(false, |s| s.value() < 5);
        let traced = entry.debug().map_or(false, |d| d.is_complete());
        assert_eq!(low, traced);
        assert_eq!(entry.debug().is_some(), traced);
    }
}

// =============================================================================
// Detector Properties
// =============================================================================

/// Every banned phrase rejects in any case and with any surrounding words.
#[test]
fn test_banned_phrases_reject_in_context() {
    let detector = VagueLanguageDetector::default();
    for phrase in DEFAULT_BANNED_PHRASES {
        for text in [
            phrase.to_string(),
            phrase.to_uppercase(),
            format!("I {} the backend caching layer today", phrase),
            format!("Yesterday   {}\tthings", phrase.to_uppercase()),
        ] {
            assert!(!detector.check(&text).is_accepted(), "{:?}", text);
        }
    }
}

/// Same input, same verdict.
#[test]
fn test_detector_is_deterministic() {
    let detector = VagueLanguageDetector::default();
    let first = detector.check("I worked on the backend");
    for _ in 0..100 {
        assert_eq!(detector.check("I worked on the backend"), first);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Scenario A: a low rating blocks, a retry at 8 passes.
#[test]
fn test_low_state_blocks_then_passes() {
    let c = controller();
    let day = c.open_day(today(), 1);
    let day = c
        .set_intention(&day, "clear the review queue")
        .unwrap()
        .into_record()
        .unwrap();

    match c.evaluate_state(&day, 3).unwrap() {
        StateOutcome::Blocked {
            reset_options,
            score,
        } => {
            assert_eq!(reset_options.len(), 4);
            assert_eq!(score.value(), 3);
        }
        other => panic!("expected Blocked, got {:?}", other),
    }
    assert!(!day.state_coherence_checked());

    let day = c.evaluate_state(&day, 8).unwrap().into_record().unwrap();
    assert!(day.state_coherence_checked());
    assert_eq!(day.state_coherence_score().map(|s| s.value()), Some(8));
}

/// Scenario B: vague attention is rejected at attention; concrete text proceeds.
#[test]
fn test_vague_attention_then_concrete() {
    let c = controller();
    let mut draft = c
        .chain_gate()
        .draft(Category::Work, "ship the session refresh fix");

    match draft.answer("worked on auth").unwrap() {
        Step::Rejected(rejection) => {
            assert_eq!(rejection.stage, Stage::Attention);
            assert!(rejection.is_vague());
        }
        other => panic!("expected Rejected, got {:?}", other),
    }

    let step = draft
        .answer("implemented token refresh for session X")
        .unwrap();
    assert_eq!(
        step,
        Step::Accepted {
            next: Some(Stage::Action)
        }
    );
}

/// Scenario C: a denied confirmation stores nothing; a confirmed resubmit completes.
#[test]
fn test_denied_then_confirmed_chain() {
    let c = controller();
    let day = ready_day(&c);

    let outcome = c
        .record_entry(&day, Category::Work, &chain(false), 7, &DebugAnswers::default())
        .unwrap();
    assert_eq!(
        outcome.rejection().map(|r| &r.reason),
        Some(&RejectionReason::ChainDenied)
    );
    assert!(day.entry(Category::Work).is_none());

    let day = commit(&c, &day, Category::Work, 7);
    assert!(day.entry(Category::Work).unwrap().is_completed());
}

/// Scenario D: four of five trace answers leaves the record as it was.
#[test]
fn test_abandoned_trace_not_persisted() {
    let c = controller();
    let day = commit(&c, &ready_day(&c), Category::Study, 7);
    assert!(c.debug_required(3).unwrap());

    let mut partial = trace();
    partial.root_cause_state = None;
    let outcome = c
        .record_entry(&day, Category::Study, &chain(true), 3, &partial)
        .unwrap();

    let rejection = outcome.rejection().unwrap();
    assert_eq!(rejection.stage, Stage::RootCauseState);
    assert_eq!(rejection.reason, RejectionReason::DebugTraceIncomplete);

    // The earlier completed entry is untouched.
    let entry = day.entry(Category::Study).unwrap();
    assert!(entry.is_completed());
    assert!(entry.debug().is_none());
    assert_eq!(entry.edge_score().map(|s| s.value()), Some(7));
}

// =============================================================================
// Record Invariants
// =============================================================================

/// Every edge score keeps the trace biconditional.
#[test]
fn test_edge_score_and_trace_biconditional() {
    let c = controller();
    let detector = VagueLanguageDetector::default();
    let mut day = ready_day(&c);

    for (category, edge) in Category::ALL.into_iter().zip([1, 4, 5, 6, 10]) {
        day = commit(&c, &day, category, edge);
        assert_entry_invariants(&day, &detector);
    }

    // Re-recording with a high score drops the old trace.
    day = commit(&c, &day, Category::SelfTime, 9);
    assert!(day.entry(Category::SelfTime).unwrap().debug().is_none());
    assert_entry_invariants(&day, &detector);
}

/// A trace without a low score is a sequencing error.
#[test]
fn test_trace_with_high_score_is_precondition_error() {
    let c = controller();
    let day = ready_day(&c);
    let err = c
        .record_entry(&day, Category::Family, &chain(true), 8, &trace())
        .unwrap_err();
    assert!(matches!(
        err,
        GateError::StatePrecondition(Precondition::DebugNotTriggered { .. })
    ));
}

/// Out-of-range scores never reach the gates.
#[test]
fn test_out_of_range_scores() {
    let c = controller();
    let day = ready_day(&c);
    for raw in [0, 11, -4] {
        assert!(matches!(
            c.evaluate_state(&day, raw),
            Err(GateError::InvalidInputRange(_))
        ));
        assert!(matches!(
            c.record_entry(&day, Category::Work, &chain(true), raw, &DebugAnswers::default()),
            Err(GateError::InvalidInputRange(_))
        ));
    }
}

/// No entry work before Gate 1, and a block never unlocks it.
#[test]
fn test_gate_one_guards_entries() {
    let c = controller();
    let day = c.open_day(today(), 1);
    let day = c
        .set_intention(&day, "fix the flaky integration test")
        .unwrap()
        .into_record()
        .unwrap();

    let blocked = c.evaluate_state(&day, 2).unwrap();
    assert!(!blocked.is_pass());
    let err = c
        .record_entry(&day, Category::Work, &chain(true), 7, &DebugAnswers::default())
        .unwrap_err();
    assert_eq!(
        err,
        GateError::StatePrecondition(Precondition::StateGateNotPassed)
    );

    let day = c.evaluate_state(&day, 5).unwrap().into_record().unwrap();
    let day = commit(&c, &day, Category::Work, 7);
    assert!(day.has_completed_entry());
}

/// Gate 1 cannot pass before an intention exists, so a passing day can
/// always go on to record entries.
#[test]
fn test_gate_one_needs_intention_first() {
    let c = controller();
    let day = c.open_day(today(), 1);
    assert_eq!(
        c.evaluate_state(&day, 8).unwrap_err(),
        GateError::StatePrecondition(Precondition::MissingIntention)
    );
    assert!(!day.state_coherence_checked());

    let day = c
        .set_intention(&day, "fix the flaky integration test")
        .unwrap()
        .into_record()
        .unwrap();
    let day = c.evaluate_state(&day, 8).unwrap().into_record().unwrap();
    let day = commit(&c, &day, Category::Work, 7);
    assert!(day.entry(Category::Work).unwrap().is_completed());
}

// =============================================================================
// Gate 4
// =============================================================================

/// Gate 4 needs a completed entry and then fires once.
#[test]
fn test_daily_coherence_once() {
    let c = controller();
    let day = ready_day(&c);
    assert!(c.daily_coherence_prompt(&day).is_none());
    assert_eq!(
        c.daily_coherence(&day, true).unwrap_err(),
        GateError::StatePrecondition(Precondition::NoCompletedEntry)
    );

    let day = match c
        .record_entry(&day, Category::Exercise, &chain(true), 6, &DebugAnswers::default())
        .unwrap()
    {
        EntryOutcome::Committed {
            record,
            daily_check_due,
        } => {
            assert!(daily_check_due);
            record
        }
        other => panic!("expected Committed, got {:?}", other),
    };

    let prompt = c.daily_coherence_prompt(&day).unwrap();
    assert_eq!(prompt.intention, "ship the session refresh fix");
    assert_eq!(prompt.completed, vec![Category::Exercise]);

    let day = match c.daily_coherence(&day, false).unwrap() {
        DailyOutcome::Inconsistent { record, .. } => record,
        other => panic!("expected Inconsistent, got {:?}", other),
    };
    assert!(day.daily_coherence_checked());
    assert!(c.daily_coherence_prompt(&day).is_none());
    assert_eq!(
        c.daily_coherence(&day, true).unwrap(),
        DailyOutcome::AlreadyChecked
    );

    // Entry work continues after an inconsistent answer.
    match c
        .record_entry(&day, Category::Work, &chain(true), 6, &DebugAnswers::default())
        .unwrap()
    {
        EntryOutcome::Committed {
            daily_check_due, ..
        } => assert!(!daily_check_due),
        other => panic!("expected Committed, got {:?}", other),
    }
}

// =============================================================================
// History
// =============================================================================

/// A past day's record cannot be changed through any mutating call.
#[test]
fn test_past_day_is_read_only() {
    let c = controller();
    let day = ready_day(&c);
    let past = c.open_day(today().pred_opt().unwrap(), 11);

    let is_past = |e: GateError| {
        matches!(
            e,
            GateError::StatePrecondition(Precondition::PastRecord { .. })
        )
    };
    assert!(is_past(c.set_intention(&past, "anything at all here").unwrap_err()));
    assert!(is_past(c.evaluate_state(&past, 7).unwrap_err()));
    assert!(is_past(c.reset_day(&past).unwrap_err()));
    assert!(is_past(
        c.record_insight(&past, "walk after lunch daily", true, None)
            .unwrap_err()
    ));

    // Today's record still accepts work.
    assert!(c.reset_day(&day).is_ok());
}
