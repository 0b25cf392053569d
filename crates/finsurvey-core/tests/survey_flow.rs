//! End-to-end survey and waitlist scenarios
//!
//! These tests drive the forms the way the pages do: sign in, answer,
//! submit, join the waitlist, against both the in-memory and redb stores.

use std::sync::Arc;

use finsurvey_core::{
    AppConfig, Backend, Collection, MemoryStore, Page, SessionGate, Storage, SurveyError,
    SurveyForm, SurveyPhase, SurveyResponse, WaitlistError, WaitlistForm, WaitlistPhase,
};
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Answers used by the full-survey scenario, in asking order
const ANSWERS: &[(&str, &[&str])] = &[
    ("ageBracket", &["26-35"]),
    ("financialGoal", &["Save more"]),
    ("struggleArea", &["Subscriptions"]),
    ("managementMethod", &["Spreadsheets"]),
    ("interests", &["Automated savings", "Budgeting tips"]),
    ("bankLinking", &["Maybe"]),
    ("lifeEvents", &["Moving"]),
];

fn complete_survey(form: &mut SurveyForm) {
    for (i, (id, values)) in ANSWERS.iter().enumerate() {
        assert_eq!(form.step(), i);
        assert_eq!(form.current_question().id, *id);
        for value in *values {
            form.select_answer(id, value, true);
        }
        if i + 1 < ANSWERS.len() {
            assert!(form.advance(), "could not advance past {id}");
        }
    }
}

fn memory_backend() -> (Backend, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (Backend::from_parts(store.clone(), store.clone()), store)
}

// ============================================================================
// Step Scenarios
// ============================================================================

#[test]
fn test_answer_then_advance_then_blocked() {
    let mut form = SurveyForm::new();

    form.select_answer("ageBracket", "26-35", true);
    form.advance();
    assert_eq!(form.step(), 1);

    form.advance();
    assert_eq!(form.step(), 1);
}

#[test]
fn test_no_writes_on_step_transitions() {
    let (backend, store) = memory_backend();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    let mut form = SurveyForm::new();

    complete_survey(&mut form);
    while form.retreat() {}
    while form.advance() {}

    assert_eq!(store.attempts(), 0);
    form.submit(&identity, backend.records().as_ref()).unwrap();
    assert_eq!(store.attempts(), 1);
}

// ============================================================================
// Submission Scenarios
// ============================================================================

#[test]
fn test_full_survey_writes_exactly_one_document() {
    let (backend, store) = memory_backend();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    let mut form = SurveyForm::new();

    complete_survey(&mut form);
    let id = form.submit(&identity, backend.records().as_ref()).unwrap();
    assert_eq!(form.phase(), SurveyPhase::Submitted(id));

    let records = store.records(Collection::Surveys);
    assert_eq!(records.len(), 1);
    let (doc_id, doc) = &records[0];
    assert_eq!(*doc_id, id);

    // 7 answers + userId + email + createdAt
    assert_eq!(doc.len(), 10);
    assert_eq!(doc["userId"], json!(identity.id.to_string()));
    assert_eq!(doc["email"], json!("ada@example.com"));
    assert_eq!(doc["ageBracket"], json!("26-35"));
    assert_eq!(doc["financialGoal"], json!("Save more"));
    assert_eq!(doc["interests"], json!(["Automated savings", "Budgeting tips"]));
    assert_eq!(doc["lifeEvents"], json!("Moving"));
    assert!(doc["createdAt"].is_string());

    let response = SurveyResponse::from_document(doc.clone()).unwrap();
    assert_eq!(response.answers.len(), 7);
    assert!(response.created_at.is_some());
}

#[test]
fn test_failed_submission_is_retryable() {
    let (backend, store) = memory_backend();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    let mut form = SurveyForm::new();
    complete_survey(&mut form);

    store.set_failing(true);
    let err = form.submit(&identity, backend.records().as_ref()).unwrap_err();
    assert!(matches!(err, SurveyError::Write(_)));
    assert!(form.notice().is_some());
    assert_eq!(store.count(Collection::Surveys), 0);
    for (id, values) in ANSWERS {
        for value in *values {
            assert!(form.is_selected(id, value), "{id} lost {value}");
        }
    }

    store.set_failing(false);
    form.submit(&identity, backend.records().as_ref()).unwrap();
    assert_eq!(store.count(Collection::Surveys), 1);
}

#[test]
fn test_gap_in_earlier_step_blocks_submit() {
    let (backend, store) = memory_backend();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    let mut form = SurveyForm::new();
    complete_survey(&mut form);

    // Edit an earlier question directly while sitting on the last step
    form.select_answer("interests", "Automated savings", false);
    form.select_answer("interests", "Budgeting tips", false);
    assert!(form.is_last_step());
    assert!(form.can_submit());

    let err = form.submit(&identity, backend.records().as_ref()).unwrap_err();
    assert_eq!(err, SurveyError::Incomplete { question: "interests" });
    assert_eq!(form.phase(), SurveyPhase::Editing);
    assert_eq!(store.attempts(), 0);
}

#[tokio::test]
async fn test_async_submission_through_redb() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig::new(temp.path());
    let backend = Backend::open(&config).unwrap();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();

    let mut form = SurveyForm::new();
    complete_survey(&mut form);
    let pending = form.begin_submission(&identity).unwrap();

    // Control is disabled while the write is in flight
    assert!(!form.can_submit());
    assert_eq!(
        form.begin_submission(&identity).unwrap_err(),
        SurveyError::AlreadySubmitting
    );

    let outcome = backend.write_survey(pending).await;
    form.complete_submission(outcome).unwrap();
    drop(backend);

    let storage = Storage::new(config.db_path()).unwrap();
    assert_eq!(storage.count(Collection::Surveys).unwrap(), 1);
}

// ============================================================================
// Waitlist Scenarios
// ============================================================================

#[test]
fn test_waitlist_in_flight_blocks_second_write() {
    let (backend, store) = memory_backend();
    let mut form = WaitlistForm::new(None);
    form.set_email("a@b.com");

    let pending = form.begin_join(None).unwrap();
    assert!(!form.can_join());
    assert_eq!(form.begin_join(None).unwrap_err(), WaitlistError::AlreadyJoining);

    let outcome = pending.write(backend.records().as_ref());
    form.complete_join(outcome).unwrap();
    assert!(matches!(form.phase(), WaitlistPhase::Joined(_)));
    assert_eq!(store.count(Collection::Waitlist), 1);
}

#[test]
fn test_waitlist_failure_keeps_form() {
    let (backend, store) = memory_backend();
    let identity = backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    let mut form = WaitlistForm::new(Some(&identity));

    store.set_failing(true);
    assert!(form.join(Some(&identity), backend.records().as_ref()).is_err());
    assert_eq!(form.phase(), WaitlistPhase::Open);
    assert_eq!(form.email(), "ada@example.com");
    assert!(form.can_join());
    assert_eq!(store.count(Collection::Waitlist), 0);
}

#[test]
fn test_waitlist_does_not_deduplicate() {
    let (backend, store) = memory_backend();
    for _ in 0..2 {
        let mut form = WaitlistForm::new(None);
        form.set_email("a@b.com");
        form.join(None, backend.records().as_ref()).unwrap();
    }
    assert_eq!(store.count(Collection::Waitlist), 2);
}

// ============================================================================
// Route Guard Scenarios
// ============================================================================

#[test]
fn test_routes_follow_session() {
    let (backend, _store) = memory_backend();
    let session = backend.session().clone();

    assert_eq!(session.resolve(Page::Survey), Page::Login);
    assert_eq!(session.resolve(Page::ThankYou), Page::Login);

    backend.auth().sign_up("ada@example.com", "hunter22").unwrap();
    assert_eq!(session.resolve(Page::Survey), Page::Survey);
    assert_eq!(session.resolve(Page::ThankYou), Page::ThankYou);

    backend.auth().sign_out();
    assert_eq!(session.resolve(Page::Survey), Page::Login);
}
