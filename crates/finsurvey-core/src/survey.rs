//! Survey Form Engine - walks a respondent through the question catalog.
//!
//! The engine holds the transient draft (current step plus answers so far)
//! and decides which controls are live. It never touches storage on a step
//! change; the only write is the final submission.
//!
//! ```text
//!   step 0 ──advance──▶ step 1 ──▶ … ──▶ step N-1 ──begin──▶ Submitting
//!          ◀─retreat──                       ▲                 │    │
//!                                            └──── failed ─────┘    │ ok
//!                                                                   ▼
//!                                                               Submitted
//! ```
//!
//! Submission is split in two so the write can run off the UI thread:
//! [`SurveyForm::begin_submission`] validates and freezes the draft, the
//! caller performs [`PendingSubmission::write`], then hands the outcome to
//! [`SurveyForm::complete_submission`]. [`SurveyForm::submit`] does all
//! three in one go.

use std::collections::BTreeMap;

use tracing::{debug, error, info};

use crate::error::{SurveyError, WriteError};
use crate::questions::{catalog, QuestionSpec};
use crate::storage::RecordWriter;
use crate::types::{Answer, Collection, DocId, Identity, SurveyResponse};

/// Shown when the survey write fails
pub const SUBMIT_FAILED_NOTICE: &str =
    "There was an error submitting your survey. Please try again.";

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyPhase {
    /// Answering questions; the draft may change
    Editing,
    /// A write is in flight; the draft is frozen
    Submitting,
    /// Stored under the given id
    Submitted(DocId),
}

/// A frozen survey waiting to be written
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub response: SurveyResponse,
}

impl PendingSubmission {
    /// Write the response to the `surveys` collection.
    pub fn write(&self, writer: &dyn RecordWriter) -> Result<DocId, WriteError> {
        let doc = self
            .response
            .to_document()
            .map_err(|e| WriteError::Rejected {
                collection: Collection::Surveys,
                reason: e.to_string(),
            })?;
        writer.write_record(Collection::Surveys, doc)
    }
}

/// The survey draft and its step machine
#[derive(Debug, Clone)]
pub struct SurveyForm {
    questions: &'static [QuestionSpec],
    step: usize,
    answers: BTreeMap<&'static str, Answer>,
    phase: SurveyPhase,
    notice: Option<String>,
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyForm {
    /// A fresh draft over the built-in catalog, at step 0
    pub fn new() -> Self {
        Self::with_questions(catalog())
    }

    /// A fresh draft over a custom question list.
    ///
    /// # Panics
    ///
    /// Panics if `questions` is empty.
    pub fn with_questions(questions: &'static [QuestionSpec]) -> Self {
        assert!(!questions.is_empty(), "survey needs at least one question");
        Self {
            questions,
            step: 0,
            answers: BTreeMap::new(),
            phase: SurveyPhase::Editing,
            notice: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Read-only view
    // ═══════════════════════════════════════════════════════════════════════

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &'static [QuestionSpec] {
        self.questions
    }

    pub fn current_question(&self) -> &'static QuestionSpec {
        &self.questions[self.step]
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Whether `option` is currently chosen for `question_id`
    pub fn is_selected(&self, question_id: &str, option: &str) -> bool {
        self.answer(question_id)
            .is_some_and(|answer| answer.contains(option))
    }

    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SurveyPhase::Submitting
    }

    /// User-visible message from the last failed submission
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.questions.len()
    }

    /// Completed fraction including the current step, in `(0, 1]`
    pub fn progress(&self) -> f32 {
        (self.step + 1) as f32 / self.questions.len() as f32
    }

    /// "Question k of N"
    pub fn step_label(&self) -> String {
        format!("Question {} of {}", self.step + 1, self.questions.len())
    }

    fn is_complete(&self, question: &QuestionSpec) -> bool {
        self.answers
            .get(question.id)
            .is_some_and(|answer| answer.is_present())
    }

    /// A step is complete iff its answer is present and non-empty
    pub fn is_current_step_complete(&self) -> bool {
        self.is_complete(self.current_question())
    }

    /// First question in asking order with no usable answer
    pub fn first_incomplete(&self) -> Option<&'static QuestionSpec> {
        self.questions.iter().find(|q| !self.is_complete(q))
    }

    pub fn can_advance(&self) -> bool {
        self.phase == SurveyPhase::Editing && !self.is_last_step() && self.is_current_step_complete()
    }

    pub fn can_retreat(&self) -> bool {
        self.phase == SurveyPhase::Editing && !self.is_first_step()
    }

    /// Whether the submit control is live
    pub fn can_submit(&self) -> bool {
        self.phase == SurveyPhase::Editing && self.is_last_step() && self.is_current_step_complete()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Draft edits
    // ═══════════════════════════════════════════════════════════════════════

    /// Record a choice for `question_id`.
    ///
    /// Single choice replaces the stored value. Multiple choice adds `value`
    /// when `checked` and removes it when not. Unknown question ids and edits
    /// outside [`SurveyPhase::Editing`] are ignored.
    pub fn select_answer(&mut self, question_id: &str, value: &str, checked: bool) {
        if self.phase != SurveyPhase::Editing {
            debug!(question_id, "Ignoring edit while not editing");
            return;
        }
        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            debug!(question_id, "Ignoring edit for unknown question");
            return;
        };

        if !question.is_multi_choice() {
            self.answers
                .insert(question.id, Answer::Single(value.to_string()));
            return;
        }

        let entry = self
            .answers
            .entry(question.id)
            .or_insert_with(|| Answer::Multi(Vec::new()));
        match entry {
            Answer::Multi(values) => {
                if checked {
                    if !values.iter().any(|v| v == value) {
                        values.push(value.to_string());
                    }
                } else {
                    values.retain(|v| v != value);
                }
            }
            other => {
                *other = Answer::Multi(if checked { vec![value.to_string()] } else { Vec::new() });
            }
        }
    }

    /// Flip one option of a multi-choice question
    pub fn toggle_option(&mut self, question_id: &str, value: &str) {
        let checked = !self.is_selected(question_id, value);
        self.select_answer(question_id, value, checked);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Step transitions
    // ═══════════════════════════════════════════════════════════════════════

    /// Move to the next step if the current one is complete.
    ///
    /// Returns whether the step changed; a refused advance is not an error.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step += 1;
        debug!(step = self.step, "Advanced");
        true
    }

    /// Move to the previous step. Answers are kept.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.step -= 1;
        debug!(step = self.step, "Retreated");
        true
    }

    /// Throw the draft away and start over at step 0
    pub fn reset(&mut self) {
        *self = Self::with_questions(self.questions);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Submission
    // ═══════════════════════════════════════════════════════════════════════

    /// Validate the whole draft and freeze it for writing.
    ///
    /// Every step is re-checked, not only the last, so a draft that reached
    /// the final step with gaps is refused with the first missing question.
    pub fn begin_submission(
        &mut self,
        identity: &Identity,
    ) -> Result<PendingSubmission, SurveyError> {
        match self.phase {
            SurveyPhase::Submitting => return Err(SurveyError::AlreadySubmitting),
            SurveyPhase::Submitted(_) => return Err(SurveyError::AlreadySubmitted),
            SurveyPhase::Editing => {}
        }
        if !self.is_last_step() {
            return Err(SurveyError::NotOnFinalStep {
                step: self.step,
                total: self.questions.len(),
            });
        }
        if let Some(question) = self.first_incomplete() {
            return Err(SurveyError::Incomplete {
                question: question.id,
            });
        }

        let answers = self
            .questions
            .iter()
            .filter_map(|q| self.answers.get(q.id).map(|a| (q.id.to_string(), a.clone())))
            .collect();

        self.phase = SurveyPhase::Submitting;
        self.notice = None;
        debug!(respondent = %identity.id, "Submission started");

        Ok(PendingSubmission {
            response: SurveyResponse {
                user_id: identity.id,
                email: identity.email.clone(),
                answers,
                created_at: None,
            },
        })
    }

    /// Apply the outcome of the write started by [`Self::begin_submission`].
    ///
    /// On failure the form returns to the final step with its draft intact
    /// and a notice for the respondent.
    pub fn complete_submission(
        &mut self,
        outcome: Result<DocId, WriteError>,
    ) -> Result<DocId, SurveyError> {
        match outcome {
            Ok(id) => {
                self.phase = SurveyPhase::Submitted(id);
                self.notice = None;
                info!(%id, "Survey submitted");
                Ok(id)
            }
            Err(e) => {
                self.phase = SurveyPhase::Editing;
                self.notice = Some(SUBMIT_FAILED_NOTICE.to_string());
                error!(error = %e, "Error submitting survey");
                Err(e.into())
            }
        }
    }

    /// Validate, write and record the outcome in one call
    pub fn submit(
        &mut self,
        identity: &Identity,
        writer: &dyn RecordWriter,
    ) -> Result<DocId, SurveyError> {
        let pending = self.begin_submission(identity)?;
        let outcome = pending.write(writer);
        self.complete_submission(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::types::RespondentId;

    fn identity() -> Identity {
        Identity::new(RespondentId::new(), "a@b.com")
    }

    /// Answer the current question with its first option and move on
    fn fill_to_end(form: &mut SurveyForm) {
        loop {
            let q = form.current_question();
            form.select_answer(q.id, q.options[0], true);
            if !form.advance() {
                break;
            }
        }
    }

    #[test]
    fn test_starts_at_step_zero_with_empty_draft() {
        let form = SurveyForm::new();
        assert_eq!(form.step(), 0);
        assert_eq!(form.total(), 7);
        assert!(form.answer("ageBracket").is_none());
        assert!(!form.is_current_step_complete());
        assert_eq!(form.phase(), SurveyPhase::Editing);
        assert_eq!(form.step_label(), "Question 1 of 7");
    }

    #[test]
    fn test_single_choice_replaces() {
        let mut form = SurveyForm::new();
        form.select_answer("ageBracket", "18-25", true);
        form.select_answer("ageBracket", "26-35", true);
        assert_eq!(form.answer("ageBracket"), Some(&Answer::Single("26-35".into())));
        assert!(form.is_selected("ageBracket", "26-35"));
        assert!(!form.is_selected("ageBracket", "18-25"));
    }

    #[test]
    fn test_multi_choice_adds_and_removes() {
        let mut form = SurveyForm::new();
        form.select_answer("interests", "Automated savings", true);
        form.select_answer("interests", "Budgeting tips", true);
        form.select_answer("interests", "Budgeting tips", true);
        assert_eq!(
            form.answer("interests"),
            Some(&Answer::Multi(vec![
                "Automated savings".into(),
                "Budgeting tips".into()
            ]))
        );

        form.select_answer("interests", "Automated savings", false);
        assert_eq!(
            form.answer("interests"),
            Some(&Answer::Multi(vec!["Budgeting tips".into()]))
        );
    }

    #[test]
    fn test_emptied_multi_choice_is_incomplete() {
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        while form.current_question().id != "interests" {
            assert!(form.retreat());
        }
        assert!(form.is_current_step_complete());
        let chosen = form.current_question().options[0];
        form.select_answer("interests", chosen, false);
        assert!(!form.is_current_step_complete());
        assert!(!form.can_advance());
    }

    #[test]
    fn test_unknown_question_ignored() {
        let mut form = SurveyForm::new();
        form.select_answer("favouriteColour", "Blue", true);
        assert!(form.answer("favouriteColour").is_none());
    }

    #[test]
    fn test_advance_requires_complete_step() {
        let mut form = SurveyForm::new();
        assert!(!form.advance());
        assert_eq!(form.step(), 0);

        form.select_answer("ageBracket", "26-35", true);
        assert!(form.advance());
        assert_eq!(form.step(), 1);

        assert!(!form.advance());
        assert_eq!(form.step(), 1);
    }

    #[test]
    fn test_advance_stops_at_last_step() {
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        assert!(form.is_last_step());
        assert_eq!(form.step(), 6);
        assert!(!form.advance());
        assert_eq!(form.step(), 6);
        assert!(form.can_submit());
    }

    #[test]
    fn test_retreat_keeps_answers() {
        let mut form = SurveyForm::new();
        assert!(!form.retreat());

        form.select_answer("ageBracket", "26-35", true);
        form.advance();
        form.select_answer("financialGoal", "Invest", true);
        assert!(form.retreat());
        assert_eq!(form.step(), 0);
        assert!(form.is_selected("ageBracket", "26-35"));
        assert!(form.is_selected("financialGoal", "Invest"));
    }

    #[test]
    fn test_submit_writes_one_document() {
        let store = MemoryStore::new();
        let who = identity();
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);

        let id = form.submit(&who, &store).unwrap();
        assert_eq!(form.phase(), SurveyPhase::Submitted(id));

        let records = store.records(Collection::Surveys);
        assert_eq!(records.len(), 1);
        let doc = &records[0].1;
        assert_eq!(doc["userId"], serde_json::json!(who.id.to_string()));
        assert_eq!(doc["ageBracket"], serde_json::json!("Under 18"));
        assert_eq!(doc["interests"], serde_json::json!(["Automated savings"]));
    }

    #[test]
    fn test_submit_refused_before_last_step() {
        let store = MemoryStore::new();
        let mut form = SurveyForm::new();
        form.select_answer("ageBracket", "26-35", true);

        let err = form.submit(&identity(), &store).unwrap_err();
        assert_eq!(err, SurveyError::NotOnFinalStep { step: 0, total: 7 });
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn test_submit_refused_with_incomplete_last_step() {
        let store = MemoryStore::new();
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        form.select_answer("lifeEvents", "", true);

        assert!(!form.can_submit());
        let err = form.submit(&identity(), &store).unwrap_err();
        assert_eq!(err, SurveyError::Incomplete { question: "lifeEvents" });
        assert_eq!(store.attempts(), 0);
    }

    #[test]
    fn test_failed_write_keeps_draft_and_allows_retry() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);

        let err = form.submit(&identity(), &store).unwrap_err();
        assert!(matches!(err, SurveyError::Write(_)));
        assert_eq!(form.phase(), SurveyPhase::Editing);
        assert_eq!(form.notice(), Some(SUBMIT_FAILED_NOTICE));
        assert_eq!(form.step(), 6);
        assert!(form.can_submit());
        assert_eq!(store.count(Collection::Surveys), 0);

        store.set_failing(false);
        form.submit(&identity(), &store).unwrap();
        assert!(form.notice().is_none());
        assert_eq!(store.count(Collection::Surveys), 1);
    }

    #[test]
    fn test_second_begin_while_in_flight_rejected() {
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);

        let _pending = form.begin_submission(&identity()).unwrap();
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(
            form.begin_submission(&identity()).unwrap_err(),
            SurveyError::AlreadySubmitting
        );
    }

    #[test]
    fn test_draft_frozen_while_in_flight() {
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        let _pending = form.begin_submission(&identity()).unwrap();

        form.select_answer("lifeEvents", "Wedding", true);
        assert!(form.is_selected("lifeEvents", "None"));
        assert!(!form.retreat());
    }

    #[test]
    fn test_submitted_form_cannot_resubmit() {
        let store = MemoryStore::new();
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        form.submit(&identity(), &store).unwrap();

        assert_eq!(
            form.submit(&identity(), &store).unwrap_err(),
            SurveyError::AlreadySubmitted
        );
        assert_eq!(store.count(Collection::Surveys), 1);
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut form = SurveyForm::new();
        fill_to_end(&mut form);
        form.reset();
        assert_eq!(form.step(), 0);
        assert!(form.first_incomplete().is_some());
    }

    #[test]
    fn test_progress() {
        let mut form = SurveyForm::new();
        assert!((form.progress() - 1.0 / 7.0).abs() < f32::EPSILON);
        fill_to_end(&mut form);
        assert!((form.progress() - 1.0).abs() < f32::EPSILON);
    }
}
