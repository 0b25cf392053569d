//! Property-based tests for the survey step machine
//!
//! Uses proptest to drive random sequences of edits and moves and check the
//! invariants the pages rely on.

use finsurvey_core::{Answer, SurveyForm, QUESTIONS};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// User actions on the survey page
#[derive(Debug, Clone)]
enum FormOp {
    /// Pick option `n` (mod option count) of the current question
    Select(usize, bool),
    Advance,
    Retreat,
}

fn form_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<FormOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..10usize, any::<bool>()).prop_map(|(n, c)| FormOp::Select(n, c)),
            2 => Just(FormOp::Advance),
            1 => Just(FormOp::Retreat),
        ],
        0..max_ops,
    )
}

fn apply(form: &mut SurveyForm, op: &FormOp) {
    match op {
        FormOp::Select(n, checked) => {
            let q = form.current_question();
            let option = q.options[n % q.options.len()];
            form.select_answer(q.id, option, *checked);
        }
        FormOp::Advance => {
            form.advance();
        }
        FormOp::Retreat => {
            form.retreat();
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The step index always stays within the catalog
    #[test]
    fn step_stays_in_bounds(ops in form_ops_strategy(200)) {
        let mut form = SurveyForm::new();
        for op in &ops {
            apply(&mut form, op);
            prop_assert!(form.step() < QUESTIONS.len());
        }
    }

    /// Advance moves exactly one step iff the current step was complete
    #[test]
    fn advance_only_when_complete(ops in form_ops_strategy(100)) {
        let mut form = SurveyForm::new();
        for op in &ops {
            apply(&mut form, op);
        }

        let before = form.step();
        let complete = form.is_current_step_complete();
        let moved = form.advance();

        if complete && before + 1 < QUESTIONS.len() {
            prop_assert!(moved);
            prop_assert_eq!(form.step(), before + 1);
        } else {
            prop_assert!(!moved);
            prop_assert_eq!(form.step(), before);
        }
    }

    /// Retreat never discards any answer
    #[test]
    fn retreat_keeps_answers(ops in form_ops_strategy(100)) {
        let mut form = SurveyForm::new();
        for op in &ops {
            apply(&mut form, op);
        }

        let before_step = form.step();
        let snapshot: Vec<Option<Answer>> =
            QUESTIONS.iter().map(|q| form.answer(q.id).cloned()).collect();

        form.retreat();

        prop_assert_eq!(form.step(), before_step.saturating_sub(1));
        for (q, prior) in QUESTIONS.iter().zip(snapshot) {
            prop_assert_eq!(form.answer(q.id).cloned(), prior);
        }
    }

    /// Toggling the same checkbox twice restores the prior selection set
    #[test]
    fn double_toggle_is_identity(
        picks in prop::collection::vec(0..5usize, 0..5),
        target in 0..5usize,
    ) {
        let interests = QUESTIONS.iter().find(|q| q.id == "interests").unwrap();
        let mut form = SurveyForm::new();
        for p in &picks {
            form.select_answer("interests", interests.options[*p], true);
        }
        let option = interests.options[target];
        let selected_before: Vec<&str> = interests
            .options
            .iter()
            .copied()
            .filter(|o| form.is_selected("interests", o))
            .collect();

        form.toggle_option("interests", option);
        form.toggle_option("interests", option);

        let selected_after: Vec<&str> = interests
            .options
            .iter()
            .copied()
            .filter(|o| form.is_selected("interests", o))
            .collect();
        prop_assert_eq!(selected_before, selected_after);
    }

    /// can_submit holds exactly on a complete final step
    #[test]
    fn submit_control_matches_last_step(ops in form_ops_strategy(300)) {
        let mut form = SurveyForm::new();
        for op in &ops {
            apply(&mut form, op);
        }
        prop_assert_eq!(
            form.can_submit(),
            form.is_last_step() && form.is_current_step_complete()
        );
    }
}
