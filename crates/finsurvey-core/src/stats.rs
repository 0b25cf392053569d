//! Per-option answer counts over stored survey responses.

use serde::Serialize;

use crate::questions::QuestionSpec;
use crate::types::SurveyResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionTally {
    pub question_id: &'static str,
    /// Catalog options in display order, then any stored values the
    /// catalog doesn't list
    pub counts: Vec<OptionCount>,
    /// Responses with no answer for this question
    pub unanswered: usize,
}

/// Count how often each option was chosen
pub fn tally(questions: &[QuestionSpec], responses: &[SurveyResponse]) -> Vec<QuestionTally> {
    questions
        .iter()
        .map(|question| {
            let mut counts: Vec<OptionCount> = question
                .options
                .iter()
                .map(|o| OptionCount {
                    option: o.to_string(),
                    count: 0,
                })
                .collect();
            let mut unanswered = 0;

            for response in responses {
                let Some(answer) = response.answers.get(question.id).filter(|a| a.is_present())
                else {
                    unanswered += 1;
                    continue;
                };
                for value in answer.values() {
                    match counts.iter_mut().find(|c| c.option == value) {
                        Some(c) => c.count += 1,
                        None => counts.push(OptionCount {
                            option: value.to_string(),
                            count: 1,
                        }),
                    }
                }
            }

            QuestionTally {
                question_id: question.id,
                counts,
                unanswered,
            }
        })
        .collect()
}
