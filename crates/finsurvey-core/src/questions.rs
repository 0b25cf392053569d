//! The compiled-in question catalog.

use serde::Serialize;

/// How many options a respondent may pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one option (radio group)
    Single,
    /// One or more options (checkbox group)
    Multiple,
}

impl Cardinality {
    /// HTML input type used to render the options
    pub fn input_type(&self) -> &'static str {
        match self {
            Cardinality::Single => "radio",
            Cardinality::Multiple => "checkbox",
        }
    }
}

/// Static definition of one survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    /// Field name used in the stored document
    pub id: &'static str,
    pub prompt: &'static str,
    pub cardinality: Cardinality,
    /// Allowed option labels, in display order
    pub options: &'static [&'static str],
}

impl QuestionSpec {
    pub fn is_multi_choice(&self) -> bool {
        self.cardinality == Cardinality::Multiple
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

/// The seven survey questions, in the order they are asked.
pub const QUESTIONS: [QuestionSpec; 7] = [
    QuestionSpec {
        id: "ageBracket",
        prompt: "What is your age bracket?",
        cardinality: Cardinality::Single,
        options: &["Under 18", "18-25", "26-35", "36-45", "46+"],
    },
    QuestionSpec {
        id: "financialGoal",
        prompt: "What's your current primary financial goal?",
        cardinality: Cardinality::Single,
        options: &[
            "Save more",
            "Pay off debt",
            "Invest",
            "Build emergency fund",
            "Other",
        ],
    },
    QuestionSpec {
        id: "struggleArea",
        prompt: "Which area do you struggle most to control?",
        cardinality: Cardinality::Single,
        options: &[
            "Food",
            "Shopping",
            "Rent",
            "Bills",
            "Travel",
            "Subscriptions",
            "Other",
        ],
    },
    QuestionSpec {
        id: "managementMethod",
        prompt: "How do you currently manage your finances?",
        cardinality: Cardinality::Single,
        options: &["Apps", "Spreadsheets", "Notebooks", "No system"],
    },
    QuestionSpec {
        id: "interests",
        prompt: "Are you interested in:",
        cardinality: Cardinality::Multiple,
        options: &[
            "Automated savings",
            "Investment guides",
            "Credit card comparisons",
            "Insurance reviews",
            "Budgeting tips",
        ],
    },
    QuestionSpec {
        id: "bankLinking",
        prompt: "Would you be willing to link a bank account for deeper insights?",
        cardinality: Cardinality::Single,
        options: &["Yes, anonymously", "Maybe", "No"],
    },
    QuestionSpec {
        id: "lifeEvents",
        prompt: "Do you have any major life events planned in the next year?",
        cardinality: Cardinality::Single,
        options: &[
            "None",
            "Wedding",
            "Moving",
            "Kids",
            "Buying a vehicle",
            "Studying abroad",
        ],
    },
];

/// All questions in asking order
pub fn catalog() -> &'static [QuestionSpec] {
    &QUESTIONS
}

/// Look up a question by its field id
pub fn find(id: &str) -> Option<&'static QuestionSpec> {
    QUESTIONS.iter().find(|q| q.id == id)
}
