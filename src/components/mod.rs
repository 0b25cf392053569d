//! UI Components for the Personal Finance Survey.

mod notice;
mod progress_bar;
mod question_step;

pub use notice::Notice;
pub use progress_bar::ProgressBar;
pub use question_step::QuestionStep;
