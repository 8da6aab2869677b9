//! Row models for the `messages` and `quizzes` tables.

mod message_record;
mod quiz_record;

pub use message_record::MessageRecord;
pub use quiz_record::QuizRecord;
