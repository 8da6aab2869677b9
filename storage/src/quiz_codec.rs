//! Flat-column encoding of a message's embedded quiz.
//!
//! `options` are joined with [`OPTION_SEPARATOR`] into one TEXT column. An option that itself
//! contains the separator does not survive the round-trip: it comes back split into several options.
//! Callers are warned about this at write time; the encoding is part of the stored contract.

use chat_core::Quiz;

pub const OPTION_SEPARATOR: char = ',';

/// Joins options with [`OPTION_SEPARATOR`].
pub fn encode_options(options: &[String]) -> String {
    options.join(&OPTION_SEPARATOR.to_string())
}

/// Splits a stored options string. An empty string decodes to no options.
pub fn decode_options(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(OPTION_SEPARATOR).map(str::to_string).collect()
}

/// Returns the options that would be corrupted by [`encode_options`].
pub fn options_with_separator(options: &[String]) -> Vec<&str> {
    options
        .iter()
        .filter(|o| o.contains(OPTION_SEPARATOR))
        .map(String::as_str)
        .collect()
}

/// The three nullable `quiz_*` columns of a `messages` row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizColumns {
    pub question: Option<String>,
    pub options: Option<String>,
    pub correct_answer: Option<String>,
}

impl QuizColumns {
    /// All three columns are NULL when there is no quiz.
    pub fn encode(quiz: Option<&Quiz>) -> Self {
        match quiz {
            Some(quiz) => Self {
                question: Some(quiz.question.clone()),
                options: Some(encode_options(&quiz.options)),
                correct_answer: Some(quiz.correct_answer.clone()),
            },
            None => Self::default(),
        }
    }

    /// `None` unless `question` is present and non-empty.
    pub fn decode(self) -> Option<Quiz> {
        let question = self.question.filter(|q| !q.is_empty())?;
        Some(Quiz {
            question,
            options: decode_options(self.options.as_deref().unwrap_or_default()),
            correct_answer: self.correct_answer.unwrap_or_default(),
        })
    }
}
