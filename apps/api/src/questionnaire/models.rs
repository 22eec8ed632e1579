use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A selectable answer. `id` is unique within its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    pub allow_custom: bool,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Reverse lookup used when restoring a recorded answer.
    pub fn option_by_text(&self, text: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.text == text)
    }
}

/// Committed answers keyed by question id.
///
/// Each entry holds the texts of the selected options in selection order,
/// followed by at most one trimmed free-text answer. Serializes as a JSON
/// object with ascending question ids, which is also the form embedded in
/// the recommendation prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, Vec<String>>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `question_id`.
    pub fn record(&mut self, question_id: u32, answer: Vec<String>) {
        self.0.insert(question_id, answer);
    }

    pub fn get(&self, question_id: u32) -> Option<&[String]> {
        self.0.get(&question_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}
