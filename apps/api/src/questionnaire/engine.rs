//! Questionnaire Engine — walks one user through the question catalog.
//!
//! Holds the current index, the transient selection for the question on
//! screen, and the committed `AnswerSet`. The only validation rule is on
//! `advance`: at least one option selected or non-blank free text.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::questionnaire::models::{AnswerSet, Question};

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Question catalog is empty")]
    EmptyCatalog,

    #[error("Option '{option_id}' does not belong to question {question_id}")]
    UnknownOption { question_id: u32, option_id: String },

    #[error("Answers were already submitted; restart to answer again")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Answering,
    Submitted,
}

/// Selection state for the question currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    /// Chosen option ids, in the order they were chosen.
    pub option_ids: Vec<String>,
    pub custom_text: String,
    pub show_custom_input: bool,
}

impl Selection {
    fn has_answer(&self) -> bool {
        !self.option_ids.is_empty() || !self.custom_text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Nothing selected and no free text; state unchanged.
    Blocked,
    /// Answer committed, now on the next question.
    Moved,
    /// Last answer committed; the completed set is handed over.
    Submitted(AnswerSet),
}

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Arc<[Question]>,
    index: usize,
    selection: Selection,
    answers: AnswerSet,
    phase: Phase,
}

impl Questionnaire {
    pub fn new(questions: Arc<[Question]>) -> Result<Self, EngineError> {
        if questions.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self {
            questions,
            index: 0,
            selection: Selection::default(),
            answers: AnswerSet::new(),
            phase: Phase::Answering,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The completed answers, available only after submission.
    pub fn submitted_answers(&self) -> Option<&AnswerSet> {
        match self.phase {
            Phase::Submitted => Some(&self.answers),
            Phase::Answering => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.phase == Phase::Answering && self.selection.has_answer()
    }

    pub fn can_retreat(&self) -> bool {
        self.phase == Phase::Answering && self.index > 0
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let position = self.index + 1;
        let percent = ((position as f64 / total as f64) * 100.0).round() as u8;
        Progress {
            position,
            total,
            percent,
        }
    }

    fn ensure_answering(&self) -> Result<(), EngineError> {
        match self.phase {
            Phase::Answering => Ok(()),
            Phase::Submitted => Err(EngineError::AlreadySubmitted),
        }
    }

    pub fn toggle_option(&mut self, option_id: &str) -> Result<(), EngineError> {
        self.ensure_answering()?;
        let question = self.current_question();
        if question.option(option_id).is_none() {
            return Err(EngineError::UnknownOption {
                question_id: question.id,
                option_id: option_id.to_string(),
            });
        }

        let ids = &mut self.selection.option_ids;
        if let Some(pos) = ids.iter().position(|id| id == option_id) {
            ids.remove(pos);
        } else {
            ids.push(option_id.to_string());
        }
        Ok(())
    }

    pub fn set_custom_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.ensure_answering()?;
        self.selection.custom_text = text.to_string();
        Ok(())
    }

    pub fn toggle_custom_input(&mut self) -> Result<(), EngineError> {
        self.ensure_answering()?;
        self.selection.show_custom_input = !self.selection.show_custom_input;
        Ok(())
    }

    /// Commits the current selection and moves forward, or submits on the
    /// last question.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, EngineError> {
        self.ensure_answering()?;
        if !self.selection.has_answer() {
            return Ok(AdvanceOutcome::Blocked);
        }

        let question = &self.questions[self.index];
        let mut answer: Vec<String> = self
            .selection
            .option_ids
            .iter()
            .filter_map(|id| question.option(id))
            .map(|o| o.text.clone())
            .collect();

        let custom = self.selection.custom_text.trim();
        if !custom.is_empty() {
            answer.push(custom.to_string());
        }

        self.answers.record(question.id, answer);
        self.selection = Selection::default();

        if self.index + 1 == self.questions.len() {
            self.phase = Phase::Submitted;
            Ok(AdvanceOutcome::Submitted(self.answers.clone()))
        } else {
            self.index += 1;
            Ok(AdvanceOutcome::Moved)
        }
    }

    /// Steps back one question and restores its recorded answer into the
    /// selection. Returns false on the first question.
    ///
    /// Recorded entries that match an option text re-select that option in
    /// recorded order. The first entry matching no option becomes the free
    /// text; any further non-matching entries are not restored.
    pub fn retreat(&mut self) -> Result<bool, EngineError> {
        self.ensure_answering()?;
        if self.index == 0 {
            return Ok(false);
        }
        self.index -= 1;

        let question = &self.questions[self.index];
        let mut selection = Selection::default();

        if let Some(recorded) = self.answers.get(question.id) {
            for entry in recorded {
                match question.option_by_text(entry) {
                    Some(option) => {
                        if !selection.option_ids.contains(&option.id) {
                            selection.option_ids.push(option.id.clone());
                        }
                    }
                    None if !selection.show_custom_input => {
                        selection.custom_text = entry.clone();
                        selection.show_custom_input = true;
                    }
                    None => {}
                }
            }
        }

        self.selection = selection;
        Ok(true)
    }

    /// Discards every answer and returns to the first question.
    pub fn restart(&mut self) {
        self.index = 0;
        self.selection = Selection::default();
        self.answers = AnswerSet::new();
        self.phase = Phase::Answering;
    }
}
