// Questionnaire Engine: fixed question catalog, forward/back navigation,
// and the AnswerSet handed to the recommendation module on submission.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod models;
