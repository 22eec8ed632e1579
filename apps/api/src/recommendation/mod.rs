// Recommendation Requester: careers from a completed AnswerSet, then
// optional per-career detailed roadmaps.
// All service calls go through llm_client::TextGenerator.

pub mod board;
pub mod export;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod requester;
