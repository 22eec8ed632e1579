//! Recommendation Requester — turns a completed AnswerSet into careers, and
//! a single career into a time-boxed roadmap.
//!
//! Flow: build prompt → TextGenerator::generate → strip fences →
//!       parse JSON → validate shape → typed result.
//!
//! The service's reply is untrusted: a missing field or a wrong type anywhere
//! in the document is a `MalformedResponse`. Careers are returned in the
//! order the service ranked them. No retries.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::questionnaire::models::AnswerSet;
use crate::recommendation::models::{Career, DetailedRoadmap};
use crate::recommendation::prompts::{
    CAREERS_PROMPT_TEMPLATE, DETAILED_ROADMAP_PROMPT_TEMPLATE, RECOMMENDED_CAREER_COUNT,
};

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Generative service call failed: {0}")]
    Transport(#[from] LlmError),

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Failed to build prompt: {0}")]
    Prompt(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

pub fn build_careers_prompt(answers: &AnswerSet) -> Result<String, RecommendationError> {
    let answers_json = answers.to_json()?;

    Ok(CAREERS_PROMPT_TEMPLATE
        .replace("{career_count}", &RECOMMENDED_CAREER_COUNT.to_string())
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{answers_json}", &answers_json))
}

pub fn build_detailed_roadmap_prompt(career: &Career) -> Result<String, RecommendationError> {
    let roadmap = &career.roadmap;

    Ok(DETAILED_ROADMAP_PROMPT_TEMPLATE
        .replace("{title}", &career.title)
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{beginner_json}", &serde_json::to_string(&roadmap.beginner)?)
        .replace("{intermediate_json}", &serde_json::to_string(&roadmap.intermediate)?)
        .replace("{expert_json}", &serde_json::to_string(&roadmap.expert)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

/// Takes the named top-level field out of the cleaned reply.
fn extract_field(text: &str, field: &str) -> Result<Value, RecommendationError> {
    let cleaned = strip_json_fences(text);
    let mut document: Value = serde_json::from_str(cleaned)
        .map_err(|e| RecommendationError::MalformedResponse(format!("not valid JSON: {e}")))?;

    let object = document.as_object_mut().ok_or_else(|| {
        RecommendationError::MalformedResponse("top-level value is not an object".to_string())
    })?;

    object.remove(field).ok_or_else(|| {
        RecommendationError::MalformedResponse(format!("missing `{field}` field"))
    })
}

pub fn parse_careers(text: &str) -> Result<Vec<Career>, RecommendationError> {
    let careers = extract_field(text, "careers")?;
    if !careers.is_array() {
        return Err(RecommendationError::MalformedResponse(
            "`careers` is not an array".to_string(),
        ));
    }

    serde_json::from_value(careers)
        .map_err(|e| RecommendationError::MalformedResponse(format!("invalid career entry: {e}")))
}

pub fn parse_detailed_roadmap(text: &str) -> Result<DetailedRoadmap, RecommendationError> {
    let roadmap = extract_field(text, "detailedRoadmap")?;

    serde_json::from_value(roadmap).map_err(|e| {
        RecommendationError::MalformedResponse(format!("invalid detailed roadmap: {e}"))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Service round trips
// ────────────────────────────────────────────────────────────────────────────

pub async fn request_careers(
    answers: &AnswerSet,
    llm: &dyn TextGenerator,
) -> Result<Vec<Career>, RecommendationError> {
    let prompt = build_careers_prompt(answers)?;
    debug!(
        "Requesting careers for {} answers (prompt_chars={})",
        answers.len(),
        prompt.len()
    );

    let reply = llm.generate(&prompt).await?;
    let careers = parse_careers(&reply)?;

    info!("Received {} career recommendations", careers.len());
    Ok(careers)
}

pub async fn request_detailed_roadmap(
    career: &Career,
    llm: &dyn TextGenerator,
) -> Result<DetailedRoadmap, RecommendationError> {
    let prompt = build_detailed_roadmap_prompt(career)?;
    debug!("Requesting detailed roadmap for '{}'", career.title);

    let reply = llm.generate(&prompt).await?;
    parse_detailed_roadmap(&reply)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::recommendation::models::Roadmap;

    const DATA_SCIENTIST: &str = r#"{"careers":[{"title":"Data Scientist","description":"...","roadmap":{"beginner":["Learn statistics"],"intermediate":["Build models"],"expert":["Lead ML teams"]}}]}"#;

    const DETAILED: &str = r#"{
        "detailedRoadmap": {
            "beginner": [{"step": "Learn statistics", "timeEstimate": "2-3 months", "resources": ["Think Stats"]}],
            "intermediate": [{"step": "Build models", "timeEstimate": "6 months"}],
            "expert": [{"step": "Lead ML teams", "timeEstimate": "2+ years", "resources": []}]
        }
    }"#;

    /// Returns a fixed reply and records the prompt it was given.
    struct CannedGenerator {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn data_scientist() -> Career {
        Career {
            title: "Data Scientist".to_string(),
            description: "...".to_string(),
            roadmap: Roadmap {
                beginner: vec!["Learn statistics".to_string()],
                intermediate: vec!["Build models".to_string()],
                expert: vec!["Lead ML teams".to_string()],
            },
        }
    }

    fn sample_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.record(1, vec!["Mathematics & Statistics".to_string()]);
        answers.record(
            2,
            vec![
                "Analytical activities (puzzles, chess, strategy games)".to_string(),
                "Birdwatching".to_string(),
            ],
        );
        answers
    }

    #[test]
    fn test_parse_well_formed_careers() {
        let careers = parse_careers(DATA_SCIENTIST).unwrap();
        assert_eq!(careers, vec![data_scientist()]);
    }

    #[test]
    fn test_parse_fenced_careers_matches_unfenced() {
        let fenced = format!("```json\n{DATA_SCIENTIST}\n```");
        assert_eq!(
            parse_careers(&fenced).unwrap(),
            parse_careers(DATA_SCIENTIST).unwrap()
        );
    }

    #[test]
    fn test_parse_preserves_service_order() {
        let json = r#"{"careers":[
            {"title":"B","description":"","roadmap":{"beginner":[],"intermediate":[],"expert":[]}},
            {"title":"A","description":"","roadmap":{"beginner":[],"intermediate":[],"expert":[]}},
            {"title":"C","description":"","roadmap":{"beginner":[],"intermediate":[],"expert":[]}}
        ]}"#;
        let titles: Vec<String> = parse_careers(json)
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_missing_careers_field_is_malformed() {
        let err = parse_careers(r#"{"recommendations": []}"#).unwrap_err();
        assert!(matches!(err, RecommendationError::MalformedResponse(m) if m.contains("careers")));
    }

    #[test]
    fn test_careers_not_array_is_malformed() {
        let err = parse_careers(r#"{"careers": {"title": "x"}}"#).unwrap_err();
        assert!(matches!(err, RecommendationError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_reply_is_malformed() {
        let err = parse_careers("Here are some careers you might like!").unwrap_err();
        assert!(matches!(err, RecommendationError::MalformedResponse(_)));
    }

    #[test]
    fn test_top_level_array_is_malformed() {
        assert!(matches!(
            parse_careers("[]"),
            Err(RecommendationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_career_missing_expert_phase_is_malformed() {
        let json = r#"{"careers":[{"title":"x","description":"y","roadmap":{"beginner":[],"intermediate":[]}}]}"#;
        assert!(matches!(
            parse_careers(json),
            Err(RecommendationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_detailed_roadmap() {
        let roadmap = parse_detailed_roadmap(DETAILED).unwrap();
        assert_eq!(roadmap.beginner[0].time_estimate, "2-3 months");
        assert_eq!(
            roadmap.beginner[0].resources.as_deref(),
            Some(&["Think Stats".to_string()][..])
        );
        assert!(roadmap.intermediate[0].resources.is_none());
        assert_eq!(roadmap.expert[0].step, "Lead ML teams");
    }

    #[test]
    fn test_detailed_item_without_time_estimate_is_malformed() {
        let json = r#"{"detailedRoadmap":{"beginner":[{"step":"x"}],"intermediate":[],"expert":[]}}"#;
        assert!(matches!(
            parse_detailed_roadmap(json),
            Err(RecommendationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_careers_prompt_embeds_answers_verbatim() {
        let answers = sample_answers();
        let prompt = build_careers_prompt(&answers).unwrap();
        assert!(prompt.contains(&answers.to_json().unwrap()));
        assert!(prompt.contains("\"careers\""));
        assert!(prompt.contains("recommend the 5 most suitable"));
        assert!(!prompt.contains("{answers_json}"));
    }

    #[test]
    fn test_detailed_prompt_forwards_every_phase() {
        let prompt = build_detailed_roadmap_prompt(&data_scientist()).unwrap();
        assert!(prompt.contains("career in \"Data Scientist\""));
        assert!(prompt.contains(r#"Beginner: ["Learn statistics"]"#));
        assert!(prompt.contains(r#"Intermediate: ["Build models"]"#));
        assert!(prompt.contains(r#"Expert: ["Lead ML teams"]"#));
    }

    #[tokio::test]
    async fn test_request_careers_round_trip() {
        let llm = CannedGenerator::ok(DATA_SCIENTIST);
        let careers = request_careers(&sample_answers(), &llm).await.unwrap();
        assert_eq!(careers.len(), 1);
        assert!(llm.last_prompt().contains("Birdwatching"));
    }

    #[tokio::test]
    async fn test_request_careers_transport_failure() {
        let llm = CannedGenerator::failing(503);
        let err = request_careers(&sample_answers(), &llm).await.unwrap_err();
        assert!(matches!(
            err,
            RecommendationError::Transport(LlmError::Api { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_request_detailed_roadmap_round_trip() {
        let llm = CannedGenerator::ok(&format!("```json\n{DETAILED}\n```"));
        let roadmap = request_detailed_roadmap(&data_scientist(), &llm)
            .await
            .unwrap();
        assert_eq!(roadmap.intermediate.len(), 1);
        assert!(llm.last_prompt().contains("Lead ML teams"));
    }
}
