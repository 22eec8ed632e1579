use serde::{Deserialize, Serialize};

/// Three ordered phases of short instructional steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub beginner: Vec<String>,
    pub intermediate: Vec<String>,
    pub expert: Vec<String>,
}

/// A career exactly as the generative service described it.
/// Every field is required; deserialization is the structural check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub title: String,
    pub description: String,
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRoadmapItem {
    pub step: String,
    pub time_estimate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedRoadmap {
    pub beginner: Vec<DetailedRoadmapItem>,
    pub intermediate: Vec<DetailedRoadmapItem>,
    pub expert: Vec<DetailedRoadmapItem>,
}

/// A career on the results board. Once `detailed_roadmap` is set the coarse
/// roadmap is no longer shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCareer {
    #[serde(flatten)]
    pub career: Career,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_roadmap: Option<DetailedRoadmap>,
}

impl From<Career> for RecommendedCareer {
    fn from(career: Career) -> Self {
        Self {
            career,
            detailed_roadmap: None,
        }
    }
}

impl RecommendedCareer {
    pub fn is_detailed(&self) -> bool {
        self.detailed_roadmap.is_some()
    }
}
