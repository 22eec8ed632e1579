// All LLM prompt templates for the Recommendation module.
// Reuses the JSON output contract from llm_client::prompts.

/// Number of careers requested from the service.
pub const RECOMMENDED_CAREER_COUNT: usize = 5;

/// Career recommendation prompt.
/// Replace: {career_count}, {json_only_instruction}, {answers_json}
pub const CAREERS_PROMPT_TEMPLATE: &str = r#"You are an expert career counselor with 20+ years of experience matching people to careers they'll love and excel at.

Based on the following personal assessment answers, recommend the {career_count} most suitable career paths for this specific individual. Consider their unique preferences, skills, personality traits, and values indicated in their answers.

For each career path, provide:
1. A personalized title that matches their profile
2. A compelling description explaining why this career would be a good fit for them specifically
3. A detailed, actionable roadmap divided into three phases:
   - Beginner: First steps they should take to enter this field
   - Intermediate: How to advance and gain expertise
   - Expert: How to reach mastery and leadership in this domain

Order the careers from best to weakest fit.

{json_only_instruction}
{
  "careers": [
    {
      "title": "Career Title",
      "description": "Personalized description explaining why this career matches their profile",
      "roadmap": {
        "beginner": ["Specific step 1", "Specific step 2", "Specific step 3"],
        "intermediate": ["Specific step 1", "Specific step 2", "Specific step 3"],
        "expert": ["Specific step 1", "Specific step 2", "Specific step 3"]
      }
    }
  ]
}

The assessment answers are a JSON object mapping question number to the answers given.
Here are the individual's assessment answers to analyze in depth: {answers_json}"#;

/// Detailed roadmap prompt for one career.
/// Replace: {title}, {json_only_instruction}, {beginner_json}, {intermediate_json}, {expert_json}
pub const DETAILED_ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed learning roadmap for someone pursuing a career in "{title}".

For each step in the beginner, intermediate, and expert phases, provide:
1. A specific, actionable task or milestone
2. An estimated time commitment (e.g., "2 weeks", "3-6 months")
3. Optional: 1-2 recommended resources (books, courses, etc.)

{json_only_instruction}
{
  "detailedRoadmap": {
    "beginner": [
      { "step": "Step description", "timeEstimate": "Time estimate", "resources": ["Resource 1", "Resource 2"] }
    ],
    "intermediate": [
      { "step": "Step description", "timeEstimate": "Time estimate", "resources": ["Resource 1", "Resource 2"] }
    ],
    "expert": [
      { "step": "Step description", "timeEstimate": "Time estimate", "resources": ["Resource 1", "Resource 2"] }
    ]
  }
}

Use the following roadmap steps as a starting point. Keep each step and enhance it with a time estimate and resources rather than inventing new steps:
Beginner: {beginner_json}
Intermediate: {intermediate_json}
Expert: {expert_json}"#;
