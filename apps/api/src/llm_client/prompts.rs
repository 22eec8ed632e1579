// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Output contract appended to every prompt that expects a JSON document back.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY a JSON object with this exact structure, \
    no markdown or code blocks, and no text before or after the object:";
