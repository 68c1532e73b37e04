// Job-description generation: LLM completion with a deterministic template
// fallback. All LLM calls go through llm_client.

pub mod handlers;
pub mod jd_generator;
pub mod prompts;
