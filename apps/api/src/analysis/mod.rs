// Interview analysis: resume text extraction, prompt assembly, question generation.
// All LLM calls go through llm_client; no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod resume_text;
