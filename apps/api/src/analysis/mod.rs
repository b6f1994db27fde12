// Resume analysis: collect inputs, build the prompt, call the model, render the report.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod input;
pub mod loader;
pub mod prompts;
pub mod render;
pub mod report;
