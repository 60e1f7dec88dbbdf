// Resume ↔ job description analysis.
// Implements: content acquisition, key rotation, the four-stage scoring sequence, aggregation.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod acquisition;
pub mod aggregator;
pub mod extraction;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod pipeline;
pub mod prompts;
