//! Satchel LLM - completion client and prompt composition
//!
//! Builds the fixed-instruction prompt from an inbound question plus its
//! retrieval context, and sends it to the OpenAI Responses API.

pub mod openai;
pub mod prompt;

pub use openai::OpenAiClient;
pub use prompt::{build_prompt, compose_input, is_truthy, INSTRUCTIONS};
