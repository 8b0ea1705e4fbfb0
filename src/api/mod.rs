pub mod catalog;
pub mod gemini;
pub mod models;

pub use gemini::{Assistant, AssistantReply};
