pub mod engine;
pub mod protocol;
pub mod chat;
pub mod filter;
pub mod wizard;
pub mod shell;

pub mod prompt_builder;
pub mod llm_client;
