use crate::engine::llm_client::{ChatError, TextGenerator};

pub enum EngineCommand {
    SendChat { seq: u64, text: String },
    TestConnection,
    ReplaceGenerator(Box<dyn TextGenerator>),
}

pub enum EngineResponse {
    ChatReply {
        seq: u64,
        result: Result<String, ChatError>,
    },
    ConnectionStatus(String),
}
