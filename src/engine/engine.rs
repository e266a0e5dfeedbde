use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use log::{debug, info, warn};

use crate::engine::llm_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Runs outbound calls off the UI thread, one command at a time.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    generator: Box<dyn TextGenerator>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        generator: Box<dyn TextGenerator>,
    ) -> Self {
        Self { rx, tx, generator }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        std::thread::spawn(move || {
            let mut engine = self;
            engine.run();
        })
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            let response = match cmd {
                EngineCommand::SendChat { seq, text } => {
                    let prompt = PromptBuilder::build(&text);
                    let result = self.generator.generate(&prompt);
                    match &result {
                        Ok(reply) => debug!("Chat reply {} ({} chars)", seq, reply.len()),
                        Err(e) => warn!("Chat reply {} failed: {}", seq, e),
                    }
                    EngineResponse::ChatReply { seq, result }
                }

                EngineCommand::TestConnection => {
                    let status = match self.generator.test_connection() {
                        Ok(s) => s,
                        Err(e) => format!("Connection failed: {e}"),
                    };
                    info!("Connection test: {}", status);
                    EngineResponse::ConnectionStatus(status)
                }

                EngineCommand::ReplaceGenerator(generator) => {
                    info!("Text-generation client replaced");
                    self.generator = generator;
                    continue;
                }
            };

            if self.tx.send(response).is_err() {
                debug!("UI side hung up; engine stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::llm_client::ChatError;
    use crate::engine::prompt_builder::ChatPrompt;
    use std::sync::mpsc;

    struct Echo;

    impl TextGenerator for Echo {
        fn generate(&self, prompt: &ChatPrompt) -> Result<String, ChatError> {
            Ok(prompt.user.lines().last().unwrap_or_default().to_string())
        }

        fn test_connection(&self) -> anyhow::Result<String> {
            Ok("Connected (1 models available)".into())
        }
    }

    struct Down;

    impl TextGenerator for Down {
        fn generate(&self, _prompt: &ChatPrompt) -> Result<String, ChatError> {
            Err(ChatError::Status(503))
        }

        fn test_connection(&self) -> anyhow::Result<String> {
            anyhow::bail!("refused")
        }
    }

    fn start(generator: Box<dyn TextGenerator>) -> (mpsc::Sender<EngineCommand>, mpsc::Receiver<EngineResponse>, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = Engine::new(cmd_rx, resp_tx, generator).spawn();
        (cmd_tx, resp_rx, handle)
    }

    #[test]
    fn replies_carry_request_sequence() {
        let (tx, rx, handle) = start(Box::new(Echo));
        tx.send(EngineCommand::SendChat { seq: 7, text: "hello".into() }).unwrap();

        match rx.recv().unwrap() {
            EngineResponse::ChatReply { seq, result } => {
                assert_eq!(seq, 7);
                assert_eq!(result.unwrap(), "User: hello");
            }
            _ => panic!("expected chat reply"),
        }

        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn failures_are_reported_not_raised() {
        let (tx, rx, handle) = start(Box::new(Down));
        tx.send(EngineCommand::SendChat { seq: 1, text: "x".into() }).unwrap();
        tx.send(EngineCommand::TestConnection).unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            EngineResponse::ChatReply { seq: 1, result: Err(ChatError::Status(503)) }
        ));
        match rx.recv().unwrap() {
            EngineResponse::ConnectionStatus(s) => assert_eq!(s, "Connection failed: refused"),
            _ => panic!("expected status"),
        }

        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn generator_can_be_swapped() {
        let (tx, rx, handle) = start(Box::new(Down));
        tx.send(EngineCommand::ReplaceGenerator(Box::new(Echo))).unwrap();
        tx.send(EngineCommand::SendChat { seq: 2, text: "again".into() }).unwrap();

        assert!(matches!(
            rx.recv().unwrap(),
            EngineResponse::ChatReply { seq: 2, result: Ok(_) }
        ));

        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn session_sees_fallback_when_service_fails() {
        use crate::engine::chat::{ChatSession, OFFLINE_FALLBACK};

        let (tx, rx, handle) = start(Box::new(Down));
        let mut session = ChatSession::default();
        let req = session.submit("book me a court").unwrap();
        tx.send(EngineCommand::SendChat { seq: req.seq, text: req.text }).unwrap();

        if let EngineResponse::ChatReply { seq, result } = rx.recv().unwrap() {
            session.receive(seq, result);
        }
        assert_eq!(session.transcript().last().unwrap().text, OFFLINE_FALLBACK);
        assert!(!session.is_loading());

        drop(tx);
        handle.join().unwrap();
    }
}
