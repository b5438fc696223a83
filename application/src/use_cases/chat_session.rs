//! Chat session: one conversation with one model at a time.
//!
//! [`ChatSession`] is what the host talks to. It owns the conversation
//! history, forwards each user message through [`SendChatUseCase`], and
//! turns the finished reply into display output.

use super::send_chat::{ChatError, SendChatUseCase};
use switchboard_domain::{ConversationHistory, ModelId, OutputFormat};
use tracing::info;

pub struct ChatSession {
    use_case: SendChatUseCase,
    model: ModelId,
    format: OutputFormat,
    history: ConversationHistory,
}

impl ChatSession {
    pub fn new(use_case: SendChatUseCase, model: ModelId) -> Self {
        Self {
            use_case,
            model,
            format: OutputFormat::default(),
            history: ConversationHistory::new(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Switch to another model. The history is kept and replayed to it.
    pub fn set_model(&mut self, model: ModelId) {
        info!("Switching model: {} -> {}", self.model, model);
        self.model = model;
    }

    /// Start over with an empty history.
    pub fn clear(&mut self) {
        info!("Clearing conversation ({} turns)", self.history.len());
        self.history = ConversationHistory::new();
    }

    /// Send one user message and return the reply formatted for display.
    pub async fn ask(&mut self, user_message: &str) -> Result<String, ChatError> {
        let reply = self
            .use_case
            .send(&mut self.history, user_message, &self.model)
            .await?;
        Ok(self.format.apply(&reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_transport::TransportError;
    use crate::use_cases::send_chat::tests::{MockTransport, line};
    use std::sync::Arc;
    use switchboard_domain::Role;

    fn session(transport: MockTransport) -> ChatSession {
        ChatSession::new(
            SendChatUseCase::new(Arc::new(transport)),
            ModelId::new("llama3.2").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ask_renders_reply_as_html() {
        let body = [line("```python\nprint(\"hi\")\n", false), line("```", true)].concat();
        let mut session = session(MockTransport::with_deliveries(vec![&body]));

        let output = session.ask("show me python").await.unwrap();

        assert!(output.contains("<span>PYTHON</span>"));
        assert!(output.contains("print(&quot;hi&quot;)"));
        // History keeps the unrendered text
        assert_eq!(session.history().len(), 2);
        assert_eq!(
            session.history().last().unwrap().content,
            "```python\nprint(\"hi\")\n```"
        );
    }

    #[tokio::test]
    async fn test_raw_format_skips_rendering() {
        let mut session = session(MockTransport::with_deliveries(vec![&line("**bold**", true)]))
            .with_format(OutputFormat::Raw);

        assert_eq!(session.ask("q").await.unwrap(), "**bold**");
    }

    #[tokio::test]
    async fn test_failed_ask_still_records_user_turn() {
        let mut session = session(MockTransport::failing(TransportError::ConnectionError(
            "connection refused".to_string(),
        )));

        assert!(session.ask("hello?").await.is_err());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().turns()[0].role, Role::User);
    }

    #[test]
    fn test_clear_and_switch_model() {
        let mut session = session(MockTransport::with_deliveries(Vec::<&str>::new()));
        session.set_model(ModelId::new("mistral").unwrap());
        session.clear();

        assert_eq!(session.model().as_str(), "mistral");
        assert!(session.history().is_empty());
        assert_eq!(session.format(), OutputFormat::Html);
    }
}
