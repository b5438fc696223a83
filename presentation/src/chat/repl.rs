//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::{ConsoleFormatter, ModelListing};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use switchboard_application::ChatSession;
use switchboard_domain::ModelId;
use tracing::debug;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Models,
    /// `/model <name>`; `None` when the name is missing
    SwitchModel(Option<String>),
    Clear,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/models" => ReplCommand::Models,
            "/model" => ReplCommand::SwitchModel(arg),
            "/clear" => ReplCommand::Clear,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive chat REPL
///
/// Holds one [`ChatSession`] for the lifetime of the loop, so every message
/// is sent with the conversation so far.
pub struct ChatRepl {
    session: ChatSession,
    models: Vec<ModelListing>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            models: Vec::new(),
        }
    }

    /// Set the models shown by `/models`
    pub fn with_models(mut self, models: Vec<ModelListing>) -> Self {
        self.models = models;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self, endpoint: &str) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome(endpoint);

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_message(line, endpoint).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self, endpoint: &str) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           LLM Switchboard - Chat            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model:  {}", self.session.model());
        println!("Server: {}", endpoint);
        println!();
        print_help();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                print_help();
                false
            }
            ReplCommand::Models => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::model_list(&self.models, Some(self.session.model()))
                );
                println!();
                false
            }
            ReplCommand::SwitchModel(Some(name)) => {
                match name.parse::<ModelId>() {
                    Ok(model) => {
                        debug!("Switching model {} -> {}", self.session.model(), model);
                        println!("Switched to {}", model);
                        self.session.set_model(model);
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
                false
            }
            ReplCommand::SwitchModel(None) => {
                println!("Usage: /model <name>");
                false
            }
            ReplCommand::Clear => {
                self.session.clear();
                println!("Conversation cleared");
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, message: &str, endpoint: &str) {
        println!();
        match self.session.ask(message).await {
            Ok(output) => print!("{}", ConsoleFormatter::reply(&output)),
            Err(e) => eprint!("{}", ConsoleFormatter::error(&e, endpoint)),
        }
        println!();
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /help, /h, /?     - Show this help");
    println!("  /models           - List available models");
    println!("  /model <name>     - Switch model (keeps the conversation)");
    println!("  /clear            - Start a new conversation");
    println!("  /quit, /exit, /q  - Exit chat");
    println!();
}
