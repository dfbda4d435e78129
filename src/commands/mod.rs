use colored::Colorize;
use crate::food::search::SearchOrchestrator;
use crate::i18n::Language;
use crate::preferences::Theme;
use std::sync::Arc;

pub mod food_cmd;
pub mod render;
mod system;

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct CommandHandler {
    orchestrator: Arc<SearchOrchestrator>,
}

impl CommandHandler {
    pub fn new(orchestrator: Arc<SearchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<Flow, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }

        // Handle single-word commands first
        match input.to_lowercase().as_str() {
            "help" | "exit" | "quit" => return system::handle_command(input),
            "state" => {
                render::print_state(&self.orchestrator.snapshot());
                return Ok(Flow::Continue);
            }
            "lang" | "theme" | "copy" | "search" => {
                return Err(format!("Missing argument. Usage: {} <value>. Type 'help' for details.", input))
            }
            _ => {}
        }

        let (command, argument) = input
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c.to_lowercase(), a.trim()))
            .unwrap_or_else(|| (String::new(), input));

        match command.as_str() {
            "lang" => self.switch_language(argument),
            "theme" => self.switch_theme(argument),
            "copy" => food_cmd::handle_copy(&self.orchestrator, argument).map(|_| Flow::Continue),
            "search" => food_cmd::handle_search(&self.orchestrator, argument)
                .await
                .map(|_| Flow::Continue),
            // Anything else is a dish name
            _ => food_cmd::handle_search(&self.orchestrator, input)
                .await
                .map(|_| Flow::Continue),
        }
    }

    fn switch_language(&self, code: &str) -> Result<Flow, String> {
        let language: Language = code.parse()?;
        if let Err(e) = self.orchestrator.set_language(language) {
            println!("{}", format!("Warning: language not saved: {}", e).yellow());
        }
        println!("🌐 Language set to {}", language.native_name().cyan());
        Ok(Flow::Continue)
    }

    fn switch_theme(&self, argument: &str) -> Result<Flow, String> {
        let result = if argument.eq_ignore_ascii_case("toggle") {
            self.orchestrator.toggle_theme()
        } else {
            let theme: Theme = argument.parse()?;
            self.orchestrator.set_theme(theme).map(|_| theme)
        };

        let theme = match result {
            Ok(theme) => theme,
            Err(e) => {
                println!("{}", format!("Warning: theme not saved: {}", e).yellow());
                self.orchestrator.theme()
            }
        };
        println!("🎨 Theme set to {}", theme.to_string().cyan());
        Ok(Flow::Continue)
    }

    pub fn print_banner(&self) {
        let state = self.orchestrator.snapshot();
        let strings = state.language.strings();
        let palette = render::Palette::for_theme(state.theme);
        render::print_header(strings, &palette);
        render::print_state(&state);
        println!("Type 'help' for commands. Model: {}", self.orchestrator.gateway_info().cyan());
    }
}
