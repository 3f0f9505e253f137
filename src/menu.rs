//! Interactive numbered menu.

use crate::cli_style;
use crate::pipeline::Pipeline;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

pub const CHOICE_PROMPT: &str = "Seçiminiz (1-2): ";
pub const SONG_PROMPT: &str = "Şarkı adı: ";
pub const ARTIST_PROMPT: &str = "Sanatçı: ";
pub const CONTINUE_PROMPT: &str = "Devam etmek için Enter'a basın...";
pub const INVALID_CHOICE: &str = "Geçersiz seçim! Lütfen tekrar deneyin.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analyze,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Analyze,
            "2" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Source of input lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> rustyline::Result<String> {
        let line = self.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

/// Why the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked the exit entry.
    Requested,
    /// Ctrl-C at a prompt.
    Interrupted,
    /// Ctrl-D at a prompt, or input closed.
    EndOfInput,
}

enum CommandExecutionResult {
    Ok,
    Exit(MenuExit),
}

fn read_or_exit(reader: &mut dyn LineReader, prompt: &str) -> Result<String, MenuExit> {
    match reader.read_line(&cli_style::get_prompt(prompt)) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) => Err(MenuExit::Interrupted),
        Err(ReadlineError::Eof) => Err(MenuExit::EndOfInput),
        Err(e) => {
            warn!(error = %e, "Failed to read input");
            Err(MenuExit::EndOfInput)
        }
    }
}

fn execute_choice(
    choice: MenuChoice,
    reader: &mut dyn LineReader,
    pipeline: &mut Pipeline,
) -> CommandExecutionResult {
    match choice {
        MenuChoice::Analyze => {
            let song = match read_or_exit(reader, SONG_PROMPT) {
                Ok(line) => line,
                Err(exit) => return CommandExecutionResult::Exit(exit),
            };
            let artist = match read_or_exit(reader, ARTIST_PROMPT) {
                Ok(line) => line,
                Err(exit) => return CommandExecutionResult::Exit(exit),
            };

            pipeline.run_request(song.trim(), artist.trim());

            println!();
            match read_or_exit(reader, CONTINUE_PROMPT) {
                Ok(_) => CommandExecutionResult::Ok,
                Err(exit) => CommandExecutionResult::Exit(exit),
            }
        }
        MenuChoice::Exit => CommandExecutionResult::Exit(MenuExit::Requested),
        MenuChoice::Invalid => {
            cli_style::print_error(INVALID_CHOICE);
            CommandExecutionResult::Ok
        }
    }
}

/// Show the menu until the user leaves, running one analysis per selection.
pub fn run_menu(reader: &mut dyn LineReader, pipeline: &mut Pipeline) -> MenuExit {
    loop {
        cli_style::print_menu();
        let line = match read_or_exit(reader, CHOICE_PROMPT) {
            Ok(line) => line,
            Err(exit) => break finish(exit),
        };

        let choice = MenuChoice::parse(&line);
        debug!(?choice, "Menu selection");
        match execute_choice(choice, reader, pipeline) {
            CommandExecutionResult::Ok => {}
            CommandExecutionResult::Exit(exit) => break finish(exit),
        }
    }
}

fn finish(exit: MenuExit) -> MenuExit {
    match exit {
        MenuExit::Requested | MenuExit::EndOfInput => cli_style::print_goodbye(),
        MenuExit::Interrupted => cli_style::print_terminated(),
    }
    exit
}
