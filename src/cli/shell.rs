//! Interactive shell fronting the expense tracker.
//!
//! Two modes: an interactive rustyline loop with command completion, and a
//! script mode (enabled by `EXPENSE_CORE_CLI_SCRIPT`) that reads commands
//! from stdin line by line, used by the integration tests.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;
use strsim::levenshtein;

use crate::{
    cli::{forms, output},
    config::{Config, ConfigManager},
    errors::LedgerError,
    storage::JsonStorage,
    tracker::ExpenseTracker,
};

const COMMANDS: &[&str] = &[
    "add", "advice", "chart", "exit", "help", "list", "quit", "remove", "sort", "summary",
];
const SUGGESTION_DISTANCE: usize = 3;
const PROMPT: &str = "expense> ";

/// Errors that can end the shell itself; command failures are reported
/// inline and never leave the loop.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("EXPENSE_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = ConfigManager::new()?.load()?;
    let storage = JsonStorage::new_default()?;
    let tracker = ExpenseTracker::open(Box::new(storage), config.storage_key.clone())?;

    let mut shell = Shell {
        tracker,
        config,
        mode,
    };
    match mode {
        CliMode::Interactive => shell.run_interactive(),
        CliMode::Script => shell.run_script(),
    }
}

struct Shell {
    tracker: ExpenseTracker,
    config: Config,
    mode: CliMode,
}

impl Shell {
    fn run_interactive(&mut self) -> Result<(), CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(COMMANDS)));
        output::info("Type `help` to list the available commands.");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    if self.handle_line(trimmed) == LoopControl::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    output::info("Use `exit` to leave the shell.");
                }
                Err(ReadlineError::Eof) => {
                    output::info("Exiting shell.");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn run_script(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if self.handle_line(line.trim()) == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> LoopControl {
        let tokens = match split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(format!("Could not parse command: {err}"));
                return LoopControl::Continue;
            }
        };
        if tokens.is_empty() {
            return LoopControl::Continue;
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match command.as_str() {
            "add" => self.cmd_add(&args),
            "remove" => self.cmd_remove(&args),
            "list" => output::render_list(self.tracker.transactions(), &self.config),
            "sort" => self.cmd_sort(&args),
            "summary" => output::render_summary(&self.tracker.summary(), &self.config),
            "advice" => output::render_advisories(&self.tracker.advisories()),
            "chart" => output::render_chart(self.tracker.transactions()),
            "help" => output::render_help(),
            "exit" | "quit" => return LoopControl::Exit,
            unknown => self.report_unknown(unknown),
        }
        LoopControl::Continue
    }

    fn cmd_add(&mut self, args: &[&str]) {
        let Some(form) = forms::add_form(args, self.mode == CliMode::Interactive) else {
            output::warning("Usage: add <description> <amount> <income|expense>");
            return;
        };
        match self.tracker.add(&form.description, &form.amount, &form.kind) {
            Ok(created) => output::success(format!(
                "Recorded transaction #{} ({}).",
                created.id, created.description
            )),
            Err(err) => self.report_error(err),
        }
    }

    fn cmd_remove(&mut self, args: &[&str]) {
        let Some(raw) = args.first() else {
            output::warning("Usage: remove <id>");
            return;
        };
        let Ok(id) = raw.parse::<u64>() else {
            output::warning(format!("`{raw}` is not a transaction id."));
            return;
        };
        if self.mode == CliMode::Interactive && !forms::confirm_removal() {
            output::info("Kept the transaction.");
            return;
        }
        match self.tracker.remove(id) {
            Ok(Some(removed)) => output::success(format!(
                "Removed transaction #{} ({}).",
                removed.id, removed.description
            )),
            Ok(None) => output::info(format!("No transaction with id {id} was found.")),
            Err(err) => self.report_error(err),
        }
    }

    fn cmd_sort(&mut self, args: &[&str]) {
        let key = args.first().copied().unwrap_or("");
        match self.tracker.sort(key) {
            Ok(sorted) => output::render_list(sorted, &self.config),
            Err(err) => self.report_error(err),
        }
    }

    fn report_error(&self, err: LedgerError) {
        if err.is_storage() {
            output::warning(format!("{err}; the change is kept for this session."));
        } else {
            output::error(err);
        }
    }

    fn report_unknown(&self, command: &str) {
        match closest_command(command) {
            Some(suggestion) => output::warning(format!(
                "Unknown command `{command}`. Did you mean `{suggestion}`?"
            )),
            None => output::warning(format!(
                "Unknown command `{command}`. Type `help` for the command list."
            )),
        }
    }
}

fn closest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|candidate| (levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: &[&str]) -> Self {
        let mut commands: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        commands.sort();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the command word completes; arguments are free-form.
        if prefix.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(prefix))
            .map(|command| Pair {
                display: command.clone(),
                replacement: command.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
