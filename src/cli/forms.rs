//! Field collection for the interactive commands.
//!
//! Values are handed to the tracker as raw strings; validation stays in the
//! core so script mode and interactive mode hit the same checks. Prompts
//! allow empty input on purpose: a rejected value comes back as a
//! validation message and the user can retry the command.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const KINDS: [&str; 2] = ["income", "expense"];

/// Raw add-form fields, in the shape the tracker expects.
pub struct AddForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
}

/// Builds the add form from command arguments, prompting for whatever is
/// missing when a terminal is available. Returns `None` when fields are
/// missing and prompting is not possible (script mode) or was cancelled.
pub fn add_form(args: &[&str], interactive: bool) -> Option<AddForm> {
    if args.len() >= 3 {
        return Some(AddForm {
            description: args[0].to_string(),
            amount: args[1].to_string(),
            kind: args[2].to_string(),
        });
    }
    if !interactive {
        return None;
    }

    let theme = ColorfulTheme::default();
    let description = match args.first() {
        Some(value) => value.to_string(),
        None => prompt_text(&theme, "Description")?,
    };
    let amount = match args.get(1) {
        Some(value) => value.to_string(),
        None => prompt_text(&theme, "Amount")?,
    };
    let kind = Select::with_theme(&theme)
        .with_prompt("Type")
        .items(&KINDS)
        .default(0)
        .interact()
        .ok()?;

    Some(AddForm {
        description,
        amount,
        kind: KINDS[kind].to_string(),
    })
}

/// Asks before a destructive remove. Confirmation is a view concern; the
/// tracker operation itself is unconditional once invoked.
pub fn confirm_removal() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to delete this transaction?")
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Option<String> {
    Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .ok()
}
