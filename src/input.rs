//! Line commands typed at the prompt, mapped to [`Event`]s.
//!
//! | Command               | Event                 |
//! |-----------------------|-----------------------|
//! | `s <text>`, `/<text>` | `SearchInput`         |
//! | empty line, `enter`   | `SearchSubmit`        |
//! | `toggle`              | `ToggleSearchMode`    |
//! | `first` `prev` `next` `last` | paging         |
//! | `page <n>`            | `GoToPage`            |
//! | `sel <id>`            | `ToggleSelect`        |
//! | `selpage`             | `TogglePageSelection` |
//! | `delsel`              | `DeleteSelected`      |
//! | `del <id>`            | `Delete`              |
//! | `edit <id>`           | `BeginEdit`           |
//! | `set <field> <value>` | `EditField`           |
//! | `save`, `cancel`      | `SaveEdit`, `CancelEdit` |
//! | `retry`               | `Retry`               |
//! | `q`, `quit`           | `Quit`                |
//!
//! `s` with no text clears the search box. Everything after the field name in
//! `set` is the value, inner spaces included.

use thiserror::Error;

use crate::app::{EditField, Event};
use crate::domain::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a page number")]
    BadPage(String),
    #[error("{0}")]
    BadField(String),
}

/// Parses one line of operator input.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands and missing or malformed
/// arguments.
pub fn parse_command(line: &str) -> Result<Event, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();

    if let Some(text) = trimmed.strip_prefix('/') {
        return Ok(Event::SearchInput(text.to_string()));
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "" | "enter" => Event::SearchSubmit,
        "s" | "search" => Event::SearchInput(rest.to_string()),
        "toggle" | "mode" => Event::ToggleSearchMode,

        "first" => Event::FirstPage,
        "prev" | "p" => Event::PreviousPage,
        "next" | "n" => Event::NextPage,
        "last" => Event::LastPage,
        "page" => {
            let arg = required(rest, "page")?;
            let page = arg
                .parse::<usize>()
                .map_err(|_| CommandError::BadPage(arg.to_string()))?;
            Event::GoToPage(page)
        }

        "sel" => Event::ToggleSelect(id_arg(rest, "sel")?),
        "selpage" => Event::TogglePageSelection,
        "delsel" => Event::DeleteSelected,

        "del" => Event::Delete(id_arg(rest, "del")?),
        "edit" => Event::BeginEdit(id_arg(rest, "edit")?),
        "set" => {
            let arg = required(rest, "set")?;
            let (field, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
            let field = field.parse::<EditField>().map_err(CommandError::BadField)?;
            Event::EditField {
                field,
                value: value.trim_start().to_string(),
            }
        }
        "save" => Event::SaveEdit,
        "cancel" => Event::CancelEdit,

        "retry" => Event::Retry,
        "q" | "quit" | "exit" => Event::Quit,

        _ => return Err(CommandError::Unknown(command.to_string())),
    };
    Ok(event)
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn id_arg(rest: &str, command: &'static str) -> Result<RecordId, CommandError> {
    required(rest, command).map(RecordId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("s aaron miles").unwrap(),
            Event::SearchInput("aaron miles".to_string())
        );
        assert_eq!(
            parse_command("/mailinator").unwrap(),
            Event::SearchInput("mailinator".to_string())
        );
        assert_eq!(parse_command("s").unwrap(), Event::SearchInput(String::new()));
    }

    #[test]
    fn blank_line_submits_search() {
        assert_eq!(parse_command("").unwrap(), Event::SearchSubmit);
        assert_eq!(parse_command("   \n").unwrap(), Event::SearchSubmit);
    }

    #[test]
    fn paging_commands() {
        assert_eq!(parse_command("next").unwrap(), Event::NextPage);
        assert_eq!(parse_command("PREV").unwrap(), Event::PreviousPage);
        assert_eq!(parse_command("page 3").unwrap(), Event::GoToPage(3));
        assert_eq!(
            parse_command("page two").unwrap_err(),
            CommandError::BadPage("two".to_string())
        );
        assert_eq!(
            parse_command("page").unwrap_err(),
            CommandError::MissingArgument("page")
        );
    }

    #[test]
    fn row_commands_take_ids() {
        assert_eq!(
            parse_command("del 7").unwrap(),
            Event::Delete(RecordId::new("7"))
        );
        assert_eq!(
            parse_command("sel 12").unwrap(),
            Event::ToggleSelect(RecordId::new("12"))
        );
        assert_eq!(
            parse_command("edit 2").unwrap(),
            Event::BeginEdit(RecordId::new("2"))
        );
        assert!(parse_command("edit").is_err());
    }

    #[test]
    fn set_takes_field_and_rest_of_line() {
        assert_eq!(
            parse_command("set name Robert Paulson").unwrap(),
            Event::EditField {
                field: EditField::Name,
                value: "Robert Paulson".to_string()
            }
        );
        assert_eq!(
            parse_command("set role").unwrap(),
            Event::EditField {
                field: EditField::Role,
                value: String::new()
            }
        );
        assert!(matches!(
            parse_command("set phone 555"),
            Err(CommandError::BadField(_))
        ));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse_command("frobnicate 1").unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }
}
