//! Line command parsing for the terminal surface.
//!
//! # Invariants
//! - Parsing is pure; resolving positions against the list happens later.
//! - One input line maps to at most one command.

use notepad_core::{NoteId, SurfaceView};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Reference to a note as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRef {
    Id(NoteId),
    /// 1-based position in the displayed list.
    Position(usize),
}

impl NoteRef {
    /// Resolves this reference against the list currently on screen.
    ///
    /// Full ids are passed through unchecked; the store decides whether they
    /// exist.
    pub fn resolve(self, view: &SurfaceView) -> Result<NoteId, CommandError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Position(position) => view
                .notes
                .get(position.wrapping_sub(1))
                .map(|item| item.id)
                .ok_or(CommandError::NoSuchPosition(position)),
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Select(NoteRef),
    Save,
    Delete(NoteRef),
    Edit,
    Title(String),
    Content(String),
    Theme,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    BadReference(String),
    NoSuchPosition(usize),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::BadReference(value) => {
                write!(f, "`{value}` is neither a list position nor a note id")
            }
            Self::NoSuchPosition(position) => write!(f, "no note at position {position}"),
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  new                 create a note and start editing it
  select <n|id>       view a note
  edit                edit the viewed note
  title <text>        set the draft title
  content <text>      set the draft content (`\\n` starts a new line)
  save                save drafts into the active note
  delete <n|id>       delete a note
  theme               toggle light/dark output
  show                print the current view
  help                print this help
  quit                exit";

/// Parses one input line; `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "new" => Command::New,
        "select" | "view" => Command::Select(parse_ref("select", rest)?),
        "save" => Command::Save,
        "delete" | "rm" => Command::Delete(parse_ref("delete", rest)?),
        "edit" => Command::Edit,
        // Drafts may legitimately be empty.
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(unescape_newlines(rest)),
        "theme" => Command::Theme,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_ref(command: &'static str, raw: &str) -> Result<NoteRef, CommandError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    if let Ok(position) = value.parse::<usize>() {
        return Ok(NoteRef::Position(position));
    }
    Uuid::parse_str(value)
        .map(NoteRef::Id)
        .map_err(|_| CommandError::BadReference(value.to_string()))
}

fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command, CommandError, NoteRef};
    use notepad_core::{Intent, NoteController};
    use uuid::Uuid;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("").unwrap(), None);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_line("NEW").unwrap(), Some(Command::New));
        assert_eq!(parse_line("  Save ").unwrap(), Some(Command::Save));
    }

    #[test]
    fn content_keeps_text_and_expands_newlines() {
        assert_eq!(
            parse_line("content # Title\\n**bold**").unwrap(),
            Some(Command::Content("# Title\n**bold**".to_string()))
        );
        assert_eq!(
            parse_line("title").unwrap(),
            Some(Command::Title(String::new()))
        );
    }

    #[test]
    fn references_accept_positions_and_uuids() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        assert_eq!(
            parse_line("select 2").unwrap(),
            Some(Command::Select(NoteRef::Position(2)))
        );
        assert_eq!(
            parse_line(&format!("delete {id}")).unwrap(),
            Some(Command::Delete(NoteRef::Id(id)))
        );
    }

    #[test]
    fn malformed_input_is_reported() {
        assert_eq!(
            parse_line("select").unwrap_err(),
            CommandError::MissingArgument("select")
        );
        assert_eq!(
            parse_line("delete nope").unwrap_err(),
            CommandError::BadReference("nope".to_string())
        );
        assert_eq!(
            parse_line("frobnicate").unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn positions_resolve_against_displayed_list() {
        let mut controller = NoteController::default();
        controller.dispatch(Intent::Create);
        controller.dispatch(Intent::Create);
        let view = controller.view();

        assert_eq!(NoteRef::Position(1).resolve(&view), Ok(view.notes[0].id));
        assert_eq!(
            NoteRef::Position(0).resolve(&view),
            Err(CommandError::NoSuchPosition(0))
        );
        assert_eq!(
            NoteRef::Position(3).resolve(&view),
            Err(CommandError::NoSuchPosition(3))
        );
    }
}
