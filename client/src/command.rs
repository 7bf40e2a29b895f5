//! Terminal commands.

use crate::item::{ItemFilter, ItemId};
use crate::service::ItemService;
use crate::view::TodoView;
use std::str::FromStr;
use thiserror::Error;
use todo_runtime::{EffectHandle, StoreError};

/// Command reference printed by `help`
pub const HELP: &str = "\
commands:
  add <text>         add a new item
  toggle <id>        mark an item done / not done
  edit <id>          start editing an item
  save <id> <text>   save a new description
  rm <id>            delete an item
  all | active | completed
                     choose which items are shown
  show               redraw the list
  help               this text
  quit               leave";

/// A parsed terminal line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`
    Add(String),
    /// `toggle <id>`
    Toggle(ItemId),
    /// `edit <id>`
    Edit(ItemId),
    /// `save <id> <text>`
    Save(ItemId, String),
    /// `rm <id>`
    Remove(ItemId),
    /// `all`, `active` or `completed`
    Filter(ItemFilter),
    /// `show`
    Show,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Errors parsing a terminal line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing was typed
    #[error("Empty command")]
    Empty,

    /// Unknown command word
    #[error("Unknown command {0:?}, try `help`")]
    Unknown(String),

    /// Required argument not given
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command word
        command: &'static str,
        /// What is missing
        argument: &'static str,
    },

    /// The id is not a number
    #[error("Invalid item id {0:?}")]
    InvalidId(String),
}

fn parse_id(command: &'static str, arg: Option<&str>) -> Result<ItemId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        argument: "an item id",
    })?;
    arg.parse().map_err(|_| CommandError::InvalidId(arg.to_string()))
}

fn required_text(command: &'static str, text: &str) -> Result<String, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "some text",
        });
    }
    Ok(text.to_string())
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" => required_text("add", rest).map(Self::Add),
            "toggle" => parse_id("toggle", Some(rest).filter(|s| !s.is_empty())).map(Self::Toggle),
            "edit" => parse_id("edit", Some(rest).filter(|s| !s.is_empty())).map(Self::Edit),
            "rm" | "delete" => parse_id("rm", Some(rest).filter(|s| !s.is_empty())).map(Self::Remove),
            "save" => {
                let (id, text) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(id, text)| (id, text.trim()));
                let id = parse_id("save", Some(id).filter(|s| !s.is_empty()))?;
                Ok(Self::Save(id, required_text("save", text)?))
            },
            "all" => Ok(Self::Filter(ItemFilter::All)),
            "active" => Ok(Self::Filter(ItemFilter::Active)),
            "completed" => Ok(Self::Filter(ItemFilter::Completed)),
            "show" | "ls" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

impl Command {
    /// Send the gesture this command stands for
    ///
    /// `show`, `help` and `quit` involve no gesture and return an already
    /// completed handle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] once the view is shut down.
    pub async fn dispatch<S>(self, view: &TodoView<S>) -> Result<EffectHandle, StoreError>
    where
        S: ItemService + Clone + 'static,
    {
        match self {
            Self::Add(text) => view.submit_new_item(&text).await,
            Self::Toggle(id) => view.toggle(id).await,
            Self::Edit(id) => view.begin_edit(id).await,
            Self::Save(id, text) => view.commit_edit(id, &text).await,
            Self::Remove(id) => view.delete(id).await,
            Self::Filter(filter) => view.select_filter(filter).await,
            Self::Show | Self::Help | Self::Quit => Ok(EffectHandle::completed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_spaces() {
        assert_eq!(
            "add  Do the other thing ".parse(),
            Ok(Command::Add("Do the other thing".to_string()))
        );
    }

    #[test]
    fn parses_id_commands() {
        assert_eq!("toggle 7".parse(), Ok(Command::Toggle(ItemId::new(7))));
        assert_eq!("edit 3".parse(), Ok(Command::Edit(ItemId::new(3))));
        assert_eq!("rm 3".parse(), Ok(Command::Remove(ItemId::new(3))));
    }

    #[test]
    fn parses_save() {
        assert_eq!(
            "save 3 Do 1 properly".parse(),
            Ok(Command::Save(ItemId::new(3), "Do 1 properly".to_string()))
        );
    }

    #[test]
    fn parses_filters_and_keywords() {
        assert_eq!("Active".parse(), Ok(Command::Filter(ItemFilter::Active)));
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "toggle".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "toggle",
                argument: "an item id"
            })
        );
        assert_eq!(
            "rm seven".parse::<Command>(),
            Err(CommandError::InvalidId("seven".to_string()))
        );
        assert_eq!(
            "save 3".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "save",
                argument: "some text"
            })
        );
        assert!(matches!("frobnicate".parse::<Command>(), Err(CommandError::Unknown(_))));
    }
}
