use crate::indicator::PageSource;
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/pagerdots.sock";

/// In-memory pager: a page count and the page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    item_count: usize,
    current: usize,
}

impl Pager {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current: 0,
        }
    }

    /// Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        self.jump(self.current + 1)
    }

    /// Returns false when already on the first page.
    pub fn prev(&mut self) -> bool {
        self.current
            .checked_sub(1)
            .is_some_and(|page| self.jump(page))
    }

    pub fn jump(&mut self, page: usize) -> bool {
        if page >= self.item_count || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    /// Changes the page count, pulling the current page back inside it.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.current = self.current.min(item_count.saturating_sub(1));
    }
}

impl PageSource for Pager {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn current_page(&self) -> usize {
        self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Next,
    Prev,
    Page,
    Count,
    Show,
    Hide,
}

/// One line of the front-end's control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    Next,
    Prev,
    Page(usize),
    Count(usize),
    Show,
    Hide,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PagerCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' expects a number")]
    MissingNumber(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl FromStr for PagerCommand {
    type Err = PagerCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or(PagerCommandError::Empty)?;
        let verb =
            Verb::from_str(word).map_err(|_| PagerCommandError::Unknown(word.to_string()))?;

        let number = |words: &mut std::str::SplitWhitespace<'_>| {
            let arg = words
                .next()
                .ok_or_else(|| PagerCommandError::MissingNumber(verb.to_string()))?;
            arg.parse::<usize>()
                .map_err(|_| PagerCommandError::InvalidNumber(arg.to_string()))
        };

        let command = match verb {
            Verb::Next => Self::Next,
            Verb::Prev => Self::Prev,
            Verb::Page => Self::Page(number(&mut words)?),
            Verb::Count => Self::Count(number(&mut words)?),
            Verb::Show => Self::Show,
            Verb::Hide => Self::Hide,
        };

        match words.next() {
            Some(extra) => Err(PagerCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for PagerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "{}", Verb::Next),
            Self::Prev => write!(f, "{}", Verb::Prev),
            Self::Page(n) => write!(f, "{} {}", Verb::Page, n),
            Self::Count(n) => write!(f, "{} {}", Verb::Count, n),
            Self::Show => write!(f, "{}", Verb::Show),
            Self::Hide => write!(f, "{}", Verb::Hide),
        }
    }
}
