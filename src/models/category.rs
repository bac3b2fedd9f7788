//! Expense category model
//!
//! Categories are a closed set; every expense and subscription carries
//! exactly one. Each category maps to a display title and an emoji tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Coffee,
    Food,
    Transport,
    Entertainment,
    Shopping,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Coffee,
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Display title for this category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Emoji tag for this category
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Coffee => "☕️",
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Entertainment => "🎮",
            Self::Shopping => "🛍️",
            Self::Other => "💸",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(
                f,
                "Unknown category '{}' (expected one of: coffee, food, transport, \
                 entertainment, shopping, other)",
                s
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}
