use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{Error, ErrorKind};

/// A registration term as listed by `getTerms`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Term {
    pub code: String,
    pub description: String,
}

/// Backend context that decides which endpoint family answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Plan,
    Registration,
    #[default]
    Search,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plan => "plan",
            Mode::Registration => "registration",
            Mode::Search => "search",
        }
    }

    /// Path segment serving `getTerms` in this mode.
    pub fn terms_segment(self) -> &'static str {
        match self {
            Mode::Search => "classSearch",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plan" => Ok(Mode::Plan),
            "registration" => Ok(Mode::Registration),
            "search" => Ok(Mode::Search),
            other => Err(ErrorKind::InvalidMode(other.to_string()).into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
