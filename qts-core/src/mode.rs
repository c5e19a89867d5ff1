use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// The kind of question asked about the video.
///
/// `Local` queries ("What is the man holding?") concentrate relevance around a
/// few tokens and need a small budget. `Global` queries ("Summarize the
/// events.") spread relevance out and need a large one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    Local,
    Global,
}

impl QueryMode {
    pub const ALL: [QueryMode; 2] = [QueryMode::Local, QueryMode::Global];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Local => Self::Global,
            Self::Global => Self::Local,
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "global" => Ok(Self::Global),
            _ => Err(SimulationError::UnknownQueryMode {
                value: s.to_string(),
            }),
        }
    }
}
