//! Type definitions for character groups

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which relation of a group a query looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationMode {
    /// Characters that look alike
    #[default]
    Similar,
    /// Characters sharing a radical or built from the head
    Radical,
}

impl RelationMode {
    pub const ALL: [RelationMode; 2] = [RelationMode::Similar, RelationMode::Radical];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationMode::Similar => "similar",
            RelationMode::Radical => "radical",
        }
    }
}

impl fmt::Display for RelationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "similar" => Ok(RelationMode::Similar),
            "radical" => Ok(RelationMode::Radical),
            other => Err(format!("unknown relation mode '{}'", other)),
        }
    }
}

/// One parsed row of the character table
///
/// Members keep their source order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub key: char,
    pub similars: Vec<char>,
    pub radicals: Vec<char>,
}

impl GroupRecord {
    pub fn new(key: char, similars: Vec<char>, radicals: Vec<char>) -> Self {
        Self {
            key,
            similars,
            radicals,
        }
    }

    /// Members of the relation selected by `mode`
    pub fn members(&self, mode: RelationMode) -> &[char] {
        match mode {
            RelationMode::Similar => &self.similars,
            RelationMode::Radical => &self.radicals,
        }
    }

    pub fn lists(&self, ch: char, mode: RelationMode) -> bool {
        self.members(mode).contains(&ch)
    }

    /// Whether `ch` appears in either relation
    pub fn lists_anywhere(&self, ch: char) -> bool {
        RelationMode::ALL.iter().any(|&mode| self.lists(ch, mode))
    }

    /// Number of member occurrences across both relations
    pub fn relation_count(&self) -> usize {
        self.similars.len() + self.radicals.len()
    }
}

impl fmt::Display for GroupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let similars: String = self.similars.iter().collect();
        write!(f, "{}({})", self.key, similars)?;
        if !self.radicals.is_empty() {
            let radicals: String = self.radicals.iter().collect();
            write!(f, "({})", radicals)?;
        }
        Ok(())
    }
}
