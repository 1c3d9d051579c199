//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies one calculation result within a browser session.
///
/// A fresh id is minted for every successful calculation so diagnostics can
/// tell a superseded result from its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(Uuid);

impl ResultId {
    /// Creates a new random ResultId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ResultId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ResultId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResultId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_ids_are_unique() {
        assert_ne!(ResultId::new(), ResultId::new());
    }

    #[test]
    fn result_id_parses_from_display() {
        let id = ResultId::new();
        let parsed: ResultId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn result_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ResultId>().is_err());
    }

    #[test]
    fn result_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&ResultId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
