//! Project record types.

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Length of the hyphenated textual UUID form (8-4-4-4-12).
const CANONICAL_LEN: usize = 36;

/// Identifier of a project.
///
/// Holds the exact text it was created from. Generated ids are lowercase
/// hyphenated v4 UUIDs; parsed ids keep the caller's casing, so two ids are
/// equal only when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

/// The supplied text is not a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid project id: {0:?}")]
pub struct ProjectIdError(pub String);

impl ProjectId {
    /// Generate a fresh random id.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = ProjectIdError;

    /// Only the hyphenated 8-4-4-4-12 form is accepted, hex digits in either
    /// case. Simple, braced and URN encodings are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != CANONICAL_LEN || Uuid::try_parse(s).is_err() {
            return Err(ProjectIdError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored project.
///
/// `title` and `owner` are optional because create and replace accept
/// bodies without them; absent fields are omitted from the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Project {
    /// Build a record from a client-supplied draft.
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            owner: draft.owner,
        }
    }

    /// Case-sensitive substring match on the title. A project without a
    /// title never matches.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.contains(needle))
    }
}

/// Client-supplied fields for create and replace.
///
/// Decoded from a JSON object by key; unknown keys are ignored and a
/// repeated key keeps its last value. A JSON array carries no named fields
/// and decodes to an empty draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub owner: Option<String>,
}

impl<'de> Deserialize<'de> for ProjectDraft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DraftVisitor)
    }
}

struct DraftVisitor;

impl<'de> Visitor<'de> for DraftVisitor {
    type Value = ProjectDraft;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut draft = ProjectDraft::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => draft.title = map.next_value()?,
                "owner" => draft.owner = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(draft)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ProjectDraft::default())
    }
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            owner: Some(owner.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_id() {
        let id: ProjectId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_uppercase_id_is_accepted_verbatim() {
        let upper: ProjectId = "67E55044-10B1-426F-9247-BB680E5FE0C8".parse().unwrap();
        let lower: ProjectId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(upper.as_str(), "67E55044-10B1-426F-9247-BB680E5FE0C8");
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_reject_non_canonical_ids() {
        for raw in [
            "abc",
            "",
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
            "67e55044-10b1-426f-9247-bb680e5fe0cz",
            "67e55044-10b1-426f-9247_bb680e5fe0c8",
        ] {
            assert!(raw.parse::<ProjectId>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_generated_ids_are_v4() {
        let id = ProjectId::new_v4();
        assert_eq!(Uuid::parse_str(id.as_str()).unwrap().get_version_num(), 4);
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
        assert_eq!(id.to_string().parse::<ProjectId>().unwrap(), id);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let project = Project::from_draft(
            ProjectId::new_v4(),
            ProjectDraft { title: Some("Site".into()), owner: None },
        );
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["title"], "Site");
        assert!(json.get("owner").is_none());
    }

    #[test]
    fn test_draft_reads_object_fields_by_key() {
        let draft: ProjectDraft =
            serde_json::from_str(r#"{"owner": "Ana", "extra": [1, 2], "title": "Site"}"#).unwrap();
        assert_eq!(draft, ProjectDraft::new("Site", "Ana"));

        let draft: ProjectDraft = serde_json::from_str(r#"{"title": "a", "title": "b"}"#).unwrap();
        assert_eq!(draft.title.as_deref(), Some("b"));
        assert_eq!(draft.owner, None);

        let draft: ProjectDraft = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(draft, ProjectDraft::default());
    }

    #[test]
    fn test_draft_from_array_has_no_fields() {
        let draft: ProjectDraft = serde_json::from_str(r#"["Site", "Ana"]"#).unwrap();
        assert_eq!(draft, ProjectDraft::default());
    }

    #[test]
    fn test_draft_rejects_scalars_and_mistyped_fields() {
        assert!(serde_json::from_str::<ProjectDraft>("42").is_err());
        assert!(serde_json::from_str::<ProjectDraft>(r#""Site""#).is_err());
        assert!(serde_json::from_str::<ProjectDraft>(r#"{"title": 42}"#).is_err());
    }

    #[test]
    fn test_title_contains() {
        let project = Project::from_draft(ProjectId::new_v4(), ProjectDraft::new("Website", "Ana"));
        assert!(project.title_contains("Web"));
        assert!(project.title_contains(""));
        assert!(!project.title_contains("web"));

        let untitled = Project::from_draft(ProjectId::new_v4(), ProjectDraft::default());
        assert!(!untitled.title_contains(""));
    }
}
