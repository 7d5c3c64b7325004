//! Shared types between the Story Forge UI and its backend API.
//!
//! Everything that crosses the HTTP boundary is defined here: the story
//! version record, gallery filter/sort state, and one request schema per
//! endpoint instead of ad-hoc JSON objects assembled at call sites.
//!
//! Serializable with serde for JSON over HTTP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Lifecycle status of a story version.
///
/// `Completed` makes the version read-only in every edit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Draft,
    Completed,
}

impl StoryStatus {
    pub fn is_read_only(self) -> bool {
        matches!(self, StoryStatus::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StoryStatus::Draft => "draft",
            StoryStatus::Completed => "completed",
        }
    }
}

/// One persisted story version.
///
/// `id` is globally unique across all stories. `version_id` is unique only
/// within the version group descending from one original; `version_id == 1`
/// marks that original, larger values are later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryVersion {
    pub id: i64,
    pub version_id: i64,
    pub title: String,
    pub genre: String,
    pub setting: String,
    pub characters: String,
    pub themes: String,
    pub details: String,
    pub status: StoryStatus,
    pub content: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl StoryVersion {
    /// Whether this version is the root of its version group.
    pub fn is_original(&self) -> bool {
        self.version_id == 1
    }
}

// ============================================================================
// Gallery filters
// ============================================================================

/// Sort keys accepted by `GET /stories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Timestamp,
    Title,
    Genre,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Timestamp => "timestamp",
            SortField::Title => "title",
            SortField::Genre => "genre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter and sort state for the saved-stories gallery.
///
/// Empty text fields and an unset status are omitted from the query string;
/// `sort_by` and `order` are always sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryFilters {
    pub genre: String,
    pub title: String,
    pub status: Option<StoryStatus>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl StoryFilters {
    /// The (key, value) pairs to send, in a fixed order. Values are raw and
    /// still need percent-encoding before they go on the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.genre.is_empty() {
            pairs.push(("genre", self.genre.clone()));
        }
        if !self.title.is_empty() {
            pairs.push(("title", self.title.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }
}

// ============================================================================
// Request schemas
// ============================================================================

/// Body for `POST /update-story`. `base_id` names the version the edit was
/// made against; the backend decides whether that becomes a new version or
/// an in-place update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStoryRequest {
    pub base_id: i64,
    pub title: String,
    pub genre: String,
    pub setting: String,
    pub characters: String,
    pub themes: String,
    pub details: String,
    pub status: StoryStatus,
    pub content: String,
    pub user_id: String,
}

/// Body for `POST /save-story` (first persist of a generated story).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveStoryRequest {
    pub title: String,
    pub genre: String,
    pub setting: String,
    pub characters: String,
    pub themes: String,
    pub details: String,
    pub status: StoryStatus,
    pub content: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Body for `POST /generate-story`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GenerateStoryRequest {
    pub genre: String,
    pub setting: String,
    pub characters: String,
    pub themes: String,
    pub additional_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarifying_responses: Option<String>,
}

// ============================================================================
// Generate-story response parsing
// ============================================================================

/// What `POST /generate-story` came back with: either clarifying questions
/// (a JSON object with a `questions` array) or the story itself as plain
/// text following the `Title: <t>\n---\n<narrative>` convention.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Questions(Vec<String>),
    Story { title: String, narrative: String },
}

const TITLE_DELIMITER: &str = "\n---\n";

/// Parse the `/generate-story` response body.
///
/// The plain-text form may arrive wrapped in quotes with escaped newlines;
/// unwrap those before splitting on the delimiter. A body without the
/// delimiter is a titleless narrative, not an error.
pub fn parse_generate_response(body: &str) -> GenerateOutcome {
    let trimmed = body.trim();

    if trimmed.starts_with('{') && trimmed.contains("questions") {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
            if let Some(questions) = value.get("questions").and_then(|q| q.as_array()) {
                let questions = questions
                    .iter()
                    .filter_map(|q| q.as_str())
                    .map(str::to_string)
                    .collect();
                return GenerateOutcome::Questions(questions);
            }
        }
    }

    let mut text = trimmed.to_string();
    if text.starts_with('"') && text.ends_with('"') && text.len() >= 2 {
        text = text[1..text.len() - 1].to_string();
    }
    text = text.replace("\\n", "\n").replace("\\\"", "\"");

    match text.split_once(TITLE_DELIMITER) {
        Some((title_part, narrative)) => {
            let title = title_part.trim();
            let title = title
                .strip_prefix("Title:")
                .or_else(|| title.strip_prefix("title:"))
                .unwrap_or(title)
                .trim();
            GenerateOutcome::Story {
                title: title.to_string(),
                narrative: narrative.trim().to_string(),
            }
        }
        None => GenerateOutcome::Story {
            title: String::new(),
            narrative: text,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_strings() {
        assert_eq!(
            serde_json::to_string(&StoryStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::from_str::<StoryStatus>("\"completed\"").unwrap(),
            StoryStatus::Completed
        );
        assert!(StoryStatus::Completed.is_read_only());
        assert!(!StoryStatus::Draft.is_read_only());
    }

    #[test]
    fn query_pairs_omit_absent_fields() {
        let filters = StoryFilters {
            genre: "Fantasy".to_string(),
            title: String::new(),
            status: None,
            sort_by: SortField::Title,
            order: SortOrder::Asc,
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("genre", "Fantasy".to_string()),
                ("sort_by", "title".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_include_all_present_fields() {
        let filters = StoryFilters {
            genre: "Sci-Fi".to_string(),
            title: "Probe".to_string(),
            status: Some(StoryStatus::Draft),
            sort_by: SortField::Timestamp,
            order: SortOrder::Desc,
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[2], ("status", "draft".to_string()));
        assert_eq!(pairs[4], ("order", "desc".to_string()));
    }

    #[test]
    fn generate_response_splits_title_and_narrative() {
        let body = "Title: The Last Forge\n---\nOnce upon a time.";
        assert_eq!(
            parse_generate_response(body),
            GenerateOutcome::Story {
                title: "The Last Forge".to_string(),
                narrative: "Once upon a time.".to_string(),
            }
        );
    }

    #[test]
    fn generate_response_unwraps_quoted_escaped_text() {
        let body = "\"Title: Embers\\n---\\nShe said \\\"go\\\".\"";
        assert_eq!(
            parse_generate_response(body),
            GenerateOutcome::Story {
                title: "Embers".to_string(),
                narrative: "She said \"go\".".to_string(),
            }
        );
    }

    #[test]
    fn generate_response_without_delimiter_is_titleless() {
        assert_eq!(
            parse_generate_response("just a narrative"),
            GenerateOutcome::Story {
                title: String::new(),
                narrative: "just a narrative".to_string(),
            }
        );
    }

    #[test]
    fn generate_response_detects_questions_payload() {
        let body = r#"{"questions": ["Who is the hero?", "Where does it start?"]}"#;
        assert_eq!(
            parse_generate_response(body),
            GenerateOutcome::Questions(vec![
                "Who is the hero?".to_string(),
                "Where does it start?".to_string(),
            ])
        );
    }

    #[test]
    fn version_roundtrips_through_json() {
        let version = StoryVersion {
            id: 7,
            version_id: 2,
            title: "Embers".to_string(),
            genre: "Fantasy".to_string(),
            setting: "A dying forge-city".to_string(),
            characters: "Smith, apprentice".to_string(),
            themes: "Decay, renewal".to_string(),
            details: String::new(),
            status: StoryStatus::Draft,
            content: "Chapter one.".to_string(),
            user_id: "user-1".to_string(),
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let json = serde_json::to_string(&version).unwrap();
        let back: StoryVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);
        assert!(!back.is_original());
    }
}
