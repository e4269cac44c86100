use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Role of a single turn in the conversation log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Provenance of a retrieved passage.
///
/// `source` and `page` are the fields the backend is known to emit; any
/// other metadata it attaches is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A retrieved passage with its relevance score.
///
/// `relevance_score` is a similarity measure in [0, 1], not a probability.
/// The order of sources within a list is the backend's relevance ranking
/// and is preserved exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    pub id: i64,
    pub content: String,
    pub metadata: SourceMetadata,
    pub relevance_score: f64,
}

/// Shown in place of an answer when a query request fails
pub const QUERY_ERROR_FALLBACK: &str =
    "Sorry, there was an error processing your request. Please make sure the backend is running and try again.";

/// One turn of the conversation: a question or an answer.
///
/// Immutable once created. `sources` is present only on assistant turns
/// that carried at least one attributed passage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceRef>>,
    pub created_at: DateTime<Utc>,
}

impl Exchange {
    fn new(role: ChatRole, content: String, sources: Option<Vec<SourceRef>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            sources,
            created_at: Utc::now(),
        }
    }

    /// Create a user question turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into(), None)
    }

    /// Create an assistant answer turn. An empty source list normalizes to
    /// `None`: sources are attached only when a passage was attributed.
    pub fn assistant(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        let sources = if sources.is_empty() {
            None
        } else {
            Some(sources)
        };
        Self::new(ChatRole::Assistant, content.into(), sources)
    }

    /// Create the synthetic assistant turn appended when a query fails
    pub fn assistant_fallback() -> Self {
        Self::new(ChatRole::Assistant, QUERY_ERROR_FALLBACK.to_string(), None)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Sources attributed to this turn, empty for user turns and for
    /// answers without attribution
    pub fn sources(&self) -> &[SourceRef] {
        self.sources.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_ref_decodes_wire_shape() {
        let json = r#"{
            "id": 1,
            "content": "Refunds are accepted within 30 days.",
            "metadata": {"source": "policy.pdf", "page": 2, "chunk_index": 7},
            "relevance_score": 0.87
        }"#;
        let source: SourceRef = serde_json::from_str(json).unwrap();
        assert_eq!(source.id, 1);
        assert_eq!(source.metadata.source.as_deref(), Some("policy.pdf"));
        assert_eq!(source.metadata.page, Some(2));
        assert_eq!(source.metadata.extra["chunk_index"], 7);
        assert!((source.relevance_score - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn source_metadata_fields_are_optional() {
        let source: SourceRef =
            serde_json::from_str(r#"{"id": 3, "content": "x", "metadata": {}, "relevance_score": 0.5}"#)
                .unwrap();
        assert_eq!(source.metadata.source, None);
        assert_eq!(source.metadata.page, None);
        assert!(source.metadata.extra.is_empty());
    }

    #[test]
    fn assistant_with_no_sources_normalizes_to_none() {
        let exchange = Exchange::assistant("answer", Vec::new());
        assert_eq!(exchange.sources, None);
        assert!(exchange.sources().is_empty());
    }

    #[test]
    fn fallback_turn_has_fixed_text_and_no_sources() {
        let exchange = Exchange::assistant_fallback();
        assert_eq!(exchange.role, ChatRole::Assistant);
        assert_eq!(exchange.content, QUERY_ERROR_FALLBACK);
        assert_eq!(exchange.sources, None);
    }

    #[test]
    fn chat_role_uses_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            r#""assistant""#
        );
    }
}
