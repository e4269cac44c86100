use serde::{Deserialize, Serialize};

/// Aggregate collection metrics, GET /stats.
///
/// A read-only projection of backend state: replaced wholesale on every
/// fetch, never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub total_documents: u64,

    pub collection_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
}

/// Response body for DELETE /clear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_model_is_optional() {
        let stats: StatsResponse =
            serde_json::from_str(r#"{"total_documents": 12, "collection_name": "documents"}"#)
                .unwrap();
        assert_eq!(stats.total_documents, 12);
        assert_eq!(stats.embedding_model, None);

        let stats: StatsResponse = serde_json::from_str(
            r#"{"total_documents": 0, "collection_name": "documents", "embedding_model": "all-MiniLM-L6-v2"}"#,
        )
        .unwrap();
        assert_eq!(stats.embedding_model.as_deref(), Some("all-MiniLM-L6-v2"));
    }
}
