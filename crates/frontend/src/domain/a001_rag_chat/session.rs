use contracts::domain::a001_rag_chat::aggregate::{Exchange, SourceRef};
use uuid::Uuid;

/// Append-only conversation log with a single-flight request flag.
///
/// The log alternates user and assistant turns: `begin_query` appends the
/// user turn and latches `pending`; exactly one of `resolve_success` /
/// `resolve_failure` appends the matching assistant turn and releases it.
/// With at most one query in flight, log order equals temporal order.
#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    exchanges: Vec<Exchange>,
    pending: bool,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// True while a query is in flight; further submissions are rejected
    /// until the outstanding one resolves
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Try to start a query
    ///
    /// Appends the user turn with the text exactly as submitted and latches
    /// the pending flag. Returns false, leaving the log untouched, while a
    /// query is already in flight or when the trimmed text is empty. The
    /// rejection happens here, not in the UI: disabled controls are
    /// advisory, this flag is the invariant.
    pub fn begin_query(&mut self, text: &str) -> bool {
        if self.pending || text.trim().is_empty() {
            return false;
        }
        self.exchanges.push(Exchange::user(text));
        self.pending = true;
        true
    }

    /// Append the assistant turn for the outstanding query. No-op unless a
    /// query is pending.
    pub fn resolve_success(&mut self, answer: String, sources: Vec<SourceRef>) {
        if !self.pending {
            return;
        }
        self.exchanges.push(Exchange::assistant(answer, sources));
        self.pending = false;
    }

    /// Append the synthetic assistant turn for a failed query. The failure
    /// stays inside the session: every user turn still gets its assistant
    /// turn and the caller sees an ordinary log.
    pub fn resolve_failure(&mut self) {
        if !self.pending {
            return;
        }
        self.exchanges.push(Exchange::assistant_fallback());
        self.pending = false;
    }

    /// Sources attributed to the given exchange, in backend relevance
    /// order. Empty for unknown ids, user turns and answers without
    /// attribution.
    pub fn sources_of(&self, id: Uuid) -> &[SourceRef] {
        self.exchanges
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.sources())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_rag_chat::aggregate::{
        ChatRole, SourceMetadata, QUERY_ERROR_FALLBACK,
    };

    fn source(id: i64, file: &str, page: u64, score: f64) -> SourceRef {
        SourceRef {
            id,
            content: format!("passage {}", id),
            metadata: SourceMetadata {
                source: Some(file.to_string()),
                page: Some(page),
                extra: Default::default(),
            },
            relevance_score: score,
        }
    }

    #[test]
    fn begin_query_appends_user_turn_and_latches() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("What is the refund policy?"));
        assert!(session.is_pending());
        assert_eq!(session.exchanges().len(), 1);
        assert_eq!(session.exchanges()[0].role, ChatRole::User);
    }

    #[test]
    fn raw_text_is_preserved_as_submitted() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("  spaced question  "));
        assert_eq!(session.exchanges()[0].content, "  spaced question  ");
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut session = ConversationSession::new();
        assert!(!session.begin_query(""));
        assert!(!session.begin_query("   \n\t"));
        assert!(session.is_empty());
        assert!(!session.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("first"));
        // rapid repeated submission must not append a second user turn
        assert!(!session.begin_query("second"));
        assert!(!session.begin_query("third"));
        assert_eq!(session.exchanges().len(), 1);
    }

    #[test]
    fn every_user_turn_gets_exactly_one_assistant_turn_in_order() {
        let mut session = ConversationSession::new();

        assert!(session.begin_query("one"));
        session.resolve_success("answer one".to_string(), vec![]);
        assert!(session.begin_query("two"));
        session.resolve_failure();
        assert!(session.begin_query("three"));
        session.resolve_success("answer three".to_string(), vec![source(1, "a.pdf", 1, 0.9)]);

        let log = session.exchanges();
        assert_eq!(log.len(), 6);
        for pair in log.chunks(2) {
            assert_eq!(pair[0].role, ChatRole::User);
            assert_eq!(pair[1].role, ChatRole::Assistant);
        }
        assert_eq!(log[0].content, "one");
        assert_eq!(log[2].content, "two");
        assert_eq!(log[4].content, "three");
    }

    #[test]
    fn failure_appends_fallback_turn_and_releases_pending() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("anything"));
        session.resolve_failure();

        assert!(!session.is_pending());
        let assistant = &session.exchanges()[1];
        assert_eq!(assistant.role, ChatRole::Assistant);
        assert_eq!(assistant.content, QUERY_ERROR_FALLBACK);
        assert!(assistant.sources().is_empty());
    }

    #[test]
    fn resolve_without_pending_is_a_no_op() {
        let mut session = ConversationSession::new();
        session.resolve_success("ghost".to_string(), vec![]);
        session.resolve_failure();
        assert!(session.is_empty());
    }

    #[test]
    fn sources_keep_backend_order() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("ordered?"));
        // deliberately not sorted by score
        let sources = vec![
            source(2, "b.pdf", 4, 0.61),
            source(1, "a.pdf", 1, 0.93),
            source(3, "c.txt", 9, 0.77),
        ];
        session.resolve_success("answer".to_string(), sources.clone());

        let answer_id = session.exchanges()[1].id;
        assert_eq!(session.sources_of(answer_id), sources.as_slice());
    }

    #[test]
    fn sources_of_user_turn_or_unknown_id_is_empty() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("q"));
        session.resolve_success("a".to_string(), vec![source(1, "a.pdf", 1, 0.5)]);

        let user_id = session.exchanges()[0].id;
        assert!(session.sources_of(user_id).is_empty());
        assert!(session.sources_of(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn refund_policy_scenario() {
        let mut session = ConversationSession::new();
        assert!(session.begin_query("What is the refund policy?"));
        session.resolve_success(
            "Refunds within 30 days.".to_string(),
            vec![source(1, "policy.pdf", 2, 0.87)],
        );

        assert_eq!(session.exchanges().len(), 2);
        let answer = &session.exchanges()[1];
        assert_eq!(answer.content, "Refunds within 30 days.");
        let sources = session.sources_of(answer.id);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].metadata.source.as_deref(), Some("policy.pdf"));
        assert_eq!(sources[0].metadata.page, Some(2));
        assert_eq!(format!("{:.0}%", sources[0].relevance_score * 100.0), "87%");
    }
}
