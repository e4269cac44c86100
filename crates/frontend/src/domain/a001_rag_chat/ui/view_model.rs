//! RAG Chat - View Model

use crate::domain::a001_rag_chat::session::ConversationSession;
use contracts::domain::a001_rag_chat::aggregate::SourceRef;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub session: RwSignal<ConversationSession>,
    pub input: RwSignal<String>,
    /// Answer whose sources the inspector panel is showing. Holds the
    /// exchange id, not a copy of the list: the sources always come from
    /// the log entry itself.
    pub selected_answer: RwSignal<Option<Uuid>>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ConversationSession::new()),
            input: RwSignal::new(String::new()),
            selected_answer: RwSignal::new(None),
        }
    }

    /// Sources of the currently inspected answer, in backend order
    pub fn selected_sources(&self) -> Vec<SourceRef> {
        match self.selected_answer.get() {
            Some(id) => self.session.with(|s| s.sources_of(id).to_vec()),
            None => Vec::new(),
        }
    }
}
