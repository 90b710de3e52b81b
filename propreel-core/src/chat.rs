//! Chat Subsystem State
//!
//! A small state machine over three mutually exclusive views: the
//! conversation list, one open conversation, and the new-chat compose view.
//! Either detail view returns to the list; there is no direct transition
//! between the two detail views.

use tracing::{debug, info};

use crate::fixtures;
use crate::models::Conversation;

/// Which chat view is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatView {
    /// Conversation list (default)
    List,
    /// One open conversation, by id
    Conversation(String),
    /// New chat with the AI assistant
    ComposeNew,
}

/// State for the chat screen
#[derive(Debug, Clone)]
pub struct ChatState {
    conversations: Vec<Conversation>,
    view: ChatView,
    draft: String,
    compose_query: String,
}

impl ChatState {
    /// Fresh state from the bundled fixtures
    pub fn new() -> Self {
        Self::with_conversations(fixtures::conversations())
    }

    /// State over a caller-supplied conversation list
    pub fn with_conversations(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            view: ChatView::List,
            draft: String::new(),
            compose_query: String::new(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn compose_query(&self) -> &str {
        &self.compose_query
    }

    /// Look up a conversation by id
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Conversation backing the current detail view, if one is open
    pub fn active_conversation(&self) -> Option<&Conversation> {
        match &self.view {
            ChatView::Conversation(id) => self.conversation(id),
            _ => None,
        }
    }

    /// Total unread across all conversations, for the list badge
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    /// Open a conversation from the list
    ///
    /// Marks the whole thread read, clears the reply draft, and switches to
    /// the detail view. Unknown ids change nothing.
    pub fn open_conversation(&mut self, id: &str) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.mark_all_read();
            debug!(
                "Opened conversation {} with {}",
                conversation.id, conversation.agent_name
            );
            self.draft.clear();
            self.view = ChatView::Conversation(id.to_string());
        }
    }

    /// Return to the conversation list from either detail view
    pub fn back(&mut self) {
        self.view = ChatView::List;
        self.draft.clear();
    }

    /// Switch to the new-chat compose view
    pub fn start_compose(&mut self) {
        self.compose_query.clear();
        self.view = ChatView::ComposeNew;
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn set_compose_query(&mut self, query: String) {
        self.compose_query = query;
    }

    /// Send the reply draft
    ///
    /// Blank or whitespace-only drafts are ignored and left in place. A
    /// non-blank draft is cleared; delivery is stubbed, so nothing is
    /// appended to the thread.
    pub fn send_draft(&mut self) {
        if self.draft.trim().is_empty() {
            return;
        }
        info!("Sending message: {}", self.draft);
        self.draft.clear();
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
