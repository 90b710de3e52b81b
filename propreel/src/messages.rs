use cosmic::widget::segmented_button;

use propreel_core::{CategoryFilter, ProfileSection};

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Props,
    Profile,
    Chat,
}

impl Tab {
    /// Tabs in navigation order; the feed comes first and is the default
    pub const ALL: [Tab; 3] = [Tab::Props, Tab::Profile, Tab::Chat];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Props => "Discover",
            Tab::Profile => "Profile",
            Tab::Chat => "Chats",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Props => "media-playback-start-symbolic",
            Tab::Profile => "avatar-default-symbolic",
            Tab::Chat => "chat-symbolic",
        }
    }
}

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    TabSelected(segmented_button::Entity),
    SetTab(Tab), // Direct tab navigation (for keyboard shortcuts)

    // Feed
    ToggleLike(String),
    SetLikedFilter(bool),
    NextReel,
    PreviousReel,
    ViewDetails(String), // property id; detail navigation is stubbed

    // Profile
    SelectSection(ProfileSection),
    SelectCategory(CategoryFilter),

    // Chat
    OpenConversation(String),
    ChatBack,
    StartNewChat,
    DraftChanged(String),
    SendDraft,
    ComposeQueryChanged(String),
    UseSuggestedQuery(String),
}
