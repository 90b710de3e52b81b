mod messages;
mod views;

use cosmic::app::{Core, Settings, Task};
use cosmic::iced::widget::row;
use cosmic::iced::{Length, Subscription};
use cosmic::widget::{self, nav_bar};
use cosmic::{Application, Element};

use propreel_core::{ChatState, FeedState, ProfileState};

use messages::{Message, Tab};

fn main() -> cosmic::iced::Result {
    // Initialize logging with environment variable support
    // Set RUST_LOG=debug for verbose output, defaults to info level
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    fmt().with_env_filter(filter).compact().init();

    tracing::info!("PropReel client starting");

    cosmic::app::run::<PropReelApp>(Settings::default(), ())
}

/// Main application state
///
/// Holds the selected tab plus one state struct per screen. Screen state is
/// screen-local: switching tabs remounts the destination screen from the
/// fixtures, so uncommitted interactions do not survive leaving a screen.
struct PropReelApp {
    core: Core,
    nav_model: widget::segmented_button::SingleSelectModel,
    current_tab: Tab,
    feed: FeedState,
    profile: ProfileState,
    chat: ChatState,
}

impl Application for PropReelApp {
    type Executor = cosmic::executor::Default;
    type Flags = ();
    type Message = Message;
    const APP_ID: &'static str = "com.propreel.PropReel";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, _flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let mut nav_model = widget::segmented_button::ModelBuilder::default();
        for tab in Tab::ALL {
            nav_model = nav_model.insert(move |b| {
                b.text(tab.title())
                    .icon(widget::icon::from_name(tab.icon()))
                    .data(tab)
            });
        }
        let mut nav_model = nav_model.build();
        nav_model.activate_position(0);

        let app = Self {
            core,
            nav_model,
            current_tab: Tab::Props,
            feed: FeedState::new(),
            profile: ProfileState::new(),
            chat: ChatState::new(),
        };

        tracing::info!("PropReel client initialized");

        (app, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::TabSelected(entity) => {
                self.nav_model.activate(entity);
                // Entries without tab data fall back to the feed
                let tab = self
                    .nav_model
                    .data::<Tab>(entity)
                    .copied()
                    .unwrap_or(Tab::Props);
                self.switch_tab(tab);
            }
            Message::SetTab(tab) => {
                self.nav_model.activate_position(tab as u16);
                self.switch_tab(tab);
            }

            // Feed
            Message::ToggleLike(id) => self.feed.toggle_like(&id),
            Message::SetLikedFilter(liked_only) => self.feed.set_liked_filter(liked_only),
            Message::NextReel => {
                if self.current_tab == Tab::Props {
                    self.feed.advance();
                }
            }
            Message::PreviousReel => {
                if self.current_tab == Tab::Props {
                    self.feed.retreat();
                }
            }
            Message::ViewDetails(id) => {
                // Detail navigation is not wired up yet
                tracing::info!("View details requested for property {}", id);
            }

            // Profile
            Message::SelectSection(section) => self.profile.set_section(section),
            Message::SelectCategory(category) => self.profile.set_category(category),

            // Chat
            Message::OpenConversation(id) => self.chat.open_conversation(&id),
            Message::ChatBack => self.chat.back(),
            Message::StartNewChat => self.chat.start_compose(),
            Message::DraftChanged(draft) => self.chat.set_draft(draft),
            Message::SendDraft => self.chat.send_draft(),
            Message::ComposeQueryChanged(query) => self.chat.set_compose_query(query),
            Message::UseSuggestedQuery(query) => self.chat.set_compose_query(query),
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let nav = nav_bar(&self.nav_model, Message::TabSelected);

        let content = match self.current_tab {
            Tab::Props => self.feed_view(),
            Tab::Profile => self.profile_view(),
            Tab::Chat => self.chat_view(),
        };

        widget::container(row![nav, content].spacing(0).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::event;
        use cosmic::iced::keyboard::{self, key::Named, Key};

        event::listen_with(|event, _status, _id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                // Navigation shortcuts (Alt+1, Alt+2, Alt+3)
                if modifiers.alt() && !modifiers.control() && !modifiers.shift() {
                    return match key.as_ref() {
                        Key::Character("1") => Some(Message::SetTab(Tab::Props)),
                        Key::Character("2") => Some(Message::SetTab(Tab::Profile)),
                        Key::Character("3") => Some(Message::SetTab(Tab::Chat)),
                        _ => None,
                    };
                }

                // Feed paging
                if modifiers.is_empty() {
                    return match key.as_ref() {
                        Key::Named(Named::ArrowUp) => Some(Message::PreviousReel),
                        Key::Named(Named::ArrowDown) => Some(Message::NextReel),
                        _ => None,
                    };
                }

                None
            }
            _ => None,
        })
    }
}

impl PropReelApp {
    /// Switch top-level tabs, remounting the destination screen
    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.current_tab {
            return;
        }

        // Rebuild the destination from fixtures; a half-typed draft or a
        // toggled like on the screen being left does not carry over
        match tab {
            Tab::Props => self.feed = FeedState::new(),
            Tab::Profile => self.profile = ProfileState::new(),
            Tab::Chat => self.chat = ChatState::new(),
        }
        self.current_tab = tab;
        tracing::debug!("Switched to {} tab", tab.title());
    }
}
