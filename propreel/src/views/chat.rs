use cosmic::{
    iced::{
        widget::{column, row, scrollable},
        Alignment, Length,
    },
    theme,
    widget::{self, button, container, divider, icon, text},
    Element,
};

use propreel_core::{current_timestamp_ms, fixtures, ChatMessage, ChatView, Conversation};

use crate::messages::Message;
use crate::PropReelApp;

impl PropReelApp {
    /// Chat screen view, dispatching on the chat state machine
    pub fn chat_view(&self) -> Element<'_, Message> {
        match self.chat.view() {
            ChatView::Conversation(_) => match self.chat.active_conversation() {
                Some(conversation) => self.conversation_view(conversation),
                // Stale id: fall back to the list
                None => self.chat_list_view(),
            },
            ChatView::ComposeNew => self.compose_view(),
            ChatView::List => self.chat_list_view(),
        }
    }

    /// Conversation list view, showing all threads
    fn chat_list_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let header = row![
            text::title3("Chats").width(Length::Fill),
            widget::tooltip(
                button::icon(icon::from_name("list-add-symbolic").size(16))
                    .on_press(Message::StartNewChat)
                    .padding(spacing.space_xxs),
                "New chat",
                widget::tooltip::Position::Bottom,
            )
        ]
        .align_y(Alignment::Center);

        let total_unread = self.chat.total_unread();
        let all_label = if total_unread > 0 {
            format!("All ({})", total_unread)
        } else {
            "All".to_string()
        };
        // Agents and Properties chips are display-only for now
        let filters = row![
            button::suggested(all_label),
            button::text("Agents"),
            button::text("Properties"),
        ]
        .spacing(spacing.space_xxs);

        let list: Element<'_, Message> = if self.chat.conversations().is_empty() {
            container(
                column![
                    text::body("No conversations yet"),
                    text::caption(
                        "Start a new conversation with our AI assistant or property agents"
                    ),
                    button::suggested("Start New Chat").on_press(Message::StartNewChat),
                ]
                .spacing(spacing.space_xxs)
                .align_x(Alignment::Center),
            )
            .center(Length::Fill)
            .padding(spacing.space_xs)
            .into()
        } else {
            let mut items = column![].spacing(spacing.space_xxxs);
            for conversation in self.chat.conversations() {
                items = items.push(self.conversation_row(conversation));
            }
            scrollable(items).height(Length::Fill).into()
        };

        let content = column![header, filters, divider::horizontal::default(), list]
            .spacing(spacing.space_xxs);

        container(content).padding(spacing.space_xs).into()
    }

    /// One row in the conversation list
    fn conversation_row<'a>(&'a self, conversation: &'a Conversation) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let unread_badge = if conversation.unread_count > 0 {
            format!(" ({})", conversation.unread_count)
        } else {
            String::new()
        };
        let time_str = format!(
            "{}{}",
            format_timestamp(conversation.last_active),
            unread_badge
        );
        let preview: String = conversation
            .last_message()
            .map(|m| m.text.chars().take(40).collect())
            .unwrap_or_default();

        let mut name_row = row![text::body(&conversation.agent_name)]
            .spacing(spacing.space_xxxs)
            .align_y(Alignment::Center);
        if conversation.is_verified {
            name_row = name_row.push(icon::from_name("emblem-ok-symbolic").size(12));
        }
        name_row = name_row.push(widget::horizontal_space());
        name_row = name_row.push(text::caption(time_str));

        button::custom(
            column![
                name_row,
                text::caption(&conversation.property_title),
                text::caption(preview),
            ]
            .spacing(spacing.space_xxxs),
        )
        .on_press(Message::OpenConversation(conversation.id.clone()))
        .width(Length::Fill)
        .padding(spacing.space_xxxs)
        .into()
    }

    /// Detail view for one open conversation
    fn conversation_view<'a>(&'a self, conversation: &'a Conversation) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut title_row = row![text::body(&conversation.agent_name)]
            .spacing(spacing.space_xxxs)
            .align_y(Alignment::Center);
        if conversation.is_verified {
            title_row = title_row.push(icon::from_name("emblem-ok-symbolic").size(12));
        }

        let header = row![
            button::icon(icon::from_name("go-previous-symbolic").size(16))
                .on_press(Message::ChatBack)
                .padding(spacing.space_xxxs),
            icon::from_name("avatar-default-symbolic").size(32),
            column![title_row, text::caption(&conversation.property_title)]
                .spacing(spacing.space_xxxs),
        ]
        .spacing(spacing.space_xxs)
        .align_y(Alignment::Center);

        let mut thread = column![].spacing(spacing.space_xxs);
        let last_index = conversation.messages.len().saturating_sub(1);
        for (i, message) in conversation.messages.iter().enumerate() {
            thread = thread.push(message_bubble(message, i == last_index));
        }
        let messages = scrollable(thread).height(Length::Fill);

        let property_card = button::custom(
            row![
                icon::from_name("image-x-generic-symbolic").size(32),
                column![
                    text::body(&conversation.property_title),
                    text::caption("View Details"),
                ]
                .spacing(spacing.space_xxxs),
            ]
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center),
        )
        .on_press(Message::ViewDetails(conversation.property_id.clone()))
        .width(Length::Fill)
        .padding(spacing.space_xxs);

        // Reply row; the send button stays inert until the draft has content
        let mut send_button =
            button::icon(icon::from_name("mail-send-symbolic").size(16)).padding(spacing.space_xxxs);
        if !self.chat.draft().is_empty() {
            send_button = send_button.on_press(Message::SendDraft);
        }

        let reply_row = row![
            widget::text_input("Type a message...", self.chat.draft())
                .on_input(Message::DraftChanged)
                .width(Length::Fill),
            send_button,
        ]
        .spacing(spacing.space_xxxs)
        .align_y(Alignment::Center);

        let content = column![
            header,
            divider::horizontal::default(),
            messages,
            property_card,
            divider::horizontal::default(),
            reply_row,
        ]
        .spacing(spacing.space_xxs);

        container(content)
            .class(theme::Container::Card)
            .padding(spacing.space_xs)
            .into()
    }

    /// New chat view with the AI assistant
    fn compose_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let header = row![
            button::icon(icon::from_name("go-previous-symbolic").size(16))
                .on_press(Message::ChatBack)
                .padding(spacing.space_xxxs),
            text::title4("PropertyHelper AI"),
        ]
        .spacing(spacing.space_xxs)
        .align_y(Alignment::Center);

        let welcome = container(
            column![
                text::title4("AI Property Assistant"),
                text::body(
                    "Hello! I'm your PropertyHelper AI assistant. I can help you search for \
                     properties, answer questions about Dubai real estate, and guide you through \
                     the buying or renting process. What would you like to know?"
                ),
                text::caption("I can help with:"),
                text::caption("• Finding properties that match your criteria"),
                text::caption("• Explaining Dubai neighborhoods and areas"),
                text::caption("• Providing market insights and price trends"),
                text::caption("• Explaining legal procedures and requirements"),
                text::caption("• Calculating mortgage payments and costs"),
            ]
            .spacing(spacing.space_xxxs)
            .padding(spacing.space_s),
        )
        .class(theme::Container::Card)
        .width(Length::Fill);

        let mut suggestions = column![text::title4("Try asking")].spacing(spacing.space_xxs);
        for query in fixtures::suggested_queries() {
            suggestions = suggestions.push(
                button::custom(text::body(*query))
                    .on_press(Message::UseSuggestedQuery((*query).to_string()))
                    .width(Length::Fill)
                    .padding(spacing.space_xxs),
            );
        }

        // The assistant backend is not wired up; the send affordance stays inert
        let input_row = row![
            widget::text_input("Ask me about property in Dubai...", self.chat.compose_query())
                .on_input(Message::ComposeQueryChanged)
                .width(Length::Fill),
            button::icon(icon::from_name("mail-send-symbolic").size(16))
                .padding(spacing.space_xxxs),
        ]
        .spacing(spacing.space_xxxs)
        .align_y(Alignment::Center);

        let content = column![
            header,
            divider::horizontal::default(),
            scrollable(column![welcome, suggestions].spacing(spacing.space_xs))
                .height(Length::Fill),
            divider::horizontal::default(),
            input_row,
        ]
        .spacing(spacing.space_xxs);

        container(content).padding(spacing.space_xs).into()
    }
}

/// Bubble for one message; read receipts follow the last user message
fn message_bubble(message: &ChatMessage, is_last: bool) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut meta = row![text::caption(format_timestamp(message.timestamp))]
        .spacing(spacing.space_xxxs)
        .align_y(Alignment::Center);
    if message.sender.is_user() && is_last {
        meta = meta.push(text::caption(if message.read { "Read" } else { "Sent" }));
    }

    let bubble = container(
        column![text::body(&message.text), meta].spacing(spacing.space_xxxs),
    )
    .class(theme::Container::Card)
    .padding(spacing.space_xxs)
    .max_width(420.0);

    if message.sender.is_user() {
        row![widget::horizontal_space(), bubble].into()
    } else {
        row![bubble, widget::horizontal_space()].into()
    }
}

/// Format a timestamp (ms since epoch) into a short relative display string
fn format_timestamp(timestamp_ms: i64) -> String {
    let diff_secs = (current_timestamp_ms() - timestamp_ms) / 1000;

    if diff_secs < 60 {
        "now".to_string()
    } else if diff_secs < 3600 {
        format!("{}m", diff_secs / 60)
    } else if diff_secs < 86400 {
        format!("{}h", diff_secs / 3600)
    } else {
        format!("{}d", diff_secs / 86400)
    }
}
