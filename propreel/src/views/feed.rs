use cosmic::{
    iced::{
        widget::{column, row},
        Alignment, Length,
    },
    theme,
    widget::{self, button, container, divider, icon, text},
    Element,
};

use propreel_core::Reel;

use crate::messages::Message;
use crate::views::format_baths;
use crate::PropReelApp;

impl PropReelApp {
    /// Reel browsing view, one full-screen property at a time
    pub fn feed_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let all_button = if self.feed.liked_only() {
            button::text("All")
        } else {
            button::suggested("All")
        };
        let liked_button = if self.feed.liked_only() {
            button::suggested("Liked")
        } else {
            button::text("Liked")
        };

        let header = row![
            text::title3("Discover").width(Length::Fill),
            all_button.on_press(Message::SetLikedFilter(false)),
            liked_button.on_press(Message::SetLikedFilter(true)),
        ]
        .spacing(spacing.space_xs)
        .align_y(Alignment::Center)
        .padding(spacing.space_s);

        let content: Element<'_, Message> = match self.feed.active_reel() {
            Some(reel) => self.reel_view(reel),
            None => container(
                column![
                    icon::from_name("emblem-favorite-symbolic").size(48),
                    text::body("No liked properties yet"),
                    button::suggested("Explore Properties")
                        .on_press(Message::SetLikedFilter(false)),
                ]
                .spacing(spacing.space_xs)
                .align_x(Alignment::Center),
            )
            .center(Length::Fill)
            .into(),
        };

        let count = self.feed.visible_count();
        let index = self.feed.active_index();

        let mut prev_button =
            button::icon(icon::from_name("go-up-symbolic").size(16)).padding(spacing.space_xxs);
        if index > 0 {
            prev_button = prev_button.on_press(Message::PreviousReel);
        }
        let mut next_button =
            button::icon(icon::from_name("go-down-symbolic").size(16)).padding(spacing.space_xxs);
        if count > 0 && index + 1 < count {
            next_button = next_button.on_press(Message::NextReel);
        }

        let position = if count == 0 {
            "0 of 0".to_string()
        } else {
            format!("{} of {}", index + 1, count)
        };
        let pager = row![prev_button, text::caption(position), next_button]
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        column![
            header,
            divider::horizontal::default(),
            content,
            container(pager).width(Length::Fill).align_x(Alignment::Center),
        ]
        .spacing(spacing.space_xxs)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Full display for the reel in the viewport
    fn reel_view<'a>(&'a self, reel: &'a Reel) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut owner_row = row![
            icon::from_name("avatar-default-symbolic").size(32),
            column![
                text::body(&reel.owner.name),
                text::caption("Real Estate Agent"),
            ]
            .spacing(spacing.space_xxxs),
        ]
        .spacing(spacing.space_xs)
        .align_y(Alignment::Center);
        if reel.owner.is_verified {
            owner_row = owner_row.push(icon::from_name("emblem-ok-symbolic").size(16));
        }

        let location_row = row![
            icon::from_name("find-location-symbolic").size(16),
            text::caption(&reel.property.location),
        ]
        .spacing(spacing.space_xxs)
        .align_y(Alignment::Center);

        let specs = row![
            text::caption(format!("{} beds", reel.property.bedrooms)),
            text::caption(format!("{} baths", format_baths(reel.property.bathrooms))),
            text::caption(&reel.property.area),
        ]
        .spacing(spacing.space_m);

        let like_icon = if reel.is_liked {
            "starred-symbolic"
        } else {
            "non-starred-symbolic"
        };
        let actions = row![
            button::icon(icon::from_name(like_icon).size(24))
                .on_press(Message::ToggleLike(reel.id.clone()))
                .padding(spacing.space_xxs),
            text::body(reel.likes.to_string()),
            widget::horizontal_space(),
            widget::tooltip(
                button::icon(icon::from_name("dialog-information-symbolic").size(24))
                    .padding(spacing.space_xxs),
                "AI Assistant",
                widget::tooltip::Position::Top,
            ),
            widget::tooltip(
                button::icon(icon::from_name("emblem-shared-symbolic").size(24))
                    .padding(spacing.space_xxs),
                "Share",
                widget::tooltip::Position::Top,
            ),
        ]
        .spacing(spacing.space_xs)
        .align_y(Alignment::Center);

        let details = column![
            owner_row,
            text::title2(&reel.property.title),
            text::title4(&reel.property.price),
            location_row,
            text::body(&reel.property.description),
            specs,
            button::standard("View Full Details")
                .on_press(Message::ViewDetails(reel.id.clone()))
                .width(Length::Fill),
            actions,
        ]
        .spacing(spacing.space_xs);

        container(details.padding(spacing.space_s))
            .class(theme::Container::Card)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
