use cosmic::{
    iced::{
        widget::{column, row},
        Alignment, Length,
    },
    theme,
    widget::{self, button, container, icon, text},
    Element,
};

use propreel_core::{CategoryFilter, Listing, ProfileSection};

use crate::messages::Message;
use crate::views::format_baths;
use crate::PropReelApp;

impl PropReelApp {
    /// Listing browser view with section tabs and category chips
    pub fn profile_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut content_col = column![
            self.profile_header(),
            self.profile_stats(),
            self.section_tabs(),
            self.category_chips(),
        ]
        .spacing(spacing.space_s);

        // Featured spotlight only accompanies the agent's own listings
        if self.profile.section() == ProfileSection::Listings {
            let featured = self.profile.featured_listings();
            if !featured.is_empty() {
                content_col = content_col.push(text::title4("Featured Properties"));
                let mut featured_row = row![].spacing(spacing.space_xs);
                for listing in featured {
                    featured_row = featured_row.push(self.listing_card(listing, true));
                }
                content_col = content_col.push(featured_row);
            }
        }

        let visible = self.profile.visible_listings();
        if visible.is_empty() {
            content_col = content_col.push(
                container(
                    column![
                        text::body("No properties found"),
                        text::caption("There are no properties matching your current selection."),
                    ]
                    .spacing(spacing.space_xxxs)
                    .align_x(Alignment::Center),
                )
                .width(Length::Fill)
                .padding(spacing.space_xxl)
                .align_x(Alignment::Center),
            );
        } else {
            for listing in visible {
                content_col = content_col.push(self.listing_card(listing, false));
            }
        }

        widget::scrollable(content_col.padding(spacing.space_l))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Header card with the agent's identity
    fn profile_header(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let agent = self.profile.agent();

        let name_row = row![
            text::title2(&agent.name),
            button::text("get verified"),
        ]
        .spacing(spacing.space_xs)
        .align_y(Alignment::Center);

        let identity = row![
            icon::from_name("avatar-default-symbolic").size(64),
            column![name_row, text::caption(&agent.tagline)].spacing(spacing.space_xxxs),
        ]
        .spacing(spacing.space_s)
        .align_y(Alignment::Center);

        // Follow and Message are display-only affordances for now
        let contact_row = row![
            button::suggested("Follow"),
            button::standard("Message"),
        ]
        .spacing(spacing.space_xs);

        container(
            column![identity, contact_row]
                .spacing(spacing.space_s)
                .padding(spacing.space_s),
        )
        .class(theme::Container::Card)
        .width(Length::Fill)
        .into()
    }

    /// Stat tiles under the header
    fn profile_stats(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let agent = self.profile.agent();

        row![
            stat_card(
                "go-home-symbolic",
                agent.properties_sold.to_string(),
                "Properties Sold",
            ),
            stat_card("view-grid-symbolic", agent.available.to_string(), "Available"),
            stat_card("starred-symbolic", format!("{:.1}", agent.rating), "Rating"),
        ]
        .spacing(spacing.space_xs)
        .into()
    }

    /// Section tab row (listings, saved, sold)
    fn section_tabs(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut tabs = row![].spacing(spacing.space_xs);
        for section in ProfileSection::ALL {
            let label = section.title();
            let tab = if section == self.profile.section() {
                button::suggested(label)
            } else {
                button::text(label)
            };
            tabs = tabs.push(tab.on_press(Message::SelectSection(section)));
        }
        tabs.into()
    }

    /// Category chip row over the active section
    fn category_chips(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut chips = row![].spacing(spacing.space_xxs);
        for chip in CategoryFilter::CHIPS {
            let label = chip.display_name();
            let button = if chip == self.profile.category() {
                button::suggested(label)
            } else {
                button::text(label)
            };
            chips = chips.push(button.on_press(Message::SelectCategory(chip)));
        }
        chips.into()
    }

    /// Card for one listing; compact cards feed the spotlight carousel
    fn listing_card<'a>(&self, listing: &'a Listing, compact: bool) -> Element<'a, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut title_row = row![text::title4(&listing.title).width(Length::Fill)]
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center);
        if listing.featured {
            title_row = title_row.push(text::caption("Featured"));
        }
        title_row = title_row.push(text::body(&listing.price));

        let location_row = row![
            icon::from_name("find-location-symbolic").size(14),
            text::caption(&listing.location),
        ]
        .spacing(spacing.space_xxs)
        .align_y(Alignment::Center);

        let specs = row![
            text::caption(format!("{} beds", listing.bedrooms)),
            text::caption(format!("{} baths", format_baths(listing.bathrooms))),
            text::caption(&listing.area),
        ]
        .spacing(spacing.space_m);

        let card = column![title_row, location_row, specs].spacing(spacing.space_xxs);

        container(card.padding(spacing.space_s))
            .class(theme::Container::Card)
            .width(if compact {
                Length::Fixed(260.0)
            } else {
                Length::Fill
            })
            .into()
    }
}

/// Single stat tile
fn stat_card<'a>(icon_name: &'static str, value: String, label: &'static str) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    container(
        column![
            icon::from_name(icon_name).size(24),
            text::title4(value),
            text::caption(label),
        ]
        .spacing(spacing.space_xxxs)
        .align_x(Alignment::Center)
        .padding(spacing.space_s),
    )
    .class(theme::Container::Card)
    .width(Length::Fill)
    .into()
}
