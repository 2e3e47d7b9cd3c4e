// Shared view helpers and the color palette; each screen has its own module.

use iced::widget::{container, text};
use iced::{Background, Border, Color, Element};

use crate::messages::Message;
use crate::models::{Event, EventType};

pub mod calendar;
pub mod event_form;
pub mod event_list;
pub mod landing;
pub mod styles;

pub mod palette {
    use iced::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.98, 0.97, 0.95); // Warm Sand
    pub const SURFACE: Color = Color::from_rgb(0.949, 0.937, 0.914);
    pub const TEXT_MAIN: Color = Color::from_rgb(0.2, 0.2, 0.2); // Soft Charcoal
    pub const TEXT_MUTED: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const ACCENT: Color = Color::from_rgb(0.45, 0.55, 0.50); // Sage Green
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.35, 0.45, 0.40);
    pub const DANGER: Color = Color::from_rgb(0.8, 0.4, 0.4); // Muted Red

    // Event type chips
    pub const WORK: Color = Color::from_rgb(0.36, 0.54, 0.73);
    pub const HOLIDAY: Color = Color::from_rgb(0.45, 0.65, 0.45);
    pub const OTHER: Color = Color::from_rgb(0.78, 0.62, 0.37);
}

pub fn event_type_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Work => palette::WORK,
        EventType::Holiday => palette::HOLIDAY,
        EventType::Other => palette::OTHER,
    }
}

pub fn section_header(label: &str) -> Element<'_, Message> {
    text(label)
        .size(16)
        .style(iced::theme::Text::Color(palette::ACCENT))
        .into()
}

pub fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14))
        .padding([8, 14])
        .width(iced::Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            styles::ErrorBannerStyle,
        )))
        .into()
}

/// Small colored badge with an owner initial; shared events show "Us".
pub fn owner_badge(event: &Event) -> Element<'_, Message> {
    let label = if event.is_shared() {
        "Us".to_string()
    } else {
        event
            .user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    };

    container(
        text(label)
            .size(10)
            .style(iced::theme::Text::Color(Color::WHITE)),
    )
    .padding([2, 6])
    .style(iced::theme::Container::Custom(Box::new(BadgeStyle)))
    .into()
}

struct BadgeStyle;
impl iced::widget::container::StyleSheet for BadgeStyle {
    type Style = iced::Theme;
    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(Background::Color(palette::ACCENT)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
