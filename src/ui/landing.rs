// Landing screen: pick which of the two users you are.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::User;
use crate::ui::{error_banner, palette, styles};

pub fn view<'a>(users: &'a [User], loading: bool, error: Option<&'a str>) -> Element<'a, Message> {
    let header = column![
        text("Our Calendar")
            .size(36)
            .style(iced::theme::Text::Color(palette::TEXT_MAIN)),
        text("Who's checking in?")
            .size(16)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let body: Element<'a, Message> = if loading {
        text("Loading...")
            .size(18)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED))
            .into()
    } else {
        let cards: Vec<Element<'a, Message>> = users.iter().map(user_card).collect();
        row(cards).spacing(30).into()
    };

    let mut content = column![header].spacing(40).align_items(Alignment::Center);
    if let Some(message) = error {
        content = content.push(error_banner(message));
    }
    content = content.push(body);
    content = content.push(
        text("Our shared calendar")
            .size(12)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(
            styles::BackgroundStyle,
        )))
        .into()
}

fn user_card(user: &User) -> Element<'_, Message> {
    let avatar = container(
        text(user.initial())
            .size(28)
            .style(iced::theme::Text::Color(iced::Color::WHITE)),
    )
    .padding([14, 22])
    .style(iced::theme::Container::Custom(Box::new(AvatarStyle)));

    button(
        column![
            avatar,
            text(&user.name)
                .size(20)
                .style(iced::theme::Text::Color(palette::TEXT_MAIN)),
            text(format!("Continue as {}", user.name))
                .size(12)
                .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    )
    .padding(30)
    .style(iced::theme::Button::Custom(Box::new(styles::UserCardStyle)))
    .on_press(Message::UserSelected(user.clone()))
    .into()
}

struct AvatarStyle;
impl iced::widget::container::StyleSheet for AvatarStyle {
    type Style = iced::Theme;
    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(palette::ACCENT)),
            border: iced::Border {
                radius: 30.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
