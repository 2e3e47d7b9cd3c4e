// Event list rows with the swipe/long-press delete interaction.

use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

use crate::gesture::{ItemStage, SwipeTracker};
use crate::messages::Message;
use crate::models::Event;
use crate::ui::{event_type_color, owner_badge, palette, styles};

pub fn view<'a>(
    events: &[&'a Event],
    gestures: &SwipeTracker,
    compact: bool,
) -> Element<'a, Message> {
    if events.is_empty() {
        return container(
            text("No events found")
                .size(14)
                .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
        )
        .padding(10)
        .into();
    }

    let rows: Vec<Element<'a, Message>> = events
        .iter()
        .copied()
        .map(|event| item(event, gestures.stage_of(event.id), compact))
        .collect();

    column(rows).spacing(10).into()
}

fn item<'a>(event: &'a Event, stage: ItemStage, compact: bool) -> Element<'a, Message> {
    let body: Element<'a, Message> = match stage {
        ItemStage::Normal => details(event, compact),
        ItemStage::Swiped => actions(event, false),
        ItemStage::ConfirmArmed => actions(event, true),
    };

    // Press begins the gesture; movement and release arrive through the
    // global pointer subscription.
    mouse_area(
        container(body)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(styles::CardStyle))),
    )
    .on_press(Message::ItemPressed(event.id))
    .into()
}

fn details<'a>(event: &'a Event, compact: bool) -> Element<'a, Message> {
    let local_start = event.start_date.with_timezone(&chrono::Local);
    let local_end = event.end_date.with_timezone(&chrono::Local);

    let header = row![
        container("")
            .width(4)
            .height(34)
            .style(chip_strip(event)),
        column![
            text(&event.title)
                .size(15)
                .style(iced::theme::Text::Color(palette::TEXT_MAIN)),
            text(format!(
                "{}  {} - {}",
                local_start.format("%b %d, %Y"),
                local_start.format("%H:%M"),
                local_end.format("%H:%M"),
            ))
            .size(12)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
        ]
        .spacing(2),
        iced::widget::horizontal_space(),
        owner_badge(event),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let mut content = column![header].spacing(6);
    if !compact {
        if let Some(description) = &event.description {
            content = content.push(
                text(description)
                    .size(12)
                    .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
            );
        }
    }
    content.into()
}

fn actions<'a>(event: &'a Event, confirm: bool) -> Element<'a, Message> {
    let mut content = column![].spacing(8);
    if confirm {
        content = content.push(
            text(format!("Delete \"{}\"?", event.title))
                .size(13)
                .style(iced::theme::Text::Color(palette::TEXT_MAIN)),
        );
    }
    content
        .push(
            row![
                button("Delete")
                    .padding([6, 14])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::DestructiveButtonStyle
                    )))
                    .on_press(Message::DeleteConfirmed(event.id)),
                button("Cancel")
                    .padding([6, 14])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::SecondaryButtonStyle
                    )))
                    .on_press(Message::DeleteDismissed),
            ]
            .spacing(10),
        )
        .into()
}

fn chip_strip(event: &Event) -> iced::theme::Container {
    let color = event_type_color(event.event_type);
    iced::theme::Container::Custom(Box::new(StripStyle { color }))
}

struct StripStyle {
    color: iced::Color,
}
impl iced::widget::container::StyleSheet for StripStyle {
    type Style = iced::Theme;
    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(self.color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
