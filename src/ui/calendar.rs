// Calendar screen: month grid, sidebar, and the event form when open.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::calendar::grid::{self, DayCell};
use crate::gesture::SwipeTracker;
use crate::messages::Message;
use crate::models::{Event, User};
use crate::state::CalendarState;
use crate::ui::{error_banner, event_form, event_list, event_type_color, palette, styles};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const UPCOMING_LIMIT: usize = 5;

pub fn view<'a>(
    user: &'a User,
    state: &'a CalendarState,
    gestures: &'a SwipeTracker,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let header = row![
        text("Our Calendar")
            .size(26)
            .style(iced::theme::Text::Color(palette::TEXT_MAIN))
            .width(Length::Fill),
        text(format!("Welcome, {}!", user.name))
            .size(14)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
        button("Logout")
            .padding([6, 14])
            .style(iced::theme::Button::Custom(Box::new(
                styles::SecondaryButtonStyle
            )))
            .on_press(Message::Logout),
    ]
    .spacing(15)
    .align_items(Alignment::Center);

    let mut page = column![header].spacing(20);

    if let Some(message) = &state.error {
        page = page.push(error_banner(message));
    }

    let content: Element<'a, Message> = if let Some(form) = &state.form {
        // The form replaces the month layout until it is submitted or
        // dismissed; the update loop refuses overlapping submissions.
        container(event_form::view(form, state.submitting))
            .width(Length::Fill)
            .center_x()
            .into()
    } else if state.loading && state.events.is_empty() {
        container(
            text("Loading calendar...")
                .size(18)
                .style(iced::theme::Text::Color(palette::TEXT_MUTED)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        row![
            month_view(state, today),
            sidebar(state, gestures, now),
        ]
        .spacing(20)
        .into()
    };
    page = page.push(content);

    container(scrollable(page.padding(25)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            styles::BackgroundStyle,
        )))
        .into()
}

fn month_view<'a>(state: &'a CalendarState, today: NaiveDate) -> Element<'a, Message> {
    let controls = row![
        button("< Previous")
            .padding([6, 14])
            .style(iced::theme::Button::Custom(Box::new(
                styles::SecondaryButtonStyle
            )))
            .on_press(Message::PrevMonth),
        text(state.month_cursor.format("%B %Y").to_string())
            .size(20)
            .style(iced::theme::Text::Color(palette::TEXT_MAIN))
            .width(Length::Fill)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
        button("Next >")
            .padding([6, 14])
            .style(iced::theme::Button::Custom(Box::new(
                styles::SecondaryButtonStyle
            )))
            .on_press(Message::NextMonth),
    ]
    .align_items(Alignment::Center);

    let weekday_header = Row::with_children(WEEKDAY_LABELS.iter().map(|label| {
        text(*label)
            .size(12)
            .style(iced::theme::Text::Color(palette::TEXT_MUTED))
            .width(Length::FillPortion(1))
            .horizontal_alignment(iced::alignment::Horizontal::Center)
            .into()
    }))
    .spacing(4);

    let cells = grid::build_month(state.month_cursor, today, &state.events);
    let mut weeks = Column::new().spacing(4);
    for week in cells.chunks(7) {
        let row_cells: Vec<Element<'a, Message>> = week.iter().map(day_cell).collect();
        weeks = weeks.push(Row::with_children(row_cells).spacing(4));
    }

    column![controls, weekday_header, weeks]
        .spacing(10)
        .width(Length::FillPortion(3))
        .into()
}

fn day_cell(cell: &DayCell) -> Element<'static, Message> {
    let number_color = if cell.in_month {
        palette::TEXT_MAIN
    } else {
        palette::TEXT_MUTED
    };

    let mut content = column![text(cell.date.day().to_string())
        .size(13)
        .style(iced::theme::Text::Color(number_color))]
    .spacing(3);

    for event in &cell.events {
        content = content.push(event_chip(event, cell.date));
    }

    mouse_area(
        container(content)
            .padding(6)
            .width(Length::FillPortion(1))
            .height(96)
            .style(iced::theme::Container::Custom(Box::new(
                styles::DayCellStyle {
                    in_month: cell.in_month,
                    is_today: cell.is_today,
                },
            ))),
    )
    .on_press(Message::DateClicked(cell.date))
    .into()
}

fn event_chip(event: &Event, day: NaiveDate) -> Element<'static, Message> {
    let span = grid::day_span(event, day);
    let mut label = event.title.clone();
    if span.multi_day && !span.starts_here {
        label = format!("… {}", label);
    }
    if span.multi_day && !span.ends_here {
        label = format!("{} …", label);
    }

    button(text(label).size(10))
        .padding([2, 4])
        .width(Length::Fill)
        .style(iced::theme::Button::Custom(Box::new(
            styles::EventChipStyle {
                color: event_type_color(event.event_type),
            },
        )))
        .on_press(Message::EventClicked(event.id))
        .into()
}

fn sidebar<'a>(
    state: &'a CalendarState,
    gestures: &'a SwipeTracker,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let quick_actions = column![
        crate::ui::section_header("Quick Actions"),
        button("Add New Event")
            .padding([10, 18])
            .width(Length::Fill)
            .style(iced::theme::Button::Custom(Box::new(
                styles::PrimaryButtonStyle
            )))
            .on_press(Message::NewEventRequested),
        button("Refresh")
            .padding([6, 14])
            .width(Length::Fill)
            .style(iced::theme::Button::Custom(Box::new(
                styles::SecondaryButtonStyle
            )))
            .on_press(Message::RefreshEvents),
    ]
    .spacing(10);

    let legend = column![
        crate::ui::section_header("Event Types"),
        legend_row(palette::WORK, "Work"),
        legend_row(palette::HOLIDAY, "Holiday"),
        legend_row(palette::OTHER, "Other"),
    ]
    .spacing(6);

    let upcoming = column![
        crate::ui::section_header("Upcoming Events"),
        event_list::view(&state.upcoming(now, UPCOMING_LIMIT), gestures, true),
    ]
    .spacing(10);

    container(
        column![quick_actions, legend, upcoming]
            .spacing(25)
            .padding(15),
    )
    .width(Length::FillPortion(1))
    .style(iced::theme::Container::Custom(Box::new(
        styles::SidebarStyle,
    )))
    .into()
}

fn legend_row(color: iced::Color, label: &str) -> Element<'_, Message> {
    row![
        container("").width(12).height(12).style(
            iced::theme::Container::Custom(Box::new(LegendSwatchStyle { color }))
        ),
        text(label)
            .size(12)
            .style(iced::theme::Text::Color(palette::TEXT_MAIN)),
    ]
    .spacing(8)
    .align_items(Alignment::Center)
    .into()
}

struct LegendSwatchStyle {
    color: iced::Color,
}
impl iced::widget::container::StyleSheet for LegendSwatchStyle {
    type Style = iced::Theme;
    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(self.color)),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
