// The create/edit event dialog.

use iced::widget::{button, checkbox, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::form::{EventForm, FormField, FormMode};
use crate::messages::Message;
use crate::models::EventType;
use crate::ui::{palette, styles};

pub fn view<'a>(form: &'a EventForm, submitting: bool) -> Element<'a, Message> {
    let heading = text(if form.is_edit() {
        "Edit Event"
    } else {
        "Add New Event"
    })
    .size(24)
    .style(iced::theme::Text::Color(palette::TEXT_MAIN));

    let title_field = labeled_input(
        "Event Title *",
        "Enter event title",
        &form.title,
        Message::TitleChanged,
        form.error(FormField::Title),
    );

    let description_field = labeled_input(
        "Description",
        "Enter event description (optional)",
        &form.description,
        Message::DescriptionChanged,
        None,
    );

    let type_field = column![
        field_label("Event Type *"),
        pick_list(
            &EventType::ALL[..],
            Some(form.event_type),
            Message::EventTypeSelected,
        )
        .padding(10)
        .width(Length::Fill),
    ]
    .spacing(5);

    let shared_field = checkbox("This event applies to us", form.applies_to_both)
        .on_toggle(Message::AppliesToBothToggled);

    let start_row = row![
        labeled_input(
            "Start Date *",
            "YYYY-MM-DD",
            &form.start_date,
            Message::StartDateChanged,
            form.error(FormField::StartDate),
        ),
        labeled_input(
            "Start Time *",
            "HH:mm",
            &form.start_time,
            Message::StartTimeChanged,
            form.error(FormField::StartTime),
        ),
    ]
    .spacing(15);

    let end_row = row![
        labeled_input(
            "End Date *",
            "YYYY-MM-DD",
            &form.end_date,
            Message::EndDateChanged,
            form.error(FormField::EndDate),
        ),
        labeled_input(
            "End Time *",
            "HH:mm",
            &form.end_time,
            Message::EndTimeChanged,
            form.error(FormField::EndTime),
        ),
    ]
    .spacing(15);

    let mut actions = row![button("Cancel")
        .padding([10, 20])
        .style(iced::theme::Button::Custom(Box::new(
            styles::SecondaryButtonStyle
        )))
        .on_press(Message::FormDismissed)]
    .spacing(10)
    .align_items(Alignment::Center);

    if let FormMode::Edit(id) = form.mode {
        actions = actions.push(
            button("Delete")
                .padding([10, 20])
                .style(iced::theme::Button::Custom(Box::new(
                    styles::DestructiveButtonStyle,
                )))
                .on_press(Message::DeleteConfirmed(id)),
        );
    }

    let submit_label = match (form.is_edit(), submitting) {
        (_, true) => "Saving...",
        (true, false) => "Update Event",
        (false, false) => "Create Event",
    };
    let mut submit = button(submit_label)
        .padding([10, 20])
        .style(iced::theme::Button::Custom(Box::new(
            styles::PrimaryButtonStyle,
        )));
    if !submitting {
        submit = submit.on_press(Message::FormSubmitted);
    }
    actions = actions.push(submit);

    container(
        column![
            heading,
            title_field,
            description_field,
            type_field,
            shared_field,
            start_row,
            end_row,
            actions,
        ]
        .spacing(15),
    )
    .padding(25)
    .max_width(520)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)))
    .into()
}

fn field_label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(12)
        .style(iced::theme::Text::Color(palette::TEXT_MUTED))
        .into()
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut field = column![
        field_label(label),
        text_input(placeholder, value).padding(10).on_input(on_input),
    ]
    .spacing(5)
    .width(Length::Fill);

    if let Some(message) = error {
        field = field.push(
            text(message)
                .size(12)
                .style(iced::theme::Text::Color(palette::DANGER)),
        );
    }

    field.into()
}
