use crate::gui::state::ActivityRecord;
use crate::gui::{LearnAbleApp, Message};
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

pub fn view(app: &LearnAbleApp) -> Element<'_, Message> {
    let header = column![
        text("✋").size(64),
        text(&app.welcome_text).size(40),
        text("Your companion for accessibility learning")
            .size(18)
            .style(text::secondary),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let quick_actions = row![
        quick_action("💬", "Text to Speech", Message::SpeakWelcome),
        quick_action("🎤", "Listen", Message::ToggleListening),
        quick_action("📄", "Learn Braille", Message::None),
        quick_action("📚", "Tutorials", Message::None),
    ]
    .spacing(15);

    let mut cards = Column::new().spacing(10);
    for record in &app.activities {
        cards = cards.push(activity_card(record));
    }

    let assistant_btn = if app.controller.is_listening() {
        button(text("〰️ Listening..."))
            .width(Length::Fill)
            .padding(15)
            .style(button::danger)
            .on_press(Message::ToggleListening)
    } else {
        button(text("🎙️ Voice Assistant"))
            .width(Length::Fill)
            .padding(15)
            .style(button::primary)
            .on_press(Message::ToggleListening)
    };

    let content = column![
        header,
        Space::with_height(10),
        text(&app.status).size(20),
        Space::with_height(10),
        text("Quick Actions").size(24),
        quick_actions,
        Space::with_height(10),
        text("Recent Activities").size(24),
        cards,
        Space::with_height(10),
        assistant_btn,
    ]
    .spacing(12)
    .padding(10);

    scrollable(content).height(Length::Fill).into()
}

fn quick_action(icon: &'static str, title: &'static str, action: Message) -> Element<'static, Message> {
    button(
        column![text(icon).size(28), text(title).size(14)]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fixed(110.0)),
    )
    .padding(12)
    .style(button::secondary)
    .on_press(action)
    .into()
}

fn activity_card(record: &ActivityRecord) -> Element<'_, Message> {
    container(
        row![
            text(record.icon).size(22),
            column![
                text(&record.title).size(18),
                text(&record.description).size(14).style(text::secondary),
            ]
            .spacing(4),
            Space::with_width(Length::Fill),
            text("›").size(20).style(text::secondary),
        ]
        .spacing(15)
        .align_y(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
