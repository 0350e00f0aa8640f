use crate::gui::{LearnAbleApp, Message};
use iced::widget::{button, column, text, Space};
use iced::{Alignment, Element, Length};

pub fn view(_app: &LearnAbleApp) -> Element<'_, Message> {
    // Conversion tools are not wired up yet; the buttons are inert
    column![
        text("Convert").size(28),
        Space::with_height(20),
        button(text("Text to Braille"))
            .padding(12)
            .width(Length::Fixed(220.0))
            .style(button::primary)
            .on_press(Message::None),
        button(text("Braille to Text"))
            .padding(12)
            .width(Length::Fixed(220.0))
            .style(button::primary)
            .on_press(Message::None),
        button(text("Upload File"))
            .padding(12)
            .width(Length::Fixed(220.0))
            .style(button::primary)
            .on_press(Message::None),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
