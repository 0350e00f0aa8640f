use crate::gui::{LearnAbleApp, Message};
use iced::widget::{column, container, text, Space};
use iced::{Element, Length};

pub fn view(_app: &LearnAbleApp) -> Element<'_, Message> {
    column![
        text("Games").size(28),
        Space::with_height(20),
        container(text("Games coming soon...").size(18).style(text::secondary))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ]
    .into()
}
