use crate::gui::{LearnAbleApp, Message};
use iced::widget::{column, container, text, Space};
use iced::Element;

pub fn view(app: &LearnAbleApp) -> Element<'_, Message> {
    let info = column![
        text("Settings options will appear here").style(text::secondary),
        Space::with_height(10),
        text(format!("• Speech Engine: {}", app.config.tts_engine)).size(16),
        text("• UI Theme: Dark Mode").size(16),
        text("• Config Path: ~/.config/learnable/").size(16),
        text(format!("• Usage DB: {}", app.config.store_db_path)).size(16),
    ]
    .spacing(5)
    .padding(15);

    column![
        text("Settings").size(28),
        Space::with_height(20),
        container(info).style(container::rounded_box),
    ]
    .spacing(15)
    .into()
}
