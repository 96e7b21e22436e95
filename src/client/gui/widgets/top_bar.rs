// Title bar shown above every screen
use iced::{Element, Length};
use iced::widget::{Container, Text};
use crate::client::gui::theme::{bar_appearance, BOLD_FONT, TEXT_ON_BAR};
use crate::client::models::messages::Message;

pub fn view(title: &str) -> Element<'_, Message> {
    Container::new(Text::new(title).font(BOLD_FONT).size(28).style(TEXT_ON_BAR))
        .padding([18, 24])
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bar_appearance)))
        .into()
}
