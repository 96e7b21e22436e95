// Expandable card for one amphibian
use iced::{Alignment, ContentFit, Element, Length};
use iced::widget::{image, Button, Column, Container, Image, Text};
use crate::client::gui::theme::{
    card_appearance, placeholder_appearance, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::models::messages::Message;
use crate::common::models::Amphibian;

const PHOTO_HEIGHT: f32 = 220.0;

/// Everything a card needs to render, derived from one record and its expanded flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel<'a> {
    pub position: usize,
    pub amphibian: &'a Amphibian,
    pub expanded: bool,
}

impl<'a> CardModel<'a> {
    /// Heading and description, only while expanded.
    pub fn detail(&self) -> Option<(String, &'a str)> {
        self.expanded
            .then(|| (self.amphibian.heading(), self.amphibian.description.as_str()))
    }

    pub fn photo_url(&self) -> &'a str {
        &self.amphibian.img_src
    }
}

fn photo<'a>(card: &CardModel<'a>, handle: Option<&image::Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PHOTO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            Text::new(format!("Photo of {}", card.amphibian.name))
                .size(14)
                .style(TEXT_SECONDARY),
        )
        .width(Length::Fill)
        .height(Length::Fixed(PHOTO_HEIGHT))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(placeholder_appearance)))
        .into(),
    }
}

pub fn view<'a>(card: CardModel<'a>, handle: Option<&image::Handle>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(0)
        .align_items(Alignment::Start)
        .push(photo(&card, handle));

    if let Some((heading, description)) = card.detail() {
        content = content.push(
            Column::new()
                .spacing(5)
                .padding([10, 16])
                .push(Text::new(heading).font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
                .push(Text::new(description).size(15).style(TEXT_SECONDARY)),
        );
    }

    Button::new(
        Container::new(content)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
    )
    .style(iced::theme::Button::Text)
    .padding(0)
    .width(Length::Fill)
    .on_press(Message::ToggleCard(card.position))
    .into()
}
