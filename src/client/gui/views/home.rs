use std::collections::HashMap;
use iced::{Alignment, Element, Length};
use iced::widget::{image, Button, Column, Container, Text};
use crate::client::gui::theme::{bg_main_appearance, BOLD_FONT, TEXT_PRIMARY};
use crate::client::gui::widgets::amphibian_card::{self, CardModel};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{ExpandedCards, UiState};
use crate::common::models::Amphibian;

/// Decoded photos keyed by image url.
pub type Photos = HashMap<String, image::Handle>;

/// One card model per record, in list order.
pub fn card_models<'a>(amphibians: &'a [Amphibian], expanded: &ExpandedCards) -> Vec<CardModel<'a>> {
    amphibians
        .iter()
        .enumerate()
        .map(|(position, amphibian)| CardModel {
            position,
            amphibian,
            expanded: expanded.is_expanded(position),
        })
        .collect()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

fn loading_view<'a>() -> Element<'a, Message> {
    centered(Text::new("Loading...").size(28).style(TEXT_PRIMARY))
}

fn error_view<'a>() -> Element<'a, Message> {
    let retry = Button::new(Text::new("Retry").font(BOLD_FONT).size(16))
        .style(iced::theme::Button::Primary)
        .padding([10, 24])
        .on_press(Message::Refresh);

    centered(
        Column::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(Text::new("Failed to load").size(28).style(TEXT_PRIMARY))
            .push(retry),
    )
}

fn success_view<'a>(
    amphibians: &'a [Amphibian],
    expanded: &ExpandedCards,
    photos: &Photos,
) -> Element<'a, Message> {
    let cards = card_models(amphibians, expanded)
        .into_iter()
        .fold(Column::new().spacing(10).padding(16), |column, card| {
            let photo = photos.get(card.photo_url());
            column.push(amphibian_card::view(card, photo))
        });

    iced::widget::scrollable(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn view<'a>(ui_state: &'a UiState, expanded: &ExpandedCards, photos: &Photos) -> Element<'a, Message> {
    let content = match ui_state {
        UiState::Loading => loading_view(),
        UiState::Error => error_view(),
        UiState::Success(amphibians) => success_view(amphibians, expanded, photos),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
