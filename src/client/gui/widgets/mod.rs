pub mod amphibian_card;
pub mod top_bar;
