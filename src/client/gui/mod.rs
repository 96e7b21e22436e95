pub mod app;
pub mod theme;
pub mod views;
pub mod widgets;
