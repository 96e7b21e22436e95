use iced::{Color, Font};

// Palette shared by the views and widgets
pub const BG_MAIN: Color = Color::from_rgb(0.94, 0.96, 0.92); // Pale leaf
pub const BAR_BG: Color = Color::from_rgb(0.20, 0.40, 0.25); // Moss green
pub const CARD_BG: Color = Color::WHITE;
pub const PLACEHOLDER_BG: Color = Color::from_rgb(0.80, 0.86, 0.78);
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.10, 0.12, 0.10);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.35, 0.38, 0.35);
pub const TEXT_ON_BAR: Color = Color::WHITE;

pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn bar_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BAR_BG)),
        text_color: Some(TEXT_ON_BAR),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

pub fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.85, 0.88, 0.84),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        },
    }
}

pub fn placeholder_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(PLACEHOLDER_BG)),
        text_color: Some(TEXT_SECONDARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}
