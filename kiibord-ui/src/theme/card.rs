use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 12.0.into(),
                width: 2.0,
                color,
            }
        } else {
            Border::default()
        },
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

pub fn error(theme: &Theme) -> Style {
    card(&theme.colors.cards.error)
}

pub fn success(theme: &Theme) -> Style {
    card(&theme.colors.cards.success)
}
