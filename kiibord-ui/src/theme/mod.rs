pub mod button;
pub mod card;
pub mod container;
pub mod palette;
pub mod text;
pub mod text_input;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub colors: palette::Palette,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            colors: palette::Palette::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            colors: palette::Palette::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.colors == palette::Palette::dark()
    }
}

impl std::default::Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.general.background,
            text_color: self.colors.text.primary,
        }
    }
}
