use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub error: ContainerPalette,
    pub success: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
    pub digit: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            general: General {
                background: color::SLATE_950,
                foreground: color::SLATE_900,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::SLATE_300,
                accent: color::LIGHT_GREEN,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::SLATE_950,
                        border: color::GREEN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_GREEN,
                        text: color::SLATE_950,
                        border: color::LIGHT_GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::EMERALD,
                        text: color::SLATE_950,
                        border: color::EMERALD.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE_700,
                        text: color::SLATE_300,
                        border: color::SLATE_700.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::SLATE_900,
                        text: color::SLATE_300,
                        border: color::SLATE_700.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::SLATE_900,
                        text: color::LIGHT_GREEN,
                        border: color::GREEN.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_300,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::CYAN,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::LIGHT_GREEN,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::SLATE_900,
                    text: None,
                    border: Some(color::TRANSPARENT_GREEN),
                },
                error: ContainerPalette {
                    background: color::SLATE_900,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
                success: ContainerPalette {
                    background: color::SLATE_900,
                    text: Some(color::LIGHT_GREEN),
                    border: Some(color::GREEN),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::SLATE_950,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::SLATE_700),
                    },
                    focused: TextInputPalette {
                        background: color::SLATE_950,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::CYAN),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_900,
                        icon: color::SLATE_700,
                        placeholder: color::SLATE_700,
                        value: color::SLATE_500,
                        selection: color::SLATE_700,
                        border: Some(color::SLATE_700),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::SLATE_950,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                    focused: TextInputPalette {
                        background: color::SLATE_950,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_900,
                        icon: color::SLATE_700,
                        placeholder: color::SLATE_700,
                        value: color::SLATE_500,
                        selection: color::SLATE_700,
                        border: Some(color::RED),
                    },
                },
                digit: TextInput {
                    active: TextInputPalette {
                        background: color::BLACK,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_700,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::SLATE_700),
                    },
                    focused: TextInputPalette {
                        background: color::BLACK,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_700,
                        value: color::WHITE,
                        selection: color::GREEN,
                        border: Some(color::GREEN),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_900,
                        icon: color::SLATE_700,
                        placeholder: color::SLATE_700,
                        value: color::SLATE_500,
                        selection: color::SLATE_700,
                        border: Some(color::SLATE_700),
                    },
                },
            },
        }
    }

    /// The light palette only swaps surfaces and body text, accents stay shared with the
    /// dark palette.
    pub fn light() -> Self {
        let dark = Self::dark();
        Self {
            general: General {
                background: color::SLATE_100,
                foreground: color::SLATE_50,
            },
            text: Text {
                primary: color::SLATE_950,
                secondary: color::SLATE_700,
                accent: color::EMERALD,
                ..dark.text
            },
            buttons: Buttons {
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::SLATE_700,
                        border: color::SLATE_300.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::EMERALD,
                        border: color::GREEN.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_700,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_950,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                ..dark.buttons
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::TRANSPARENT_GREEN),
                },
                error: ContainerPalette {
                    background: color::WHITE,
                    ..dark.cards.error
                },
                success: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::EMERALD),
                    border: Some(color::GREEN),
                },
            },
            text_inputs: dark.text_inputs,
        }
    }
}
