use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const SLATE_950: Color = Color::from_rgb(
    0x02 as f32 / 255.0,
    0x06 as f32 / 255.0,
    0x17 as f32 / 255.0,
);
pub const SLATE_900: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const SLATE_700: Color = Color::from_rgb(
    0x33 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x55 as f32 / 255.0,
);
pub const SLATE_500: Color = Color::from_rgb(
    0x64 as f32 / 255.0,
    0x74 as f32 / 255.0,
    0x8B as f32 / 255.0,
);
pub const SLATE_300: Color = Color::from_rgb(
    0xCB as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xE1 as f32 / 255.0,
);
pub const SLATE_100: Color = Color::from_rgb(
    0xF1 as f32 / 255.0,
    0xF5 as f32 / 255.0,
    0xF9 as f32 / 255.0,
);
pub const SLATE_50: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFC as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0x4A as f32 / 255.0,
    0xDE as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const EMERALD: Color = Color::from_rgb(
    0x05 as f32 / 255.0,
    0x96 as f32 / 255.0,
    0x69 as f32 / 255.0,
);
pub const TRANSPARENT_GREEN: Color = Color::from_rgba(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
    0.2,
);
pub const CYAN: Color = Color::from_rgb(
    0x06 as f32 / 255.0,
    0xB6 as f32 / 255.0,
    0xD4 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xF7 as f32 / 255.0,
    0x28 as f32 / 255.0,
    0x28 as f32 / 255.0,
);
