pub mod login;
pub mod otp;
pub mod register;

pub use login::login_view;
pub use otp::otp_view;
pub use register::register_view;

use iced::{
    widget::{row, Space},
    Alignment, Length, Task,
};
use kiibord_ui::{
    component::{button, text},
    theme,
    widget::*,
};

use crate::{
    config::OTP_LENGTH,
    router::Screen,
    services::ThemeMode,
    state::{Msg, State},
};

pub const LOGIN_EMAIL: &str = "login_email";
pub const REGISTER_USERNAME: &str = "register_username";
pub const REGISTER_EMAIL: &str = "register_email";

const APP_NAME: &str = "KIIBORD";
const CARD_WIDTH: f32 = 420.0;

pub fn digit_id(slot: usize) -> text_input::Id {
    text_input::Id::new(format!("otp_digit_{}", slot))
}

pub fn focus_digit(slot: usize) -> Task<Msg> {
    if slot < OTP_LENGTH {
        text_input::focus(digit_id(slot))
    } else {
        Task::none()
    }
}

/// Input focused when a screen is mounted.
pub fn focus_screen(screen: &Screen) -> Task<Msg> {
    match screen {
        Screen::Login => text_input::focus(text_input::Id::new(LOGIN_EMAIL)),
        Screen::Register => text_input::focus(text_input::Id::new(REGISTER_USERNAME)),
        Screen::Otp { .. } => focus_digit(0),
    }
}

/// Brand, tagline, title and description shared by the three cards.
fn header<'a>(tagline: &'a str, title: &'a str, description: Element<'a, Msg>) -> Element<'a, Msg> {
    let tagline = row![
        Space::with_width(Length::Fill),
        text::caption(tagline).style(theme::text::accent),
        Space::with_width(Length::Fill),
    ];
    let title = row![
        Space::with_width(Length::Fill),
        text::h4_bold(title).style(theme::text::primary),
        Space::with_width(Length::Fill),
    ];
    Column::new()
        .push(
            Container::new(text::h1(APP_NAME).style(theme::text::success))
                .center_x(Length::Fill),
        )
        .push(tagline)
        .push(Space::with_height(10))
        .push(title)
        .push(Container::new(description).center_x(Length::Fill))
        .spacing(5)
        .into()
}

pub fn layout<'a>(state: &'a State, content: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    let theme_toggle = button::transparent(
        None,
        match state.theme {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        },
    )
    .on_press(Msg::ThemeToggle);

    let top_row = Row::new()
        .push(Space::with_width(Length::Fill))
        .push(theme_toggle)
        .padding(20)
        .align_y(Alignment::Center);

    let card = Container::new(content)
        .padding(30)
        .width(Length::Fixed(CARD_WIDTH))
        .style(theme::card::simple);

    Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(top_row)
            .push(
                Container::new(card)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background)
    .into()
}

/// "PROMPT ACTION →" line at the bottom of the login and registration cards.
fn switch_prompt<'a>(prompt: &'a str, action: &'a str, message: Option<Msg>) -> Element<'a, Msg> {
    Row::new()
        .push(Space::with_width(Length::Fill))
        .push(text::p2_regular(prompt).style(theme::text::secondary))
        .push(button::link(None, action).on_press_maybe(message))
        .push(Space::with_width(Length::Fill))
        .spacing(5)
        .align_y(Alignment::Center)
        .into()
}
