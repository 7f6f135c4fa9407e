pub mod button;
pub mod form;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new())
        .style(theme::container::foreground)
        .height(Length::Fixed(1.0))
        .width(Length::Fill)
}

/// Card holding a message that concerns the whole form rather than a single input.
pub fn form_error<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::card::error)
}

pub fn form_success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::card::success)
}
