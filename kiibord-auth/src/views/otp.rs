use iced::{
    widget::{row, Space},
    Alignment, Length,
};
use kiibord_ui::{
    component::{button, form_error, form_success, separation, text},
    font, theme,
    widget::*,
};

use super::{digit_id, header, layout};
use crate::{
    config::OTP_LENGTH,
    router::FlowContext,
    state::{Msg, State},
};

const DIGIT_WIDTH: f32 = 48.0;

pub fn otp_view<'a>(state: &'a State, email: &'a str, flow: FlowContext) -> Element<'a, Msg> {
    let otp = &state.views.otp;
    let editable = !otp.processing && !otp.verified;
    let can_submit = otp.can_submit();

    let digits = (0..OTP_LENGTH).fold(
        Row::new().spacing(10).align_y(Alignment::Start),
        |digits, slot| {
            let mut input = TextInput::new("", otp.entry.digit(slot).unwrap_or_default())
                .id(digit_id(slot))
                .font(font::MONOSPACE)
                .size(24)
                .padding(10)
                .width(Length::Fixed(DIGIT_WIDTH));
            if editable {
                input = input.on_input(move |value| Msg::OtpUpdateDigit(slot, value));
            }
            if can_submit {
                input = input.on_submit(Msg::OtpSubmit);
            }
            let error = otp.errors[slot];
            let input = if error.is_some() {
                input.style(theme::text_input::invalid)
            } else {
                input.style(theme::text_input::digit)
            };
            digits.push(
                Column::new()
                    .push(input)
                    .push_maybe(
                        error.map(|e| text::caption(e.message()).style(theme::text::error)),
                    )
                    .width(Length::Fixed(DIGIT_WIDTH))
                    .spacing(5),
            )
        },
    );

    let submit = button::primary(
        None,
        if otp.processing {
            "Verifying..."
        } else {
            flow.submit_label()
        },
    )
    .width(Length::Fill)
    .on_press_maybe(can_submit.then_some(Msg::OtpSubmit));

    let resend = Row::new()
        .push(Space::with_width(Length::Fill))
        .push(text::p2_regular("Code Expired?").style(theme::text::secondary))
        .push(
            button::link(
                None,
                if otp.is_resending() {
                    "Deploying..."
                } else {
                    "Redeploy Code"
                },
            )
            .on_press_maybe((!otp.is_resending() && !otp.verified).then_some(Msg::OtpResend)),
        )
        .push(Space::with_width(Length::Fill))
        .spacing(5)
        .align_y(Alignment::Center);

    let description = row![
        text::p2_regular("Code deployed to ").style(theme::text::secondary),
        text::p2_medium(email).style(theme::text::accent),
    ];

    let content = Column::new()
        .push(header("SECURE ACCESS", "CODE VERIFICATION", description.into()))
        .push(Container::new(digits).center_x(Length::Fill))
        .push_maybe(
            otp.code_error
                .map(|e| text::caption(e.message()).style(theme::text::error)),
        )
        .push_maybe(otp.error.as_deref().map(form_error::<Msg>))
        .push_maybe(otp.notice.map(form_success::<Msg>))
        .push_maybe(
            otp.verified
                .then(|| form_success::<Msg>("Access granted, welcome to the arena")),
        )
        .push(submit)
        .push(separation())
        .push(resend)
        .push(button::secondary(None, "← Abort Mission").on_press(Msg::OtpBack))
        .spacing(20);

    layout(state, content)
}
