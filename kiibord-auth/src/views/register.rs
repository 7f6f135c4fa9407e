use iced::Length;
use kiibord_ui::{
    component::{button, form, form_error, text},
    theme,
    widget::*,
};

use super::{header, layout, switch_prompt, REGISTER_EMAIL, REGISTER_USERNAME};
use crate::state::{Msg, State};

pub fn register_view(state: &State) -> Element<'_, Msg> {
    let register = &state.views.register;
    let can_submit = register.can_submit();

    let username = if can_submit {
        form::Form::new(
            "APEX_WARRIOR",
            &register.username.value,
            Msg::RegisterUpdateUsername,
        )
        .on_submit_maybe(Some(Msg::RegisterSubmit))
    } else {
        form::Form::new_disabled("APEX_WARRIOR", &register.username.value)
    }
    .label("Battle Tag")
    .maybe_warning(register.username.warning())
    .id(text_input::Id::new(REGISTER_USERNAME))
    .size(16)
    .padding(12);

    let email = if can_submit {
        form::Form::new_trimmed(
            "champion@kiibord.gg",
            &register.email.value,
            Msg::RegisterUpdateEmail,
        )
        .on_submit_maybe(Some(Msg::RegisterSubmit))
    } else {
        form::Form::new_disabled("champion@kiibord.gg", &register.email.value)
    }
    .label("Email Address")
    .maybe_warning(register.email.warning())
    .id(text_input::Id::new(REGISTER_EMAIL))
    .size(16)
    .padding(12);

    let btn = button::primary(None, if can_submit { "ENLIST NOW" } else { "Deploying..." })
        .width(Length::Fill)
        .on_press_maybe(can_submit.then_some(Msg::RegisterSubmit));

    let content = Column::new()
        .push(header(
            "CLAIM GLORY",
            "RECRUIT REGISTRATION",
            text::p2_regular("Build your legend")
                .style(theme::text::secondary)
                .into(),
        ))
        .push(username)
        .push(email)
        .push(
            text::caption("Verification code will be deployed to your email")
                .style(theme::text::secondary),
        )
        .push_maybe(register.error.as_deref().map(form_error::<Msg>))
        .push(btn)
        .push(switch_prompt(
            "VETERAN WARRIOR?",
            "RETURN TO BASE →",
            can_submit.then_some(Msg::RegisterSwitchToLogin),
        ))
        .spacing(20);

    layout(state, content)
}
