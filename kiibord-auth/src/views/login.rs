use iced::Length;
use kiibord_ui::{
    component::{button, form, form_error, text},
    theme,
    widget::*,
};

use super::{header, layout, switch_prompt, LOGIN_EMAIL};
use crate::state::{Msg, State};

pub fn login_view(state: &State) -> Element<'_, Msg> {
    let login = &state.views.login;
    let can_submit = login.can_submit();

    let form = if can_submit {
        form::Form::new_trimmed("warrior@kiibord.gg", &login.email.value, Msg::LoginUpdateEmail)
            .on_submit_maybe(Some(Msg::LoginSubmit))
    } else {
        form::Form::new_disabled("warrior@kiibord.gg", &login.email.value)
    }
    .label("Email Address")
    .maybe_warning(login.email.warning())
    .id(text_input::Id::new(LOGIN_EMAIL))
    .size(16)
    .padding(12);

    let btn = button::primary(
        None,
        if can_submit { "DEPLOY CODE" } else { "Deploying..." },
    )
    .width(Length::Fill)
    .on_press_maybe(can_submit.then_some(Msg::LoginSubmit));

    let content = Column::new()
        .push(header(
            "WHO WON",
            "ENTER THE ARENA",
            text::p2_regular("Ready for battle?")
                .style(theme::text::secondary)
                .into(),
        ))
        .push(form)
        .push(
            text::caption("We'll send you a verification code").style(theme::text::secondary),
        )
        .push_maybe(login.error.as_deref().map(form_error::<Msg>))
        .push(btn)
        .push(switch_prompt(
            "NEW RECRUIT?",
            "JOIN FORCES →",
            can_submit.then_some(Msg::LoginSwitchToRegister),
        ))
        .spacing(20);

    layout(state, content)
}
