use yew::prelude::*;

use crate::hooks::use_reservation_form::{MessageKind, UserMessage};

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub message: Option<UserMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let kind_class = match message.kind {
        MessageKind::Success => "form-message success",
        MessageKind::Error => "form-message error",
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={kind_class} role="alert">
            <span>{&message.text}</span>
            <button type="button" class="btn btn-secondary" onclick={on_dismiss}>{"OK"}</button>
        </div>
    }
}
