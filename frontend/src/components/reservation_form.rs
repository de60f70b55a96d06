use shared::ReservationRange;
use yew::prelude::*;

use crate::services::date_utils::format_selected_date;

#[derive(Properties, PartialEq)]
pub struct ReservationFormProps {
    pub range: ReservationRange,
    pub name: String,
    pub submitting: bool,
    pub on_name_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

/// Name entry and submit button, shown once both ends of the range are picked
#[function_component(ReservationForm)]
pub fn reservation_form(props: &ReservationFormProps) -> Html {
    if !props.range.is_complete() {
        return html! {};
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="reservation-form" {onsubmit}>
            <input
                type="text"
                class="name-input"
                placeholder="Enter your name"
                value={props.name.clone()}
                oninput={props.on_name_input.clone()}
                disabled={props.submitting}
            />
            <div class="selected-dates">
                {format!(
                    "Selected dates: {} - {}",
                    format_selected_date(props.range.start),
                    format_selected_date(props.range.end)
                )}
            </div>
            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                {if props.submitting { "Submitting..." } else { "Submit" }}
            </button>
        </form>
    }
}
