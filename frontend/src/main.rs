use log::LevelFilter;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{MessageBanner, RangeCalendar, ReservationForm, ReservationInfoModal};
use hooks::use_reservation_form::use_reservation_form;
use hooks::use_reservations::use_reservations;
use services::api::ApiClient;
use services::config::load_config;
use services::logging;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let api_client = use_memo((), {
        let config = (*config).clone();
        move |_| ApiClient::new(config)
    });

    let reservations = use_reservations(&api_client);
    let form = use_reservation_form(&api_client, config.booking_window, &reservations.state);

    // No control opens the info overlay yet
    let info_open = use_state(|| false);
    let close_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(false))
    };

    let retry = {
        let reload = reservations.actions.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    let status = if reservations.state.loading {
        html! { <div class="loading">{"Loading reservations..."}</div> }
    } else if reservations.state.load_failed {
        html! {
            <div class="form-message error">
                <span>{"Could not load existing reservations."}</span>
                <button type="button" class="btn btn-secondary" onclick={retry}>{"Retry"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="calendar-container">
            <MessageBanner
                message={form.state.message.clone()}
                on_dismiss={form.actions.dismiss_message.clone()}
            />
            {status}
            <RangeCalendar
                selector={form.state.selector.clone()}
                store={reservations.state.store.clone()}
                on_day_click={form.actions.on_day_click.clone()}
                on_previous={form.actions.prev_month.clone()}
                on_next={form.actions.next_month.clone()}
            />
            <ReservationForm
                range={form.state.selector.range()}
                name={form.state.name.clone()}
                submitting={form.state.submitting}
                on_name_input={form.actions.on_name_input.clone()}
                on_submit={form.actions.on_submit.clone()}
            />
            <ReservationInfoModal is_open={*info_open} on_close={close_info} />
        </div>
    }
}

fn main() {
    logging::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
