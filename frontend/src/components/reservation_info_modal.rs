use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReservationInfoModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Static reservation-info overlay. Nothing opens it yet.
#[function_component(ReservationInfoModal)]
pub fn reservation_info_modal(props: &ReservationInfoModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" role="dialog" aria-label="Reservation Info" onclick={on_modal_click}>
                <div class="modal-content">
                    <h2 class="modal-title">{"Reservation Info"}</h2>
                    <button type="button" class="btn btn-primary" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
