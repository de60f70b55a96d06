use std::rc::Rc;

use chrono::NaiveDate;
use shared::{BookingWindow, FormUpdate, RangeSelector, ReservationRange, ReservationSubmitter, SubmissionGate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_reservations::{ReservationsAction, ReservationsState};
use crate::services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Blocking message shown above the calendar until dismissed
#[derive(Clone, PartialEq)]
pub struct UserMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl UserMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Range selector held in a reducer so updates apply to the latest state
#[derive(Clone, PartialEq)]
pub struct SelectorState(pub RangeSelector);

pub enum SelectorAction {
    SetRange(ReservationRange),
    /// Clear the range only if it is still the one that was submitted
    ClearSubmitted(ReservationRange),
    PreviousMonth,
    NextMonth,
}

impl Reducible for SelectorState {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut selector = self.0.clone();
        match action {
            SelectorAction::SetRange(range) => selector.on_range_change(range),
            SelectorAction::ClearSubmitted(submitted) => {
                if selector.range() == submitted {
                    selector.clear();
                }
            }
            SelectorAction::PreviousMonth => selector.previous_month(),
            SelectorAction::NextMonth => selector.next_month(),
        }
        Rc::new(SelectorState(selector))
    }
}

#[derive(Clone)]
pub struct ReservationFormState {
    pub selector: RangeSelector,
    pub name: String,
    pub submitting: bool,
    pub message: Option<UserMessage>,
}

pub struct UseReservationFormResult {
    pub state: ReservationFormState,
    pub actions: UseReservationFormActions,
}

#[derive(Clone)]
pub struct UseReservationFormActions {
    pub on_day_click: Callback<NaiveDate>,
    pub on_name_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub dismiss_message: Callback<()>,
}

#[hook]
pub fn use_reservation_form(
    api_client: &ApiClient,
    window: BookingWindow,
    reservations: &UseReducerHandle<ReservationsState>,
) -> UseReservationFormResult {
    let selector = use_reducer(move || SelectorState(RangeSelector::new(window)));
    let name = use_state(String::new);
    let submitting = use_state(|| false);
    let message = use_state(|| Option::<UserMessage>::None);
    let gate = use_memo((), |_| SubmissionGate::new());

    let on_day_click = {
        let selector = selector.clone();
        let reservations = reservations.clone();
        let message = message.clone();

        Callback::from(move |date: NaiveDate| {
            if let Some(range) = selector.0.click(date, &reservations.store) {
                message.set(None);
                selector.dispatch(SelectorAction::SetRange(range));
            }
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let api_client = api_client.clone();
        let reservations = reservations.clone();
        let selector = selector.clone();
        let name = name.clone();
        let submitting = submitting.clone();
        let message = message.clone();
        let gate = (*gate).clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let reservations = reservations.clone();
            let selector = selector.clone();
            let name = name.clone();
            let submitting = submitting.clone();
            let message = message.clone();
            let gate = gate.clone();

            spawn_local(async move {
                let submitted = selector.0.range();
                let snapshot = reservations.store.clone();
                let submitter = ReservationSubmitter::new(&api_client, window).with_gate(gate);

                submitting.set(true);
                let result = submitter
                    .submit(&submitted, name.as_str(), &snapshot, |date, who| {
                        reservations.dispatch(ReservationsAction::Recorded {
                            date,
                            name: who.to_string(),
                        });
                    })
                    .await;

                match FormUpdate::from_result(&result) {
                    FormUpdate::Reset { message: text } => {
                        selector.dispatch(SelectorAction::ClearSubmitted(submitted));
                        name.set(String::new());
                        message.set(Some(UserMessage::success(text)));
                        submitting.set(false);
                    }
                    FormUpdate::Keep { message: text } => {
                        message.set(Some(UserMessage::error(text)));
                        submitting.set(false);
                    }
                    // the running submission owns the submitting flag
                    FormUpdate::Ignore => log::warn!("Ignoring submit while another is in flight"),
                }
            });
        })
    };

    let prev_month = {
        let selector = selector.clone();
        Callback::from(move |_: MouseEvent| selector.dispatch(SelectorAction::PreviousMonth))
    };

    let next_month = {
        let selector = selector.clone();
        Callback::from(move |_: MouseEvent| selector.dispatch(SelectorAction::NextMonth))
    };

    let dismiss_message = {
        let message = message.clone();
        Callback::from(move |_| message.set(None))
    };

    let state = ReservationFormState {
        selector: selector.0.clone(),
        name: (*name).clone(),
        submitting: *submitting,
        message: (*message).clone(),
    };

    let actions = UseReservationFormActions {
        on_day_click,
        on_name_input,
        on_submit,
        prev_month,
        next_month,
        dismiss_message,
    };

    UseReservationFormResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn selecting(range: ReservationRange) -> Rc<SelectorState> {
        Rc::new(SelectorState(RangeSelector::new(BookingWindow::default())))
            .reduce(SelectorAction::SetRange(range))
    }

    #[wasm_bindgen_test]
    fn test_submitted_range_cleared() {
        let submitted = ReservationRange::between(day(20), day(22));
        let state = selecting(submitted).reduce(SelectorAction::ClearSubmitted(submitted));
        assert!(state.0.range().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_newer_selection_survives_clear() {
        let submitted = ReservationRange::between(day(20), day(22));
        let newer = ReservationRange::starting_at(day(25));
        let state = selecting(newer).reduce(SelectorAction::ClearSubmitted(submitted));
        assert_eq!(state.0.range(), newer);
    }
}
