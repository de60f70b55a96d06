use std::rc::Rc;

use chrono::NaiveDate;
use shared::ReservationStore;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Reservation store plus the status of the last fetch
#[derive(Clone, PartialEq)]
pub struct ReservationsState {
    pub store: Rc<ReservationStore>,
    pub loading: bool,
    pub load_failed: bool,
}

impl Default for ReservationsState {
    fn default() -> Self {
        Self {
            store: Rc::new(ReservationStore::new()),
            loading: true,
            load_failed: false,
        }
    }
}

pub enum ReservationsAction {
    Loading,
    /// A fetch succeeded; replace the store wholesale
    Loaded(ReservationStore),
    /// A fetch failed; keep whatever we had
    LoadFailed,
    /// The service accepted one day of a submission
    Recorded { date: NaiveDate, name: String },
}

impl Reducible for ReservationsState {
    type Action = ReservationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ReservationsAction::Loaded(store) => {
                next.store = Rc::new(store);
                next.loading = false;
                next.load_failed = false;
            }
            ReservationsAction::Loading => {
                next.loading = true;
            }
            ReservationsAction::LoadFailed => {
                next.loading = false;
                next.load_failed = true;
            }
            ReservationsAction::Recorded { date, name } => {
                Rc::make_mut(&mut next.store).record_local(date, &name);
            }
        }
        next.into()
    }
}

pub struct UseReservationsResult {
    pub state: UseReducerHandle<ReservationsState>,
    pub actions: UseReservationsActions,
}

#[derive(Clone)]
pub struct UseReservationsActions {
    pub reload: Callback<()>,
}

#[hook]
pub fn use_reservations(api_client: &ApiClient) -> UseReservationsResult {
    let state = use_reducer(ReservationsState::default);

    let reload = {
        let api_client = api_client.clone();
        let state = state.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let state = state.clone();

            log::debug!("Fetching reservations from {}", api_client.base_url());
            state.dispatch(ReservationsAction::Loading);
            spawn_local(async move {
                // a failed load must leave the live store alone
                let mut fresh = ReservationStore::new();
                match fresh.load(&api_client).await {
                    Ok(_) => state.dispatch(ReservationsAction::Loaded(fresh)),
                    Err(_) => state.dispatch(ReservationsAction::LoadFailed),
                }
            });
        })
    };

    // Hydrate once on mount
    use_effect_with((), {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    UseReservationsResult {
        state,
        actions: UseReservationsActions { reload },
    }
}
