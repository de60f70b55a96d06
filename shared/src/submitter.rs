//! Two-pass reservation submission.
//!
//! The pre-check pass validates the whole range against what the store
//! already knows and sends nothing if any day is taken. The commit pass then
//! writes one day at a time, in ascending order, recording each accepted day
//! locally as soon as the service confirms it. A failed write stops the pass;
//! days written before it stay written.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::api::ReservationApi;
use crate::config::BookingWindow;
use crate::dates::{days_inclusive, local_date_to_iso_day};
use crate::error::{ApiError, SubmitError, ValidationError};
use crate::selector::ReservationRange;
use crate::store::ReservationStore;
use crate::ReserveRequest;

pub const SUCCESS_MESSAGE: &str = "Reservation successful!";

/// Days that passed the pre-check, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    pub name: String,
    pub days: Vec<NaiveDate>,
}

impl CommitPlan {
    /// Fold the per-day outcomes of a commit pass into the submission result
    pub fn finish(&self, outcomes: Vec<DayOutcome>) -> Result<SubmitSummary, SubmitError> {
        let mut committed = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                DayOutcome::Committed(day) => committed.push(day),
                DayOutcome::Failed(failed_on, source) => {
                    return Err(SubmitError::Commit {
                        committed,
                        failed_on,
                        source,
                    })
                }
            }
        }

        Ok(SubmitSummary {
            name: self.name.clone(),
            days: committed,
        })
    }
}

/// Result of writing a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    Committed(NaiveDate),
    Failed(NaiveDate, ApiError),
}

/// A fully committed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSummary {
    pub name: String,
    pub days: Vec<NaiveDate>,
}

impl SubmitSummary {
    pub fn user_message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// How the reservation form reacts once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    /// Every day was written: clear the submitted range and the name
    Reset { message: String },
    /// Keep what the user entered so they can correct it or retry
    Keep { message: String },
    /// Another submission still holds the gate; leave the form alone
    Ignore,
}

impl FormUpdate {
    pub fn from_result(result: &Result<SubmitSummary, SubmitError>) -> Self {
        match result {
            Ok(summary) => FormUpdate::Reset {
                message: summary.user_message().to_string(),
            },
            Err(SubmitError::InProgress) => FormUpdate::Ignore,
            Err(e) => FormUpdate::Keep {
                message: e.user_message(),
            },
        }
    }
}

/// Allows one submission at a time. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    in_flight: Rc<Cell<bool>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Claim the gate; it reopens when the returned ticket is dropped
    pub fn try_begin(&self) -> Result<SubmissionTicket, SubmitError> {
        if self.in_flight.replace(true) {
            return Err(SubmitError::InProgress);
        }
        Ok(SubmissionTicket {
            in_flight: Rc::clone(&self.in_flight),
        })
    }
}

impl PartialEq for SubmissionGate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.in_flight, &other.in_flight)
    }
}

/// Proof that a submission holds the gate
#[derive(Debug)]
pub struct SubmissionTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

/// Validate a candidate reservation against the booking window and the
/// store. Nothing is sent and nothing is mutated.
pub fn pre_check(
    range: &ReservationRange,
    name: &str,
    window: &BookingWindow,
    store: &ReservationStore,
) -> Result<CommitPlan, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let (first, last) = range.bounds().ok_or(ValidationError::IncompleteRange)?;

    let days: Vec<NaiveDate> = days_inclusive(first, last).collect();
    if let Some(day) = days.iter().find(|day| !window.contains(**day)) {
        return Err(ValidationError::OutsideWindow(*day));
    }
    if let Some(day) = days.iter().find(|day| store.is_reserved(**day)) {
        return Err(ValidationError::AlreadyReserved(*day));
    }

    Ok(CommitPlan {
        name: name.to_string(),
        days,
    })
}

pub struct ReservationSubmitter<'a, A: ?Sized> {
    api: &'a A,
    window: BookingWindow,
    gate: SubmissionGate,
}

impl<'a, A> ReservationSubmitter<'a, A>
where
    A: ReservationApi + ?Sized,
{
    pub fn new(api: &'a A, window: BookingWindow) -> Self {
        Self {
            api,
            window,
            gate: SubmissionGate::new(),
        }
    }

    /// Share an existing gate, e.g. one owned by the UI
    pub fn with_gate(mut self, gate: SubmissionGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn pre_check(
        &self,
        range: &ReservationRange,
        name: &str,
        store: &ReservationStore,
    ) -> Result<CommitPlan, ValidationError> {
        pre_check(range, name, &self.window, store).map_err(|e| {
            log::warn!("Reservation rejected before sending: {}", e);
            e
        })
    }

    /// Write each planned day in order, calling `on_committed` right after the
    /// service accepts it. Stops at the first failure.
    pub async fn commit<F>(&self, plan: &CommitPlan, mut on_committed: F) -> Vec<DayOutcome>
    where
        F: FnMut(NaiveDate, &str),
    {
        let mut outcomes = Vec::with_capacity(plan.days.len());

        for day in &plan.days {
            let request = ReserveRequest {
                name: plan.name.clone(),
                date: local_date_to_iso_day(*day),
            };

            match self.api.reserve(&request).await {
                Ok(()) => {
                    log::info!("Reserved {} for {}", request.date, plan.name);
                    on_committed(*day, &plan.name);
                    outcomes.push(DayOutcome::Committed(*day));
                }
                Err(e) => {
                    log::error!("Failed to reserve {}: {}", request.date, e);
                    outcomes.push(DayOutcome::Failed(*day, e));
                    break;
                }
            }
        }

        outcomes
    }

    /// Run a whole submission: claim the gate, validate against `store`,
    /// then write each day, handing every accepted day to `on_committed`.
    ///
    /// `store` is only read. Recording accepted days is left to the caller so
    /// the UI can route them through its own state.
    pub async fn submit<F>(
        &self,
        range: &ReservationRange,
        name: &str,
        store: &ReservationStore,
        on_committed: F,
    ) -> Result<SubmitSummary, SubmitError>
    where
        F: FnMut(NaiveDate, &str),
    {
        let _ticket = self.gate.try_begin()?;

        let plan = self.pre_check(range, name, store)?;
        let outcomes = self.commit(&plan, on_committed).await;
        plan.finish(outcomes)
    }
}
