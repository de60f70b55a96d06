//! Transport abstraction over the reservation service.
//!
//! The browser client in the frontend implements this with `gloo`; tests
//! implement it in memory. Futures are not `Send` because browser fetches
//! are not.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::{Reservation, ReserveRequest};

#[async_trait(?Send)]
pub trait ReservationApi {
    /// `GET /reservations`
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    /// `POST /reservations/reserve` for a single day. Only success or failure
    /// matters; any response body is ignored.
    async fn reserve(&self, request: &ReserveRequest) -> Result<(), ApiError>;
}
