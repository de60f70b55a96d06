pub mod use_reservation_form;
pub mod use_reservations;
