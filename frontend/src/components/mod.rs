pub mod message_banner;
pub mod range_calendar;
pub mod reservation_form;
pub mod reservation_info_modal;

pub use message_banner::MessageBanner;
pub use range_calendar::RangeCalendar;
pub use reservation_form::ReservationForm;
pub use reservation_info_modal::ReservationInfoModal;
