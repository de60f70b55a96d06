//! Range selection over a month-view calendar.
//!
//! Holds the pending two-ended range and answers the per-day questions the
//! calendar grid asks while rendering: can this day be clicked, is it
//! reserved, is it part of the current selection.

use chrono::{Datelike, Months, NaiveDate};

use crate::config::BookingWindow;
use crate::dates::days_inclusive;
use crate::store::ReservationStore;

/// Pending selection. Both ends empty, only `start` set while the user is
/// picking, or both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReservationRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Half-open range waiting for its second click
    pub fn starting_at(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: None,
        }
    }

    /// Complete range, ends ordered so `start <= end`
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: Some(a.min(b)),
            end: Some(a.max(b)),
        }
    }

    /// Tuple form as handed over by the calendar widget, taken verbatim
    pub fn from_pair(pair: [Option<NaiveDate>; 2]) -> Self {
        Self {
            start: pair[0],
            end: pair[1],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Ordered `(first, last)` when both ends are set
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((first, last)) => first <= date && date <= last,
            None => self.start == Some(date),
        }
    }
}

/// Calendar detail level. Only the month view is ever shown, but day
/// classification is defined per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Year,
    Decade,
}

/// Extra visual marker attached to a day tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateClass {
    Reserved,
}

impl DateClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            DateClass::Reserved => "reserved",
        }
    }
}

/// A day can be picked iff it is inside the window and nobody holds it
pub fn is_date_selectable(date: NaiveDate, window: &BookingWindow, store: &ReservationStore) -> bool {
    window.contains(date) && !store.is_reserved(date)
}

pub fn classify_date(date: NaiveDate, view: CalendarView, store: &ReservationStore) -> Option<DateClass> {
    match view {
        CalendarView::Month if store.is_reserved(date) => Some(DateClass::Reserved),
        _ => None,
    }
}

/// Everything the grid needs to draw one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileState {
    pub date: NaiveDate,
    pub disabled: bool,
    pub class: Option<DateClass>,
    pub range_start: bool,
    pub range_end: bool,
    pub range_between: bool,
}

impl TileState {
    pub fn is_active(&self) -> bool {
        self.range_start || self.range_end
    }

    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["calendar-tile"];
        if self.disabled {
            classes.push("calendar-tile--disabled");
        }
        if self.is_active() {
            classes.push("calendar-tile--active");
        }
        if self.range_start {
            classes.push("calendar-tile--rangeStart");
        }
        if self.range_end {
            classes.push("calendar-tile--rangeEnd");
        }
        if self.range_between {
            classes.push("calendar-tile--rangeBetween");
        }
        if let Some(class) = self.class {
            classes.push(class.css_class());
        }
        classes
    }
}

/// Layout of a single month, weeks starting on Sunday. Days of the
/// neighbouring months are not shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub first_day: NaiveDate,
    pub leading_blanks: u32,
    pub days: Vec<NaiveDate>,
}

impl MonthGrid {
    pub fn for_month(any_day: NaiveDate) -> Self {
        let first_day = any_day.with_day(1).unwrap_or(any_day);
        let next_month = first_day
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        let days = first_day.iter_days().take_while(|day| *day < next_month).collect();

        Self {
            first_day,
            leading_blanks: first_day.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Cells in row-major order padded to whole weeks; `None` is a blank cell
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let mut cells: Vec<Option<NaiveDate>> = (0..self.leading_blanks).map(|_| None).collect();
        cells.extend(self.days.iter().copied().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// `October 2024`
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

/// Selection state of the calendar: the pending range plus the month on
/// screen, clamped to the booking window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelector {
    window: BookingWindow,
    range: ReservationRange,
    visible_month: NaiveDate,
}

impl RangeSelector {
    pub fn new(window: BookingWindow) -> Self {
        let visible_month = window.start().with_day(1).unwrap_or(window.start());
        Self {
            window,
            range: ReservationRange::empty(),
            visible_month,
        }
    }

    pub fn window(&self) -> &BookingWindow {
        &self.window
    }

    pub fn range(&self) -> ReservationRange {
        self.range
    }

    /// Replace the pending range with what the calendar reported
    pub fn on_range_change(&mut self, range: ReservationRange) {
        self.range = range;
    }

    pub fn clear(&mut self) {
        self.range = ReservationRange::empty();
    }

    pub fn is_date_selectable(&self, date: NaiveDate, store: &ReservationStore) -> bool {
        is_date_selectable(date, &self.window, store)
    }

    pub fn classify_date(&self, date: NaiveDate, view: CalendarView, store: &ReservationStore) -> Option<DateClass> {
        classify_date(date, view, store)
    }

    /// Range that results from clicking `date`, or `None` when the click is
    /// ignored because the day is disabled.
    ///
    /// A second click completes the range unless a disabled day lies between
    /// the two ends, in which case selection restarts at the clicked day.
    pub fn click(&self, date: NaiveDate, store: &ReservationStore) -> Option<ReservationRange> {
        if !self.is_date_selectable(date, store) {
            return None;
        }

        match (self.range.start, self.range.end) {
            (Some(start), None) => {
                let (first, last) = (start.min(date), start.max(date));
                let clear_path = days_inclusive(first, last).all(|day| self.is_date_selectable(day, store));
                if clear_path {
                    Some(ReservationRange::between(start, date))
                } else {
                    Some(ReservationRange::starting_at(date))
                }
            }
            _ => Some(ReservationRange::starting_at(date)),
        }
    }

    pub fn tile_state(&self, date: NaiveDate, store: &ReservationStore) -> TileState {
        let (range_start, range_end, range_between) = match self.range.bounds() {
            Some((first, last)) => (date == first, date == last, first < date && date < last),
            None => {
                let picked = self.range.start == Some(date);
                (picked, false, false)
            }
        };

        TileState {
            date,
            disabled: !self.is_date_selectable(date, store),
            class: self.classify_date(date, CalendarView::Month, store),
            range_start,
            range_end,
            range_between,
        }
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.visible_month)
    }

    pub fn can_go_previous(&self) -> bool {
        let first_month = self.window.start().with_day(1).unwrap_or(self.window.start());
        self.visible_month > first_month
    }

    pub fn can_go_next(&self) -> bool {
        self.visible_month
            .checked_add_months(Months::new(1))
            .map(|next| next <= self.window.end())
            .unwrap_or(false)
    }

    pub fn previous_month(&mut self) {
        if self.can_go_previous() {
            if let Some(previous) = self.visible_month.checked_sub_months(Months::new(1)) {
                self.visible_month = previous;
            }
        }
    }

    pub fn next_month(&mut self) {
        if self.can_go_next() {
            if let Some(next) = self.visible_month.checked_add_months(Months::new(1)) {
                self.visible_month = next;
            }
        }
    }
}
