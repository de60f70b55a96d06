use std::rc::Rc;

use chrono::NaiveDate;
use shared::{RangeSelector, ReservationStore};
use yew::prelude::*;

use crate::services::date_utils::{tile_label, WEEKDAY_LABELS};

#[derive(Properties, PartialEq)]
pub struct RangeCalendarProps {
    pub selector: RangeSelector,
    pub store: Rc<ReservationStore>,
    pub on_day_click: Callback<NaiveDate>,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Month-view calendar restricted to the booking window
#[function_component(RangeCalendar)]
pub fn range_calendar(props: &RangeCalendarProps) -> Html {
    let grid = props.selector.month_grid();

    let tiles = grid.cells().into_iter().map(|cell| match cell {
        None => html! { <div class="calendar-tile calendar-tile--blank"></div> },
        Some(date) => {
            let tile = props.selector.tile_state(date, &props.store);
            let onclick = {
                let on_day_click = props.on_day_click.clone();
                Callback::from(move |_: MouseEvent| on_day_click.emit(date))
            };

            html! {
                <button
                    type="button"
                    class={classes!(tile.css_classes())}
                    disabled={tile.disabled}
                    aria-label={tile_label(date)}
                    aria-pressed={tile.is_active().to_string()}
                    {onclick}
                >
                    <abbr>{date.format("%-d").to_string()}</abbr>
                </button>
            }
        }
    });

    html! {
        <div class="reservation-calendar">
            <div class="calendar-navigation">
                <button
                    type="button"
                    class="calendar-nav-btn"
                    disabled={!props.selector.can_go_previous()}
                    onclick={props.on_previous.clone()}
                >
                    {"‹"}
                </button>
                <span class="calendar-title">{grid.title()}</span>
                <button
                    type="button"
                    class="calendar-nav-btn"
                    disabled={!props.selector.can_go_next()}
                    onclick={props.on_next.clone()}
                >
                    {"›"}
                </button>
            </div>
            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="weekday"><abbr>{*label}</abbr></div>
                })}
            </div>
            <div class="calendar-grid">
                {for tiles}
            </div>
        </div>
    }
}
