//! Start/end year selectors with a reset button.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year range picker. Both selectors list every year in the dataset; an
/// inverted choice is swapped by the session before the grid is rebuilt.
#[component]
pub fn YearRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let Some((years, range)) = state
        .session
        .read()
        .as_ref()
        .map(|s| (s.year_options(), s.range()))
    else {
        return rsx! {};
    };
    let (start, end) = (range.start(), range.end());

    let on_start_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.tooltip.set(None);
            state.update_session(|s| s.set_range(year, s.range().end()));
        }
    };

    let on_end_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.tooltip.set(None);
            state.update_session(|s| s.set_range(s.range().start(), year));
        }
    };

    let on_reset = move |evt: MouseEvent| {
        evt.stop_propagation();
        state.tooltip.set(None);
        state.update_session(|s| s.reset());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                select {
                    id: "startYear",
                    onchange: on_start_change,
                    for year in years.iter().copied() {
                        option {
                            value: "{year}",
                            selected: year == start,
                            "{year}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                select {
                    id: "endYear",
                    onchange: on_end_change,
                    for year in years.iter().copied() {
                        option {
                            value: "{year}",
                            selected: year == end,
                            "{year}"
                        }
                    }
                }
            }
            button {
                id: "resetBtn",
                onclick: on_reset,
                "Reset"
            }
        }
    }
}
