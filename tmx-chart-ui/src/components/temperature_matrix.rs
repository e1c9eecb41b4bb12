//! The matrix drawn as live SVG elements.
//!
//! Everything positional comes from the session's `Scene`; this component
//! only maps scene marks to elements and wires the events. A click on a
//! cell or on the chart background flips the display mode exactly once:
//! cell clicks stop propagation before the background handler sees them.

use crate::state::{AppState, TooltipState};
use dioxus::prelude::*;
use tmx_chart::scene::{fmt_num, GRADIENT_ID};
use tmx_chart::svg::stylesheet;

#[component]
pub fn TemperatureMatrix() -> Element {
    let mut state = use_context::<AppState>();
    let Some(scene) = state.session.read().as_ref().map(|s| s.scene().clone()) else {
        return rsx! {};
    };

    let css = stylesheet(&scene);
    let (w, h) = (fmt_num(scene.width), fmt_num(scene.height));
    let view_box = format!("0 0 {w} {h}");
    let plot_transform = format!(
        "translate({},{})",
        fmt_num(scene.origin.0),
        fmt_num(scene.origin.1)
    );
    let legend_transform = format!(
        "translate({},{})",
        fmt_num(scene.legend.x),
        fmt_num(scene.legend.y)
    );
    let gradient_fill = format!("url(#{GRADIENT_ID})");
    let radius = fmt_num(scene.style.corner_radius);
    let cell_stroke = scene.style.cell_stroke.clone();

    let on_background_click = move |_evt: MouseEvent| {
        state.update_session(|s| {
            s.toggle_mode();
            Ok(())
        });
    };

    rsx! {
        svg {
            width: "{w}",
            height: "{h}",
            view_box: "{view_box}",
            onclick: on_background_click,
            style { "{css}" }
            defs {
                linearGradient {
                    id: GRADIENT_ID,
                    x1: "0%",
                    x2: "0%",
                    y1: "100%",
                    y2: "0%",
                    for stop in scene.legend.stops.iter() {
                        stop {
                            offset: "{fmt_num(stop.offset * 100.0)}%",
                            "stop-color": "{stop.color}",
                        }
                    }
                }
            }
            g {
                transform: "{plot_transform}",
                g {
                    class: "axis",
                    for tick in scene.year_ticks.iter() {
                        text {
                            x: "{fmt_num(tick.x)}",
                            y: "{fmt_num(tick.y)}",
                            "text-anchor": "middle",
                            "{tick.label}"
                        }
                    }
                }
                g {
                    class: "axis",
                    for tick in scene.month_ticks.iter() {
                        text {
                            x: "{fmt_num(tick.x)}",
                            y: "{fmt_num(tick.y)}",
                            dy: "0.32em",
                            "text-anchor": "end",
                            "{tick.label}"
                        }
                    }
                }
                for mark in scene.cells.iter() {
                    g {
                        key: "{mark.cell.key()}",
                        class: "cellG",
                        transform: "translate({fmt_num(mark.x)},{fmt_num(mark.y)})",
                        rect {
                            class: "cell",
                            width: "{fmt_num(mark.width)}",
                            height: "{fmt_num(mark.height)}",
                            rx: "{radius}",
                            ry: "{radius}",
                            fill: "{mark.fill}",
                            stroke: "{cell_stroke}",
                            onmousemove: {
                                let key = mark.cell.key();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    let page = evt.page_coordinates();
                                    let content = state
                                        .session
                                        .read()
                                        .as_ref()
                                        .and_then(|s| s.tooltip_for(&key));
                                    state.tooltip.set(
                                        content.map(|c| TooltipState::at_pointer(c, page.x, page.y)),
                                    );
                                }
                            },
                            onmouseleave: move |_| state.tooltip.set(None),
                            onclick: {
                                let key = mark.cell.key();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    state.update_session(|s| {
                                        s.toggle_mode();
                                        Ok(())
                                    });
                                    let content = state
                                        .session
                                        .read()
                                        .as_ref()
                                        .and_then(|s| s.tooltip_for(&key));
                                    if let (Some(content), Some(tip)) = (content, (state.tooltip)()) {
                                        state.tooltip.set(Some(TooltipState { content, ..tip }));
                                    }
                                }
                            },
                        }
                        if let Some(spark) = mark.sparkline.as_ref() {
                            g {
                                class: "sparkline",
                                "pointer-events": "none",
                                path { class: "maxLine", d: "{spark.max_path}" }
                                path { class: "minLine", d: "{spark.min_path}" }
                            }
                        }
                    }
                }
            }
            g {
                class: "legend",
                transform: "{legend_transform}",
                rect {
                    width: "{fmt_num(scene.legend.width)}",
                    height: "{fmt_num(scene.legend.height)}",
                    rx: "{radius}",
                    ry: "{radius}",
                    fill: "{gradient_fill}",
                }
                for tick in scene.legend.ticks.iter() {
                    line {
                        x1: "{fmt_num(tick.x)}",
                        x2: "{fmt_num(tick.x + 6.0)}",
                        y1: "{fmt_num(tick.y)}",
                        y2: "{fmt_num(tick.y)}",
                        stroke: "currentColor",
                    }
                    text {
                        x: "{fmt_num(tick.x + 9.0)}",
                        y: "{fmt_num(tick.y)}",
                        dy: "0.32em",
                        "{tick.label}"
                    }
                }
                text {
                    class: "legend-title",
                    x: "0",
                    y: "-10",
                    "{scene.legend.title}"
                }
            }
        }
    }
}
