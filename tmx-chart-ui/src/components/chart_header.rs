//! Chart header component with the range title and a usage hint.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title, e.g. "Hong Kong Monthly Temperature (2015–2024)"
    pub title: String,
    /// Short hint shown under the title
    #[props(default = String::new())]
    pub hint: String,
}

/// Header for the chart showing the title and an optional hint line.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; opacity: 0.7;",
                    "{props.hint}"
                }
            }
        }
    }
}
