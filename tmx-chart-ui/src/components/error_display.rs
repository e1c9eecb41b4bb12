//! Shown in place of the matrix when the data could not be loaded or a
//! range change failed.

use dioxus::prelude::*;

/// Split an alternate-formatted `anyhow` chain ("outer: inner: root") into
/// one line per cause. Blank parts are dropped.
pub fn error_lines(message: &str) -> Vec<&str> {
    message
        .split(": ")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Translucent red box; text color follows the page theme.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let lines = error_lines(&props.message);
    let (head, causes) = lines.split_first().map_or(("unknown error", &[][..]), |(h, c)| (*h, c));

    rsx! {
        div {
            id: "load-error",
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: rgba(198,40,40,0.12); border: 1px solid rgba(198,40,40,0.4); border-radius: 4px;",
            strong { "Could not draw the matrix: " }
            "{head}"
            for cause in causes.iter() {
                div {
                    style: "font-size: 12px; opacity: 0.7; margin-top: 4px;",
                    "caused by: {cause}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_chain_becomes_one_line_per_cause() {
        let err = anyhow::anyhow!("dataset has no rows")
            .context("Failed to query observations")
            .context("Failed to build the matrix");
        let message = format!("{err:#}");
        assert_eq!(
            error_lines(&message),
            vec![
                "Failed to build the matrix",
                "Failed to query observations",
                "dataset has no rows"
            ]
        );
    }

    #[test]
    fn plain_message_is_a_single_line() {
        assert_eq!(error_lines("dataset is empty"), vec!["dataset is empty"]);
        assert!(error_lines("  ").is_empty());
    }
}
