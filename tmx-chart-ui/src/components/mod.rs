//! Reusable Dioxus RSX components for the temperature matrix app.

mod chart_container;
mod chart_header;
mod download_button;
mod error_display;
mod loading_spinner;
mod mode_indicator;
mod temperature_matrix;
mod theme_toggle;
mod tooltip_layer;
mod year_range_picker;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use mode_indicator::ModeIndicator;
pub use temperature_matrix::TemperatureMatrix;
pub use theme_toggle::ThemeToggle;
pub use tooltip_layer::TooltipLayer;
pub use year_range_picker::YearRangePicker;
