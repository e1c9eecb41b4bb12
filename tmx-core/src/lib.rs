//! Core types for the temperature matrix: the daily row parser, the
//! year x month grid builder and the session-wide value domain.

pub mod display_mode;
pub mod domain;
pub mod grid;
pub mod month_cell;
pub mod observation;
pub mod year_range;
