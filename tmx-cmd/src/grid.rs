//! `grid`: print the month cells of a range.

use std::io::Write;
use tmx_chart::session::MatrixSession;
use tmx_core::month_cell::MonthCell;

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:>6.1}", v),
        _ => format!("{:>6}", "-"),
    }
}

/// One line per cell: label, monthly max, monthly min and day count.
pub fn format_cell(cell: &MonthCell) -> String {
    if cell.missing {
        return format!("{}  missing", cell.label());
    }
    format!(
        "{}  max {}  min {}  days {:>2}",
        cell.label(),
        format_value(cell.month_max),
        format_value(cell.month_min),
        cell.daily.len()
    )
}

/// Write the grid as text lines, or as a JSON array when `json` is set.
pub fn run_grid<W: Write>(session: &MatrixSession, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, session.cells())?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{}", session.scene().title)?;
    for cell in session.cells() {
        writeln!(out, "{}", format_cell(cell))?;
    }
    Ok(())
}
