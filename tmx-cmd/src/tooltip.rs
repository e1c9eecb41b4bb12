//! `tooltip`: print the hover text of one month.

use anyhow::bail;
use std::io::Write;
use tmx_chart::session::MatrixSession;
use tmx_core::display_mode::DisplayMode;

/// Print the tooltip for `year`/`month` (1-12) as `mode` would show it.
pub fn run_tooltip<W: Write>(
    session: &mut MatrixSession,
    year: i32,
    month: u32,
    mode: DisplayMode,
    out: &mut W,
) -> anyhow::Result<()> {
    if !(1..=12).contains(&month) {
        bail!("month must be 1-12, got {}", month);
    }
    let extent = session.extent();
    if !extent.contains(year) {
        bail!(
            "{} is outside the dataset ({}-{})",
            year,
            extent.start(),
            extent.end()
        );
    }
    if !session.range().contains(year) {
        session.set_range(year, year)?;
    }
    session.set_mode(mode);

    let key = format!("{}-{}", year, month - 1);
    match session.tooltip_for(&key) {
        Some(tip) => writeln!(out, "{}", tip)?,
        None => bail!("no cell for {}", key),
    }
    Ok(())
}
