//! `summary`: monthly aggregates computed in SQL.

use std::io::Write;
use tmx_core::year_range::YearRange;
use tmx_db::models::MonthSummary;
use tmx_db::Database;
use tmx_utils::dates;

fn format_summary(summary: &MonthSummary) -> String {
    let value = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v));
    format!(
        "{}\t{}\t{}\t{}",
        dates::year_month_label(summary.year, summary.month),
        summary.days,
        value(summary.month_max),
        value(summary.month_min)
    )
}

/// Tab-separated rows for every month in `range` that has data.
pub fn run_summary<W: Write>(db: &Database, range: YearRange, out: &mut W) -> anyhow::Result<()> {
    let summaries = db.query_monthly_summaries(range)?;
    log::debug!(
        "[TMX] summary: {} months with data in {}-{}",
        summaries.len(),
        range.start(),
        range.end()
    );
    writeln!(out, "month\tdays\tmax\tmin")?;
    for summary in &summaries {
        writeln!(out, "{}", format_summary(summary))?;
    }
    Ok(())
}

/// `start..=end` with missing bounds taken from the default range.
pub fn resolve_range(db: &Database, start: Option<i32>, end: Option<i32>) -> anyhow::Result<YearRange> {
    let extent = db
        .query_year_extent()?
        .ok_or_else(|| anyhow::anyhow!("no observations loaded"))?;
    let default = YearRange::default_for(extent);
    Ok(YearRange::new(
        start.unwrap_or(default.start()),
        end.unwrap_or(default.end()),
    )
    .clamp_to(extent))
}
