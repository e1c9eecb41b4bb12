//! Interactive state of one matrix view.
//!
//! A session is created once per loaded dataset. The year extent and the
//! color domain are computed at creation and never change afterwards, so a
//! given month keeps its color whatever range is shown. Changing the range
//! re-queries the store and rebuilds the grid; toggling the mode only
//! recolors the existing scene.

use crate::color::ColorScale;
use crate::config::MatrixConfig;
use crate::scene::{build_scene, Scene};
use crate::tooltip::{format_tooltip, TooltipContent};
use anyhow::anyhow;
use tmx_core::display_mode::DisplayMode;
use tmx_core::domain::ValueDomain;
use tmx_core::grid::build_grid;
use tmx_core::month_cell::MonthCell;
use tmx_core::year_range::YearRange;
use tmx_db::Database;

#[derive(Clone)]
pub struct MatrixSession {
    db: Database,
    config: MatrixConfig,
    extent: YearRange,
    scale: ColorScale,
    range: YearRange,
    mode: DisplayMode,
    cells: Vec<MonthCell>,
    scene: Scene,
}

impl MatrixSession {
    /// Start a session over a loaded store, showing the trailing ten years in
    /// MAX mode. Fails when the store holds no usable observations.
    pub fn new(db: Database, config: MatrixConfig) -> anyhow::Result<Self> {
        let extent = db
            .query_year_extent()?
            .ok_or_else(|| anyhow!("no observations loaded"))?;
        let domain = db
            .query_value_domain()?
            .ok_or_else(|| anyhow!("no numeric temperatures in the dataset"))?;
        let scale = ColorScale::new(domain);
        let range = YearRange::default_for(extent);
        let mode = DisplayMode::default();

        let cells = build_grid(&db.query_observations(range)?, range);
        let scene = build_scene(&cells, range, mode, &scale, &config);
        log::info!(
            "[TMX] session: extent {}-{}, domain {:.1}..{:.1}, showing {}-{}",
            extent.start(),
            extent.end(),
            domain.min,
            domain.max,
            range.start(),
            range.end()
        );
        Ok(MatrixSession {
            db,
            config,
            extent,
            scale,
            range,
            mode,
            cells,
            scene,
        })
    }

    /// Load `csv_data` into a fresh in-memory store and start a session on it.
    pub fn from_csv(csv_data: &str, config: MatrixConfig) -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_observations(csv_data)?;
        Self::new(db, config)
    }

    /// Show `start..=end`. The years are swapped if inverted and clamped to
    /// the dataset extent.
    pub fn set_range(&mut self, start: i32, end: i32) -> anyhow::Result<()> {
        let range = YearRange::new(start, end).clamp_to(self.extent);
        self.rebuild(range)
    }

    /// Go back to the trailing ten years. The display mode is kept.
    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.rebuild(YearRange::default_for(self.extent))
    }

    /// Flip between MAX and MIN and recolor every cell.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.scene.recolor(mode, &self.scale);
        log::debug!("[TMX] session: mode {}", mode);
    }

    fn rebuild(&mut self, range: YearRange) -> anyhow::Result<()> {
        let observations = self.db.query_observations(range)?;
        self.cells = build_grid(&observations, range);
        self.scene = build_scene(&self.cells, range, self.mode, &self.scale, &self.config);
        self.range = range;
        log::debug!(
            "[TMX] session: range {}-{} ({} observations)",
            range.start(),
            range.end(),
            observations.len()
        );
        Ok(())
    }

    /// Tooltip for the cell with `key` ("{year}-{month0}") in the current mode.
    pub fn tooltip_for(&self, key: &str) -> Option<TooltipContent> {
        self.cells
            .iter()
            .find(|c| c.key() == key)
            .map(|c| format_tooltip(c, self.mode))
    }

    /// Years offered by the range selectors, ascending.
    pub fn year_options(&self) -> Vec<i32> {
        self.extent.years().collect()
    }

    pub fn extent(&self) -> YearRange {
        self.extent
    }

    pub fn domain(&self) -> ValueDomain {
        self.scale.domain()
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl PartialEq for MatrixSession {
    /// Sessions compare by what they display.
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range && self.mode == other.mode && self.scene == other.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One observation on the 15th of every month from 1990 to 2024, with the
    /// max rising by year and the min fixed per month.
    fn long_csv() -> String {
        let mut csv = String::from("date,max_temperature,min_temperature\n");
        for year in 1990..=2024 {
            for month in 1..=12 {
                let max = 20.0 + (year - 1990) as f64 * 0.2 + month as f64 * 0.5;
                let min = 10.0 + month as f64;
                csv.push_str(&format!("{year}-{month:02}-15,{max:.1},{min:.1}\n"));
            }
        }
        csv
    }

    fn session() -> MatrixSession {
        MatrixSession::from_csv(&long_csv(), MatrixConfig::default()).unwrap()
    }

    #[test]
    fn starts_with_trailing_decade_in_max_mode() {
        let s = session();
        assert_eq!(s.extent(), YearRange::new(1990, 2024));
        assert_eq!(s.range(), YearRange::new(2015, 2024));
        assert_eq!(s.cells().len(), 120);
        assert_eq!(s.mode(), DisplayMode::Max);
        assert_eq!(s.scene().title, "Hong Kong Monthly Temperature (2015–2024)");
        assert_eq!(s.year_options().len(), 35);
    }

    #[test]
    fn short_dataset_shows_everything() {
        let csv = "date,max_temperature,min_temperature\n\
                   2022-03-01,20,15\n2023-08-01,33,28\n";
        let s = MatrixSession::from_csv(csv, MatrixConfig::default()).unwrap();
        assert_eq!(s.range(), YearRange::new(2022, 2023));
        assert_eq!(s.cells().len(), 24);
        assert_eq!(s.cells().iter().filter(|c| c.missing).count(), 22);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let header_only = "date,max_temperature,min_temperature\n";
        assert!(MatrixSession::from_csv(header_only, MatrixConfig::default()).is_err());
    }

    #[test]
    fn infinite_reading_does_not_stretch_domain() {
        let csv = "date,max_temperature,min_temperature\n\
                   2020-01-01,20,10\n2020-07-01,33,27\n2020-08-01,inf,26\n";
        let s = MatrixSession::from_csv(csv, MatrixConfig::default()).unwrap();
        assert!(s.domain().max.is_finite());
        assert_eq!(s.domain(), ValueDomain::new(10.0, 33.0));

        let fill_of = |key: &str| {
            s.scene()
                .cells
                .iter()
                .find(|m| m.cell.key() == key)
                .map(|m| m.fill.clone())
                .unwrap()
        };
        assert_ne!(fill_of("2020-0"), fill_of("2020-6"));
    }

    #[test]
    fn toggle_flips_mode_and_legend() {
        let mut s = session();
        assert_eq!(s.toggle_mode(), DisplayMode::Min);
        assert_eq!(s.scene().legend.title, "Monthly Min (°C)");
        assert_eq!(s.toggle_mode(), DisplayMode::Max);
        assert_eq!(s.scene().legend.title, "Monthly Max (°C)");
    }

    #[test]
    fn toggling_twice_restores_colors() {
        let mut s = session();
        let before = s.scene().clone();
        s.toggle_mode();
        assert_ne!(s.scene().fills(), before.fills());
        s.toggle_mode();
        assert_eq!(*s.scene(), before);
    }

    #[test]
    fn range_changes_do_not_change_colors() {
        let mut s = session();
        let color_in = |s: &MatrixSession| {
            s.scene()
                .cells
                .iter()
                .find(|m| m.cell.key() == "2016-5")
                .map(|m| m.fill.clone())
                .unwrap()
        };
        let before = color_in(&s);
        s.set_range(2000, 2020).unwrap();
        assert_eq!(s.cells().len(), 21 * 12);
        assert_eq!(color_in(&s), before);
        assert_eq!(s.domain(), ValueDomain::new(11.0, 32.8));
    }

    #[test]
    fn inverted_and_out_of_extent_ranges_are_fixed_up() {
        let mut s = session();
        s.set_range(2030, 2020).unwrap();
        assert_eq!(s.range(), YearRange::new(2020, 2024));
        s.set_range(1900, 1900).unwrap();
        assert_eq!(s.range(), YearRange::new(1990, 1990));
        assert_eq!(s.cells().len(), 12);
    }

    #[test]
    fn reset_keeps_mode() {
        let mut s = session();
        s.set_range(1990, 1995).unwrap();
        s.toggle_mode();
        s.reset().unwrap();
        assert_eq!(s.range(), YearRange::new(2015, 2024));
        assert_eq!(s.mode(), DisplayMode::Min);
        assert_eq!(s.scene().legend.title, "Monthly Min (°C)");
    }

    #[test]
    fn tooltip_follows_mode() {
        let mut s = session();
        let tip = s.tooltip_for("2020-6").unwrap();
        assert_eq!(tip.heading, "2020-07");
        assert!(tip.lines[0].emphasized);
        s.toggle_mode();
        let tip = s.tooltip_for("2020-6").unwrap();
        assert!(tip.lines[1].emphasized);
        assert!(s.tooltip_for("1980-0").is_none());
    }
}
