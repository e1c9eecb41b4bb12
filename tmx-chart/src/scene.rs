//! Toolkit-free description of one rendered matrix.
//!
//! [`build_scene`] is a pure function of the month cells, the year range, the
//! display mode, the color scale and the layout config. Positions inside
//! [`Scene::cells`], [`Scene::year_ticks`] and [`Scene::month_ticks`] are
//! relative to the plot origin (the top-left margin corner); sparkline paths
//! are relative to their cell. The legend is positioned in canvas
//! coordinates.

use crate::color::ColorScale;
use crate::config::MatrixConfig;
use crate::scale::{year_tick_step, BandScale, LinearScale};
use tmx_core::display_mode::DisplayMode;
use tmx_core::domain::extent;
use tmx_core::grid::MONTHS_PER_YEAR;
use tmx_core::month_cell::MonthCell;
use tmx_core::year_range::YearRange;
use tmx_utils::dates;

/// Id of the legend's `<linearGradient>`.
pub const GRADIENT_ID: &str = "tempGrad";

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// SVG path data for the two sparkline series of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub max_path: String,
    pub min_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellMark {
    pub cell: MonthCell,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color as "#rrggbb".
    pub fill: String,
    /// Present only for non-missing cells with at least one numeric value.
    pub sparkline: Option<Sparkline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position from the bottom of the legend bar, 0.0..=1.0.
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub stops: Vec<GradientStop>,
    /// Tick positions relative to the legend origin.
    pub ticks: Vec<AxisTick>,
}

/// Styling the renderers need alongside the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub corner_radius: f64,
    pub cell_stroke: String,
    pub max_line_color: String,
    pub min_line_color: String,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub range: YearRange,
    pub mode: DisplayMode,
    /// Translation of the plot group (left and top margins).
    pub origin: (f64, f64),
    pub year_ticks: Vec<AxisTick>,
    pub month_ticks: Vec<AxisTick>,
    pub cells: Vec<CellMark>,
    pub legend: Legend,
    pub style: SceneStyle,
    missing_fill: String,
}

/// Format a coordinate compactly: at most two decimals, no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn cell_fill(cell: &MonthCell, mode: DisplayMode, scale: &ColorScale, missing_fill: &str) -> String {
    mode.value_of(cell)
        .and_then(|v| scale.color_of(v))
        .map(|c| c.to_hex())
        .unwrap_or_else(|| missing_fill.to_string())
}

/// Path through the finite points; a NaN starts a new segment.
fn line_path<I: IntoIterator<Item = (f64, f64)>>(points: I) -> String {
    let mut path = String::new();
    let mut pen_down = false;
    for (x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        path.push(if pen_down { 'L' } else { 'M' });
        path.push_str(&fmt_num(x));
        path.push(',');
        path.push_str(&fmt_num(y));
        pen_down = true;
    }
    path
}

/// Dual-line sparkline for a present cell, scaled into a `width` x `height`
/// box inset by `pad`.
pub fn build_sparkline(cell: &MonthCell, width: f64, height: f64, pad: f64) -> Option<Sparkline> {
    if cell.missing {
        return None;
    }
    let (first_day, last_day) = cell.day_extent()?;
    let temps = extent(cell.daily.iter().flat_map(|p| [p.min, p.max]))?;

    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let sx = LinearScale::new((first_day as f64, last_day as f64), (pad, pad + inner_w));
    let sy = LinearScale::new(temps, (pad + inner_h, pad));

    let max_path = line_path(cell.daily.iter().map(|p| (sx.apply(p.day as f64), sy.apply(p.max))));
    let min_path = line_path(cell.daily.iter().map(|p| (sx.apply(p.day as f64), sy.apply(p.min))));
    Some(Sparkline { max_path, min_path })
}

/// Lay out `cells` (as produced by the grid builder for `range`) into a scene.
pub fn build_scene(
    cells: &[MonthCell],
    range: YearRange,
    mode: DisplayMode,
    scale: &ColorScale,
    config: &MatrixConfig,
) -> Scene {
    let margin = config.margin;
    let year_count = range.len();
    let month_count = MONTHS_PER_YEAR as usize;

    let width = margin.left + year_count as f64 * config.cell_width + margin.right + config.extra_right;
    let height = margin.top + month_count as f64 * config.cell_height + margin.bottom;

    let x = BandScale::new(
        year_count,
        0.0,
        year_count as f64 * config.cell_width,
        config.padding_inner,
    );
    let y = BandScale::new(
        month_count,
        0.0,
        month_count as f64 * config.cell_height,
        config.padding_inner,
    );

    let step = year_tick_step(year_count);
    let year_ticks = range
        .years()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .filter_map(|(i, year)| {
            x.center(i).map(|cx| AxisTick {
                x: cx,
                y: -8.0,
                label: year.to_string(),
            })
        })
        .collect();

    let month_ticks = (0..month_count)
        .filter_map(|m| {
            y.center(m).map(|cy| AxisTick {
                x: -8.0,
                y: cy,
                label: dates::month_name(m as u32).to_string(),
            })
        })
        .collect();

    let marks = cells
        .iter()
        .filter(|cell| range.contains(cell.year))
        .filter_map(|cell| {
            let cx = x.position((cell.year - range.start()) as usize)?;
            let cy = y.position(cell.month as usize)?;
            Some(CellMark {
                cell: cell.clone(),
                x: cx,
                y: cy,
                width: x.bandwidth(),
                height: y.bandwidth(),
                fill: cell_fill(cell, mode, scale, &config.missing_fill),
                sparkline: build_sparkline(cell, x.bandwidth(), y.bandwidth(), config.spark_pad),
            })
        })
        .collect();

    let domain = scale.domain();
    let legend_scale = LinearScale::new((domain.min, domain.max), (config.legend_height, 0.0));
    let legend = Legend {
        x: width - margin.right - config.legend_offset,
        y: margin.top,
        width: config.legend_width,
        height: config.legend_height,
        title: mode.legend_title().to_string(),
        stops: scale
            .gradient(config.gradient_steps)
            .into_iter()
            .map(|(offset, color)| GradientStop {
                offset,
                color: color.to_hex(),
            })
            .collect(),
        ticks: legend_scale
            .ticks(config.legend_ticks)
            .into_iter()
            .map(|v| AxisTick {
                x: config.legend_width + 10.0,
                y: legend_scale.apply(v),
                label: fmt_num(v),
            })
            .collect(),
    };

    Scene {
        width,
        height,
        title: config.title(range.start(), range.end()),
        range,
        mode,
        origin: (margin.left, margin.top),
        year_ticks,
        month_ticks,
        cells: marks,
        legend,
        style: SceneStyle {
            corner_radius: config.corner_radius,
            cell_stroke: config.cell_stroke.clone(),
            max_line_color: config.max_line_color.clone(),
            min_line_color: config.min_line_color.clone(),
            font_family: config.font_family.clone(),
        },
        missing_fill: config.missing_fill.clone(),
    }
}

impl Scene {
    /// Switch display mode in place: recolor every cell and retitle the
    /// legend. Geometry and sparklines are untouched.
    pub fn recolor(&mut self, mode: DisplayMode, scale: &ColorScale) {
        self.mode = mode;
        for mark in &mut self.cells {
            mark.fill = cell_fill(&mark.cell, mode, scale, &self.missing_fill);
        }
        self.legend.title = mode.legend_title().to_string();
    }

    /// Whole-pixel size of an export canvas with `pad_x`/`pad_y` extra room.
    pub fn canvas_size(&self, pad_x: f64, pad_y: f64) -> (u32, u32) {
        (
            (self.width + pad_x).ceil() as u32,
            (self.height + pad_y).ceil() as u32,
        )
    }

    pub fn missing_fill(&self) -> &str {
        &self.missing_fill
    }

    /// Fill colors in cell order.
    pub fn fills(&self) -> Vec<&str> {
        self.cells.iter().map(|m| m.fill.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tmx_core::domain::ValueDomain;
    use tmx_core::grid::build_grid;
    use tmx_core::observation::{DailyObservation, DailyPoint};

    fn obs(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyObservation {
        DailyObservation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    fn sample() -> Vec<DailyObservation> {
        vec![
            obs(2020, 1, 1, 20.0, 14.0),
            obs(2020, 1, 2, 22.0, 13.0),
            obs(2020, 7, 1, 33.0, 28.0),
            obs(2021, 7, 4, 34.0, 27.0),
        ]
    }

    fn scene_for(range: YearRange, mode: DisplayMode) -> Scene {
        let data = sample();
        let scale = ColorScale::new(ValueDomain::from_observations(&data).unwrap());
        build_scene(&build_grid(&data, range), range, mode, &scale, &MatrixConfig::default())
    }

    #[test]
    fn canvas_size_follows_year_count() {
        let scene = scene_for(YearRange::new(2020, 2021), DisplayMode::Max);
        assert_eq!(scene.width, 90.0 + 2.0 * 70.0 + 90.0 + 120.0);
        assert_eq!(scene.height, 30.0 + 12.0 * 48.0 + 30.0);
        assert_eq!(scene.cells.len(), 24);
        assert_eq!(scene.title, "Hong Kong Monthly Temperature (2020–2021)");
    }

    #[test]
    fn cells_are_placed_by_year_column_and_month_row() {
        let scene = scene_for(YearRange::new(2020, 2021), DisplayMode::Max);
        let first = &scene.cells[0];
        let next_year = &scene.cells[12];
        let next_month = &scene.cells[1];
        assert!(first.x.abs() < 1e-9);
        assert!(first.y.abs() < 1e-9);
        assert!(next_year.x > first.x);
        assert_eq!(next_year.y, first.y);
        assert!(next_month.y > first.y);
        assert_eq!(next_month.x, first.x);
    }

    #[test]
    fn missing_cells_use_neutral_fill_and_no_sparkline() {
        let scene = scene_for(YearRange::new(2020, 2020), DisplayMode::Max);
        let feb = &scene.cells[1];
        assert!(feb.cell.missing);
        assert_eq!(feb.fill, "#f3f3f3");
        assert!(feb.sparkline.is_none());

        let jan = &scene.cells[0];
        assert_ne!(jan.fill, "#f3f3f3");
        assert!(jan.sparkline.is_some());
    }

    #[test]
    fn recolor_twice_restores_fills() {
        let data = sample();
        let scale = ColorScale::new(ValueDomain::from_observations(&data).unwrap());
        let range = YearRange::new(2020, 2021);
        let mut scene = build_scene(
            &build_grid(&data, range),
            range,
            DisplayMode::Max,
            &scale,
            &MatrixConfig::default(),
        );
        let before: Vec<String> = scene.fills().into_iter().map(String::from).collect();

        scene.recolor(DisplayMode::Min, &scale);
        assert_eq!(scene.legend.title, "Monthly Min (°C)");
        assert_eq!(scene.cells[0].fill, scale.color_of(13.0).unwrap().to_hex());
        assert_eq!(scene.cells.len(), 24);

        scene.recolor(DisplayMode::Max, &scale);
        let restored: Vec<String> = scene.fills().into_iter().map(String::from).collect();
        assert_eq!(before, restored);
        assert_eq!(scene.legend.title, "Monthly Max (°C)");
    }

    #[test]
    fn recolor_matches_fresh_build() {
        let mut toggled = scene_for(YearRange::new(2020, 2021), DisplayMode::Max);
        let data = sample();
        let scale = ColorScale::new(ValueDomain::from_observations(&data).unwrap());
        toggled.recolor(DisplayMode::Min, &scale);
        assert_eq!(toggled, scene_for(YearRange::new(2020, 2021), DisplayMode::Min));
    }

    #[test]
    fn same_cell_same_color_across_ranges() {
        let narrow = scene_for(YearRange::new(2020, 2020), DisplayMode::Max);
        let wide = scene_for(YearRange::new(2018, 2021), DisplayMode::Max);
        let jan_narrow = narrow.cells.iter().find(|m| m.cell.key() == "2020-0").unwrap();
        let jan_wide = wide.cells.iter().find(|m| m.cell.key() == "2020-0").unwrap();
        assert_eq!(jan_narrow.fill, jan_wide.fill);
    }

    #[test]
    fn year_ticks_skip_on_wide_ranges() {
        assert_eq!(scene_for(YearRange::new(2011, 2020), DisplayMode::Max).year_ticks.len(), 10);
        let fifteen = scene_for(YearRange::new(2006, 2020), DisplayMode::Max);
        assert_eq!(fifteen.year_ticks.len(), 8);
        assert_eq!(fifteen.year_ticks[1].label, "2008");
        let thirty = scene_for(YearRange::new(1991, 2020), DisplayMode::Max);
        assert_eq!(thirty.year_ticks.len(), 8);
        assert_eq!(thirty.year_ticks[1].label, "1995");
    }

    #[test]
    fn month_ticks_are_names() {
        let scene = scene_for(YearRange::new(2020, 2020), DisplayMode::Max);
        assert_eq!(scene.month_ticks.len(), 12);
        assert_eq!(scene.month_ticks[0].label, "January");
        assert_eq!(scene.month_ticks[11].label, "December");
    }

    #[test]
    fn legend_geometry_and_stops() {
        let scene = scene_for(YearRange::new(2020, 2021), DisplayMode::Max);
        assert_eq!(scene.legend.x, scene.width - 90.0 - 80.0);
        assert_eq!(scene.legend.y, 30.0);
        assert_eq!(scene.legend.stops.len(), 11);
        assert_eq!(scene.legend.title, "Monthly Max (°C)");
        // Domain 13..34: ticks every 5 degrees from 15 to 30.
        let labels: Vec<&str> = scene.legend.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["15", "20", "25", "30"]);
        assert!(scene.legend.ticks[0].y > scene.legend.ticks[3].y);
    }

    #[test]
    fn sparkline_spans_inner_box() {
        let cell = MonthCell::from_points(
            2020,
            0,
            vec![
                DailyPoint { day: 1, max: 30.0, min: 22.0 },
                DailyPoint { day: 2, max: 31.0, min: 21.0 },
            ],
        );
        let spark = build_sparkline(&cell, 60.0, 40.0, 6.0).unwrap();
        // x: day 1 -> 6, day 2 -> 54; y: 31 -> 6, 21 -> 34
        assert_eq!(spark.max_path, "M6,8.8L54,6");
        assert_eq!(spark.min_path, "M6,31.2L54,34");
    }

    #[test]
    fn single_day_sparkline_sits_in_the_middle() {
        let cell = MonthCell::from_points(
            2020,
            0,
            vec![DailyPoint { day: 9, max: 25.0, min: 25.0 }],
        );
        let spark = build_sparkline(&cell, 60.0, 40.0, 6.0).unwrap();
        assert_eq!(spark.max_path, "M30,20");
        assert_eq!(spark.min_path, "M30,20");
    }

    #[test]
    fn nan_points_break_the_line() {
        let cell = MonthCell::from_points(
            2020,
            0,
            vec![
                DailyPoint { day: 1, max: 30.0, min: 20.0 },
                DailyPoint { day: 2, max: f64::NAN, min: 20.0 },
                DailyPoint { day: 3, max: 30.0, min: 20.0 },
            ],
        );
        let spark = build_sparkline(&cell, 60.0, 40.0, 6.0).unwrap();
        assert_eq!(spark.max_path.matches('M').count(), 2);
        assert!(!spark.max_path.contains("NaN"));
        assert_eq!(spark.min_path.matches('M').count(), 1);
    }

    #[test]
    fn all_nan_month_has_no_sparkline() {
        let cell = MonthCell::from_points(
            2020,
            0,
            vec![DailyPoint { day: 1, max: f64::NAN, min: f64::NAN }],
        );
        assert!(build_sparkline(&cell, 60.0, 40.0, 6.0).is_none());
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(6.0), "6");
        assert_eq!(fmt_num(11.6), "11.6");
        assert_eq!(fmt_num(1.005), "1");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(59.5), "59.5");
    }
}
