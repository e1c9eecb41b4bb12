//! Command implementations for the temperature matrix CLI.
//!
//! Every command reads a daily CSV (optionally `.gz`), loads it into the
//! in-memory store and works from there: `render` writes the matrix as SVG
//! or PNG, `grid` and `summary` print the monthly data, `tooltip` prints the
//! hover text of one month.

use clap::Subcommand;
use std::path::PathBuf;
use tmx_core::display_mode::DisplayMode;

pub mod grid;
pub mod input;
pub mod render;
pub mod summary;
pub mod tooltip;

#[derive(Subcommand)]
pub enum Command {
    /// Render the matrix to an SVG or PNG file
    Render {
        /// Daily temperature CSV (date,max_temperature,min_temperature), plain or .gz
        #[arg(short, long)]
        input: PathBuf,

        /// First year shown (defaults to ten years before the last)
        #[arg(long)]
        start: Option<i32>,

        /// Last year shown (defaults to the dataset's last year)
        #[arg(long)]
        end: Option<i32>,

        /// Value used to color cells: max or min
        #[arg(long, default_value_t = DisplayMode::Max)]
        mode: DisplayMode,

        /// Output file; the extension (.svg or .png) picks the format
        #[arg(short, long)]
        output: PathBuf,

        /// JSON layout config; keys not given keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the month cells of a year range
    Grid {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        start: Option<i32>,

        #[arg(long)]
        end: Option<i32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print monthly max/min aggregates computed in SQL
    Summary {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        start: Option<i32>,

        #[arg(long)]
        end: Option<i32>,
    },

    /// Print the tooltip text of one month
    Tooltip {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long)]
        year: i32,

        /// Month number, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long, default_value_t = DisplayMode::Max)]
        mode: DisplayMode,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Render {
            input,
            start,
            end,
            mode,
            output,
            config,
        } => {
            let config = input::load_config(config.as_deref())?;
            let mut session = input::open_session(&input, start, end, config)?;
            render::run_render(&mut session, mode, &output)
        }
        Command::Grid {
            input,
            start,
            end,
            json,
        } => {
            let session = input::open_session(&input, start, end, Default::default())?;
            grid::run_grid(&session, json, &mut out)
        }
        Command::Summary { input, start, end } => {
            let db = input::open_database(&input)?;
            let range = summary::resolve_range(&db, start, end)?;
            summary::run_summary(&db, range, &mut out)
        }
        Command::Tooltip {
            input,
            year,
            month,
            mode,
        } => {
            let mut session = input::open_session(&input, None, None, Default::default())?;
            tooltip::run_tooltip(&mut session, year, month, mode, &mut out)
        }
    }
}
