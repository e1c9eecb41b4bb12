//! In-memory SQLite store for daily temperature observations.
//!
//! The chart app and the CLI both load the daily CSV into this store once,
//! then ask it for the dataset's year extent, the global value domain and
//! the observations of a selected year range.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the chart app, or
//!   read from disk by the CLI
//! - Typed query methods returning `tmx-core` types or serializable summaries
//!
//! # Usage
//!
//! ```rust
//! use tmx_core::year_range::YearRange;
//! use tmx_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_observations("date,max_temperature,min_temperature\n2022-01-01,19.5,13.0\n").unwrap();
//!
//! let extent = db.query_year_extent().unwrap().unwrap();
//! let rows = db.query_observations(extent).unwrap();
//! assert_eq!(rows.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `observations` - one row per CSV day (duplicates allowed). Temperatures
//!   that did not parse are stored as NULL and read back as NaN.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the daily temperature series.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_observations`]
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
