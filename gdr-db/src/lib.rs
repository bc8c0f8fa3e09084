//! In-memory SQLite database layer for global mortality data.
//!
//! This crate loads the wide mortality CSV (one column per cause of death)
//! into an in-memory SQLite database in long form and exposes typed query
//! methods for consumption by the Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - The wide CSV is melted at load time: one `cause_deaths` row per
//!   (country, year, cause) cell, aggregates split off into `mortality_totals`
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use gdr_db::Database;
//! use gdr_core::layout::DatasetLayout;
//!
//! let db = Database::new().unwrap();
//!
//! // Load the wide CSV (fetched at runtime by the dashboard binary)
//! db.load_mortality(
//!     "Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths\n\
//!      Afghanistan,AFG,1990,100,1000,400,600\n",
//!     &DatasetLayout::default(),
//! )
//! .unwrap();
//!
//! // Query typed results
//! let countries = db.query_countries().unwrap();
//! let trend = db.query_death_trend("Afghanistan").unwrap();
//! assert_eq!(countries.len(), 1);
//! assert_eq!(trend.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `countries` - Distinct country display names with their alpha-3 codes
//! - `causes` - Cause column names with their original column positions
//! - `cause_deaths` - One row per (country, year, cause) death count
//! - `mortality_totals` - Per (country, year) total/female/male aggregates
//!
//! Derived quantities (gender splits of a cause, the global cause
//! distribution) are computed on-the-fly via SQL against these base tables.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the global mortality dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use gdr_db::Database;
/// use gdr_core::layout::DatasetLayout;
///
/// let db = Database::new().unwrap();
/// db.load_mortality(
///     "Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths\n\
///      Afghanistan,AFG,1990,100,1000,400,600\n",
///     &DatasetLayout::default(),
/// )
/// .unwrap();
/// let countries = db.query_countries().unwrap();
/// assert_eq!(countries[0].name, "Afghanistan");
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use [`load_mortality`](Self::load_mortality)
    /// to populate it from CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
