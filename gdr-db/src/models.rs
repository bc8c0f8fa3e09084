//! Query result model structs for mortality data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Country metadata for the country selector and flag lookup.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryInfo {
    /// Display name as it appears in the dataset (e.g. "United States").
    pub name: String,
    /// ISO alpha-3 code carried in the dataset (e.g. "USA"). Not used for
    /// flag lookup, which resolves alpha-2 codes from the display name.
    pub code: String,
}

/// A single (year, value) pair used for trend and bar chart data points.
///
/// The `value` field is a death count for trend and cause charts, or a
/// derived gender estimate for the gender comparison chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i64,
    pub value: f64,
}

/// One slice of the global cause-of-death distribution pie.
///
/// `total_deaths` is the cause's column summed over every country and year
/// in the dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CauseShare {
    pub cause: String,
    pub total_deaths: f64,
}
