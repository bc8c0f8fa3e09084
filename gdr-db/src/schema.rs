//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the melted mortality tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `countries` - Country display names (primary key) with alpha-3 codes
/// - `causes` - Cause column names with their position in the source header,
///   so selector and pie ordering can reproduce the file's column order
/// - `cause_deaths` - One row per (country, year, cause) death count
/// - `mortality_totals` - Per (country, year) total, female and male aggregates
///
/// Derived quantities (gender splits, the global cause distribution) are
/// computed on-the-fly via SQL against these base tables.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        name TEXT PRIMARY KEY,
        code TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS causes (
        name TEXT PRIMARY KEY,
        position INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS cause_deaths (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        cause TEXT NOT NULL,
        deaths REAL NOT NULL,
        PRIMARY KEY (country, year, cause)
    );
    CREATE INDEX IF NOT EXISTS idx_cause_deaths_country ON cause_deaths(country);
    CREATE INDEX IF NOT EXISTS idx_cause_deaths_cause ON cause_deaths(cause);

    CREATE TABLE IF NOT EXISTS mortality_totals (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        total_deaths REAL NOT NULL,
        female_deaths REAL NOT NULL,
        male_deaths REAL NOT NULL,
        PRIMARY KEY (country, year)
    );
    CREATE INDEX IF NOT EXISTS idx_totals_country ON mortality_totals(country);

    "#
}
