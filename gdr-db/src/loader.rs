//! CSV data loading for populating the in-memory SQLite database.
//!
//! The source file is a wide CSV: identifier columns, then one column per
//! cause of death, then trailing aggregate columns. The loader melts it
//! into long form, one `cause_deaths` row per (country, year, cause) cell,
//! with the aggregates split off into `mortality_totals`. The column split
//! is driven by a [`DatasetLayout`] rather than hard-coded indices.

use crate::Database;
use gdr_core::layout::DatasetLayout;
use rusqlite::params;

impl Database {
    /// Load the wide mortality CSV, melting it into the long-form tables.
    ///
    /// Expected format (with headers, default layout):
    /// `Country/Territory,Code,Year,<cause columns...>,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths`
    ///
    /// A header too narrow to hold both fixed blocks plus one cause column
    /// is an error; the dashboard cannot render anything without data, so
    /// the caller treats it as fatal. Data rows are softer: rows with a ragged
    /// width, an unparseable year, an empty country name or non-numeric
    /// aggregates are skipped and counted, and individual non-numeric cause
    /// cells are skipped without dropping the rest of the row.
    ///
    /// # Example CSV
    /// ```text
    /// Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
    /// Afghanistan,AFG,1990,100,1000,400,600
    /// ```
    pub fn load_mortality(&self, csv_data: &str, layout: &DatasetLayout) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        let cause_names: Vec<String> = layout.cause_columns(&headers)?.to_vec();
        let width = headers.len();
        let total_idx = layout.total_deaths_column(width);
        let female_idx = layout.female_deaths_column(width);
        let male_idx = layout.male_deaths_column(width);

        for (position, name) in cause_names.iter().enumerate() {
            conn.execute(
                "INSERT OR REPLACE INTO causes (name, position) VALUES (?1, ?2)",
                params![name, position as i64],
            )?;
        }

        let mut row_count = 0u32;
        let mut cell_count = 0u32;
        let mut skipped_rows = 0u32;
        let mut skipped_cells = 0u32;
        for result in rdr.records() {
            let r = result?;
            // Aggregate indices are counted from the right of the header,
            // so a ragged row would silently misalign them.
            if r.len() != width {
                skipped_rows += 1;
                continue;
            }

            let country = r.get(layout.country_column).unwrap_or("").trim();
            let code = r.get(layout.code_column).unwrap_or("").trim();
            let year: i64 = match r.get(layout.year_column).unwrap_or("").trim().parse() {
                Ok(y) => y,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };
            if country.is_empty() {
                skipped_rows += 1;
                continue;
            }

            let total: f64 = match r.get(total_idx).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };
            let female: f64 = match r.get(female_idx).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };
            let male: f64 = match r.get(male_idx).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };

            conn.execute(
                "INSERT OR REPLACE INTO countries (name, code) VALUES (?1, ?2)",
                params![country, code],
            )?;
            conn.execute(
                "INSERT OR REPLACE INTO mortality_totals
                 (country, year, total_deaths, female_deaths, male_deaths)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![country, year, total, female, male],
            )?;

            for (position, cause) in cause_names.iter().enumerate() {
                let cell = r
                    .get(layout.identifier_columns + position)
                    .unwrap_or("")
                    .trim();
                let deaths: f64 = match cell.parse() {
                    Ok(v) => v,
                    Err(_) => {
                        skipped_cells += 1;
                        continue;
                    }
                };
                conn.execute(
                    "INSERT OR REPLACE INTO cause_deaths (country, year, cause, deaths)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![country, year, cause, deaths],
                )?;
                cell_count += 1;
            }
            row_count += 1;
        }
        log::info!(
            "[GDR Debug] loader: Loaded {} country-years and {} cause values, skipped {} rows and {} cells",
            row_count,
            cell_count,
            skipped_rows,
            skipped_cells
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use gdr_core::error::CoreError;
    use gdr_core::layout::DatasetLayout;

    #[test]
    fn load_mortality_melts_wide_rows() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Code,Year,Meningitis,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,2159,93,10000,4000,6000
Afghanistan,AFG,2000,2892,1532,12000,5000,7000
";
        db.load_mortality(csv, &DatasetLayout::default()).unwrap();

        let conn = db.conn.borrow();
        let cells: i64 = conn
            .query_row("SELECT COUNT(*) FROM cause_deaths", [], |row| row.get(0))
            .unwrap();
        assert_eq!(cells, 4, "2 rows x 2 causes should melt into 4 cells");

        let totals: i64 = conn
            .query_row("SELECT COUNT(*) FROM mortality_totals", [], |row| row.get(0))
            .unwrap();
        assert_eq!(totals, 2);

        let countries: i64 = conn
            .query_row("SELECT COUNT(*) FROM countries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(countries, 1, "Repeated country rows should collapse to one");

        let deaths: f64 = conn
            .query_row(
                "SELECT deaths FROM cause_deaths
                 WHERE country = 'Afghanistan' AND year = 2000 AND cause = 'Malaria'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((deaths - 1532.0).abs() < 0.01);

        let female: f64 = conn
            .query_row(
                "SELECT female_deaths FROM mortality_totals
                 WHERE country = 'Afghanistan' AND year = 1990",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((female - 4000.0).abs() < 0.01);
    }

    #[test]
    fn load_mortality_records_cause_positions() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Code,Year,Meningitis,Malaria,Drowning,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,1,2,3,10,4,6
";
        db.load_mortality(csv, &DatasetLayout::default()).unwrap();

        let conn = db.conn.borrow();
        let position: i64 = conn
            .query_row(
                "SELECT position FROM causes WHERE name = 'Drowning'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(position, 2, "Position should index into the cause block");
    }

    #[test]
    fn load_mortality_replaces_on_conflict() {
        let db = Database::new().unwrap();
        let csv1 = "\
Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,100,1000,400,600
";
        let csv2 = "\
Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,150,1100,450,650
";
        db.load_mortality(csv1, &DatasetLayout::default()).unwrap();
        db.load_mortality(csv2, &DatasetLayout::default()).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM cause_deaths", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Should have 1 row after upsert");

        let deaths: f64 = conn
            .query_row("SELECT deaths FROM cause_deaths", [], |row| row.get(0))
            .unwrap();
        assert!((deaths - 150.0).abs() < 0.01);
    }

    #[test]
    fn load_mortality_rejects_header_without_cause_columns() {
        let db = Database::new().unwrap();
        // Identifier and aggregate blocks only, no room for a single cause.
        let csv = "\
Country/Territory,Code,Year,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,1000,400,600
";
        let err = db
            .load_mortality(csv, &DatasetLayout::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::ShortHeader {
                found: 6,
                needed: 7
            })
        );
    }

    #[test]
    fn load_mortality_skips_non_numeric_cells() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Code,Year,Meningitis,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,---,93,10000,4000,6000
";
        db.load_mortality(csv, &DatasetLayout::default()).unwrap();

        let conn = db.conn.borrow();
        let cells: i64 = conn
            .query_row("SELECT COUNT(*) FROM cause_deaths", [], |row| row.get(0))
            .unwrap();
        assert_eq!(cells, 1, "Only the numeric cell should load");

        // The row's aggregates still load even with a bad cause cell.
        let totals: i64 = conn
            .query_row("SELECT COUNT(*) FROM mortality_totals", [], |row| row.get(0))
            .unwrap();
        assert_eq!(totals, 1);
    }

    #[test]
    fn load_mortality_skips_invalid_rows() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,AFG,1990,100,1000,400,600
,AFG,1991,100,1000,400,600
Afghanistan,AFG,notayear,100,1000,400,600
Afghanistan,AFG,1992,100,n/a,400,600
Afghanistan,AFG,1993,100
Afghanistan,AFG,1994,200,2000,800,1200
";
        db.load_mortality(csv, &DatasetLayout::default()).unwrap();

        let conn = db.conn.borrow();
        let totals: i64 = conn
            .query_row("SELECT COUNT(*) FROM mortality_totals", [], |row| row.get(0))
            .unwrap();
        assert_eq!(
            totals, 2,
            "Empty country, bad year, bad aggregate and ragged rows should skip"
        );
    }

    #[test]
    fn load_mortality_honors_a_custom_layout() {
        let db = Database::new().unwrap();
        // Region column widens the identifier block to four.
        let csv = "\
Country/Territory,Region,Code,Year,Malaria,Total_Deaths,Estimated_Female_Deaths,Estimated_Male_Deaths
Afghanistan,South Asia,AFG,1990,100,1000,400,600
";
        let layout = DatasetLayout {
            identifier_columns: 4,
            country_column: 0,
            code_column: 2,
            year_column: 3,
            aggregate_columns: 3,
        };
        db.load_mortality(csv, &layout).unwrap();

        let conn = db.conn.borrow();
        let deaths: f64 = conn
            .query_row(
                "SELECT deaths FROM cause_deaths WHERE cause = 'Malaria'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((deaths - 100.0).abs() < 0.01);

        let causes: i64 = conn
            .query_row("SELECT COUNT(*) FROM causes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(causes, 1, "Region must not leak into the cause list");
    }
}
