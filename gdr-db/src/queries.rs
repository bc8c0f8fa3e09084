//! Typed query methods for retrieving mortality data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.
//!
//! # Gender Split Convention
//!
//! The dataset does not record per-cause gender counts. The gender
//! comparison chart instead derives them: the country-year's female (or
//! male) share of all deaths is applied to the cause's death count,
//! `(gender_estimate / total_deaths) * cause_deaths`. Country-years with a
//! zero total report the derived value as a flat 0.0 instead of a division
//! error.

use crate::models::{CauseShare, CountryInfo, YearValue};
use crate::Database;
use gdr_core::gender::{check_gender_applies, Gender};
use rusqlite::params;

impl Database {
    // ───────────────────── Selector Queries ─────────────────────

    /// Get the list of countries for the country selector.
    ///
    /// Country names are distinct (they key the `countries` table) and
    /// ordered lexicographically, matching the selector's display order.
    pub fn query_countries(&self) -> anyhow::Result<Vec<CountryInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, code FROM countries
             ORDER BY name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryInfo {
                    name: row.get(0)?,
                    code: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_countries returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the list of cause names for the cause selector.
    ///
    /// Ordered by the causes' original column position so the selector
    /// reproduces the source file's column order.
    pub fn query_causes(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name FROM causes
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_causes returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) year range across all loaded country-years.
    pub fn query_year_range(&self) -> anyhow::Result<(i64, i64)> {
        let conn = self.conn.borrow();
        let (min_year, max_year) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM mortality_totals",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )?;
        log::info!(
            "[GDR Debug] query: query_year_range returned ({}, {})",
            min_year,
            max_year
        );
        Ok((min_year, max_year))
    }

    // ───────────────────── Chart Queries ─────────────────────

    /// Get total deaths by year for a country (for the trend chart).
    ///
    /// Returns one point per recorded year, ordered chronologically.
    pub fn query_death_trend(&self, country: &str) -> anyhow::Result<Vec<YearValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, total_deaths FROM mortality_totals
             WHERE country = ?1
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![country], |row| {
                Ok(YearValue {
                    year: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_death_trend returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get deaths from a single cause by year for a country (for the
    /// cause-of-death bar chart).
    ///
    /// An unknown cause returns an empty vector; the dashboard shows a
    /// warning instead of a chart in that case.
    pub fn query_cause_history(&self, country: &str, cause: &str) -> anyhow::Result<Vec<YearValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, deaths FROM cause_deaths
             WHERE country = ?1 AND cause = ?2
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![country, cause], |row| {
                Ok(YearValue {
                    year: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_cause_history returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get the derived gender split of a cause by year for a country (for
    /// the gender comparison chart).
    ///
    /// The derived value is `(gender_estimate / total_deaths) * cause_deaths`
    /// per year. Country-years with a zero total report 0.0. Pairings the
    /// dataset has no estimate for (male `Maternal_Disorders`) are rejected
    /// with a [`GenderRuleError`](gdr_core::error::GenderRuleError) before
    /// any SQL runs.
    pub fn query_gender_breakdown(
        &self,
        country: &str,
        cause: &str,
        gender: Gender,
    ) -> anyhow::Result<Vec<YearValue>> {
        check_gender_applies(cause, gender)?;

        let sql = match gender {
            Gender::Female => {
                "SELECT t.year,
                        CASE WHEN t.total_deaths > 0
                             THEN (t.female_deaths / t.total_deaths) * c.deaths
                             ELSE 0.0 END AS derived
                 FROM mortality_totals t
                 INNER JOIN cause_deaths c ON c.country = t.country AND c.year = t.year
                 WHERE t.country = ?1 AND c.cause = ?2
                 ORDER BY t.year"
            }
            Gender::Male => {
                "SELECT t.year,
                        CASE WHEN t.total_deaths > 0
                             THEN (t.male_deaths / t.total_deaths) * c.deaths
                             ELSE 0.0 END AS derived
                 FROM mortality_totals t
                 INNER JOIN cause_deaths c ON c.country = t.country AND c.year = t.year
                 WHERE t.country = ?1 AND c.cause = ?2
                 ORDER BY t.year"
            }
        };

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![country, cause], |row| {
                Ok(YearValue {
                    year: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_gender_breakdown ({}) returned {} records",
            gender,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the global cause-of-death distribution (for the pie chart).
    ///
    /// Sums every cause column over every country and year in the dataset,
    /// ordered by the causes' original column position so slices keep the
    /// source file's order.
    pub fn query_global_distribution(&self) -> anyhow::Result<Vec<CauseShare>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT cd.cause, SUM(cd.deaths) as total
             FROM cause_deaths cd
             INNER JOIN causes c ON c.name = cd.cause
             GROUP BY cd.cause
             ORDER BY c.position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CauseShare {
                    cause: row.get(0)?,
                    total_deaths: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GDR Debug] query: query_global_distribution returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}
