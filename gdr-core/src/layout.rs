use crate::error::{CoreError, Result};

pub const COUNTRY_COLUMN_NAME: &str = "Country/Territory";
pub const TOTAL_DEATHS: &str = "Total_Deaths";
pub const ESTIMATED_FEMALE_DEATHS: &str = "Estimated_Female_Deaths";
pub const ESTIMATED_MALE_DEATHS: &str = "Estimated_Male_Deaths";

/// Column layout of the wide mortality CSV.
///
/// The file convention is a block of identifier columns (country name, ISO
/// alpha-3 code, year), then one column per cause of death, then a trailing
/// block of aggregate columns ordered total, female estimate, male estimate.
/// The cause block is whatever sits strictly between the two fixed blocks,
/// so datasets may add or drop causes without any code change. The blocks
/// are named configuration here; `Default` reproduces the file convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    /// Number of leading identifier columns.
    pub identifier_columns: usize,
    /// Index of the country display-name column.
    pub country_column: usize,
    /// Index of the ISO alpha-3 code column.
    pub code_column: usize,
    /// Index of the year column.
    pub year_column: usize,
    /// Number of trailing aggregate columns.
    pub aggregate_columns: usize,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            identifier_columns: 3,
            country_column: 0,
            code_column: 1,
            year_column: 2,
            aggregate_columns: 3,
        }
    }
}

impl DatasetLayout {
    /// Narrowest header this layout can describe: both fixed blocks plus at
    /// least one cause column.
    pub fn min_columns(&self) -> usize {
        self.identifier_columns + self.aggregate_columns + 1
    }

    /// Checks that a header row is wide enough and that every named
    /// identifier index actually lands inside the identifier block.
    pub fn validate_header(&self, headers: &[String]) -> Result<()> {
        if headers.len() < self.min_columns() {
            return Err(CoreError::ShortHeader {
                found: headers.len(),
                needed: self.min_columns(),
            });
        }
        for index in [self.country_column, self.code_column, self.year_column] {
            if index >= self.identifier_columns {
                return Err(CoreError::IdentifierIndex {
                    index,
                    identifier_columns: self.identifier_columns,
                });
            }
        }
        Ok(())
    }

    /// Slices the cause column names out of a validated header, in file
    /// order.
    pub fn cause_columns<'a>(&self, headers: &'a [String]) -> Result<&'a [String]> {
        self.validate_header(headers)?;
        Ok(&headers[self.identifier_columns..headers.len() - self.aggregate_columns])
    }

    /// Absolute index of the total-deaths aggregate for a row of `width`
    /// columns.
    pub fn total_deaths_column(&self, width: usize) -> usize {
        width - self.aggregate_columns
    }

    /// Absolute index of the estimated-female-deaths aggregate.
    pub fn female_deaths_column(&self, width: usize) -> usize {
        width - self.aggregate_columns + 1
    }

    /// Absolute index of the estimated-male-deaths aggregate.
    pub fn male_deaths_column(&self, width: usize) -> usize {
        width - self.aggregate_columns + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cause_count: usize) -> Vec<String> {
        let mut columns = vec![
            COUNTRY_COLUMN_NAME.to_string(),
            "Code".to_string(),
            "Year".to_string(),
        ];
        for i in 0..cause_count {
            columns.push(format!("Cause_{i}"));
        }
        columns.push(TOTAL_DEATHS.to_string());
        columns.push(ESTIMATED_FEMALE_DEATHS.to_string());
        columns.push(ESTIMATED_MALE_DEATHS.to_string());
        columns
    }

    #[test]
    fn default_layout_matches_file_convention() {
        let layout = DatasetLayout::default();
        assert_eq!(layout.identifier_columns, 3);
        assert_eq!(layout.aggregate_columns, 3);
        assert_eq!(layout.country_column, 0);
        assert_eq!(layout.code_column, 1);
        assert_eq!(layout.year_column, 2);
        assert_eq!(layout.min_columns(), 7);
    }

    #[test]
    fn cause_columns_excludes_both_fixed_blocks() {
        let layout = DatasetLayout::default();
        let headers = header(4);
        let causes = layout.cause_columns(&headers).unwrap();
        assert_eq!(causes, &["Cause_0", "Cause_1", "Cause_2", "Cause_3"]);
    }

    #[test]
    fn cause_columns_tracks_any_cause_count() {
        let layout = DatasetLayout::default();
        for cause_count in [1, 2, 17, 31, 100] {
            let headers = header(cause_count);
            let causes = layout.cause_columns(&headers).unwrap();
            assert_eq!(causes.len(), cause_count);
            assert_eq!(causes.first().map(String::as_str), Some("Cause_0"));
            assert_eq!(
                causes.last().map(String::as_str),
                Some(format!("Cause_{}", cause_count - 1).as_str())
            );
        }
    }

    #[test]
    fn header_without_room_for_a_cause_is_rejected() {
        let layout = DatasetLayout::default();
        let headers = header(0);
        assert_eq!(
            layout.cause_columns(&headers),
            Err(CoreError::ShortHeader {
                found: 6,
                needed: 7
            })
        );
    }

    #[test]
    fn identifier_index_outside_block_is_rejected() {
        let layout = DatasetLayout {
            year_column: 5,
            ..DatasetLayout::default()
        };
        let headers = header(4);
        assert_eq!(
            layout.validate_header(&headers),
            Err(CoreError::IdentifierIndex {
                index: 5,
                identifier_columns: 3
            })
        );
    }

    #[test]
    fn aggregate_indices_name_the_trailing_trio() {
        let layout = DatasetLayout::default();
        let headers = header(4);
        let width = headers.len();
        assert_eq!(headers[layout.total_deaths_column(width)], TOTAL_DEATHS);
        assert_eq!(
            headers[layout.female_deaths_column(width)],
            ESTIMATED_FEMALE_DEATHS
        );
        assert_eq!(
            headers[layout.male_deaths_column(width)],
            ESTIMATED_MALE_DEATHS
        );
    }

    #[test]
    fn wider_identifier_block_shifts_the_cause_slice() {
        let layout = DatasetLayout {
            identifier_columns: 4,
            country_column: 0,
            code_column: 2,
            year_column: 3,
            aggregate_columns: 3,
        };
        let mut headers = header(4);
        headers.insert(1, "Region".to_string());
        let causes = layout.cause_columns(&headers).unwrap();
        assert_eq!(causes, &["Cause_0", "Cause_1", "Cause_2", "Cause_3"]);
    }
}
