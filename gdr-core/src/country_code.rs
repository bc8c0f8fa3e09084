use csv::ReaderBuilder;

static COUNTRY_CODES_CSV: &str = include_str!("../../fixtures/country_codes.csv");

/// Resolves a country display name to its lowercase ISO 3166-1 alpha-2
/// code, matching case-insensitively on the full name.
///
/// Returns `None` when the name has no entry. Dataset names do not always
/// line up with ISO registry names, so callers must treat a miss as a
/// normal outcome and fall back to text instead of a flag image.
pub fn lookup(country_name: &str) -> Option<String> {
    let needle = country_name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(COUNTRY_CODES_CSV.as_bytes());
    for record in reader.records().flatten() {
        let name = record.get(0).unwrap_or("");
        if name.trim().to_lowercase() == needle {
            return record
                .get(1)
                .map(|code| code.trim().to_lowercase())
                .filter(|code| !code.is_empty());
        }
    }
    None
}

/// URL of the 320px-wide flag image for a lowercase alpha-2 code.
pub fn flag_url(alpha2: &str) -> String {
    format!("https://flagcdn.com/w320/{alpha2}.png")
}
