//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gdr_db::models::CountryInfo;
use gdr_db::Database;

/// Expanded/visible signal pair for one collapsible chart section.
///
/// A section's chart only exists while the section is expanded AND its
/// checkbox is ticked; collapsing or unticking tears the chart down.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionState {
    /// Whether the section body is expanded.
    pub expanded: Signal<bool>,
    /// Whether the section's show-chart checkbox is ticked.
    pub visible: Signal<bool>,
}

impl SectionState {
    /// Collapsed and unticked. Sections start lazy.
    pub fn new() -> Self {
        Self {
            expanded: Signal::new(false),
            visible: Signal::new(false),
        }
    }

    /// True while the section should have a live chart.
    pub fn active(&self) -> bool {
        (self.expanded)() && (self.visible)()
    }
}

/// Shared application state for the mortality dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if the dataset could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Countries available in the selector, lexicographically sorted
    pub countries: Signal<Vec<CountryInfo>>,
    /// Causes available in the selector, in source column order
    pub causes: Signal<Vec<String>>,
    /// Currently selected country display name
    pub selected_country: Signal<String>,
    /// Currently selected cause of death
    pub selected_cause: Signal<String>,
    /// Gender radio value ("female" or "male")
    pub gender: Signal<String>,
    /// (min, max) years loaded, shown in the page subtitle
    pub year_range: Signal<Option<(i64, i64)>>,
    /// Warning shown in the cause section when its query has no rows
    pub cause_notice: Signal<Option<String>>,
    /// Domain message shown in the gender section for rejected pairings
    pub gender_notice: Signal<Option<String>>,
    /// Death trend section
    pub trend_section: SectionState,
    /// Deaths by cause section
    pub cause_section: SectionState,
    /// Gender comparison section
    pub gender_section: SectionState,
    /// Global distribution section
    pub distribution_section: SectionState,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            countries: Signal::new(Vec::new()),
            causes: Signal::new(Vec::new()),
            selected_country: Signal::new(String::new()),
            selected_cause: Signal::new(String::new()),
            gender: Signal::new("female".to_string()),
            year_range: Signal::new(None),
            cause_notice: Signal::new(None),
            gender_notice: Signal::new(None),
            trend_section: SectionState::new(),
            cause_section: SectionState::new(),
            gender_section: SectionState::new(),
            distribution_section: SectionState::new(),
        }
    }
}
