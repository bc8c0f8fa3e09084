//! Reusable Dioxus RSX components for the mortality dashboard.

mod cause_selector;
mod chart_container;
mod country_selector;
mod expander_section;
mod flag_badge;
mod gender_toggle;
mod loading_spinner;
mod notice;
mod report_header;

pub use cause_selector::CauseSelector;
pub use chart_container::ChartContainer;
pub use country_selector::CountrySelector;
pub use expander_section::ExpanderSection;
pub use flag_badge::FlagBadge;
pub use gender_toggle::GenderToggle;
pub use loading_spinner::LoadingSpinner;
pub use notice::{Notice, NoticeKind};
pub use report_header::ReportHeader;
