//! The Global Death Report
//!
//! Single-page dashboard over the IHME global mortality dataset. One
//! selected country drives the per-country sections; each chart renders
//! on demand behind its own expander and checkbox, so collapsed sections
//! cost nothing per interaction.
//!
//! Data flow:
//! 1. On mount, `./global_mortality.csv.gz` is fetched (served alongside
//!    the WASM bundle) and decompressed.
//! 2. The wide CSV is melted into an in-memory SQLite database.
//! 3. Dropdowns are seeded from `query_countries()` / `query_causes()`.
//! 4. Each expanded-and-ticked section queries the database and hands
//!    the rows to a D3.js renderer.

use dioxus::prelude::*;
use gdr_chart_ui::components::{
    CauseSelector, ChartContainer, CountrySelector, ExpanderSection, FlagBadge, GenderToggle,
    LoadingSpinner, Notice, NoticeKind, ReportHeader,
};
use gdr_chart_ui::js_bridge;
use gdr_chart_ui::state::AppState;
use gdr_core::gender::{self, Gender};
use gdr_core::layout::DatasetLayout;
use gdr_db::Database;
use std::str::FromStr;

/// Runtime-fetched gzip-compressed mortality dataset (served alongside WASM).
const MORTALITY_GZ_URL: &str = "./global_mortality.csv.gz";

/// Banner photograph shown under the report title.
const BANNER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1584036561566-baf8f5f1b144";

/// Chart container DOM element IDs used by D3.js to render into.
const TREND_CHART_ID: &str = "death-trend-chart";
const CAUSE_CHART_ID: &str = "cause-history-chart";
const GENDER_CHART_ID: &str = "gender-breakdown-chart";
const DISTRIBUTION_CHART_ID: &str = "global-distribution-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("death-report-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset and build the database on mount
    use_effect(move || {
        spawn(async move {
            let db = match Database::new() {
                Ok(db) => db,
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Database initialization failed: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            let csv_data = match js_bridge::fetch_gz_csv(MORTALITY_GZ_URL).await {
                Ok(data) => data,
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Failed to fetch mortality data: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            if let Err(e) = db.load_mortality(&csv_data, &DatasetLayout::default()) {
                log::error!("Failed to load mortality data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load mortality data: {}", e)));
                state.loading.set(false);
                return;
            }

            // Seed the selectors; the first entry of each becomes the default
            if let Ok(countries) = db.query_countries() {
                let default_country = countries
                    .first()
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                if !default_country.is_empty() {
                    state.selected_country.set(default_country);
                }
                state.countries.set(countries);
            }
            if let Ok(causes) = db.query_causes() {
                let default_cause = causes.first().cloned().unwrap_or_default();
                if !default_cause.is_empty() {
                    state.selected_cause.set(default_cause);
                }
                state.causes.set(causes);
            }
            if let Ok(range) = db.query_year_range() {
                state.year_range.set(Some(range));
            }

            state.db.set(Some(db));
            state.loading.set(false);
        });
    });

    // Death trend: total deaths per year for the selected country
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let active = state.trend_section.active();
        let country = (state.selected_country)();

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        if !active {
            js_bridge::destroy_chart(TREND_CHART_ID);
            return;
        }
        if country.is_empty() {
            return;
        }

        js_bridge::init_charts();

        let trend = match db.query_death_trend(&country) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Death trend query failed: {}", e);
                return;
            }
        };
        if trend.is_empty() {
            js_bridge::destroy_chart(TREND_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&trend).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Death Trend in {}", country),
            "xAxisLabel": "Year",
            "yAxisLabel": "Total Deaths",
            "valueLabel": "Total Deaths",
            "lineColor": "#FF4C4C",
            "pointColor": "#1f77b4",
            "height": 420,
        }))
        .unwrap_or_default();

        js_bridge::render_line_chart(TREND_CHART_ID, &data_json, &config_json);
    });

    // Deaths by cause: the selected cause's count per year, with a notice
    // when the country has no rows for it
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let active = state.cause_section.active();
        let country = (state.selected_country)();
        let cause = (state.selected_cause)();

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        if !active {
            js_bridge::destroy_chart(CAUSE_CHART_ID);
            return;
        }
        if country.is_empty() || cause.is_empty() {
            return;
        }

        js_bridge::init_charts();

        let history = match db.query_cause_history(&country, &cause) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Cause history query failed: {}", e);
                return;
            }
        };
        if history.is_empty() {
            state
                .cause_notice
                .set(Some(format!("No data available for {}", cause)));
            js_bridge::destroy_chart(CAUSE_CHART_ID);
            return;
        }
        if state.cause_notice.peek().is_some() {
            state.cause_notice.set(None);
        }

        let data_json = serde_json::to_string(&history).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Total Deaths due to {} in {}", cause, country),
            "xAxisLabel": "Year",
            "yAxisLabel": "Deaths",
            "valueLabel": "Deaths",
            "colorScheme": "blues",
            "height": 420,
        }))
        .unwrap_or_default();

        js_bridge::render_bar_chart(CAUSE_CHART_ID, &data_json, &config_json);
    });

    // Gender breakdown: estimated share of the selected cause attributed
    // to one gender. Some causes only carry one gender's estimate.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let active = state.gender_section.active();
        let country = (state.selected_country)();
        let cause = (state.selected_cause)();
        let gender_value = (state.gender)();

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        if !active {
            js_bridge::destroy_chart(GENDER_CHART_ID);
            return;
        }
        if country.is_empty() || cause.is_empty() {
            return;
        }

        let gender = match Gender::from_str(&gender_value) {
            Ok(g) => g,
            Err(e) => {
                log::error!("Bad gender selection {:?}: {}", gender_value, e);
                return;
            }
        };

        if let Err(e) = gender::check_gender_applies(&cause, gender) {
            state.gender_notice.set(Some(e.to_string()));
            js_bridge::destroy_chart(GENDER_CHART_ID);
            return;
        }
        if state.gender_notice.peek().is_some() {
            state.gender_notice.set(None);
        }

        js_bridge::init_charts();

        let breakdown = match db.query_gender_breakdown(&country, &cause, gender) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Gender breakdown query failed: {}", e);
                return;
            }
        };
        if breakdown.is_empty() {
            js_bridge::destroy_chart(GENDER_CHART_ID);
            return;
        }

        let scheme = match gender {
            Gender::Female => "plasma",
            Gender::Male => "viridis",
        };
        let data_json = serde_json::to_string(&breakdown).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("{} in {} due to {}", gender.label(), country, cause),
            "xAxisLabel": "Year",
            "yAxisLabel": gender.label(),
            "valueLabel": gender.label(),
            "colorScheme": scheme,
            "height": 420,
        }))
        .unwrap_or_default();

        js_bridge::render_bar_chart(GENDER_CHART_ID, &data_json, &config_json);
    });

    // Global distribution: every cause summed over all countries and years
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let active = state.distribution_section.active();

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        if !active {
            js_bridge::destroy_chart(DISTRIBUTION_CHART_ID);
            return;
        }

        js_bridge::init_charts();

        let shares = match db.query_global_distribution() {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Global distribution query failed: {}", e);
                return;
            }
        };
        if shares.is_empty() {
            js_bridge::destroy_chart(DISTRIBUTION_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&shares).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": "Global Distribution of Deaths by Cause",
            "height": 480,
        }))
        .unwrap_or_default();

        js_bridge::render_pie_chart(DISTRIBUTION_CHART_ID, &data_json, &config_json);
    });

    let subtitle = match (state.year_range)() {
        Some((first, last)) => format!(
            "Uncovering trends and causes of global mortality ({} - {})",
            first, last
        ),
        None => "Uncovering trends and causes of global mortality".to_string(),
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1280px; margin: 0 auto;",

            ReportHeader {
                title: "The Global Death Report".to_string(),
                subtitle: subtitle,
            }

            img {
                src: BANNER_IMAGE_URL,
                alt: "Global Health & Mortality Trends",
                style: "width: 100%; max-height: 300px; object-fit: cover; border-radius: 4px;",
            }
            p {
                style: "font-size: 12px; color: #757575; text-align: center; margin: 4px 0 16px 0;",
                "Global Health & Mortality Trends"
            }

            if let Some(err) = (state.error_msg)() {
                Notice { kind: NoticeKind::Error, message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px;",

                    // Sidebar: selections shared by the per-country sections
                    div {
                        style: "flex: 0 0 240px; display: flex; flex-direction: column; gap: 12px;",
                        div {
                            style: "font-size: 20px; font-weight: bold; color: #FF4C4C;",
                            "Country Selection"
                        }
                        CountrySelector {}
                        FlagBadge { country: (state.selected_country)() }
                        div {
                            style: "font-size: 20px; font-weight: bold; color: #FF4C4C;",
                            "Causes of Death"
                        }
                        CauseSelector {}
                        div {
                            style: "font-size: 20px; font-weight: bold; color: #FF4C4C;",
                            "Graphs"
                        }
                        p {
                            style: "font-size: 12px; color: #666; margin: 0;",
                            "Expand a section and tick its checkbox to render a chart."
                        }
                    }

                    // Report sections
                    div {
                        style: "flex: 1; min-width: 480px;",

                        ExpanderSection {
                            title: "Death Trend Over Years".to_string(),
                            checkbox_label: "Show Trend Graph".to_string(),
                            section: state.trend_section,
                            ChartContainer {
                                id: TREND_CHART_ID.to_string(),
                                min_height: 420,
                            }
                        }

                        ExpanderSection {
                            title: "Deaths by Cause".to_string(),
                            checkbox_label: "Show Deaths by Cause".to_string(),
                            section: state.cause_section,
                            if let Some(notice) = (state.cause_notice)() {
                                Notice { kind: NoticeKind::Warning, message: notice }
                            }
                            ChartContainer {
                                id: CAUSE_CHART_ID.to_string(),
                                min_height: 420,
                            }
                        }

                        ExpanderSection {
                            title: "Gender-Based Deaths".to_string(),
                            checkbox_label: "Show Gender Comparison".to_string(),
                            section: state.gender_section,
                            GenderToggle {}
                            if let Some(notice) = (state.gender_notice)() {
                                Notice { kind: NoticeKind::Error, message: notice }
                            }
                            ChartContainer {
                                id: GENDER_CHART_ID.to_string(),
                                min_height: 420,
                            }
                        }

                        ExpanderSection {
                            title: "Global Death Distribution".to_string(),
                            checkbox_label: "Show Global Distribution".to_string(),
                            section: state.distribution_section,
                            ChartContainer {
                                id: DISTRIBUTION_CHART_ID.to_string(),
                                min_height: 480,
                            }
                        }
                    }
                }

                hr {
                    style: "margin: 24px 0 12px 0; border: none; border-top: 1px solid #FF4C4C;",
                }
                p {
                    style: "font-size: 12px; color: #9E9E9E; text-align: center;",
                    "Data: Institute for Health Metrics and Evaluation (IHME), Global Burden of Disease study"
                }
            }
        }
    }
}
