//! Dropdown selector for choosing a country.

use crate::state::AppState;
use dioxus::prelude::*;

/// Country dropdown selector.
/// Reads available countries from AppState and updates selected_country on change.
/// The list arrives already sorted and de-duplicated from the database.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.countries.read().clone();
    let selected = (state.selected_country)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_country.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "country-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Country: "
            }
            select {
                id: "country-select",
                onchange: on_change,
                for country in countries.iter() {
                    option {
                        value: "{country.name}",
                        selected: country.name == selected,
                        "{country.name}"
                    }
                }
            }
        }
    }
}
