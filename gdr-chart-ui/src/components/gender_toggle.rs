//! Radio toggle for the gender comparison chart.

use crate::state::AppState;
use dioxus::prelude::*;
use gdr_core::gender::Gender;

/// Horizontal Female/Male radio buttons.
/// Writes the lowercase gender keyword into AppState.
#[component]
pub fn GenderToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.gender)();
    let options = [Gender::Female, Gender::Male].map(|g| (g.as_str(), g.label()));

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Select Gender:"
            }
            for (value, text) in options {
                label {
                    style: "display: inline-flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "gender-toggle",
                        value: "{value}",
                        checked: current == value,
                        onchange: move |evt: Event<FormData>| {
                            state.gender.set(evt.value());
                        },
                    }
                    "{text}"
                }
            }
        }
    }
}
