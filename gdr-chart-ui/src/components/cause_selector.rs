//! Dropdown selector for choosing a cause of death.

use crate::state::AppState;
use dioxus::prelude::*;

/// Cause-of-death dropdown selector.
/// Reads available causes from AppState and updates selected_cause on change.
/// Options keep the source file's column order.
#[component]
pub fn CauseSelector() -> Element {
    let mut state = use_context::<AppState>();
    let causes = state.causes.read().clone();
    let selected = (state.selected_cause)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_cause.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "cause-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choose Cause: "
            }
            select {
                id: "cause-select",
                onchange: on_change,
                for cause in causes.iter() {
                    option {
                        value: "{cause}",
                        selected: *cause == selected,
                        "{cause}"
                    }
                }
            }
        }
    }
}
