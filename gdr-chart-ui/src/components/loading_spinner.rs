//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while the dataset is fetched and melted.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Fetching mortality data..."
        }
    }
}
