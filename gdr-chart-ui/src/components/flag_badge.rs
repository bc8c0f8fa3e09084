//! Country flag image with a textual fallback.

use dioxus::prelude::*;
use gdr_core::country_code;

/// Props for FlagBadge
#[derive(Props, Clone, PartialEq)]
pub struct FlagBadgeProps {
    /// Country display name as it appears in the dataset.
    pub country: String,
}

/// Shows the selected country's flag from flagcdn.com. Dataset names do not
/// always resolve to an ISO code; a miss shows a plain notice instead.
#[component]
pub fn FlagBadge(props: FlagBadgeProps) -> Element {
    match country_code::lookup(&props.country) {
        Some(code) => {
            let url = country_code::flag_url(&code);
            rsx! {
                img {
                    src: "{url}",
                    alt: "Flag of {props.country}",
                    style: "width: 150px; border: 1px solid #E0E0E0; border-radius: 2px; display: block; margin: 8px 0;",
                }
            }
        }
        None => rsx! {
            p {
                style: "font-size: 12px; color: #666; margin: 8px 0;",
                "Flag not available"
            }
        },
    }
}
