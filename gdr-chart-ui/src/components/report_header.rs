//! Page header with the report title and strapline.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReportHeaderProps {
    /// Report title
    pub title: String,
    /// One-line strapline under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered page header. The accent color matches the trend line.
#[component]
pub fn ReportHeader(props: ReportHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "font-size: 45px; font-weight: bold; color: #FF4C4C; text-align: center; text-shadow: 2px 2px 8px rgba(255, 76, 76, 0.4); margin: 0;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "font-size: 18px; color: #666; text-align: center; margin: 4px 0 0 0;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
