//! Message boxes for errors and non-fatal notices.

use dioxus::prelude::*;

/// Visual flavor of a [`Notice`].
#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    /// Fatal load failures and domain-rule rejections.
    Error,
    /// Non-fatal data gaps, like a cause with no rows for the country.
    Warning,
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: String,
}

/// Displays an error or warning message in a styled box.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let style = match props.kind {
        NoticeKind::Error => {
            "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
        }
        NoticeKind::Warning => {
            "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #795548; border-radius: 4px; border: 1px solid #FFE082;"
        }
    };

    rsx! {
        div {
            style: "{style}",
            if props.kind == NoticeKind::Error {
                strong { "Error: " }
            }
            "{props.message}"
        }
    }
}
