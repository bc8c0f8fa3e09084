//! Collapsible chart section with a show-chart checkbox.

use crate::state::SectionState;
use dioxus::prelude::*;

/// Props for ExpanderSection
#[derive(Props, Clone, PartialEq)]
pub struct ExpanderSectionProps {
    /// Heading shown in the clickable header bar.
    pub title: String,
    /// Label next to the checkbox that enables the chart.
    pub checkbox_label: String,
    /// The section's expanded/visible signal pair.
    pub section: SectionState,
    /// Section body, only mounted while the checkbox is ticked.
    pub children: Element,
}

/// Collapsible section gating its body twice over: nothing inside mounts
/// until the section is expanded AND the checkbox is ticked. Chart effects
/// key off the same two signals, so collapsed sections do no query work.
#[component]
pub fn ExpanderSection(props: ExpanderSectionProps) -> Element {
    let mut section = props.section;
    let expanded = (section.expanded)();
    let visible = (section.visible)();
    let marker = if expanded { "\u{25be}" } else { "\u{25b8}" };

    rsx! {
        div {
            style: "border: 1px solid #E0E0E0; border-radius: 4px; margin: 12px 0; background: #FFF;",
            div {
                style: "padding: 10px 14px; cursor: pointer; font-weight: bold; user-select: none;",
                onclick: move |_| {
                    let open = !*section.expanded.peek();
                    section.expanded.set(open);
                },
                "{marker} {props.title}"
            }
            if expanded {
                div {
                    style: "padding: 0 14px 14px 14px;",
                    label {
                        style: "display: inline-flex; gap: 6px; align-items: center; margin-bottom: 8px;",
                        input {
                            r#type: "checkbox",
                            checked: visible,
                            onchange: move |evt: Event<FormData>| {
                                section.visible.set(evt.value() == "true");
                            },
                        }
                        "{props.checkbox_label}"
                    }
                    if visible {
                        {props.children}
                    }
                }
            }
        }
    }
}
