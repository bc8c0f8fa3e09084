//! Mount point for a D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the bridge's render functions draw into.
    pub id: String,
    /// Minimum height in pixels, reserved so the layout does not jump
    /// while the render poll waits for D3.
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for D3.js charts. The render functions poll for this
/// element by id and draw an `<svg>` inside it; `destroy_chart` empties
/// it again when its section is collapsed or unticked.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "min-height: {props.min_height}px; width: 100%;",
        }
    }
}
