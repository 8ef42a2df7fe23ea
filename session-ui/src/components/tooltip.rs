// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hover tooltip wrapper.
//!
//! The label is always present in the DOM as `span.tooltip`; stylesheet rules
//! on `.tooltip-target:hover` and `:focus-within` make it visible, the same
//! way the call control buttons show theirs.

use dioxus::prelude::*;

/// Where the tooltip appears relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Wherever the stylesheet places it by default.
    #[default]
    Natural,
    Top,
}

impl Alignment {
    pub fn class(&self) -> &'static str {
        match self {
            Alignment::Natural => "tooltip-natural",
            Alignment::Top => "tooltip-top",
        }
    }
}

#[component]
pub fn TooltipTarget(
    /// Text shown in the tooltip.
    label: String,
    #[props(default)] alignment: Alignment,
    children: Element,
) -> Element {
    let alignment_class = alignment.class();
    rsx! {
        div {
            class: "tooltip-target {alignment_class}",
            tabindex: "0",
            "aria-label": "{label}",
            {children}
            span { class: "tooltip", role: "tooltip", "{label}" }
        }
    }
}
