// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingSize {
    H1,
    H2,
    H3,
    #[default]
    H4,
}

impl HeadingSize {
    pub fn class(&self) -> &'static str {
        match self {
            HeadingSize::H1 => "mx_Heading_h1",
            HeadingSize::H2 => "mx_Heading_h2",
            HeadingSize::H3 => "mx_Heading_h3",
            HeadingSize::H4 => "mx_Heading_h4",
        }
    }
}

#[component]
pub fn Heading(#[props(default)] size: HeadingSize, children: Element) -> Element {
    let class = size.class();
    match size {
        HeadingSize::H1 => rsx! { h1 { class: class, {children} } },
        HeadingSize::H2 => rsx! { h2 { class: class, {children} } },
        HeadingSize::H3 => rsx! { h3 { class: class, {children} } },
        HeadingSize::H4 => rsx! { h4 { class: class, {children} } },
    }
}
