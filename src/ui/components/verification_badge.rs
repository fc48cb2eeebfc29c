use dioxus::prelude::*;

use crate::domain::entities::VerificationDescriptor;

#[component]
pub fn VerificationBadge(descriptor: VerificationDescriptor) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium {descriptor.classes}",
            span { "{descriptor.icon}" }
            "{descriptor.label}"
        }
    }
}
