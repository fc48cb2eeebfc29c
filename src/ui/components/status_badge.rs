use dioxus::prelude::*;

use crate::domain::{status_descriptor, TransactionStatus};

#[component]
pub fn StatusBadge(status: TransactionStatus) -> Element {
    let descriptor = status_descriptor(status);

    rsx! {
        span {
            class: "inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs font-medium {descriptor.classes}",
            span { "{descriptor.icon}" }
            "{descriptor.label}"
        }
    }
}
