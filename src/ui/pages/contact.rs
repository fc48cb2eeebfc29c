use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::badge::SUPPORT_EMAIL,
    ui::theme,
};

#[component]
pub fn ContactPage() -> Element {
    let mailto = format!("mailto:{SUPPORT_EMAIL}");

    rsx! {
        section { class: "{theme::PANEL} max-w-xl space-y-4 p-6",
            h2 { class: "{theme::SECTION_TITLE}", "Contact support" }
            p { class: "text-sm text-slate-300",
                "Questions about a trust score or a disputed transaction? Write to "
                a { class: "text-indigo-300 hover:text-indigo-200", href: "{mailto}", "{SUPPORT_EMAIL}" }
                "."
            }
            p { class: "text-sm {theme::TEXT_MUTED}",
                "You can also reach the team through the chat button in the corner of the dashboard."
            }
            Link { class: "{theme::BTN_SECONDARY} inline-block", to: Route::Check {}, "Back to checks" }
        }
    }
}
