//! Shared class tables. Anything keyed by an enum lives here as a `match`, not
//! as string concatenation at the call site.

use crate::domain::{BadgeVariant, WidgetSize};

// ============================================
// BUTTON / INPUT STYLES
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";
pub const BTN_SECONDARY: &str = "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800";
pub const BTN_WARNING: &str = "rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10";
pub const INPUT: &str = "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";

pub fn chip(active: bool) -> &'static str {
    if active {
        "rounded px-2 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40"
    } else {
        "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-slate-600 hover:text-slate-300"
    }
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const TEXT_MUTED: &str = "text-slate-500";

// ============================================
// BADGE LAYOUTS
// ============================================

pub fn badge_container(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Compact => "inline-flex items-center gap-2 rounded-full border px-3 py-1",
        BadgeVariant::Detailed => "rounded-xl border p-5 space-y-4",
        BadgeVariant::Embeddable => "rounded-lg border p-3 space-y-2 bg-slate-950",
    }
}

pub fn badge_ring_size(variant: BadgeVariant) -> u32 {
    match variant {
        BadgeVariant::Compact => 28,
        BadgeVariant::Detailed => 112,
        BadgeVariant::Embeddable => 64,
    }
}

// ============================================
// WIDGET SIZES
// ============================================

pub fn widget_frame(size: WidgetSize) -> &'static str {
    match size {
        WidgetSize::Small => "widget-frame size-small rounded-lg border p-2",
        WidgetSize::Medium => "widget-frame size-medium rounded-xl border p-3",
        WidgetSize::Large => "widget-frame size-large rounded-xl border p-4",
    }
}

pub fn widget_title(size: WidgetSize) -> &'static str {
    match size {
        WidgetSize::Small => "text-xs font-semibold",
        WidgetSize::Medium => "text-sm font-semibold",
        WidgetSize::Large => "text-base font-semibold",
    }
}

pub fn widget_ring_size(size: WidgetSize) -> u32 {
    match size {
        WidgetSize::Small => 44,
        WidgetSize::Medium => 64,
        WidgetSize::Large => 88,
    }
}
