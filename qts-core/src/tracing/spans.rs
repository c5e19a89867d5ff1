//! Span definitions per operation: generation, selection, mode switch.

/// Create a generation span.
#[macro_export]
macro_rules! generation_span {
    ($mode:expr, $count:expr) => {
        ::tracing::debug_span!("qts.generation", mode = %$mode, count = $count)
    };
}

/// Create a selection span.
#[macro_export]
macro_rules! selection_span {
    ($count:expr, $target_ratio:expr) => {
        ::tracing::debug_span!("qts.selection", count = $count, target_ratio = $target_ratio)
    };
}

/// Create a mode-switch span.
#[macro_export]
macro_rules! mode_switch_span {
    ($from:expr, $to:expr) => {
        ::tracing::info_span!("qts.mode_switch", from = %$from, to = %$to)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GENERATION: &str = "qts.generation";
    pub const SELECTION: &str = "qts.selection";
    pub const MODE_SWITCH: &str = "qts.mode_switch";
}
