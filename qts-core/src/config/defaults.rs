// Single source of truth for all default values.

// --- Generation ---
pub const DEFAULT_TOKEN_COUNT: usize = 40;

// --- Local mode ---
pub const DEFAULT_LOCAL_CENTER_FRACTION: f64 = 0.375; // index 15 of 40
pub const DEFAULT_LOCAL_DECAY: f64 = 0.5;
pub const DEFAULT_LOCAL_JITTER_SCALE: f64 = 0.2;
pub const DEFAULT_LOCAL_TARGET_RATIO: f64 = 0.18;

// --- Global mode ---
pub const DEFAULT_GLOBAL_FLOOR: f64 = 0.3;
pub const DEFAULT_GLOBAL_SPREAD: f64 = 0.5;
pub const DEFAULT_GLOBAL_TARGET_RATIO: f64 = 0.55;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
