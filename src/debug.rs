use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("TILEMAP_DEBUG").is_ok())
}

/// Trace line on stderr, only when `TILEMAP_DEBUG` is set
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::debug::debug_enabled() {
            eprintln!("TILEMAP: {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use trace;
