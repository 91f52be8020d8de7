use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

const DEFAULT_PARALLEL_MIN_AREA: usize = 512 * 512;

static PARALLEL_MIN_AREA: OnceLock<usize> = OnceLock::new();

/// Region area (in cells) at which placement queries switch to the row-parallel scan
pub(crate) fn parallel_min_area() -> usize {
    *PARALLEL_MIN_AREA.get_or_init(|| {
        parse_env_usize("TILEMAP_PARALLEL_MIN_AREA", DEFAULT_PARALLEL_MIN_AREA).max(1024)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_usize_fallback() {
        assert_eq!(parse_env_usize("TILEMAP_TEST_UNSET_VARIABLE", 42), 42);
    }

    #[test]
    fn test_parallel_min_area_floor() {
        assert!(parallel_min_area() >= 1024);
    }
}
