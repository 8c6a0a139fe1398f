use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "podcast-dashboard";

/// Application directory under a platform base dir, or the working directory
/// when the platform has none.
pub fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Formats an optional rating to 1 decimal place, or returns "—" if None or non-finite.
pub fn fmt_rating(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.1}"),
        _ => "—".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_rating() {
        assert_eq!(fmt_rating(Some(4.26)), "4.3");
        assert_eq!(fmt_rating(Some(5.0)), "5.0");
        assert_eq!(fmt_rating(None), "—");
        assert_eq!(fmt_rating(Some(f64::NAN)), "—");
    }

    #[test]
    fn test_app_dir_without_platform_base() {
        assert_eq!(app_dir(None), PathBuf::from(".").join(APP_DIR_NAME));
    }
}
