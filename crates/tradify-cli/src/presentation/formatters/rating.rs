/// Five-slot star bar, e.g. `★★★★☆`
pub fn stars(filled: usize) -> String {
    let filled = filled.min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `5` for whole ratings, `4.5` otherwise
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(5.0), "5");
        assert_eq!(format_rating(4.5), "4.5");
    }
}
