//! Coercions of raw values into primitives.
//!
//! Each returns `None` if the value does not fit, and the caller reports which kind was
//! expected.

use std::str::FromStr;

/// A signed integer.
pub(crate) fn integer<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// A finite float.
pub(crate) fn float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|float| float.is_finite())
}

/// `0` or `1`.
pub(crate) fn flag(value: &str) -> Option<bool> {
    match value.trim() {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// Milliseconds, which some editors wrote with a fraction. The fraction is truncated.
pub(crate) fn millis(value: &str) -> Option<i32> {
    integer(value).or_else(|| {
        float(value)
            .filter(|ms| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(ms))
            .map(|ms| ms.trunc() as i32)
    })
}

/// Comma-separated integers. An empty value is an empty list.
pub(crate) fn integer_list<T: FromStr>(value: &str) -> Option<Vec<T>> {
    if value.trim().is_empty() {
        return Some(vec![]);
    }
    value.split(',').map(integer).collect()
}

/// Comma-separated strings, each trimmed.
pub(crate) fn string_list(value: &str) -> Vec<String> {
    value.split(',').map(|item| item.trim().to_string()).collect()
}

/// A filename which may be closed with double quotes.
pub(crate) fn filename(value: &str) -> Option<&str> {
    let value = value.trim().trim_matches('"');
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(integer::<i32>(" -25 "), Some(-25));
        assert_eq!(integer::<i32>("1.5"), None);
        assert_eq!(float("0.7"), Some(0.7));
        assert_eq!(float("1e3"), Some(1000.0));
        assert_eq!(float("NaN"), None);
        assert_eq!(float("inf"), None);
        assert_eq!(float("x"), None);
    }

    #[test]
    fn test_flag() {
        assert_eq!(flag("0"), Some(false));
        assert_eq!(flag(" 1"), Some(true));
        assert_eq!(flag("2"), None);
        assert_eq!(flag("true"), None);
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis("1234"), Some(1234));
        assert_eq!(millis("1234.75"), Some(1234));
        assert_eq!(millis("-10.5"), Some(-10));
        assert_eq!(millis("1e12"), None);
        assert_eq!(millis("abc"), None);
    }

    #[test]
    fn test_lists() {
        assert_eq!(integer_list::<i32>("1000, 2000,3000"), Some(vec![1000, 2000, 3000]));
        assert_eq!(integer_list::<i32>(""), Some(vec![]));
        assert_eq!(integer_list::<i32>("1000,,2000"), None);
        assert_eq!(
            string_list("touhou, remix,"),
            vec!["touhou".to_string(), "remix".into(), String::new()]
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(filename("\"bg.jpg\""), Some("bg.jpg"));
        assert_eq!(filename("bg.jpg"), Some("bg.jpg"));
        assert_eq!(filename(" \"my bg.png\" "), Some("my bg.png"));
        assert_eq!(filename("\"\""), None);
    }
}
