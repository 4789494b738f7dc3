use regex::Regex;
use std::sync::OnceLock;

use crate::error::{AppError, Result};

/// Turns a free-form catalog name into a bare identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix. Distinct names may map to the same identifier; callers
/// that need uniqueness dedupe afterwards.
pub fn sanitize_identifier(name: &str, context: &str) -> Result<String> {
    if name.is_empty() {
        return Err(AppError::EmptyIdentifier {
            context: context.to_string(),
        });
    }

    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_]").expect("Invalid identifier regex"));

    let replaced = re.replace_all(name, "_");
    if replaced.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{}", replaced))
    } else {
        Ok(replaced.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(name: &str) -> String {
        sanitize_identifier(name, "test").unwrap()
    }

    #[test]
    fn test_sanitize_leading_digit() {
        assert_eq!(sanitize("3D-Print"), "_3D_Print");
        assert_eq!(sanitize("64bit"), "_64bit");
    }

    #[test]
    fn test_sanitize_keeps_valid_identifiers() {
        assert_eq!(sanitize("Release"), "Release");
        assert_eq!(sanitize("x86_64"), "x86_64");
        assert_eq!(sanitize("_private"), "_private");
    }

    #[test]
    fn test_sanitize_special_chars() {
        assert_eq!(sanitize("Win 64!"), "Win_64_");
        assert_eq!(sanitize("Mac OS (Universal)"), "Mac_OS__Universal_");
        assert_eq!(sanitize("a.b-c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_unicode_is_one_underscore_per_char() {
        assert_eq!(sanitize("Ünity"), "_nity");
        assert_eq!(sanitize("日本"), "__");
    }

    #[test]
    fn test_sanitize_output_is_always_an_identifier() {
        let inputs = [
            "0", "9 lives", " ", "!!!", "Steam", "Epic Games Store", "ß", "a\tb", "__", "1_2_3",
        ];
        for input in inputs {
            let out = sanitize(input);
            assert!(
                out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "'{}' produced invalid identifier '{}'",
                input,
                out
            );
            assert!(
                !out.starts_with(|c: char| c.is_ascii_digit()),
                "'{}' produced identifier '{}' starting with a digit",
                input,
                out
            );
        }
    }

    #[test]
    fn test_sanitize_empty_is_error() {
        let err = sanitize_identifier("", "platform").unwrap_err();
        assert!(matches!(err, AppError::EmptyIdentifier { ref context } if context == "platform"));
    }
}
