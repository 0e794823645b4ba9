//! Environment reference interpolation for raw property values.
//!
//! Supports `${NAME}` where `NAME` is made of ASCII letters, digits and
//! underscores. The scan is a single left-to-right pass: substituted values
//! are never scanned again, and anything not matching the syntax is copied
//! through unchanged.

use super::source::EnvSource;

/// Outcome of interpolating one raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpolated {
    pub value: String,
    /// Original `${NAME}` tokens that could not be resolved, in scan order.
    /// Only collected when all references must resolve.
    pub unresolved: Vec<String>,
}

impl Interpolated {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replaces every `${NAME}` in `raw` with the value of `NAME` in `ambient`.
///
/// Unset or empty references are replaced by the empty string. When
/// `must_resolve_all` is set, their original tokens are also reported.
pub fn interpolate(raw: &str, ambient: &dyn EnvSource, must_resolve_all: bool) -> Interpolated {
    let mut value = String::with_capacity(raw.len());
    let mut unresolved = Vec::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        value.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let name_len = after
            .find(|c: char| !is_name_char(c))
            .unwrap_or(after.len());

        if !after[name_len..].starts_with('}') {
            // Not a reference: keep the '$' and rescan from the next char
            value.push('$');
            rest = &rest[start + 1..];
            continue;
        }

        let name = &after[..name_len];
        match ambient.get(name).filter(|v| !v.is_empty()) {
            Some(resolved) => value.push_str(&resolved),
            None if must_resolve_all => {
                unresolved.push(rest[start..start + name_len + 3].to_string());
            }
            None => {}
        }
        rest = &after[name_len + 1..];
    }
    value.push_str(rest);

    Interpolated { value, unresolved }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;

    fn ambient() -> MapEnv {
        MapEnv::new()
            .with("USERDNSDOMAIN", "ESTOS.DE")
            .with("HOST", "localhost")
            .with("PORT", "8080")
            .with("EMPTY", "")
            .with("NESTED", "${HOST}")
    }

    #[test]
    fn test_simple_reference() {
        let result = interpolate("USERDNSDOMAIN:${USERDNSDOMAIN}", &ambient(), true);
        assert_eq!(result.value, "USERDNSDOMAIN:ESTOS.DE");
        assert!(result.is_complete());
    }

    #[test]
    fn test_multiple_references() {
        let result = interpolate("http://${HOST}:${PORT}/api", &ambient(), true);
        assert_eq!(result.value, "http://localhost:8080/api");
    }

    #[test]
    fn test_unresolved_optional_becomes_empty() {
        let result = interpolate("replace:${MISSING_1}:${MISSING_2}", &ambient(), false);
        assert_eq!(result.value, "replace::");
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_required_reports_tokens() {
        let result = interpolate("replace:${MISSING_1}:${MISSING_2}", &ambient(), true);
        assert_eq!(result.value, "replace::");
        assert_eq!(result.unresolved, vec!["${MISSING_1}", "${MISSING_2}"]);
    }

    #[test]
    fn test_empty_value_counts_as_unresolved() {
        let result = interpolate("x${EMPTY}x", &ambient(), true);
        assert_eq!(result.value, "xx");
        assert_eq!(result.unresolved, vec!["${EMPTY}"]);
    }

    #[test]
    fn test_single_pass_no_recursion() {
        let result = interpolate("${NESTED}", &ambient(), true);
        assert_eq!(result.value, "${HOST}");
        assert!(result.is_complete());
    }

    #[test]
    fn test_non_reference_syntax_is_literal() {
        let result = interpolate("cost: $5 ${not-a-name} ${OPEN", &ambient(), true);
        assert_eq!(result.value, "cost: $5 ${not-a-name} ${OPEN");
        assert!(result.is_complete());
    }

    #[test]
    fn test_dollar_before_reference() {
        let result = interpolate("$${HOST}", &ambient(), true);
        assert_eq!(result.value, "$localhost");
    }

    #[test]
    fn test_empty_name_is_unresolved() {
        let result = interpolate("a${}b", &ambient(), true);
        assert_eq!(result.value, "ab");
        assert_eq!(result.unresolved, vec!["${}"]);
    }
}
