//! Message placeholder interpolation

use super::context::{LogContext, EXCEPTION_KEY};

/// Substitute `{key}` placeholders in `template` with context values.
///
/// Tokens with no matching context key are left verbatim, and the reserved
/// `exception` key is never substituted. Substitution is single-pass: a
/// value that itself contains `{other}` text is not substituted again.
pub fn interpolate(template: &str, context: &LogContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        // The token ends at the next '}' unless another '{' opens first.
        let matched = match tail.find(|c| c == '{' || c == '}') {
            Some(end) if tail.as_bytes()[end] == b'}' => {
                let key = &tail[..end];
                if key != EXCEPTION_KEY {
                    context.get(key).map(|value| (value, end + 1))
                } else {
                    None
                }
            }
            _ => None,
        };

        match matched {
            Some((value, skip)) => {
                out.push_str(value);
                rest = &tail[skip..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::context::ErrorDetails;

    #[test]
    fn test_basic_substitution() {
        let context = LogContext::new().with("name", "Ann");
        assert_eq!(interpolate("Hello {name}", &context), "Hello Ann");
    }

    #[test]
    fn test_unmatched_token_left_verbatim() {
        let context = LogContext::new()
            .with("a", "1")
            .with_exception(ErrorDetails::new("E", 0, "boom"));
        assert_eq!(interpolate("{a}{b}", &context), "1{b}");
    }

    #[test]
    fn test_exception_key_skipped() {
        // Even a plain value under the reserved name is not interpolated.
        let context = LogContext::new().with("exception", "oops");
        assert_eq!(interpolate("got {exception}", &context), "got {exception}");
    }

    #[test]
    fn test_no_recursive_substitution() {
        let context = LogContext::new().with("a", "{b}").with("b", "2");
        assert_eq!(interpolate("{a}", &context), "{b}");
    }

    #[test]
    fn test_unused_keys_ignored() {
        let context = LogContext::new().with("unused", "x");
        assert_eq!(interpolate("plain text", &context), "plain text");
    }

    #[test]
    fn test_repeated_and_adjacent_tokens() {
        let context = LogContext::new().with("x", "ab");
        assert_eq!(interpolate("{x}-{x}{x}", &context), "ab-abab");
    }

    #[test]
    fn test_stray_braces() {
        let context = LogContext::new().with("a", "1");
        assert_eq!(interpolate("{ {a} }", &context), "{ 1 }");
        assert_eq!(interpolate("{{a}", &context), "{1");
        assert_eq!(interpolate("{a", &context), "{a");
        assert_eq!(interpolate("}", &context), "}");
    }
}
