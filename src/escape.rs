//! The value-escaping collaborator seam.
//!
//! Compiled statements embed values as inline literals, so every value passes
//! through an [`Escaper`] before being quoted. The escaper is injected at
//! compile time rather than baked in, which keeps the compiler testable with
//! a deterministic closure:
//!
//! ```rust
//! use quarry::{EscapeFn, Escaper};
//!
//! let escape = EscapeFn(|raw: &str| raw.replace('\'', "''"));
//! assert_eq!(escape.escape("O'Brien"), "O''Brien");
//! ```

/// Neutralizes SQL metacharacters in a value before inline embedding.
///
/// Implementations must not alter semantic content beyond metacharacter
/// neutralization, and escaping an already-safe string must be harmless.
pub trait Escaper {
    /// Escape a raw value for embedding inside a single-quoted literal.
    fn escape(&self, raw: &str) -> String;
}

/// Adapter turning any `Fn(&str) -> String` into an [`Escaper`].
pub struct EscapeFn<F>(pub F);

impl<F> Escaper for EscapeFn<F>
where
    F: Fn(&str) -> String,
{
    fn escape(&self, raw: &str) -> String {
        (self.0)(raw)
    }
}

/// Quote-doubling escaper suitable for standard SQL string literals.
///
/// Doubles backslashes first, then single quotes, so a quote cannot
/// terminate the literal early and a backslash cannot re-arm one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEscaper;

impl Escaper for DefaultEscaper {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for c in raw.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("''"),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_quotes() {
        assert_eq!(DefaultEscaper.escape("O'Brien"), "O''Brien");
    }

    #[test]
    fn doubles_backslashes_before_quotes() {
        assert_eq!(DefaultEscaper.escape(r"a\'b"), r"a\\''b");
    }

    #[test]
    fn safe_input_is_unchanged() {
        assert_eq!(DefaultEscaper.escape("plain"), "plain");
    }

    #[test]
    fn escaping_twice_is_harmless() {
        let once = DefaultEscaper.escape("it's");
        let twice = DefaultEscaper.escape(&once);
        // Still free of lone quotes either way.
        assert!(!twice.replace("''", "").contains('\''));
    }

    #[test]
    fn closures_adapt_through_escape_fn() {
        let upper = EscapeFn(|raw: &str| raw.to_uppercase());
        assert_eq!(upper.escape("abc"), "ABC");
    }
}
