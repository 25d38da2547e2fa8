//! # Parse Diagnostics
//!
//! Every problem the grammar engine encounters is recorded as a [`Diagnostic`]
//! and parsing carries on. There are four kinds:
//!
//! - A token that is not part of the symbol table (`UnknownSymbol`)
//! - A token that differs from the symbol the grammar requires (`SymbolMismatch`)
//! - A field payload that fails its pattern (`InvalidField`)
//! - Tokens left over after the `$$` sentinel (`TrailingInput`)
//!
//! The number of collected diagnostics is the parser's error count.

use std::fmt;

use lachs::Span;
use thiserror::Error;

use crate::parser::Symbol;

/// Field whose payload is validated against a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    LatLng,
    Note,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::LatLng => f.write_str("latlng"),
            Field::Note => f.write_str("note"),
        }
    }
}

/// A non-fatal problem found while parsing a VPF document.
///
/// # Example Messages
///
/// ```text
/// unknown symbol 'START' (line 4)
/// expected symbol 'END_POI', found 'note' (line 7)
/// expected symbol '$$', found end of input
/// invalid note '6' (line 5)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("unknown symbol '{symbol}'{}", at_line(.span))]
    UnknownSymbol { symbol: String, span: Option<Span> },

    #[error("expected symbol '{expected}', found {}{}", found_text(.found), at_line(.span))]
    SymbolMismatch {
        expected: Symbol,
        /// `None` when the input ended before the symbol.
        found: Option<String>,
        span: Option<Span>,
    },

    #[error("invalid {field} '{value}'{}", at_line(.span))]
    InvalidField {
        field: Field,
        value: String,
        span: Option<Span>,
    },

    #[error("unexpected '{value}' after end of document{}", at_line(.span))]
    TrailingInput { value: String, span: Option<Span> },
}

impl Diagnostic {
    pub fn span(&self) -> Option<&Span> {
        match self {
            Diagnostic::UnknownSymbol { span, .. }
            | Diagnostic::SymbolMismatch { span, .. }
            | Diagnostic::InvalidField { span, .. }
            | Diagnostic::TrailingInput { span, .. } => span.as_ref(),
        }
    }

    /// Zero-based line of the offending token, if it came from source text.
    pub fn line(&self) -> Option<usize> {
        self.span().map(|span| span.start.0)
    }
}

fn found_text(found: &Option<String>) -> String {
    match found {
        Some(value) => format!("'{value}'"),
        None => "end of input".to_string(),
    }
}

fn at_line(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" (line {})", span.start.0 + 1),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_on_line(line: usize) -> Option<Span> {
        Some(Span {
            start: (line, 0),
            end: (line, 1),
            source: String::new(),
        })
    }

    #[test]
    fn mismatch_at_end_of_input() {
        let diagnostic = Diagnostic::SymbolMismatch {
            expected: Symbol::End,
            found: None,
            span: None,
        };
        assert_eq!(
            diagnostic.to_string(),
            "expected symbol '$$', found end of input"
        );
        assert_eq!(diagnostic.line(), None);
    }

    #[test]
    fn messages_report_one_based_lines() {
        let diagnostic = Diagnostic::InvalidField {
            field: Field::Note,
            value: "6".to_string(),
            span: span_on_line(4),
        };
        assert_eq!(diagnostic.to_string(), "invalid note '6' (line 5)");
        assert_eq!(diagnostic.line(), Some(4));
    }
}
