use lachs::Span;

use crate::diagnostic::Diagnostic;
use crate::lexer::Token;

use super::symbol::Symbol;

/// Cursor over the token buffer of one parse, plus the diagnostics collected
/// so far.
///
/// The buffer is never mutated; consuming a token only advances `index`.
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    errors: Vec<Diagnostic>,
    show_symbols: bool,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            errors: Vec::new(),
            show_symbols: false,
        }
    }

    /// Builds a state straight from source text.
    pub fn from_source(input: &str) -> Self {
        Self::new(Token::lex(input))
    }

    /// Echo every consumed token through the log.
    pub fn show_symbols(mut self, show: bool) -> Self {
        self.show_symbols = show;
        self
    }

    /// Consumes and returns the next pending token.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned()?;
        self.index += 1;
        if self.show_symbols {
            tracing::info!(target: "vpf::symbols", "{}", token.value);
        }
        Some(token)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    /// Validates `value` against the symbol table and returns its index.
    ///
    /// Unknown values are recorded as an error, so this is not a pure lookup.
    pub fn accept(&mut self, value: &str, span: Option<&Span>) -> Option<usize> {
        match Symbol::lookup(value) {
            Some(symbol) => Some(symbol.index()),
            None => {
                self.collect_error(Diagnostic::UnknownSymbol {
                    symbol: value.to_string(),
                    span: span.cloned(),
                });
                None
            }
        }
    }

    /// Lookahead: does the pending token resolve to `symbol`?
    ///
    /// An exhausted stream is never a match and is not an error.
    pub fn check(&mut self, symbol: Symbol) -> bool {
        let Some(token) = self.peek() else {
            return false;
        };
        let (value, span) = (token.value.clone(), token.pos());
        self.accept(&value, Some(&span)) == Some(symbol.index())
    }

    /// Consumes the next token and requires it to spell `symbol`.
    ///
    /// A mismatch is recorded and `false` returned; the token stays consumed.
    pub fn expect(&mut self, symbol: Symbol) -> bool {
        match self.next() {
            Some(token) if token.value == symbol.as_str() => true,
            Some(token) => {
                self.collect_error(Diagnostic::SymbolMismatch {
                    expected: symbol,
                    found: Some(token.value),
                    span: Some(token.position),
                });
                false
            }
            None => {
                self.collect_error(Diagnostic::SymbolMismatch {
                    expected: symbol,
                    found: None,
                    span: None,
                });
                false
            }
        }
    }

    pub fn collect_error(&mut self, error: Diagnostic) {
        tracing::warn!("Parsing error: {error}");
        self.errors.push(error);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.errors)
    }
}
