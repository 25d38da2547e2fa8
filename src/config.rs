//! Diagnostic verbosity switches for the VPF parser.

/// Construction-time options of a [`crate::parser::VpfParser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Echo the full token sequence once before parsing (default off)
    pub show_tokenize: bool,

    /// Echo every token as it is consumed (default off)
    pub show_symbols: bool,
}

impl ParserConfig {
    pub fn new(show_tokenize: bool, show_symbols: bool) -> Self {
        Self {
            show_tokenize,
            show_symbols,
        }
    }
}
