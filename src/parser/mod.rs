mod grammar;
mod state;
mod symbol;

pub use grammar::*;
pub use state::ParseState;
pub use symbol::{SYMBOLS, Symbol};

use crate::config::ParserConfig;
use crate::diagnostic::Diagnostic;
use crate::lexer::Token;
use crate::poi::Poi;

/// Grammar engine for VPF documents.
///
/// Parsing never aborts: problems are collected as diagnostics and the POIs
/// that could be built are kept. A document is valid exactly when
/// [`VpfParser::error_count`] is zero after [`VpfParser::parse`].
#[derive(Debug, Default)]
pub struct VpfParser {
    config: ParserConfig,
    pois: Vec<Poi>,
    diagnostics: Vec<Diagnostic>,
}

impl VpfParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            pois: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parses `input`, replacing the results of any previous parse.
    pub fn parse(&mut self, input: &str) {
        let tokens = Token::lex(input);
        if self.config.show_tokenize {
            let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
            tracing::info!(target: "vpf::tokens", "{values:?}");
        }

        let mut state = ParseState::new(tokens).show_symbols(self.config.show_symbols);
        self.pois = document(&mut state);
        self.diagnostics = state.take_errors();

        tracing::debug!(
            pois = self.pois.len(),
            errors = self.diagnostics.len(),
            "parsed VPF document"
        );
    }

    pub fn parsed_pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_pois(self) -> Vec<Poi> {
        self.pois
    }
}

/// Everything a single parse produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub pois: Vec<Poi>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parses a complete document with a throwaway [`VpfParser`].
pub fn parse_document(input: &str, config: ParserConfig) -> ParseOutcome {
    let mut parser = VpfParser::new(config);
    parser.parse(input);
    ParseOutcome {
        pois: parser.pois,
        diagnostics: parser.diagnostics,
    }
}

/// Builds one POI from a `START_POI ... END_POI` block with no `$$` sentinel.
///
/// The `START_POI`/`END_POI` lines may be left out. Problems are logged as
/// for a full document and the POI is built from whatever could be read.
pub fn parse_poi(block: &str) -> Poi {
    let mut state = ParseState::from_source(block);
    if let Some(poi) = poi(&mut state) {
        return poi;
    }

    let (name, coordinates) = body(&mut state);
    let mut poi = Poi::new(name, coordinates.lat, coordinates.lng);
    note(&mut state, &mut poi);
    if state.check(Symbol::EndPoi) {
        state.expect(Symbol::EndPoi);
    }
    poi
}
