//! # VPF - Points of Interest parser
//!
//! This crate reads VPF documents, a small line-oriented text format that
//! describes Points of Interest (POIs): a name, a coordinate pair and any
//! number of ratings between 0 and 5.
//!
//! ```text
//! START_POI
//! name: Chez Gabin
//! latlng: 48.871794;2.379538
//! note: 3
//! note: 2
//! END_POI
//! $$
//! ```
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Text (String)
//!     ↓
//! [Lexer] → Token Stream (split on line breaks and ": ")
//!     ↓
//! [Parser] → Vec<Poi> + Vec<Diagnostic>
//! ```
//!
//! ## Error Recovery
//!
//! The parser never stops at the first problem. Unknown symbols, out of order
//! fields and malformed values are all collected as [`Diagnostic`]s while
//! parsing continues with the next expected token. A document is valid when
//! no diagnostic was produced; the POIs that could be built are available
//! either way.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization into spanned tokens
//! - [`parser`] - Symbol table, parse state and grammar rules
//! - [`poi`] - The POI entity
//! - [`diagnostic`] - Parse error taxonomy
//! - [`config`] - Parser verbosity switches
//!
//! ## Getting Started
//!
//! ```
//! use vpf::{ParserConfig, VpfParser};
//!
//! let mut parser = VpfParser::new(ParserConfig::default());
//! parser.parse("START_POI\r\nname: A\r\nlatlng: 1.5;2.5\r\nnote: 3\r\nEND_POI\r\n$$");
//!
//! assert_eq!(parser.error_count(), 0);
//! assert_eq!(parser.parsed_pois()[0].name(), "A");
//! ```

pub mod config;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod poi;

pub use config::ParserConfig;
pub use diagnostic::{Diagnostic, Field};
pub use lexer::{Token, tokenize};
pub use parser::{ParseOutcome, Symbol, VpfParser, parse_document, parse_poi};
pub use poi::Poi;
