use std::fmt;

/// Terminal of the VPF grammar.
///
/// The discriminants are the positions in the symbol table, so two tokens
/// are the same symbol exactly when their indices are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    StartPoi = 0,
    Name = 1,
    LatLng = 2,
    Note = 3,
    EndPoi = 4,
    /// The `$$` end-of-input sentinel
    End = 5,
}

/// The fixed, ordered symbol table.
pub const SYMBOLS: [Symbol; 6] = [
    Symbol::StartPoi,
    Symbol::Name,
    Symbol::LatLng,
    Symbol::Note,
    Symbol::EndPoi,
    Symbol::End,
];

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::StartPoi => "START_POI",
            Symbol::Name => "name",
            Symbol::LatLng => "latlng",
            Symbol::Note => "note",
            Symbol::EndPoi => "END_POI",
            Symbol::End => "$$",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Finds the symbol spelled exactly `value`.
    pub fn lookup(value: &str) -> Option<Symbol> {
        SYMBOLS
            .iter()
            .copied()
            .find(|symbol| symbol.as_str() == value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
