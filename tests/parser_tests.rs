use vpf::diagnostic::{Diagnostic, Field};
use vpf::parser::{LatLng, ParseState, Symbol, latlng, name, note};
use vpf::poi::Poi;

fn state(input: &str) -> ParseState {
    ParseState::from_source(input)
}

// ===== Primitive Tests =====

#[test]
fn accept_returns_table_index() {
    let mut state = state("");
    assert_eq!(state.accept("START_POI", None), Some(0));
    assert_eq!(state.accept("note", None), Some(3));
    assert_eq!(state.accept("$$", None), Some(5));
    assert_eq!(state.error_count(), 0);
}

#[test]
fn accept_records_unknown_symbol() {
    let mut state = state("");
    assert_eq!(state.accept("NOTE", None), None);
    assert_eq!(state.error_count(), 1);
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::UnknownSymbol { symbol, .. } if symbol == "NOTE"
    ));
}

#[test]
fn check_does_not_consume() {
    let mut state = state("START_POI\r\n$$");
    assert!(state.check(Symbol::StartPoi));
    assert!(!state.check(Symbol::End));
    assert_eq!(state.position(), 0);
    assert_eq!(state.error_count(), 0);
}

#[test]
fn check_on_unknown_token_is_an_error() {
    let mut state = state("BOGUS");
    assert!(!state.check(Symbol::StartPoi));
    assert_eq!(state.error_count(), 1);
}

#[test]
fn check_on_exhausted_stream() {
    let mut state = state("");
    assert!(!state.check(Symbol::End));
    assert_eq!(state.error_count(), 0);
}

#[test]
fn expect_consumes_on_success_and_failure() {
    let mut state = state("START_POI\r\nEND_POI");
    assert!(state.expect(Symbol::StartPoi));
    assert!(!state.expect(Symbol::Name));
    assert_eq!(state.position(), 2);
    assert_eq!(state.error_count(), 1);
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::SymbolMismatch { expected: Symbol::Name, found: Some(found), .. } if found == "END_POI"
    ));
}

#[test]
fn expect_at_end_of_input() {
    let mut state = state("");
    assert!(!state.expect(Symbol::End));
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::SymbolMismatch { expected: Symbol::End, found: None, .. }
    ));
}

#[test]
fn next_pops_in_order() {
    let mut state = state("note: 4");
    assert_eq!(state.next().map(|t| t.value), Some("note".to_string()));
    assert_eq!(state.next().map(|t| t.value), Some("4".to_string()));
    assert!(state.next().is_none());
    assert!(!state.has_next());
}

// ===== Rule Tests =====

#[test]
fn read_name() {
    let mut state = state("name: Café d'Albert");
    assert_eq!(name(&mut state), "Café d'Albert");
    assert_eq!(state.error_count(), 0);
}

#[test]
fn read_invalid_name() {
    let mut state = state("name: <script>");
    assert_eq!(name(&mut state), "<script>");
    assert_eq!(state.error_count(), 1);
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::InvalidField { field: Field::Name, .. }
    ));
}

#[test]
fn read_latlng() {
    let mut state = state("latlng: 48.866205;2.399279");
    assert_eq!(
        latlng(&mut state),
        LatLng {
            lat: 48.866205,
            lng: 2.399279
        }
    );
    assert_eq!(state.error_count(), 0);
}

#[test]
fn read_negative_latlng() {
    let mut state = state("latlng: -34.6037;-58.3816");
    assert_eq!(
        latlng(&mut state),
        LatLng {
            lat: -34.6037,
            lng: -58.3816
        }
    );
}

#[test]
fn read_malformed_latlng_is_not_fatal() {
    let mut state = state("latlng: 48;abc");
    let coordinates = latlng(&mut state);
    assert_eq!(coordinates.lat, 48.0);
    assert!(coordinates.lng.is_nan());
    assert_eq!(state.error_count(), 1);
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::InvalidField { field: Field::LatLng, value, .. } if value == "48;abc"
    ));
}

#[test]
fn read_valid_rating() {
    let mut poi = Poi::new("Test POI", 48.8566, 2.3522);
    let mut state = state("note: 4");
    note(&mut state, &mut poi);
    assert_eq!(poi.ratings(), vec![4.0]);
    assert_eq!(state.error_count(), 0);
}

#[test]
fn ignore_ratings_outside_range() {
    let mut poi = Poi::new("Test POI", 48.8566, 2.3522);
    let mut state = state("note: 6\r\nnote: -1\r\nnote: 4.5");
    note(&mut state, &mut poi);
    assert!(poi.ratings().is_empty());
    assert_eq!(state.error_count(), 3);
    assert!(!state.has_next());
}

#[test]
fn read_several_ratings() {
    let mut poi = Poi::new("Café d'Albert", 48.857735, 2.394987);
    let mut state = state("note: 3\r\nnote: 4\r\nnote: 2\r\nEND_POI");
    note(&mut state, &mut poi);
    assert_eq!(poi.ratings(), vec![3.0, 4.0, 2.0]);
    assert!(state.check(Symbol::EndPoi));
    assert_eq!(state.error_count(), 0);
}

#[test]
fn note_loop_stops_without_note_lookahead() {
    let mut poi = Poi::new("Test POI", 0.0, 0.0);
    let mut state = state("END_POI");
    note(&mut state, &mut poi);
    assert!(poi.ratings().is_empty());
    assert_eq!(state.position(), 0);
}

#[test]
fn read_whitespace_only_name_is_invalid() {
    let mut state = state("name: \t ");
    assert_eq!(name(&mut state), "\t ");
    assert_eq!(state.error_count(), 1);
    assert!(matches!(
        &state.errors()[0],
        Diagnostic::InvalidField { field: Field::Name, .. }
    ));
}
