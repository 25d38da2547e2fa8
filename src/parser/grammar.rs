//! Grammar rules of the VPF format
//!
//! ```text
//! document ::= poi* "$$"
//! poi      ::= "START_POI" body note* "END_POI"
//! body     ::= name latlng
//! name     ::= "name" <name text>
//! latlng   ::= "latlng" <lat;lng>
//! note     ::= "note" <digit 0-5>
//! ```
//!
//! Every rule reports problems into the [`ParseState`] and keeps going; none
//! of them can fail.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, Field};
use crate::lexer::Token;
use crate::poi::Poi;

use super::state::ParseState;
use super::symbol::Symbol;

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w' ]*\w[\w' ]*$").expect("name pattern is valid"));

static LAT_LNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?[0-9]+\.[0-9]+);([+-]?[0-9]+\.[0-9]+)$").expect("latlng pattern is valid")
});

static NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-5]$").expect("note pattern is valid"));

/// A coordinate pair as read from a `latlng` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// document := poi* "$$"
pub fn document(state: &mut ParseState) -> Vec<Poi> {
    let mut pois = Vec::new();
    while let Some(poi) = poi(state) {
        pois.push(poi);
    }

    state.expect(Symbol::End);

    if let Some(token) = state.peek() {
        let error = Diagnostic::TrailingInput {
            value: token.value.clone(),
            span: Some(token.pos()),
        };
        state.collect_error(error);
    }

    pois
}

/// poi := "START_POI" body note* "END_POI"
///
/// Only attempted when the lookahead is `START_POI`; returns `None` otherwise.
pub fn poi(state: &mut ParseState) -> Option<Poi> {
    if !state.check(Symbol::StartPoi) {
        return None;
    }

    state.expect(Symbol::StartPoi);
    let (name, coordinates) = body(state);
    let mut poi = Poi::new(name, coordinates.lat, coordinates.lng);
    note(state, &mut poi);
    state.expect(Symbol::EndPoi);

    Some(poi)
}

/// body := name latlng
pub fn body(state: &mut ParseState) -> (String, LatLng) {
    let name = name(state);
    let coordinates = latlng(state);
    (name, coordinates)
}

/// name := "name" <name text>
///
/// A rejected name is still returned verbatim.
pub fn name(state: &mut ParseState) -> String {
    state.expect(Symbol::Name);
    let Some(token) = payload(state, Field::Name) else {
        return String::new();
    };

    if !NAME.is_match(&token.value) {
        invalid(state, Field::Name, &token);
    }
    token.value
}

/// latlng := "latlng" <lat;lng>
///
/// Malformed pairs are reported, then each side is read on its own; a side
/// that is not a number comes back as NaN.
pub fn latlng(state: &mut ParseState) -> LatLng {
    state.expect(Symbol::LatLng);
    let Some(token) = payload(state, Field::LatLng) else {
        return LatLng {
            lat: f64::NAN,
            lng: f64::NAN,
        };
    };

    if let Some(captures) = LAT_LNG.captures(&token.value) {
        if let (Ok(lat), Ok(lng)) = (captures[1].parse::<f64>(), captures[2].parse::<f64>()) {
            return LatLng { lat, lng };
        }
    }

    invalid(state, Field::LatLng, &token);
    let (lat, lng) = token.value.split_once(';').unwrap_or((token.value.as_str(), ""));
    LatLng {
        lat: lat.trim().parse().unwrap_or(f64::NAN),
        lng: lng.trim().parse().unwrap_or(f64::NAN),
    }
}

/// note := ("note" <digit 0-5>)*
///
/// Valid ratings are added to `poi`; anything else is reported and dropped.
pub fn note(state: &mut ParseState, poi: &mut Poi) {
    while state.check(Symbol::Note) {
        state.expect(Symbol::Note);
        let Some(token) = payload(state, Field::Note) else {
            return;
        };

        if NOTE.is_match(&token.value) {
            poi.add_rating(&token.value);
        } else {
            invalid(state, Field::Note, &token);
        }
    }
}

/// Consumes the value token following a field keyword.
fn payload(state: &mut ParseState, field: Field) -> Option<Token> {
    let token = state.next();
    if token.is_none() {
        state.collect_error(Diagnostic::InvalidField {
            field,
            value: String::new(),
            span: None,
        });
    }
    token
}

fn invalid(state: &mut ParseState, field: Field, token: &Token) {
    state.collect_error(Diagnostic::InvalidField {
        field,
        value: token.value.clone(),
        span: Some(token.pos()),
    });
}
