//! # Points of Interest
//!
//! A [`Poi`] is what one `START_POI ... END_POI` block of a VPF document turns
//! into. The entity itself does not validate its name or coordinates; that is
//! the grammar's job. The only check it performs is on ratings, which must be
//! numeric.

use std::fmt;

use chrono::{Local, NaiveDate};

/// A named location with coordinates and the ratings submitted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    name: String,
    lat: f64,
    lng: f64,
    ratings: Vec<f64>,
    last_update: Option<NaiveDate>,
}

impl Poi {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::with_ratings(name, lat, lng, Vec::new())
    }

    /// Creates a POI with initial ratings.
    ///
    /// Anything iterable over `f64` is accepted, so a single rating can be
    /// passed as `[4.0]` or `Some(4.0)`. NaN and infinite values are dropped.
    pub fn with_ratings(
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        ratings: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            ratings: ratings
                .into_iter()
                .filter(|rating| rating.is_finite())
                .collect(),
            last_update: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Ratings in submission order.
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn last_update(&self) -> Option<NaiveDate> {
        self.last_update
    }

    /// Mean of all ratings, `0.0` when there are none.
    pub fn average_ratings(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.ratings.iter().sum::<f64>() / self.ratings.len() as f64
    }

    /// Coerces `value` to a number and appends it, stamping `last_update`
    /// with today's date.
    ///
    /// Non-numeric values are logged and dropped; the POI is left untouched
    /// and `false` is returned.
    pub fn add_rating(&mut self, value: impl fmt::Display) -> bool {
        self.add_rating_on(value, Local::now().date_naive())
    }

    /// Same as [`Poi::add_rating`] with an explicit update date.
    pub fn add_rating_on(&mut self, value: impl fmt::Display, date: NaiveDate) -> bool {
        let raw = value.to_string();
        match coerce_rating(&raw) {
            Some(rating) => {
                self.ratings.push(rating);
                self.last_update = Some(date);
                true
            }
            None => {
                tracing::warn!(poi = %self.name, rating = %raw, "rejected non-numeric rating");
                false
            }
        }
    }

    /// `last_update` formatted as `dd/mm/YYYY`.
    pub fn last_update_label(&self) -> Option<String> {
        self.last_update
            .map(|date| date.format("%d/%m/%Y").to_string())
    }
}

impl fmt::Display for Poi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({};{})", self.name, self.lat, self.lng)
    }
}

fn coerce_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
}
