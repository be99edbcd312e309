use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One-decimal quantity (scores, hours) bounded to `(-100, 100)`.
///
/// Clients may send either a JSON number or a numeric string. The value is
/// always written back as a string with exactly one decimal, e.g. `"8.2"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, sqlx::Type)]
#[sqlx(transparent)]
pub struct Score(f64);

impl Score {
    pub const LIMIT: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err("must be a finite number".to_string());
        }
        // `+ 0.0` folds -0.0 into 0.0
        let rounded = (value * 10.0).round() / 10.0 + 0.0;
        if rounded.abs() >= Self::LIMIT {
            return Err(format!("must be between -{0} and {0} exclusive", Self::LIMIT));
        }
        Ok(Score(rounded))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{s}' is not a number"))?;
        Score::new(parsed)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

struct ScoreVisitor;

impl Visitor<'_> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Score, E> {
        Score::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Score, E> {
        Score::new(v as f64).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Score, E> {
        Score::new(v as f64).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Score, E> {
        v.parse().map_err(E::custom)
    }
}
