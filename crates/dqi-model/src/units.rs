//! Measurement units for nutrient columns.
//!
//! Every nutrient field has a canonical unit (grams, milligrams, micrograms,
//! kilocalories). Source files sometimes arrive in a different unit, encoded
//! as a column-name suffix; the normalizer converts them using the fixed
//! factors defined here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kilojoules per kilocalorie.
const KJ_PER_KCAL: f64 = 4.184;

/// A recognized measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams.
    G,
    /// Milligrams.
    Mg,
    /// Micrograms.
    Mcg,
    /// Kilocalories.
    Kcal,
    /// Kilojoules.
    Kj,
}

impl Unit {
    /// All units recognized as column-name suffixes, in match order.
    ///
    /// `mg` is checked before `g` so that `sodium_mg` is not read as a
    /// column named `sodium_m` in grams; `mcg` likewise precedes `g`.
    pub const SUFFIX_ORDER: [Unit; 5] = [Unit::Mg, Unit::Mcg, Unit::G, Unit::Kcal, Unit::Kj];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Mg => "mg",
            Self::Mcg => "mcg",
            Self::Kcal => "kcal",
            Self::Kj => "kj",
        }
    }

    /// Multiplicative factor converting a value in `self` to `target`.
    ///
    /// Returns `None` for unsupported pairs (e.g. mass to energy). The
    /// identity conversion is always supported with factor 1.
    pub fn factor_to(self, target: Unit) -> Option<f64> {
        if self == target {
            return Some(1.0);
        }
        match (self, target) {
            (Self::G, Self::Mg) => Some(1_000.0),
            (Self::Mg, Self::G) => Some(0.001),
            (Self::Mg, Self::Mcg) => Some(1_000.0),
            (Self::Mcg, Self::Mg) => Some(0.001),
            (Self::G, Self::Mcg) => Some(1_000_000.0),
            (Self::Mcg, Self::G) => Some(0.000_001),
            (Self::Kj, Self::Kcal) => Some(1.0 / KJ_PER_KCAL),
            (Self::Kcal, Self::Kj) => Some(KJ_PER_KCAL),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unit strings outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized unit: {0}")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "g" => Ok(Self::G),
            "mg" => Ok(Self::Mg),
            "mcg" | "ug" => Ok(Self::Mcg),
            "kcal" => Ok(Self::Kcal),
            "kj" => Ok(Self::Kj),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}
