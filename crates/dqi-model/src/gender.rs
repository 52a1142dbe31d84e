//! Gender representation for gender-stratified scoring.
//!
//! Survey datasets encode gender as a numeric column where `2` means female
//! and any other code means male. The code is decoded once at the column
//! boundary; everything downstream branches on the named variant.

use serde::{Deserialize, Serialize};

/// Decoded gender for components with sex-specific cut-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Decode the survey convention: code 2 is female, everything else male.
    pub fn from_code(code: Option<f64>) -> Self {
        match code {
            Some(value) if value == 2.0 => Self::Female,
            _ => Self::Male,
        }
    }

    /// Select a female/male cut-point pair by gender.
    pub fn pick(self, female: f64, male: f64) -> f64 {
        match self {
            Self::Female => female,
            Self::Male => male,
        }
    }
}
