//! Registry of all index calculators behind one trait.
//!
//! Lets callers score any subset of indices generically: each entry
//! reports its name and required columns and evaluates the whole frame in
//! one call. Calculators share nothing but the read-only frame, so entries
//! may be evaluated in parallel.

use polars::prelude::DataFrame;

use dqi_standards::DiiParameter;

use crate::error::ScoreError;
use crate::frame::Scores;

/// One diet-quality index calculator.
pub trait DietIndex: Send + Sync {
    /// Output column name, e.g. `"AHEI"`.
    fn name(&self) -> &'static str;

    /// Columns the calculator validates before scoring.
    fn required_columns(&self) -> Vec<String>;

    /// Score every row of the frame.
    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError>;
}

macro_rules! diet_index {
    ($type:ident, $name:literal, $keys:expr, $calculate:path) => {
        pub struct $type;

        impl DietIndex for $type {
            fn name(&self) -> &'static str {
                $name
            }

            fn required_columns(&self) -> Vec<String> {
                $keys.iter().map(|key| (*key).to_string()).collect()
            }

            fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
                $calculate(df)
            }
        }
    };
}

diet_index!(Ahei, "AHEI", crate::ahei::AHEI_COMPONENT_KEYS, crate::ahei::calculate_ahei);
diet_index!(Aheip, "AHEIP", crate::aheip::AHEIP_COMPONENT_KEYS, crate::aheip::calculate_aheip);
diet_index!(Amed, "AMED", crate::amed::AMED_COMPONENT_KEYS, crate::amed::calculate_amed);
diet_index!(Dash, "DASH", crate::dash::DASH_COMPONENT_KEYS, crate::dash::calculate_dash);
diet_index!(Dashi, "DASHI", crate::dashi::DASHI_COMPONENT_KEYS, crate::dashi::calculate_dashi);
diet_index!(Medi, "MEDI", crate::medi::MEDI_COMPONENT_KEYS, crate::medi::calculate_medi);
diet_index!(
    MediV2,
    "MEDI_V2",
    crate::medi::MEDI_V2_COMPONENT_KEYS,
    crate::medi::calculate_medi_v2
);
diet_index!(Mind, "MIND", crate::mind::MIND_COMPONENT_KEYS, crate::mind::calculate_mind);
diet_index!(
    Acs2020V1,
    "ACS2020_V1",
    crate::acs2020::ACS2020_V1_KEYS,
    crate::acs2020::calculate_acs2020_v1
);
diet_index!(
    Acs2020V2,
    "ACS2020_V2",
    crate::acs2020::ACS2020_V2_KEYS,
    crate::acs2020::calculate_acs2020_v2
);

pub struct Hei2015;
pub struct Hei2020;
pub struct HeiToddlers2020;

fn hei_required_columns() -> Vec<String> {
    let mut keys: Vec<String> = crate::hei::HEI_COMPONENT_KEYS
        .iter()
        .map(|key| (*key).to_string())
        .collect();
    keys.push(crate::hei::HEI_ENERGY_COLUMN.to_string());
    keys
}

impl DietIndex for Hei2015 {
    fn name(&self) -> &'static str {
        "HEI_2015"
    }

    fn required_columns(&self) -> Vec<String> {
        hei_required_columns()
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::hei::calculate_hei_2015(df)
    }
}

impl DietIndex for Hei2020 {
    fn name(&self) -> &'static str {
        "HEI_2020"
    }

    fn required_columns(&self) -> Vec<String> {
        hei_required_columns()
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::hei::calculate_hei_2020(df)
    }
}

impl DietIndex for HeiToddlers2020 {
    fn name(&self) -> &'static str {
        "HEI_TODDLERS_2020"
    }

    fn required_columns(&self) -> Vec<String> {
        hei_required_columns()
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::hei::calculate_hei_toddlers_2020(df)
    }
}

pub struct Phdi;
pub struct PhdiV2;

impl DietIndex for Phdi {
    fn name(&self) -> &'static str {
        "PHDI"
    }

    fn required_columns(&self) -> Vec<String> {
        crate::phdi::PHDI_COMPONENT_KEYS
            .iter()
            .map(|key| (*key).to_string())
            .collect()
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::phdi::calculate_phdi(df)
    }
}

impl DietIndex for PhdiV2 {
    fn name(&self) -> &'static str {
        "PHDI_V2"
    }

    fn required_columns(&self) -> Vec<String> {
        let mut keys: Vec<String> = crate::phdi::PHDI_COMPONENT_KEYS
            .iter()
            .map(|key| (*key).to_string())
            .collect();
        keys.push(crate::phdi::PHDI_V2_ENERGY_COLUMN.to_string());
        keys
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::phdi::calculate_phdi_v2(df)
    }
}

/// DII carries its loaded parameter table.
pub struct Dii {
    parameters: Vec<DiiParameter>,
}

impl Dii {
    pub fn new(parameters: Vec<DiiParameter>) -> Self {
        Self { parameters }
    }
}

impl DietIndex for Dii {
    fn name(&self) -> &'static str {
        "DII"
    }

    fn required_columns(&self) -> Vec<String> {
        crate::dii::dii_required_columns(&self.parameters)
    }

    fn evaluate(&self, df: &DataFrame) -> Result<Scores, ScoreError> {
        crate::dii::calculate_dii(df, &self.parameters)
    }
}

/// All registered calculators, in reporting order.
pub fn all_indices(dii_parameters: &[DiiParameter]) -> Vec<Box<dyn DietIndex>> {
    vec![
        Box::new(Dii::new(dii_parameters.to_vec())),
        Box::new(Ahei),
        Box::new(Aheip),
        Box::new(Amed),
        Box::new(Dash),
        Box::new(Dashi),
        Box::new(Hei2015),
        Box::new(Hei2020),
        Box::new(HeiToddlers2020),
        Box::new(Medi),
        Box::new(MediV2),
        Box::new(Mind),
        Box::new(Phdi),
        Box::new(PhdiV2),
        Box::new(Acs2020V1),
        Box::new(Acs2020V2),
    ]
}
