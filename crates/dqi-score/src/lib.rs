//! Diet-quality index calculators.
//!
//! Each index is a pure function of a validated in-memory table and its
//! fixed component catalog; population-relative components (quantile,
//! decile, median) rank rows against the cohort within the same call.
//! Available indices: DII, AHEI, AHEIP, aMED, DASH, DASHI,
//! HEI-2015/2020/Toddlers-2020, MEDI (v1/v2), MIND (plus HCNS
//! aggregation), PHDI (v1/v2), ACS2020 (v1/v2).

pub mod acs2020;
pub mod ahei;
pub mod aheip;
pub mod amed;
pub mod component;
pub mod dash;
pub mod dashi;
pub mod dii;
pub mod error;
pub mod frame;
pub mod hcns;
pub mod hei;
pub mod kernels;
pub mod medi;
pub mod mind;
pub mod phdi;
pub mod quantile;
pub mod registry;
pub mod stats;

pub use crate::acs2020::{
    ACS2020_V1_KEYS, ACS2020_V2_KEYS, calculate_acs2020_v1, calculate_acs2020_v2,
};
pub use crate::ahei::{AHEI_COMPONENT_KEYS, calculate_ahei};
pub use crate::aheip::{AHEIP_COMPONENT_KEYS, calculate_aheip};
pub use crate::amed::{AMED_COMPONENT_KEYS, calculate_amed};
pub use crate::dash::{DASH_COMPONENT_KEYS, calculate_dash};
pub use crate::dashi::{DASHI_COMPONENT_KEYS, calculate_dashi};
pub use crate::dii::{calculate_dii, dii_required_columns};
pub use crate::error::ScoreError;
pub use crate::frame::{Scores, attach_scores, scores_to_series};
pub use crate::hcns::{HCNS_MIND_MAP, aggregate_hcns_to_mind, calculate_mind_from_hcns};
pub use crate::hei::{
    HEI_COMPONENT_KEYS, HEI_ENERGY_COLUMN, calculate_hei_2015, calculate_hei_2020,
    calculate_hei_toddlers_2020,
};
pub use crate::medi::{
    MEDI_COMPONENT_KEYS, MEDI_V2_COMPONENT_KEYS, calculate_medi, calculate_medi_v2,
};
pub use crate::mind::{MIND_COMPONENT_KEYS, calculate_mind};
pub use crate::phdi::{
    PHDI_COMPONENT_KEYS, PHDI_V2_ENERGY_COLUMN, calculate_phdi, calculate_phdi_v2,
};
pub use crate::registry::{DietIndex, all_indices};
pub use crate::stats::summarize;
