//! Rain-rule target revision: the static resource table and the calculators
//! built on it. Used by the lifecycle layer only when an interruption is
//! reported; the scoring reducer never consults it.

pub mod calculator;
pub mod table;

pub use calculator::{
    calculate_dls_mid_innings, calculate_dls_target, resources_remaining, DlsMidInnings, DlsTarget,
};
pub use table::RESOURCE_TABLE;
