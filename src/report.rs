use core::fmt;

use crate::constants::seed_constants::{ADD_SEED, AND_NOT_SEED, OR_SEED, SUB_SEED};
use crate::reduce::{add_array, and_not_array, or_array, sub_array};

/// The four reduction results for the reference seeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReductionReport {
    pub add: u32,
    pub sub: u32,
    pub and_not: u32,
    pub or: u32,
}

impl ReductionReport {
    /// Runs all four reductions against the reference seeds.
    pub fn collect() -> Self {
        ReductionReport {
            add: add_array(ADD_SEED),
            sub: sub_array(SUB_SEED),
            and_not: and_not_array(AND_NOT_SEED),
            or: or_array(OR_SEED),
        }
    }
}

impl fmt::Display for ReductionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "add_array={:08x}", self.add)?;
        writeln!(f, "sub_array={:08x}", self.sub)?;
        writeln!(f, "and_not_array={:08x}", self.and_not)?;
        write!(f, "or_array={:08x}", self.or)
    }
}
