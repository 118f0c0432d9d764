#![no_std]

pub mod constants;

mod accumulator;
mod reduce;
mod report;

pub use accumulator::Accumulator;
pub use reduce::{add_array, and_not_array, or_array, sub_array};
pub use report::ReductionReport;
