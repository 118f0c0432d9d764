use cfg_if::cfg_if;

use bitfold::ReductionReport;

pub fn main() {
    let report = ReductionReport::collect();

    cfg_if! {
        if #[cfg(feature = "diagnostics")] {
            println!("{}", report);
        } else {
            let _ = report;
        }
    }
}
