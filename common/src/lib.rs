pub use float_cmp;

use num_traits::{cast::NumCast, Float};
use std::f64::consts::TAU;

// margin shared by every approximate float comparison in the workspace:
// (epsilon, ulps), convertible into float_cmp::F64Margin
pub const DEFAULT_F64_MARGIN: (f64, i64) = (1e-7, 5);

// rad normalizes an angle into [0, TAU)
pub fn rad(angle: f64) -> f64 {
    let angle = angle % TAU;
    if angle < 0. {
        angle + TAU
    } else {
        angle
    }
}

// fmt_float truncates digits from a float
pub fn fmt_float<F: Float>(f: F, decimal_precision: u32) -> String {
    let pow = 10_i32.pow(decimal_precision);
    let i = (f * NumCast::from(pow).unwrap()).round().to_i32().unwrap();
    format!(
        "{}{}.{}",
        if i < 0 { "-" } else { "" },
        (i / pow).abs(),
        if decimal_precision == 0 {
            String::from("")
        } else {
            format!("{}", (i % pow).abs())
        }
    )
}

// approx_eq asserts approximate equality under DEFAULT_F64_MARGIN
#[macro_export]
macro_rules! approx_eq {
    ($typ:ty, $expected:expr, $actual:expr) => {
        assert!(
            $crate::float_cmp::approx_eq!($typ, $expected, $actual, $crate::DEFAULT_F64_MARGIN),
            "expected {:?} to approximately equal {:?}",
            $actual,
            $expected,
        )
    };
}
