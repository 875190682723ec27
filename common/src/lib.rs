use num_traits::{Float, cast::NumCast};

pub use float_cmp;

// number of decimal digits kept when a coordinate is turned into a lookup key
pub const DEFAULT_PRECISION: u32 = 6;

// (epsilon, ulps) margin used for approximate float comparison
pub const DEFAULT_F64_MARGIN: (f64, i64) = (1e-9, 4);

// margin used by tests which compare points accumulated over several adjacency steps
pub const LOOSE_F64_MARGIN: (f64, i64) = (1e-6, 4);

// approx_eq asserts two values are approximately equal, with an optional (epsilon, ulps) margin
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $lhs:expr, $rhs:expr) => {
        $crate::approx_eq!($type, $lhs, $rhs, $crate::DEFAULT_F64_MARGIN)
    };
    ($type:ty, $lhs:expr, $rhs:expr, $margin:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        assert!(
            <$type as $crate::float_cmp::ApproxEq>::approx_eq(lhs, rhs, $margin),
            "approx_eq failed: {:?} != {:?}",
            lhs,
            rhs,
        );
    }};
}

// fmt_float truncates digits from a float
pub fn fmt_float<F: Float>(f: F, decimal_precision: u32) -> String {
    let pow = 10_i64.pow(decimal_precision);
    let i = match (f * F::from(pow).unwrap_or_else(F::one)).round().to_i64() {
        Some(i) => i,
        None => return String::from("NaN"),
    };
    let fraction = if decimal_precision == 0 {
        String::from("")
    } else {
        format!("{:0width$}", (i % pow).abs(), width = decimal_precision as usize)
    };
    format!("{}{}.{}", if i < 0 { "-" } else { "" }, (i / pow).abs(), fraction)
}

// hash_float multiplies f by a power of 10 then cuts off all fractional digits by rounding.
// None when f is not finite or the scaled value does not fit in an i64.
pub fn hash_float<F: Float>(f: F, decimal_precision: u32) -> Option<i64> {
    if !f.is_finite() {
        return None
    }
    let pow: F = NumCast::from(10_i64.checked_pow(decimal_precision)?)?;
    (f * pow).round().to_i64()
}
