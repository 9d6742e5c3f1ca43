use crate::testcase::Case;
use std::ops::RangeInclusive;

/// `ceil(a / b)`, rounding toward positive infinity for any signs.
pub fn ceil_div(a: i64, b: i64) -> i64 {
    let (a, b) = if b < 0 { (-a, -b) } else { (a, b) };
    if a >= 0 && a % b != 0 { a / b + 1 } else { a / b }
}

/// `floor(a / b)`, rounding toward negative infinity for any signs.
pub fn floor_div(a: i64, b: i64) -> i64 {
    let (a, b) = if b < 0 { (-a, -b) } else { (a, b) };
    if a < 0 && a % b != 0 { a / b - 1 } else { a / b }
}

/// Default range of `i` the template scans.
pub const ITERATIONS: RangeInclusive<i64> = 1..=99;

/// Counts `i` in `iters` for which `[a + b i, a + c i]` holds no multiple of
/// `d`, i.e. `ceil((a + b i) / d) > floor((a + c i) / d)`.
///
/// Returns `None` if an endpoint overflows `i64`.
pub fn count_gaps(case: &Case, iters: RangeInclusive<i64>) -> Option<usize> {
    let mut count = 0;
    for i in iters {
        let l = case.b.checked_mul(i)?.checked_add(case.a)?;
        let r = case.c.checked_mul(i)?.checked_add(case.a)?;
        if ceil_div(l, case.d) > floor_div(r, case.d) {
            count += 1;
        }
    }
    Some(count)
}
