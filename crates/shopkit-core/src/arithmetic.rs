//! # Arithmetic Helpers
//!
//! Small numeric helpers used by storefront screens and reports.

/// Returns the larger of `a` and `b`, preferring `a` on ties.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b {
        a
    } else {
        b
    }
}

/// Classic FizzBuzz label for `n`.
///
/// ## Example
/// ```rust
/// use shopkit_core::arithmetic::fizz_buzz;
///
/// assert_eq!(fizz_buzz(15), "FizzBuzz");
/// assert_eq!(fizz_buzz(17), "17");
/// ```
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Mean of `values`, or `None` when there is nothing to average.
pub fn calculate_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `n!`, or `None` for negative `n` or when the result overflows `u64`.
pub fn factorial(n: i64) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    (1..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

// =============================================================================
// Unit Tests
// =============================================================================
