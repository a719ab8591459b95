//! Text rendering of reals for file headers and data.
//!
//! Reals are written in their shortest round-trip form with a signed,
//! two-digit exponent (`1e-09`, `1.5e+16`), the form OOMMF tooling and the
//! Python ecosystem produce. Every rendered value parses back exactly.

use std::fmt::Write;

/// Render `v` in shortest round-trip form.
///
/// ```
/// use dfield_io::format::real;
///
/// assert_eq!(real(0.5), "0.5");
/// assert_eq!(real(1.0), "1.0");
/// assert_eq!(real(1e-9), "1e-09");
/// assert_eq!(real(-2.5e16), "-2.5e+16");
/// assert_eq!(real(123456789012345.0), "123456789012345.0");
/// ```
pub fn real(v: f64) -> String {
    let mut out = String::new();
    push_real(&mut out, v);
    out
}

/// Append the rendering of `v` to `out`.
pub fn push_real(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("nan");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "inf" } else { "-inf" });
        return;
    }
    // `Debug` switches to exponent form below 1e-4 and from 1e16 on, and
    // never pads or signs the exponent.
    let debug = format!("{v:?}");
    match debug.split_once('e') {
        None => out.push_str(&debug),
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            // Writing to a String cannot fail.
            let _ = write!(out, "{mantissa}e{sign}{digits:0>2}");
        }
    }
}

/// Parse a real written by [`real`] or any other standard notation.
pub fn parse_real(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}
