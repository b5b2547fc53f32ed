//! Equation-string rendering, one rule per model family.
//!
//! Coefficients are rounded to 4 decimal places for display. Polynomial
//! terms whose rounded coefficient is exactly zero are omitted, and the
//! surviving terms are joined with `" + "` — a negative coefficient still
//! renders with the literal `+` before it (`"2.0x^2 + -3.5"`). That is a
//! known cosmetic quirk; downstream output is compared against it, so do
//! not "fix" the joiner.

/// Round to 4 decimal places (display resolution for all coefficients).
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Format a rounded coefficient with trailing zeros trimmed but at least
/// one decimal kept: `2.0`, `-3.5`, `1.2345`.
fn fmt_coef(v: f64) -> String {
    let r = round4(v);
    let r = if r == 0.0 { 0.0 } else { r }; // normalize -0.0
    let mut s = format!("{r:.4}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Render a polynomial from coefficients ordered highest power first.
///
/// The constant term renders bare; every other term as `{coef}x^{power}`.
pub fn polynomial_equation(coeffs: &[f64]) -> String {
    let degree = coeffs.len().saturating_sub(1);
    let mut terms = Vec::new();

    for (i, &coef) in coeffs.iter().enumerate() {
        let power = degree - i;
        if round4(coef) == 0.0 {
            continue;
        }
        let term = if power == 0 {
            fmt_coef(coef)
        } else {
            format!("{}x^{}", fmt_coef(coef), power)
        };
        terms.push(term);
    }

    terms.join(" + ")
}

/// `"{a}e^[{b}(x - {d})] + {c}"`
pub fn exponential_equation(a: f64, b: f64, c: f64, d: f64) -> String {
    format!(
        "{}e^[{}(x - {})] + {}",
        fmt_coef(a),
        fmt_coef(b),
        fmt_coef(d),
        fmt_coef(c)
    )
}

/// `"{a}ln[{b}(x - {d})] + {c}"`
pub fn logarithmic_equation(a: f64, b: f64, c: f64, d: f64) -> String {
    format!(
        "{}ln[{}(x - {})] + {}",
        fmt_coef(a),
        fmt_coef(b),
        fmt_coef(d),
        fmt_coef(c)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_terms_are_omitted_and_plus_is_literal() {
        assert_eq!(polynomial_equation(&[2.0, 0.0, -3.5]), "2.0x^2 + -3.5");
    }

    #[test]
    fn rounding_decides_omission() {
        // 0.00004 rounds to zero and disappears; 0.00005 rounds up and stays.
        assert_eq!(polynomial_equation(&[1.0, 0.00004, 0.0]), "1.0x^2");
        assert_eq!(polynomial_equation(&[1.0, 0.00006, 0.0]), "1.0x^2 + 0.0001x^1");
    }

    #[test]
    fn linear_term_keeps_explicit_power() {
        assert_eq!(polynomial_equation(&[2.5, 1.0]), "2.5x^1 + 1.0");
    }

    #[test]
    fn coefficients_trim_trailing_zeros() {
        assert_eq!(polynomial_equation(&[1.25, 0.5]), "1.25x^1 + 0.5");
        assert_eq!(polynomial_equation(&[1.23456, 0.0]), "1.2346x^1");
    }

    #[test]
    fn exponential_template() {
        assert_eq!(
            exponential_equation(2.0, 0.5, 3.0, 1.0),
            "2.0e^[0.5(x - 1.0)] + 3.0"
        );
    }

    #[test]
    fn logarithmic_template() {
        assert_eq!(
            logarithmic_equation(1.5, 2.0, -0.25, 0.0),
            "1.5ln[2.0(x - 0.0)] + -0.25"
        );
    }
}
