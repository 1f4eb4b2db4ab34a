/// ## Decimal text for operands
///
/// Numbers typed by a user or stored in a program use the decimal
/// separator of the current locale. The engine only ever needs the
/// separator, so that is all a `NumberFormat` carries.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn new(decimal_separator: char) -> NumberFormat {
        NumberFormat { decimal_separator }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Shortest text that parses back to exactly `value`.
    pub fn format(&self, value: f64) -> String {
        let s = value.to_string();
        if self.decimal_separator == '.' {
            s
        } else {
            s.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Accepts `[+-]digits[sep digits][(e|E)[+-]digits]` with at least one
    /// mantissa digit, or one of `inf`, `+inf`, `-inf`, `NaN`.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        match text {
            "inf" | "+inf" => return Some(f64::INFINITY),
            "-inf" => return Some(f64::NEG_INFINITY),
            "NaN" => return Some(f64::NAN),
            _ => {}
        }
        let mut normal = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                normal.push(c);
                chars.next();
            }
        }
        let mut mantissa_digits = 0;
        let mut seen_separator = false;
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                mantissa_digits += 1;
                normal.push(c);
            } else if c == self.decimal_separator && !seen_separator {
                seen_separator = true;
                normal.push('.');
            } else {
                break;
            }
            chars.next();
        }
        if mantissa_digits == 0 {
            return None;
        }
        if let Some(&c) = chars.peek() {
            if c != 'e' && c != 'E' {
                return None;
            }
            normal.push('e');
            chars.next();
            if let Some(&c) = chars.peek() {
                if c == '+' || c == '-' {
                    normal.push(c);
                    chars.next();
                }
            }
            let mut exponent_digits = 0;
            for c in chars {
                if !c.is_ascii_digit() {
                    return None;
                }
                exponent_digits += 1;
                normal.push(c);
            }
            if exponent_digits == 0 {
                return None;
            }
        }
        normal.parse::<f64>().ok()
    }
}

/// Operand text for descriptions: whole numbers print without a fraction.
pub fn prettify(value: f64) -> String {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if value.is_finite() && value.fract() == 0.0 && value >= -LIMIT && value < LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let nf = NumberFormat::default();
        assert_eq!(nf.parse("3"), Some(3.0));
        assert_eq!(nf.parse("-2.5"), Some(-2.5));
        assert_eq!(nf.parse(" 42 "), Some(42.0));
        assert_eq!(nf.parse(".5"), Some(0.5));
        assert_eq!(nf.parse("5."), Some(5.0));
        assert_eq!(nf.parse("1e3"), Some(1000.0));
        assert_eq!(nf.parse("1.5E-1"), Some(0.15));
    }

    #[test]
    fn test_parse_rejects() {
        let nf = NumberFormat::default();
        assert_eq!(nf.parse(""), None);
        assert_eq!(nf.parse("-"), None);
        assert_eq!(nf.parse("."), None);
        assert_eq!(nf.parse("1.2.3"), None);
        assert_eq!(nf.parse("3x"), None);
        assert_eq!(nf.parse("1e"), None);
        assert_eq!(nf.parse("x"), None);
        assert_eq!(nf.parse("infinity"), None);
    }

    #[test]
    fn test_parse_non_finite() {
        let nf = NumberFormat::default();
        assert_eq!(nf.parse("inf"), Some(f64::INFINITY));
        assert_eq!(nf.parse("-inf"), Some(f64::NEG_INFINITY));
        assert!(nf.parse("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_comma_locale() {
        let nf = NumberFormat::new(',');
        assert_eq!(nf.parse("2,5"), Some(2.5));
        assert_eq!(nf.parse("2.5"), None);
        assert_eq!(nf.format(2.5), "2,5");
        assert_eq!(nf.format(3.0), "3");
    }

    #[test]
    fn test_format_round_trip() {
        let nf = NumberFormat::default();
        for v in &[0.1, 1.0 / 3.0, -7.25, 1e300, 5e-324, 123456789.0] {
            assert_eq!(nf.parse(&nf.format(*v)), Some(*v));
        }
    }

    #[test]
    fn test_prettify() {
        assert_eq!(prettify(3.0), "3");
        assert_eq!(prettify(-0.0), "0");
        assert_eq!(prettify(-12.0), "-12");
        assert_eq!(prettify(2.5), "2.5");
        assert_eq!(prettify(f64::INFINITY), "inf");
        assert_eq!(prettify(f64::NAN), "NaN");
    }
}
