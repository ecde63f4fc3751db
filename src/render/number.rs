use crate::i18n::Locale;

/// Formats `value` with exactly `precision` fractional digits, grouping the
/// integer part in thousands with the separators of `locale`.
///
/// Rounds half away from zero on the shortest decimal representation, so
/// `20.5` becomes `21` and `1.005` becomes `1.01`.
pub fn format_number(value: f64, precision: usize, locale: Locale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_owned();
    }

    let (integer, fraction) = round_decimal(&value.abs().to_string(), precision);

    let mut formatted = String::with_capacity(integer.len() + integer.len() / 3 + precision + 2);
    if value < 0.0 {
        formatted.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            formatted.push(locale.grouping_separator());
        }
        formatted.push(digit);
    }
    if !fraction.is_empty() {
        formatted.push(locale.decimal_separator());
        formatted.push_str(&fraction);
    }

    formatted
}

/// Rounds a plain non-negative decimal string such as `21.456` to `precision`
/// fractional digits. Returns the integer and fractional digits.
fn round_decimal(digits: &str, precision: usize) -> (String, String) {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let round_up = fraction.as_bytes().get(precision).is_some_and(|d| *d >= b'5');
    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let fraction = kept.split_off(kept.len() - precision);
    (
        String::from_utf8_lossy(&kept).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}
