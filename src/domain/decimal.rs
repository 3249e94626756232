/// Returns the decimal digit string `decimal` incremented by one.
///
/// Works on the text directly so patch numbers of any length are handled
/// without overflow. Trailing 9s turn into 0s; when every digit carries, a
/// leading `1` is prepended (`"99"` becomes `"100"`).
///
/// `decimal` must be a non-empty string of ASCII digits.
pub fn increment_decimal(decimal: &str) -> String {
    let mut digits = decimal.as_bytes().to_vec();
    let mut i = digits.len();
    while i > 0 && digits[i - 1] == b'9' {
        digits[i - 1] = b'0';
        i -= 1;
    }
    if i > 0 {
        digits[i - 1] += 1;
    } else {
        digits.insert(0, b'1');
    }
    // Only ASCII digits are ever written.
    String::from_utf8_lossy(&digits).into_owned()
}
