//! Integer-prefix parsing shared by level resolution and version splitting.

/// Parse the leading decimal integer of `text`.
///
/// Leading whitespace is skipped, one optional `+`/`-` sign is accepted, then
/// digits are consumed until the first non-digit. Trailing garbage is ignored
/// (`"3abc"` is 3, `"2.9"` is 2). Returns `None` when no digit follows, or
/// when the value does not fit in an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
