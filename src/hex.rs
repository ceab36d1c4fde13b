/// Canonical hex form: `#rrggbb`, zero-padded, lowercase everywhere.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Inverse of [`rgb_to_hex`]. Leading `#` optional, either casing accepted.
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn zero_pads_every_channel() {
        assert_eq!(rgb_to_hex([1, 2, 3]), "#010203");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
    }

    #[test]
    fn output_is_lowercase() {
        assert_eq!(rgb_to_hex([255, 170, 222]), "#ffaade");
    }

    #[test]
    fn parses_both_casings_with_or_without_hash() {
        assert_eq!(parse_hex("#6C63FF"), Some([0x6c, 0x63, 0xff]));
        assert_eq!(parse_hex("6c63ff"), Some([0x6c, 0x63, 0xff]));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[quickcheck]
    fn round_trips_every_triple(r: u8, g: u8, b: u8) -> bool {
        parse_hex(&rgb_to_hex([r, g, b])) == Some([r, g, b])
    }
}
