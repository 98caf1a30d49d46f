//! Scalar token parsers.
//!
//! Decimal integers are accumulated digit by digit with an overflow check
//! before every multiply-by-ten and every digit addition, instead of going
//! through the standard conversion routines: a rejected token must never
//! cost more than one pass over its bytes, and the accepted grammar is
//! deliberately narrower than `FromStr` (no `+` on unsigned values, no
//! radix prefixes, no underscores).

/// Decimal digit value of an ASCII byte.
#[inline(always)]
const fn ascii_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        _ => None,
    }
}

macro_rules! parse_unsigned {
    ($name:ident, $ty:ty) => {
        /// Parses an unsigned decimal token. Empty tokens, signs and any
        /// non-digit byte are rejected; so is any value past the type's
        /// maximum.
        pub fn $name(token: &str) -> Option<$ty> {
            if token.is_empty() {
                return None;
            }
            let mut value: $ty = 0;
            for &byte in token.as_bytes() {
                let digit = ascii_digit(byte)?;
                value = value.checked_mul(10)?.checked_add(digit as $ty)?;
            }
            Some(value)
        }
    };
}

parse_unsigned!(parse_u8, u8);
parse_unsigned!(parse_u16, u16);
parse_unsigned!(parse_u32, u32);
parse_unsigned!(parse_u64, u64);

macro_rules! parse_signed {
    ($name:ident, $ty:ty, $uty:ty) => {
        /// Parses a signed decimal token with an optional leading `+` or
        /// `-`. The magnitude is accumulated against a sign-dependent
        /// bound: the negative side allows one extra unit, so the type's
        /// most negative value round-trips.
        pub fn $name(token: &str) -> Option<$ty> {
            let bytes = token.as_bytes();
            let (negative, digits) = match bytes.first() {
                Some(b'-') => (true, &bytes[1..]),
                Some(b'+') => (false, &bytes[1..]),
                _ => (false, bytes),
            };
            // A bare sign is as empty as an empty token.
            if digits.is_empty() {
                return None;
            }

            let bound: $uty = (<$ty>::MAX as $uty) + (negative as $uty);
            let mut magnitude: $uty = 0;
            for &byte in digits {
                let digit = ascii_digit(byte)? as $uty;
                if magnitude > bound / 10 {
                    return None;
                }
                magnitude *= 10;
                if digit > bound - magnitude {
                    return None;
                }
                magnitude += digit;
            }

            // For the most negative value the cast alone already yields it;
            // wrapping_neg maps it onto itself.
            let cast = magnitude as $ty;
            Some(if negative { cast.wrapping_neg() } else { cast })
        }
    };
}

parse_signed!(parse_i32, i32, u32);
parse_signed!(parse_i64, i64, u64);

/// Parses an `i8` by going through `i32` and range-checking the result.
pub fn parse_i8(token: &str) -> Option<i8> {
    i8::try_from(parse_i32(token)?).ok()
}

/// Parses an `i16` by going through `i32` and range-checking the result.
pub fn parse_i16(token: &str) -> Option<i16> {
    i16::try_from(parse_i32(token)?).ok()
}

/// Boolean literals: `true`/`false` in any casing, `1`/`0` exactly.
pub fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match token {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    // ==================== UNSIGNED ====================

    #[test]
    fn u8_valid() {
        assert_eq!(parse_u8("0"), Some(0));
        assert_eq!(parse_u8("255"), Some(255));
        assert_eq!(parse_u8("001"), Some(1));
    }

    #[test]
    fn u8_invalid() {
        assert_eq!(parse_u8("256"), None);
        assert_eq!(parse_u8("abc"), None);
        assert_eq!(parse_u8(""), None);
        assert_eq!(parse_u8("+1"), None);
        assert_eq!(parse_u8("-1"), None);
    }

    #[test]
    fn u16_bounds() {
        assert_eq!(parse_u16("65535"), Some(u16::MAX));
        assert_eq!(parse_u16("65536"), None);
        assert_eq!(parse_u16("655350"), None);
    }

    #[test]
    fn u32_bounds() {
        assert_eq!(parse_u32("4294967295"), Some(u32::MAX));
        assert_eq!(parse_u32("4294967296"), None);
        assert_eq!(parse_u32("42949672950"), None);
    }

    #[test]
    fn u64_bounds() {
        assert_eq!(parse_u64("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_u64("18446744073709551616"), None);
        assert_eq!(parse_u64("0x10"), None);
    }

    // ==================== SIGNED ====================

    #[test]
    fn i8_valid() {
        assert_eq!(parse_i8("0"), Some(0));
        assert_eq!(parse_i8("-128"), Some(i8::MIN));
        assert_eq!(parse_i8("127"), Some(i8::MAX));
        assert_eq!(parse_i8("+42"), Some(42));
    }

    #[test]
    fn i8_out_of_range() {
        assert_eq!(parse_i8("128"), None);
        assert_eq!(parse_i8("-129"), None);
    }

    #[test]
    fn i16_bounds() {
        assert_eq!(parse_i16("-32768"), Some(i16::MIN));
        assert_eq!(parse_i16("32767"), Some(i16::MAX));
        assert_eq!(parse_i16("32768"), None);
        assert_eq!(parse_i16("-32769"), None);
    }

    #[test]
    fn i32_bounds() {
        assert_eq!(parse_i32("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_i32("2147483647"), Some(i32::MAX));
        assert_eq!(parse_i32("2147483648"), None);
        assert_eq!(parse_i32("-2147483649"), None);
    }

    #[test]
    fn i64_bounds() {
        assert_eq!(parse_i64("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_i64("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_i64("9223372036854775808"), None);
        assert_eq!(parse_i64("-9223372036854775809"), None);
    }

    #[test]
    fn signed_rejects_bare_sign_and_garbage() {
        assert_eq!(parse_i32("-"), None);
        assert_eq!(parse_i32("+"), None);
        assert_eq!(parse_i32(""), None);
        assert_eq!(parse_i32("12a"), None);
        assert_eq!(parse_i32("--1"), None);
    }

    // ==================== BOOL ====================

    #[test]
    fn bool_literals() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("FaLsE"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
    }

    #[test]
    fn bool_rejects_everything_else() {
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("no"), None);
        assert_eq!(parse_bool("01"), None);
        assert_eq!(parse_bool("tru"), None);
        assert_eq!(parse_bool(""), None);
    }
}
