//! Whitespace tokenizer over a borrowed line buffer.
//!
//! Tokens are zero-copy subslices of the caller's line, valid only as long
//! as the line itself. Space, tab, CR and LF all separate tokens; runs of
//! whitespace collapse to a single boundary, so no empty tokens are ever
//! produced.

/// ASCII space, tab, CR or LF.
#[inline(always)]
const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Splits `line` into at most `out.len()` tokens.
///
/// Returns the number of tokens written, or `None` if non-whitespace
/// content remains after all token slots are taken. A line that fills every
/// slot and carries only trailing whitespace afterwards still succeeds.
/// A blank line yields `Some(0)`; deciding whether zero tokens is an error
/// is the caller's business.
pub fn tokenize<'a>(line: &'a str, out: &mut [&'a str]) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0usize;
    let mut n = 0usize;

    while i < bytes.len() && n < out.len() {
        while i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        let start = i;
        while i < bytes.len() && !is_whitespace(bytes[i]) {
            i += 1;
        }
        // Splitting only at ASCII bytes keeps the slice on char boundaries.
        out[n] = &line[start..i];
        n += 1;
    }

    // Slots exhausted: trailing whitespace is harmless, remaining content
    // means the line carries more tokens than fit.
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    if i < bytes.len() {
        return None;
    }

    Some(n)
}

#[cfg(test)]
mod tokenize_tests {
    use super::*;
    use crate::MAX_TOKENS;

    fn run(line: &str) -> Option<(usize, [&str; MAX_TOKENS])> {
        let mut out: [&str; MAX_TOKENS] = [""; MAX_TOKENS];
        tokenize(line, &mut out).map(|n| (n, out))
    }

    #[test]
    fn collapses_whitespace_runs() {
        let (n, toks) = run("   echo   arg1   arg2  ").unwrap();
        assert_eq!(n, 3);
        assert_eq!(&toks[..3], &["echo", "arg1", "arg2"]);
    }

    #[test]
    fn tabs_and_line_endings_separate() {
        let (n, toks) = run("set\tspeed\r\n100\n").unwrap();
        assert_eq!(n, 3);
        assert_eq!(&toks[..3], &["set", "speed", "100"]);
    }

    #[test]
    fn blank_lines_yield_zero_tokens() {
        assert_eq!(run("").map(|(n, _)| n), Some(0));
        assert_eq!(run("   ").map(|(n, _)| n), Some(0));
        assert_eq!(run("\r\n").map(|(n, _)| n), Some(0));
    }

    #[test]
    fn single_token() {
        let (n, toks) = run("reset").unwrap();
        assert_eq!(n, 1);
        assert_eq!(toks[0], "reset");
    }

    #[test]
    fn full_slots_with_trailing_whitespace_succeed() {
        let (n, toks) = run("cmd a1 a2 a3 a4 a5 a6 a7   ").unwrap();
        assert_eq!(n, MAX_TOKENS);
        assert_eq!(toks[7], "a7");
    }

    #[test]
    fn ninth_token_fails() {
        assert!(run("cmd a1 a2 a3 a4 a5 a6 a7 a8").is_none());
    }

    #[test]
    fn ninth_token_after_whitespace_fails() {
        assert!(run("cmd a1 a2 a3 a4 a5 a6 a7    a8").is_none());
    }

    #[test]
    fn eighth_token_is_not_truncated() {
        let (n, toks) = run("cmd a1 a2 a3 a4 a5 a6 longtail  ").unwrap();
        assert_eq!(n, MAX_TOKENS);
        assert_eq!(toks[7], "longtail");
    }
}
