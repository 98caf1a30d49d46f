//! Dispatch pipeline: tokenize, look up, validate arity, parse, invoke.
//!
//! Strictly synchronous and single-pass. Each call owns its token array
//! and scratch arena on the stack, so the pipeline itself is reentrant;
//! the only state a `Dispatcher` keeps between calls is its diagnostic
//! ring. A call either fully completes or fails atomically — no partially
//! parsed argument array ever reaches a handler.

use heapless::Vec;

use crate::arena::{HexError, ScratchArena};
use crate::diag::{DiagRing, Origin};
use crate::diag_err;
use crate::hash::command_hash;
use crate::parse;
use crate::sig::{lookup_by_hash, ArgType, ArgValue, Signature};
use crate::tokenize::tokenize;
use crate::{MAX_LINE_LEN, MAX_PARSABLE_ARGS, MAX_TOKENS, SCRATCH_CAPACITY};

/// Internal failure taxonomy.
///
/// Callers of [`Dispatcher::dispatch`] only ever see a flat boolean; the
/// variants exist so logs and tests can tell the failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// Line content exceeds [`MAX_LINE_LEN`] bytes.
    LineTooLong,
    /// No command token found.
    Empty,
    /// More than [`MAX_TOKENS`] tokens of real content.
    TooManyTokens,
    /// No signature matches the hash of the command token.
    UnknownCommand { hash: u32 },
    /// Token count minus one does not equal the declared arity.
    ArityMismatch { expected: u8, got: u8 },
    /// An unsigned integer token was malformed or out of range.
    BadUnsigned,
    /// A signed integer token was malformed or out of range.
    BadSigned,
    /// A boolean token matched none of the accepted literals.
    BadBool,
    /// A hex token was empty, odd-length or carried an invalid digit.
    BadHex,
    /// Decoded hex would not fit the remaining scratch capacity.
    ScratchExhausted,
    /// The handler itself reported failure.
    HandlerFailed,
}

/// Runtime command dispatcher over an externally generated table.
pub struct Dispatcher<'t> {
    table: &'t [Signature],
    diag: DiagRing,
}

impl<'t> Dispatcher<'t> {
    pub fn new(table: &'t [Signature]) -> Self {
        Self { table, diag: DiagRing::new() }
    }

    /// Dispatches one line; true iff tokenization, lookup, arity check,
    /// every argument parse and the handler invocation all succeeded.
    pub fn dispatch(&mut self, line: &str) -> bool {
        self.try_dispatch(line).is_ok()
    }

    /// Like [`Self::dispatch`] but surfaces which step failed.
    pub fn try_dispatch(&mut self, line: &str) -> Result<(), DispatchError> {
        if line.len() > MAX_LINE_LEN {
            diag_err!(self.diag, Origin::Dispatch, "input line too long");
            return Err(DispatchError::LineTooLong);
        }

        let mut tokens: [&str; MAX_TOKENS] = [""; MAX_TOKENS];
        let Some(count) = tokenize(line, &mut tokens) else {
            diag_err!(self.diag, Origin::Tokenize, "too many tokens");
            return Err(DispatchError::TooManyTokens);
        };
        if count == 0 {
            diag_err!(self.diag, Origin::Dispatch, "no command token found");
            return Err(DispatchError::Empty);
        }

        let hash = command_hash(tokens[0]);
        let Some(sig) = lookup_by_hash(self.table, hash) else {
            diag_err!(self.diag, Origin::Dispatch, "unknown command");
            return Err(DispatchError::UnknownCommand { hash });
        };

        // Arity must match exactly before any parsing is attempted.
        let got = (count - 1) as u8;
        if got != sig.arity {
            diag_err!(self.diag, Origin::Dispatch, "argument count mismatch");
            return Err(DispatchError::ArityMismatch { expected: sig.arity, got });
        }

        let mut storage = [0u8; SCRATCH_CAPACITY];
        let mut arena = ScratchArena::new(&mut storage);
        let mut args: Vec<ArgValue<'_>, MAX_PARSABLE_ARGS> = Vec::new();
        for (ty, token) in sig.arg_types.iter().zip(&tokens[1..count]) {
            match parse_value(*ty, token, &mut arena) {
                Ok(value) => {
                    // The arity check bounds this at MAX_PARSABLE_ARGS.
                    let _ = args.push(value);
                }
                Err(err) => {
                    diag_err!(self.diag, Origin::Parse, "argument parse failed");
                    return Err(err);
                }
            }
        }

        if !(sig.invoke)(&args) {
            diag_err!(self.diag, Origin::Dispatch, "handler reported failure");
            return Err(DispatchError::HandlerFailed);
        }

        Ok(())
    }

    /// Recent failure locations, for offline inspection.
    pub fn diag(&self) -> &DiagRing {
        &self.diag
    }
}

/// Converts one token into the value the declared kind asks for.
fn parse_value<'a>(
    ty: ArgType,
    token: &'a str,
    arena: &mut ScratchArena<'a>,
) -> Result<ArgValue<'a>, DispatchError> {
    match ty {
        ArgType::U8 => parse::parse_u8(token).map(ArgValue::U8).ok_or(DispatchError::BadUnsigned),
        ArgType::U16 => {
            parse::parse_u16(token).map(ArgValue::U16).ok_or(DispatchError::BadUnsigned)
        }
        ArgType::U32 => {
            parse::parse_u32(token).map(ArgValue::U32).ok_or(DispatchError::BadUnsigned)
        }
        ArgType::U64 => {
            parse::parse_u64(token).map(ArgValue::U64).ok_or(DispatchError::BadUnsigned)
        }
        ArgType::I8 => parse::parse_i8(token).map(ArgValue::I8).ok_or(DispatchError::BadSigned),
        ArgType::I16 => parse::parse_i16(token).map(ArgValue::I16).ok_or(DispatchError::BadSigned),
        ArgType::I32 => parse::parse_i32(token).map(ArgValue::I32).ok_or(DispatchError::BadSigned),
        ArgType::I64 => parse::parse_i64(token).map(ArgValue::I64).ok_or(DispatchError::BadSigned),
        ArgType::Bool => parse::parse_bool(token).map(ArgValue::Bool).ok_or(DispatchError::BadBool),
        // Zero-copy: the value aliases the token itself.
        ArgType::Str => Ok(ArgValue::Str(token)),
        ArgType::Bytes => match arena.decode_hex(token) {
            Ok(chunk) => Ok(ArgValue::Bytes(chunk)),
            Err(HexError::Exhausted) => Err(DispatchError::ScratchExhausted),
            Err(_) => Err(DispatchError::BadHex),
        },
    }
}
