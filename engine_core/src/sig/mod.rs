//! Signature table contract.
//!
//! The table itself is generated at build time (see
//! `engine_macros::define_signatures!`) and consumed read-only here: one
//! entry per registered command, carrying the djb2 hash of the command
//! name, the ordered argument-type list, the declared arity and the
//! trampoline that knows how to call the concrete handler.

/// Closed set of argument kinds a command may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Bool,
    Str,
    Bytes,
}

/// One parsed argument value.
///
/// Tag and payload are constructed together, so a value can never be read
/// as the wrong kind. `Str` aliases a token of the input line and `Bytes`
/// aliases a region of the scratch arena; neither outlives the dispatch
/// call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue<'a> {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl ArgValue<'_> {
    /// The kind this value was parsed as.
    pub fn arg_type(&self) -> ArgType {
        match self {
            ArgValue::U8(_) => ArgType::U8,
            ArgValue::U16(_) => ArgType::U16,
            ArgValue::U32(_) => ArgType::U32,
            ArgValue::U64(_) => ArgType::U64,
            ArgValue::I8(_) => ArgType::I8,
            ArgValue::I16(_) => ArgType::I16,
            ArgValue::I32(_) => ArgType::I32,
            ArgValue::I64(_) => ArgType::I64,
            ArgValue::Bool(_) => ArgType::Bool,
            ArgValue::Str(_) => ArgType::Str,
            ArgValue::Bytes(_) => ArgType::Bytes,
        }
    }
}

/// Trampoline entry point bound to one signature.
///
/// Receives exactly `arity` values whose kinds match `arg_types` in order;
/// the generated body pattern-matches that shape and calls the concrete
/// handler, normalizing its result to a boolean.
pub type HandlerFn = for<'a> fn(args: &[ArgValue<'a>]) -> bool;

/// Immutable, externally generated command signature.
pub struct Signature {
    /// djb2 hash of the command name.
    pub hash: u32,
    /// Trampoline for the bound handler.
    pub invoke: HandlerFn,
    /// Declared argument kinds, in positional order.
    pub arg_types: &'static [ArgType],
    /// Number of arguments expected; equals `arg_types.len()`.
    pub arity: u8,
}

/// Linear scan for an exact 32-bit hash match; first match wins.
///
/// No fallback comparison against the literal command name is performed —
/// the generator rejects colliding names at build time.
pub fn lookup_by_hash(table: &[Signature], hash: u32) -> Option<&Signature> {
    table.iter().find(|sig| sig.hash == hash)
}

#[cfg(test)]
mod sig_tests {
    use super::*;
    use crate::hash::command_hash;

    fn nop(_args: &[ArgValue<'_>]) -> bool {
        true
    }

    fn table() -> [Signature; 2] {
        [
            Signature { hash: command_hash("reset"), invoke: nop, arg_types: &[], arity: 0 },
            Signature {
                hash: command_hash("set_speed"),
                invoke: nop,
                arg_types: &[ArgType::U32],
                arity: 1,
            },
        ]
    }

    #[test]
    fn every_registered_hash_resolves() {
        let table = table();
        for sig in &table {
            let found = lookup_by_hash(&table, sig.hash).unwrap();
            assert_eq!(found.hash, sig.hash);
        }
    }

    #[test]
    fn miss_yields_none() {
        assert!(lookup_by_hash(&table(), 0xDEAD_BEEF).is_none());
    }

    #[test]
    fn value_reports_its_kind() {
        assert_eq!(ArgValue::U8(7).arg_type(), ArgType::U8);
        assert_eq!(ArgValue::Str("x").arg_type(), ArgType::Str);
        assert_eq!(ArgValue::Bytes(&[1]).arg_type(), ArgType::Bytes);
    }
}
