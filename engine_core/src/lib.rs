#![cfg_attr(not(test), no_std)]

//! # engine_core
//!
//! Runtime command dispatcher for resource-constrained targets.
//!
//! A single ASCII line is tokenized in place (zero-copy subslices), the
//! command name is hashed (djb2) and looked up in an externally generated
//! signature table, the remaining tokens are converted into strongly typed
//! argument values, and the matching handler is invoked through a
//! per-signature trampoline. No heap, no recursion; every buffer is
//! fixed-capacity and lives on the dispatch call's stack.
//!
//! The signature table and the trampolines are produced at build time by
//! the companion `engine_macros::define_signatures!` macro.

#[cfg(feature = "verbose-diag")]
extern crate std;

pub mod arena;
pub mod diag;
pub mod dispatch;
pub mod hash;
pub mod parse;
pub mod sig;
pub mod tokenize;

pub use dispatch::{DispatchError, Dispatcher};
pub use sig::{ArgType, ArgValue, HandlerFn, Signature};

/// Maximum number of tokens per line (command name + arguments).
pub const MAX_TOKENS: usize = 8;

/// Maximum content length of an input line, in bytes.
pub const MAX_LINE_LEN: usize = 255;

/// Maximum decoded size of a single binary argument, in bytes.
pub const MAX_ARG_CONTENT_SIZE: usize = 64;

/// Maximum number of arguments a signature may declare.
pub const MAX_PARSABLE_ARGS: usize = MAX_TOKENS - 1;

/// Scratch arena capacity: worst case is every argument slot carrying a
/// maximum-size binary argument.
pub const SCRATCH_CAPACITY: usize = MAX_ARG_CONTENT_SIZE * MAX_PARSABLE_ARGS;
