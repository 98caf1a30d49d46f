//! # Signature table generator
//!
//! `define_signatures!` turns a compact declarative command listing into
//! the static table `engine_core` dispatches over: per command a djb2 name
//! hash (computed here, at expansion time, with the same function the
//! runtime uses), the ordered argument-type list, the arity, and a typed
//! trampoline that pattern-matches the parsed argument values and calls
//! the concrete handler. A raw function pointer cast-and-call cannot be
//! expressed safely in Rust; the generated trampolines are the type-safe
//! replacement.
//!
//! ## Descriptor DSL (one character per parameter, in order)
//!
//! | Char | Type  | Char | Type  | Char | Type   |
//! |------|-------|------|-------|------|--------|
//! | `B`  | `u8`  | `b`  | `i8`  | `t`  | `bool` |
//! | `W`  | `u16` | `w`  | `i16` | `s`  | `&str` |
//! | `D`  | `u32` | `d`  | `i32` | `h`  | `&[u8]`|
//! | `Q`  | `u64` | `q`  | `i64` | `v`  | void   |
//!
//! `v` stands alone and declares a zero-argument command. Handlers return
//! `bool` (success/failure).
//!
//! ## Input form
//!
//! ```ignore
//! define_signatures! {
//!     mod commands;
//!     r#"
//!     v  : crate::cmd_impl::void,
//!     B  : crate::cmd_impl::cat_byte,
//!     hB : crate::cmd_impl::cat_bytes,
//!     "#
//! }
//! ```
//!
//! Commas separate groups; each group is `descriptor : space-separated
//! handler paths` and the command name is the last path segment. Duplicate
//! command names — and distinct names whose djb2 hashes collide — are
//! rejected at expansion time, so the runtime's hash-only lookup is safe.

extern crate proc_macro;

mod tablegen;

use proc_macro::TokenStream;
use tablegen::define_signatures_impl;

#[proc_macro]
pub fn define_signatures(input: TokenStream) -> TokenStream {
    define_signatures_impl(input)
}
