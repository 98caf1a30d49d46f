//! Expansion of `define_signatures!`.
//!
//! Mirrors what an offline generator would emit: one `ArgType` list per
//! unique descriptor, one trampoline per command, and a sorted static
//! `Signature` table with accessor functions.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::Parse;
use syn::{parse_macro_input, Ident, LitStr, Result, Token};

/// Must agree with `engine_core::MAX_PARSABLE_ARGS`.
const MAX_PARSABLE_ARGS: usize = 7;

/// djb2, identical to `engine_core::hash::command_hash`.
fn djb2(name: &str) -> u32 {
    let mut hash: u32 = 5381;
    for &byte in name.as_bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(byte as u32);
    }
    hash
}

/// Parsed macro input: `mod <ident>;` followed by the DSL string.
struct TableMacroInput {
    mod_ident: Ident,
    body: LitStr,
}

impl Parse for TableMacroInput {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        input.parse::<Token![mod]>()?;
        let mod_ident: Ident = input.parse()?;
        input.parse::<Token![;]>()?;
        let body: LitStr = input.parse()?;
        Ok(TableMacroInput { mod_ident, body })
    }
}

/// One command to register (pre-codegen).
struct CmdEntry {
    name: String,
    hash: u32,
    path: syn::Path,
    spec: String,
    spec_idx: usize,
}

/// `ArgType` variant ident for a descriptor character.
fn variant_for(ch: char) -> Option<&'static str> {
    match ch {
        'B' => Some("U8"),
        'W' => Some("U16"),
        'D' => Some("U32"),
        'Q' => Some("U64"),
        'b' => Some("I8"),
        'w' => Some("I16"),
        'd' => Some("I32"),
        'q' => Some("I64"),
        't' => Some("Bool"),
        's' => Some("Str"),
        'h' => Some("Bytes"),
        _ => None,
    }
}

fn err(span: Span, msg: impl std::fmt::Display) -> TokenStream {
    syn::Error::new(span, msg).to_compile_error().into()
}

pub fn define_signatures_impl(input: TokenStream) -> TokenStream {
    let TableMacroInput { mod_ident, body } = parse_macro_input!(input as TableMacroInput);
    let span = body.span();

    // Collect (descriptor, [paths]) groups from the DSL.
    let mut pairs: Vec<(String, Vec<syn::Path>)> = Vec::new();
    for group in body.value().split(',') {
        let grp = group.trim();
        if grp.is_empty() {
            continue;
        }
        let Some((desc, names)) = grp.split_once(':') else {
            return err(span, format!("group '{grp}' is missing a ':' separator"));
        };
        let (desc, names) = (desc.trim(), names.trim());
        if desc.is_empty() || names.is_empty() {
            return err(span, format!("group '{grp}' needs a descriptor and handler paths"));
        }
        let mut funcs = Vec::new();
        for name in names.split_whitespace() {
            match syn::parse_str::<syn::Path>(name) {
                Ok(path) => funcs.push(path),
                Err(_) => return err(span, format!("'{name}' is not a valid handler path")),
            }
        }
        pairs.push((desc.to_string(), funcs));
    }

    // Validate descriptors up front.
    for (desc, _) in &pairs {
        if desc == "v" {
            continue;
        }
        for ch in desc.chars() {
            if variant_for(ch).is_none() {
                return err(span, format!("unknown descriptor character '{ch}' in '{desc}'"));
            }
        }
        if desc.chars().count() > MAX_PARSABLE_ARGS {
            return err(span, format!("descriptor '{desc}' exceeds {MAX_PARSABLE_ARGS} arguments"));
        }
    }

    // Deduplicate descriptors, assign indices, gather entries.
    let mut unique_desc: Vec<String> = Vec::new();
    let mut entries: Vec<CmdEntry> = Vec::new();
    for (desc, funcs) in pairs.drain(..) {
        let idx = match unique_desc.iter().position(|x| x == &desc) {
            Some(i) => i,
            None => {
                unique_desc.push(desc.clone());
                unique_desc.len() - 1
            }
        };
        for path in funcs {
            let Some(name) = path.segments.last().map(|s| s.ident.to_string()) else {
                return err(span, "handler path has no final segment");
            };
            let hash = djb2(&name);
            entries.push(CmdEntry { name, hash, path, spec: desc.clone(), spec_idx: idx });
        }
    }

    // Stable sort by command name for a deterministic table.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    // The runtime matches on the 32-bit hash alone, so both duplicate
    // names and colliding hashes of distinct names must die here.
    for pair in entries.windows(2) {
        if pair[0].name == pair[1].name {
            return err(span, format!("command '{}' is registered twice", pair[0].name));
        }
    }
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.hash == b.hash {
                return err(
                    span,
                    format!("commands '{}' and '{}' collide under djb2", a.name, b.name),
                );
            }
        }
    }

    // One ArgType list per unique descriptor.
    let mut type_lists: Vec<TokenStream2> = Vec::new();
    for (sid, spec) in unique_desc.iter().enumerate() {
        let list_ident = format_ident!("TYPES_{}", sid);
        let variants: Vec<TokenStream2> = if spec == "v" {
            Vec::new()
        } else {
            spec.chars()
                .map(|ch| {
                    let variant = format_ident!("{}", variant_for(ch).unwrap_or("Str"));
                    quote! { engine_core::ArgType::#variant }
                })
                .collect()
        };
        let len = variants.len();
        type_lists.push(quote! {
            static #list_ident: [engine_core::ArgType; #len] = [ #( #variants ),* ];
        });
    }

    // One trampoline per command plus its table entry.
    let mut trampolines: Vec<TokenStream2> = Vec::new();
    let mut sig_inits: Vec<TokenStream2> = Vec::new();
    let mut name_lits: Vec<LitStr> = Vec::new();
    let mut name_spec_pairs: Vec<TokenStream2> = Vec::new();

    for entry in &entries {
        let invoke_ident = format_ident!("__invoke_{}", sanitize_ident(&entry.name));
        let path = &entry.path;
        let hash = entry.hash;
        let list_ident = format_ident!("TYPES_{}", entry.spec_idx);
        let arity = if entry.spec == "v" { 0u8 } else { entry.spec.chars().count() as u8 };

        // Pattern binding one value per declared argument, in order.
        let (patterns, arg_exprs): (Vec<TokenStream2>, Vec<TokenStream2>) = if entry.spec == "v" {
            (Vec::new(), Vec::new())
        } else {
            entry
                .spec
                .chars()
                .enumerate()
                .map(|(k, ch)| {
                    let binding = format_ident!("a{}", k);
                    let variant = format_ident!("{}", variant_for(ch).unwrap_or("Str"));
                    (
                        quote! { engine_core::ArgValue::#variant(#binding) },
                        quote! { *#binding },
                    )
                })
                .unzip()
        };

        trampolines.push(quote! {
            /// Calls the concrete handler with positionally typed arguments.
            fn #invoke_ident(args: &[engine_core::ArgValue<'_>]) -> bool {
                match args {
                    [ #( #patterns ),* ] => #path( #( #arg_exprs ),* ),
                    // The dispatcher validated arity and types already.
                    _ => false,
                }
            }
        });

        sig_inits.push(quote! {
            engine_core::Signature {
                hash: #hash,
                invoke: #invoke_ident,
                arg_types: &#list_ident,
                arity: #arity,
            }
        });

        let name_lit = LitStr::new(&entry.name, Span::call_site());
        let spec_lit = LitStr::new(&entry.spec, Span::call_site());
        name_spec_pairs.push(quote! { (#name_lit, #spec_lit) });
        name_lits.push(name_lit);
    }

    let sig_count = entries.len();

    let out = quote! {
        #[allow(dead_code)]
        #[allow(non_snake_case, unused_imports)]
        pub mod #mod_ident {
            //! Generated by `define_signatures!`. Consumed read-only by the
            //! `engine_core` dispatcher.

            /// Descriptor character to type mapping (for help output).
            pub static DESCRIPTOR_HELP: &str =
                "B:u8 | W:u16 | D:u32 | Q:u64\nb:i8 | w:i16 | d:i32 | q:i64\nt:bool | s:str | h:hex bytes | v:void\n";

            #( #type_lists )*

            #( #trampolines )*

            /// Static signature table, sorted by command name.
            pub static SIGNATURES: [engine_core::Signature; #sig_count] = [
                #( #sig_inits ),*
            ];

            /// Registered command names, sorted.
            pub static NAMES: [&str; #sig_count] = [ #( #name_lits ),* ];

            /// (command name, parameter descriptor) pairs for UIs.
            pub static NAME_AND_SPEC: [(&str, &str); #sig_count] = [ #( #name_spec_pairs ),* ];

            pub fn get_signatures() -> &'static [engine_core::Signature] {
                &SIGNATURES
            }

            pub fn get_signatures_count() -> usize {
                SIGNATURES.len()
            }

            pub fn get_command_names() -> &'static [&'static str] {
                &NAMES
            }

            pub fn get_command_specs() -> &'static [(&'static str, &'static str)] {
                &NAME_AND_SPEC
            }
        }
    };

    out.into()
}

/// Valid identifier from a command name (replace non-alnum with `_`).
fn sanitize_ident(s: &str) -> String {
    s.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}
