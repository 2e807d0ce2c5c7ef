//! Proc-macro support for understory key handler tables.

use std::result::Result as StdResult;

use proc_macro_error::*;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, parse_macro_input};

/// Local result type for macro parsing.
type Result<T> = StdResult<T, Error>;

/// Errors raised while parsing handler methods.
#[derive(PartialEq, Eq, thiserror::Error, Debug, Clone)]
enum Error {
    /// Unsupported receiver or argument list.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Self {
        Self::spanned(proc_macro2::Span::call_site(), Level::Error, format!("{e}"))
    }
}

/// What a method was registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandlerKind {
    /// `key_<name>`
    PublicKey,
    /// `_key_<name>`
    PrivateKey,
    /// `action_<name>`
    Action,
}

/// Parsed metadata for a handler method.
#[derive(Debug, Clone)]
struct HandlerMeta {
    /// Method identifier.
    ident: syn::Ident,
    /// Registration kind.
    kind: HandlerKind,
    /// Key identifier or action name, without the prefix.
    name: String,
    /// Whether the method takes the key event as an argument.
    takes_event: bool,
}

/// Classify a method name by its prefix.
fn classify(name: &str) -> Option<(HandlerKind, &str)> {
    let found = if let Some(rest) = name.strip_prefix("_key_") {
        Some((HandlerKind::PrivateKey, rest))
    } else if let Some(rest) = name.strip_prefix("key_") {
        Some((HandlerKind::PublicKey, rest))
    } else {
        name.strip_prefix("action_")
            .map(|rest| (HandlerKind::Action, rest))
    };
    found.filter(|(_, rest)| !rest.is_empty())
}

/// Parse an impl method, returning `None` if it isn't a handler.
fn parse_handler_method(method: &ImplItemFn) -> Result<Option<HandlerMeta>> {
    let ident = method.sig.ident.clone();
    let ident_str = ident.to_string();
    let Some((kind, name)) = classify(&ident_str) else {
        return Ok(None);
    };

    let mut has_receiver = false;
    let mut args = 0;
    for input in &method.sig.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                if receiver.reference.is_none() {
                    return Err(Error::Unsupported(format!(
                        "{ident_str} must take &self or &mut self"
                    )));
                }
                has_receiver = true;
            }
            FnArg::Typed(_) => args += 1,
        }
    }
    if !has_receiver {
        return Err(Error::Unsupported(format!(
            "{ident_str} must take &self or &mut self"
        )));
    }
    let max_args = if kind == HandlerKind::Action { 0 } else { 1 };
    if args > max_args {
        return Err(Error::Unsupported(format!(
            "{ident_str} takes {args} arguments, at most {max_args} allowed"
        )));
    }

    Ok(Some(HandlerMeta {
        ident,
        kind,
        name: name.to_lowercase(),
        takes_event: args == 1,
    }))
}

/// Build key handler and action tables for an impl block.
///
/// Methods named `key_<name>` and `_key_<name>` become key handlers, which may
/// take the `&KeyEvent` as their only argument. Methods named `action_<name>`
/// become actions and take no arguments. Return values are converted with
/// `IntoKeyOutcome`.
#[proc_macro_error]
#[proc_macro_attribute]
pub fn key_handlers(
    _attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut input = parse_macro_input!(input as ItemImpl);

    let name = input.self_ty.clone();
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let mut handlers = Vec::new();
    for item in &input.items {
        if let ImplItem::Fn(method) = item
            && let Some(handler) = parse_handler_method(method).unwrap_or_abort()
        {
            handlers.push(handler);
        }
    }

    let mut generated_items: Vec<syn::ImplItem> = Vec::new();
    let mut key_entries = Vec::new();
    let mut action_entries = Vec::new();

    for h in &handlers {
        let method = &h.ident;
        let ident_str = method.to_string();
        let prefix = match h.kind {
            HandlerKind::PublicKey => "public",
            HandlerKind::PrivateKey => "private",
            HandlerKind::Action => "action",
        };
        let shim = syn::Ident::new(
            &format!("__understory_{prefix}_{}", h.name),
            proc_macro2::Span::call_site(),
        );
        let name_lit = syn::LitStr::new(&h.name, proc_macro2::Span::call_site());
        let ident_lit = syn::LitStr::new(&ident_str, proc_macro2::Span::call_site());

        let item = if h.kind == HandlerKind::Action {
            action_entries.push(quote! {
                understory::dispatch::ActionEntry {
                    name: #name_lit,
                    action: Self::#shim,
                }
            });
            quote! {
                #[doc = "Generated action shim."]
                fn #shim(
                    node: &mut Self,
                ) -> understory::error::Result<understory::dispatch::KeyOutcome> {
                    understory::dispatch::IntoKeyOutcome::into_key_outcome(node.#method())
                }
            }
        } else {
            let visibility = if h.kind == HandlerKind::PublicKey {
                quote! { understory::dispatch::Visibility::Public }
            } else {
                quote! { understory::dispatch::Visibility::Private }
            };
            key_entries.push(quote! {
                understory::dispatch::HandlerEntry {
                    ident: #ident_lit,
                    key: #name_lit,
                    visibility: #visibility,
                    handler: Self::#shim,
                }
            });
            let call = if h.takes_event {
                quote! { node.#method(event) }
            } else {
                quote! { { let _ = event; node.#method() } }
            };
            quote! {
                #[doc = "Generated key handler shim."]
                fn #shim(
                    node: &mut Self,
                    event: &understory::event::key::KeyEvent,
                ) -> understory::error::Result<understory::dispatch::KeyOutcome> {
                    understory::dispatch::IntoKeyOutcome::into_key_outcome(#call)
                }
            }
        };
        generated_items.push(parse_impl_item(item, "handler shim"));
    }

    let tables = [
        quote! {
            #[doc = "Generated key handler table."]
            const __UNDERSTORY_KEY_HANDLERS: &'static [understory::dispatch::HandlerEntry<Self>] = &[
                #(#key_entries),*
            ];
        },
        quote! {
            #[doc = "Generated action table."]
            const __UNDERSTORY_ACTIONS: &'static [understory::dispatch::ActionEntry<Self>] = &[
                #(#action_entries),*
            ];
        },
    ];
    for t in tables {
        generated_items.push(parse_impl_item(t, "handler table"));
    }

    input.items.extend(generated_items);

    let handlers_impl = quote! {
        impl #impl_generics understory::dispatch::Handlers for #name #where_clause {
            fn key_handlers() -> &'static [understory::dispatch::HandlerEntry<Self>] {
                Self::__UNDERSTORY_KEY_HANDLERS
            }

            fn actions() -> &'static [understory::dispatch::ActionEntry<Self>] {
                Self::__UNDERSTORY_ACTIONS
            }
        }
    };

    let output = quote! {
        #input
        #handlers_impl
    };

    output.into()
}

/// Parse generated tokens into an impl item with context on failure.
fn parse_impl_item(tokens: proc_macro2::TokenStream, label: &str) -> syn::ImplItem {
    syn::parse2(tokens).unwrap_or_else(|err| abort_call_site!("{} parse failed: {}", label, err))
}
