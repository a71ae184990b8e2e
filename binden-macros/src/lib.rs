//! Procedural macros for Binden.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input};

/// Derive macro implementing `DispatcherAware` for a generated model type.
///
/// The class path defaults to the type's module path plus its name;
/// override it when the generated class hierarchy uses different naming:
///
/// ```rust,ignore
/// #[derive(DispatcherAware)]
/// #[dispatcher_aware(class = "app::model::Customer")]
/// struct Customer {
///     // ...
/// }
/// ```
///
/// Also submits a `ModelRegistration` so `ModelCatalog::discover()` finds
/// the type; the facade's `macros` feature therefore enables `inventory`.
#[proc_macro_derive(DispatcherAware, attributes(dispatcher_aware))]
pub fn derive_dispatcher_aware(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "`DispatcherAware` cannot be derived for generic types: the class path must name one concrete model",
        )
        .to_compile_error()
        .into();
    }

    let mut class_override: Option<LitStr> = None;
    for attr in &input.attrs {
        if attr.path().is_ident("dispatcher_aware") {
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("class") {
                    class_override = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown attribute, expected `class = \"...\"`"))
                }
            });
            if let Err(err) = parsed {
                return err.to_compile_error().into();
            }
        }
    }

    let class_expr = match &class_override {
        Some(lit) => quote! { #lit },
        None => quote! {
            ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#name))
        },
    };

    let expanded = quote! {
        impl ::binden::DispatcherAware for #name {
            const CLASS: &'static str = #class_expr;
        }

        ::binden::inventory::submit! {
            ::binden::ModelRegistration {
                class: <#name as ::binden::DispatcherAware>::CLASS,
                dispatcher_aware: true,
            }
        }
    };

    TokenStream::from(expanded)
}
