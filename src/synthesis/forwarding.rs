//! Method bodies that hand every call to the function's tracker field.

use super::{
    effects::{Effects, Variant},
    recorder, tracker,
};
use crate::declaration::{Binding, FunctionSignature, Param};

pub fn emit(signature: &FunctionSignature, effects: Effects) -> syn::ImplItemFn {
    let field = tracker::field_ident(&signature.name);
    let args = pack_arguments(&signature.params);
    let record: syn::Expr = syn::parse_quote! { self.#field.record(#args) };
    let call = apply_effects(effects.variant(), record);

    syn::ImplItemFn {
        attrs: signature.attrs.clone(),
        vis: syn::Visibility::Inherited,
        defaultness: None,
        sig: signature.to_syn(Binding::Internal),
        block: syn::parse_quote! {{ #call }},
    }
}

// nothing, the lone argument, or every argument as one tuple
fn pack_arguments(params: &[Param]) -> Option<syn::Expr> {
    let mut values = params.iter().map(argument_value);
    match params.len() {
        0 => None,
        1 => values.next(),
        _ => Some(syn::Expr::Tuple(syn::ExprTuple {
            attrs: vec![],
            paren_token: Default::default(),
            elems: values.collect(),
        })),
    }
}

fn argument_value(param: &Param) -> syn::Expr {
    let name = &param.name;
    match recorder::escaping_bounds(param) {
        Some(_) => syn::parse_quote! { Box::new(#name) },
        None => syn::parse_quote! { #name },
    }
}

// failure propagation always encloses suspension
fn apply_effects(variant: Variant, call: syn::Expr) -> syn::Expr {
    match variant {
        Variant::Plain => call,
        Variant::Async => syn::parse_quote! { #call.await },
        Variant::Failable => syn::parse_quote! { Ok(#call?) },
        Variant::AsyncFailable => syn::parse_quote! { Ok(#call.await?) },
    }
}
