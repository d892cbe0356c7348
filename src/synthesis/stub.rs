use crate::declaration::{Binding, FunctionSignature, Property};

/// The bodiless declaration of `signature`, parameters written as declared.
pub fn function(signature: &FunctionSignature) -> syn::TraitItemFn {
    syn::TraitItemFn {
        attrs: signature.attrs.clone(),
        sig: signature.to_syn(Binding::Declared),
        default: None,
        semi_token: Some(Default::default()),
    }
}

/// A read-only getter for `property`, if it has a type to return.
pub fn property(property: &Property) -> Option<syn::TraitItemFn> {
    let ty = property.ty.as_ref()?;
    let attrs = &property.attrs;
    let name = &property.name;

    Some(syn::parse_quote! {
        #(#attrs)*
        fn #name(&self) -> #ty;
    })
}
