use quote::{format_ident, ToTokens};

use super::recorder::RecorderType;
use crate::declaration::FunctionSignature;

/// The field a mock stores its recorder for one function in.
#[derive(Clone, Debug)]
pub struct TrackerField {
    pub ident: syn::Ident,
    pub recorder: RecorderType,
}

impl TrackerField {
    pub fn new(signature: &FunctionSignature, recorder: RecorderType) -> Self {
        TrackerField {
            ident: field_ident(&signature.name),
            recorder,
        }
    }

    /// `pub foo_mock: Recorder<..>`
    pub fn field(&self) -> syn::Field {
        syn::Field {
            attrs: vec![],
            vis: syn::parse_quote! { pub },
            mutability: syn::FieldMutability::None,
            ident: Some(self.ident.clone()),
            colon_token: Some(Default::default()),
            ty: self.recorder.to_type(),
        }
    }

    /// `foo_mock: <Recorder<..>>::new()`
    pub fn initializer(&self) -> syn::FieldValue {
        let ty = self.recorder.to_type();
        syn::FieldValue {
            attrs: vec![],
            member: syn::Member::Named(self.ident.clone()),
            colon_token: Some(Default::default()),
            expr: syn::parse_quote! { <#ty>::new() },
        }
    }
}

impl ToTokens for TrackerField {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.field().to_tokens(tokens)
    }
}

pub fn field_ident(function: &syn::Ident) -> syn::Ident {
    format_ident!("{}_mock", function, span = function.span())
}

/// `Self { a_mock: .., b_mock: .. }` with every tracker default-initialized.
pub fn construct_self(trackers: &[TrackerField]) -> syn::ExprStruct {
    let fields = trackers.iter().map(TrackerField::initializer);
    syn::parse_quote! {
        Self { #(#fields),* }
    }
}
