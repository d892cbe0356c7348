#![allow(dead_code)]

use decoy::FunctionSignature;
use quote::ToTokens;

/// Tokens rendered without whitespace, so `quote!` output compares equal to
/// structurally built syntax regardless of spacing.
pub fn flat(tokens: impl ToTokens) -> String {
    tokens
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn signature(func: syn::TraitItemFn) -> FunctionSignature {
    FunctionSignature::from_trait_fn(&func).unwrap()
}

pub fn signatures(funcs: Vec<syn::TraitItemFn>) -> Vec<FunctionSignature> {
    funcs.into_iter().map(signature).collect()
}
