use darling::{export::NestedMeta, FromMeta};

/// Options for a [`Synthesizer`](crate::Synthesizer), written the way
/// attribute arguments are:
///
/// ```text
/// recorder = "crate::recorders", untyped_properties = "reject"
/// ```
#[derive(Clone, Debug, Default, FromMeta)]
#[darling(default)]
pub struct Args {
    /// Module the recorder types are found in.
    pub recorder: Option<syn::Path>,
    pub untyped_properties: UntypedProperties,
}

/// What to do with a property that has no type annotation.
#[derive(FromMeta, Debug, PartialEq, Eq, Copy, Clone)]
#[darling(rename_all = "snake_case")]
pub enum UntypedProperties {
    /// Leave it out of the stubs and report it in the omissions.
    Skip,
    /// Fail the synthesis.
    Reject,
}

impl Args {
    pub fn from_tokens(tokens: proc_macro2::TokenStream) -> darling::Result<Self> {
        NestedMeta::parse_meta_list(tokens)
            .map_err(darling::Error::from)
            .and_then(|v| Args::from_list(&v))
    }
}

impl Default for UntypedProperties {
    fn default() -> Self {
        UntypedProperties::Skip
    }
}
