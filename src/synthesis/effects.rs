use std::fmt;

use crate::declaration::FunctionSignature;

/// Whether calls to a signature suspend and whether they can fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub is_async: bool,
    pub is_failable: bool,
}

/// The recorder family a signature belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Plain,
    Async,
    Failable,
    AsyncFailable,
}

impl Effects {
    pub fn of(signature: &FunctionSignature) -> Self {
        Effects {
            is_async: signature.is_async,
            is_failable: signature.is_failable,
        }
    }

    pub fn variant(self) -> Variant {
        match (self.is_async, self.is_failable) {
            (true, true) => Variant::AsyncFailable,
            (false, true) => Variant::Failable,
            (true, false) => Variant::Async,
            (false, false) => Variant::Plain,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Variant::Plain => "plain",
            Variant::Async => "async",
            Variant::Failable => "failable",
            Variant::AsyncFailable => "async failable",
        })
    }
}

/// The `T` of a `Result`-shaped type such as `Result<T, E>`,
/// `io::Result<T>` or `anyhow::Result<T>`.
pub fn success_type(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(syn::TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    if last.ident != "Result" {
        return None;
    }

    match &last.arguments {
        syn::PathArguments::AngleBracketed(generics) => {
            generics.args.iter().find_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
        }
        _ => None,
    }
}
