//! Naming the recorder type that tracks calls to one signature.
//!
//! The recorder types themselves live outside this crate. A signature maps
//! onto one of eight of them (four effect variants, each with a
//! zero-argument specialization suffixed `Void`) instantiated with the call's
//! argument type and its return type:
//!
//! | signature                                  | recorder                           |
//! |--------------------------------------------|------------------------------------|
//! | `fn a(&self) -> u8`                        | `MockVoid<u8>`                     |
//! | `fn b(&self, x: u8)`                       | `Mock<u8, ()>`                     |
//! | `async fn c(&self, x: u8, y: u16) -> bool` | `MockAsync<(u8, u16), bool>`       |
//! | `fn d(&self, x: u8) -> Result<u8, E>`      | `MockThrowing<u8, u8>`             |
//! | `async fn e(&self) -> io::Result<()>`      | `MockAsyncThrowingVoid<()>`        |

use quote::{format_ident, ToTokens};
use syn::punctuated::Punctuated;

use super::effects::{self, Effects, Variant};
use crate::declaration::{FunctionSignature, Param};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Zero,
    NonZero,
}

/// A fully instantiated recorder type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecorderType {
    pub path: Option<syn::Path>,
    pub variant: Variant,
    pub arity: Arity,
    pub args: Vec<syn::Type>,
}

impl Arity {
    pub fn of(params: &[Param]) -> Self {
        if params.is_empty() {
            Arity::Zero
        } else {
            Arity::NonZero
        }
    }
}

impl RecorderType {
    pub fn new(signature: &FunctionSignature, effects: Effects, path: Option<&syn::Path>) -> Self {
        let arity = Arity::of(&signature.params);
        let output = return_type(signature, effects);

        let args = match arity {
            Arity::Zero => vec![output],
            Arity::NonZero => vec![call_signature_type(&signature.params), output],
        };

        RecorderType {
            path: path.cloned(),
            variant: effects.variant(),
            arity,
            args,
        }
    }

    pub fn ident(&self) -> syn::Ident {
        let base = match self.variant {
            Variant::Plain => "Mock",
            Variant::Async => "MockAsync",
            Variant::Failable => "MockThrowing",
            Variant::AsyncFailable => "MockAsyncThrowing",
        };

        match self.arity {
            Arity::Zero => format_ident!("{}Void", base),
            Arity::NonZero => format_ident!("{}", base),
        }
    }

    pub fn to_type(&self) -> syn::Type {
        let mut path = self.path.clone().unwrap_or_else(|| syn::Path {
            leading_colon: None,
            segments: Punctuated::new(),
        });

        path.segments.push(syn::PathSegment {
            ident: self.ident(),
            arguments: syn::PathArguments::AngleBracketed(syn::AngleBracketedGenericArguments {
                colon2_token: None,
                lt_token: Default::default(),
                args: self
                    .args
                    .iter()
                    .cloned()
                    .map(syn::GenericArgument::Type)
                    .collect(),
                gt_token: Default::default(),
            }),
        });

        syn::Type::Path(syn::TypePath { qself: None, path })
    }
}

impl ToTokens for RecorderType {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.to_type().to_tokens(tokens)
    }
}

/// What a call to the signature hands to its recorder: nothing, the single
/// argument, or a tuple of all of them in declaration order.
pub fn call_signature_type(params: &[Param]) -> syn::Type {
    match params {
        [] => unit(),
        [param] => recorded_type(param),
        params => syn::Type::Tuple(syn::TypeTuple {
            paren_token: Default::default(),
            elems: params.iter().map(recorded_type).collect(),
        }),
    }
}

/// The type of `param` as a generic argument.
///
/// `impl Trait` is only legal in argument position. An escaping parameter
/// (the whole type is an `impl Trait`) is recorded as `Box<dyn Trait>`; any
/// other `impl Trait`, nested or unflagged, becomes `dyn Trait` in place.
/// Everything else passes through as written.
pub fn recorded_type(param: &Param) -> syn::Type {
    if let Some(bounds) = escaping_bounds(param) {
        return syn::parse_quote! { Box<dyn #bounds> };
    }

    let mut ty = param.ty.clone();
    dynamize(&mut ty);
    ty
}

// `impl` and `dyn` bind the same way, so the parentheses already written
// around multi-bound types stay correct
fn dynamize(ty: &mut syn::Type) {
    match ty {
        syn::Type::Array(syn::TypeArray { elem, .. })
        | syn::Type::Group(syn::TypeGroup { elem, .. })
        | syn::Type::Paren(syn::TypeParen { elem, .. })
        | syn::Type::Ptr(syn::TypePtr { elem, .. })
        | syn::Type::Reference(syn::TypeReference { elem, .. })
        | syn::Type::Slice(syn::TypeSlice { elem, .. }) => dynamize(elem),
        syn::Type::Tuple(tuple) => tuple.elems.iter_mut().for_each(dynamize),
        syn::Type::Path(syn::TypePath { path, .. }) => {
            let args = path
                .segments
                .iter_mut()
                .filter_map(|segment| match &mut segment.arguments {
                    syn::PathArguments::AngleBracketed(generics) => Some(&mut generics.args),
                    _ => None,
                })
                .flat_map(|args| args.iter_mut());
            for arg in args {
                if let syn::GenericArgument::Type(ty) = arg {
                    dynamize(ty);
                }
            }
        }
        syn::Type::ImplTrait(impl_trait) => {
            let bounds = std::mem::take(&mut impl_trait.bounds);
            *ty = syn::Type::TraitObject(syn::TypeTraitObject {
                dyn_token: Some(Default::default()),
                bounds,
            });
        }
        _ => {}
    }
}

pub(crate) fn escaping_bounds(
    param: &Param,
) -> Option<&Punctuated<syn::TypeParamBound, syn::Token![+]>> {
    match &param.ty {
        syn::Type::ImplTrait(impl_trait) if param.escaping => Some(&impl_trait.bounds),
        _ => None,
    }
}

fn return_type(signature: &FunctionSignature, effects: Effects) -> syn::Type {
    match &signature.output {
        None => unit(),
        Some(ty) if effects.is_failable => effects::success_type(ty).unwrap_or(ty).clone(),
        Some(ty) => ty.clone(),
    }
}

fn unit() -> syn::Type {
    syn::Type::Tuple(syn::TypeTuple {
        paren_token: Default::default(),
        elems: Punctuated::new(),
    })
}
