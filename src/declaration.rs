//! The declarations of an interface, as handed to the synthesis engine.
//!
//! A host either builds these values itself or converts them from `syn`
//! syntax with the adapters below. Nothing here is validated beyond what is
//! needed to name things; type expressions are carried as written.

use quote::{format_ident, ToTokens};

use crate::synthesis::effects;

/// A function declared by the interface being mocked.
#[derive(Clone, Debug)]
pub struct FunctionSignature {
    pub attrs: Vec<syn::Attribute>,
    pub name: syn::Ident,
    pub generics: syn::Generics,
    pub unsafety: Option<syn::Token![unsafe]>,
    pub abi: Option<syn::Abi>,
    pub receiver: Option<syn::Receiver>,
    pub params: Vec<Param>,
    // `None` is the unit type
    pub output: Option<syn::Type>,
    pub is_async: bool,
    pub is_failable: bool,
}

/// One typed parameter of a [`FunctionSignature`].
#[derive(Clone, Debug)]
pub struct Param {
    pub attrs: Vec<syn::Attribute>,
    /// The pattern the parameter was declared with, when it is anything
    /// other than `name` itself (`_`, `mut x`, a tuple pattern...).
    pub label: Option<syn::Pat>,
    /// The binding forwarding bodies refer to.
    pub name: syn::Ident,
    pub ty: syn::Type,
    /// The whole type is an argument-position `impl Trait`. Nested ones
    /// (`&mut impl FnMut()`) do not count.
    pub escaping: bool,
}

/// A read-only value the interface exposes.
#[derive(Clone, Debug)]
pub struct Property {
    pub attrs: Vec<syn::Attribute>,
    pub name: syn::Ident,
    pub ty: Option<syn::Type>,
    pub has_accessor: bool,
}

/// Every function and property of one interface, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Interface {
    pub functions: Vec<FunctionSignature>,
    pub properties: Vec<Property>,
}

/// Which pattern a parameter is written with when a signature is rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Binding {
    /// The label if there is one, as the interface declared it.
    Declared,
    /// Always the internal name.
    Internal,
}

impl FunctionSignature {
    pub fn from_syn(signature: &syn::Signature, attrs: Vec<syn::Attribute>) -> darling::Result<Self> {
        if let Some(variadic) = &signature.variadic {
            return Err(
                darling::Error::custom("decoy cannot forward variadic functions")
                    .with_span(variadic),
            );
        }

        let declared: Vec<&syn::Ident> = signature
            .inputs
            .iter()
            .filter_map(|input| match input {
                syn::FnArg::Typed(arg) => match arg.pat.as_ref() {
                    syn::Pat::Ident(pat_ident) => Some(&pat_ident.ident),
                    _ => None,
                },
                syn::FnArg::Receiver(_) => None,
            })
            .collect();

        let mut receiver = None;
        let mut params = Vec::with_capacity(signature.inputs.len());
        for input in &signature.inputs {
            match input {
                syn::FnArg::Receiver(r) => receiver = Some(r.clone()),
                syn::FnArg::Typed(arg) => {
                    params.push(Param::from_pat_type(arg, params.len(), &declared))
                }
            }
        }

        let output = match &signature.output {
            syn::ReturnType::Default => None,
            syn::ReturnType::Type(_, ty) => Some(ty.as_ref().clone()),
        };
        let is_failable = output
            .as_ref()
            .map_or(false, |ty| effects::success_type(ty).is_some());

        Ok(FunctionSignature {
            attrs,
            name: signature.ident.clone(),
            generics: signature.generics.clone(),
            unsafety: signature.unsafety,
            abi: signature.abi.clone(),
            receiver,
            params,
            output,
            is_async: signature.asyncness.is_some(),
            is_failable,
        })
    }

    pub fn from_trait_fn(func: &syn::TraitItemFn) -> darling::Result<Self> {
        Self::from_syn(&func.sig, func.attrs.clone())
    }

    pub(crate) fn to_syn(&self, binding: Binding) -> syn::Signature {
        let receiver = self.receiver.iter().cloned().map(syn::FnArg::Receiver);
        let params = self
            .params
            .iter()
            .map(|param| syn::FnArg::Typed(param.to_syn(binding)));

        syn::Signature {
            constness: None,
            asyncness: self.is_async.then(Default::default),
            unsafety: self.unsafety,
            abi: self.abi.clone(),
            fn_token: Default::default(),
            ident: self.name.clone(),
            generics: self.generics.clone(),
            paren_token: Default::default(),
            inputs: receiver.chain(params).collect(),
            variadic: None,
            output: match &self.output {
                None => syn::ReturnType::Default,
                Some(ty) => syn::ReturnType::Type(Default::default(), Box::new(ty.clone())),
            },
        }
    }
}

impl Param {
    /// A parameter bound by `name`; escaping when `ty` is an `impl Trait`.
    pub fn new(name: syn::Ident, ty: syn::Type) -> Self {
        Param {
            attrs: vec![],
            label: None,
            escaping: matches!(ty, syn::Type::ImplTrait(_)),
            name,
            ty,
        }
    }

    pub fn labeled(label: syn::Pat, name: syn::Ident, ty: syn::Type) -> Self {
        Param {
            label: Some(label),
            ..Param::new(name, ty)
        }
    }

    fn from_pat_type(arg: &syn::PatType, index: usize, declared: &[&syn::Ident]) -> Self {
        let (label, name) = match arg.pat.as_ref() {
            syn::Pat::Ident(pat_ident) if pat_ident.subpat.is_none() => {
                let plain = pat_ident.attrs.is_empty()
                    && pat_ident.by_ref.is_none()
                    && pat_ident.mutability.is_none();
                let label = if plain { None } else { Some(arg.pat.as_ref().clone()) };
                (label, pat_ident.ident.clone())
            }
            other => (Some(other.clone()), internal_name(index, declared)),
        };

        Param {
            attrs: arg.attrs.clone(),
            label,
            name,
            ty: arg.ty.as_ref().clone(),
            escaping: matches!(arg.ty.as_ref(), syn::Type::ImplTrait(_)),
        }
    }

    fn to_syn(&self, binding: Binding) -> syn::PatType {
        let pat = match (binding, &self.label) {
            (Binding::Declared, Some(label)) => label.clone(),
            _ => syn::Pat::Ident(syn::PatIdent {
                attrs: vec![],
                by_ref: None,
                mutability: None,
                ident: self.name.clone(),
                subpat: None,
            }),
        };

        syn::PatType {
            attrs: self.attrs.clone(),
            pat: Box::new(pat),
            colon_token: Default::default(),
            ty: Box::new(self.ty.clone()),
        }
    }
}

// `_decoy_arg_{index}`, suffixed with `_` until no declared name matches
fn internal_name(index: usize, declared: &[&syn::Ident]) -> syn::Ident {
    let mut name = format_ident!("_decoy_arg_{}", index);
    while declared.iter().any(|ident| **ident == name) {
        name = format_ident!("{}_", name);
    }
    name
}

impl Property {
    pub fn typed(name: syn::Ident, ty: syn::Type) -> Self {
        Property {
            attrs: vec![],
            name,
            ty: Some(ty),
            has_accessor: false,
        }
    }

    pub fn untyped(name: syn::Ident) -> Self {
        Property {
            attrs: vec![],
            name,
            ty: None,
            has_accessor: false,
        }
    }

    pub fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let name = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("decoy can only stub named fields").with_span(field)
        })?;

        Ok(Property {
            attrs: field.attrs.clone(),
            name,
            ty: Some(field.ty.clone()),
            has_accessor: false,
        })
    }

    // associated consts can only be read
    pub fn from_trait_const(item: &syn::TraitItemConst) -> Self {
        Property {
            attrs: item.attrs.clone(),
            name: item.ident.clone(),
            ty: Some(item.ty.clone()),
            has_accessor: true,
        }
    }
}

impl Interface {
    pub fn from_trait(item: &syn::ItemTrait) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut interface = Interface::default();

        for trait_item in &item.items {
            match trait_item {
                syn::TraitItem::Fn(func) => {
                    if let Some(function) = errors.handle(FunctionSignature::from_trait_fn(func)) {
                        interface.functions.push(function);
                    }
                }
                syn::TraitItem::Const(constant) => {
                    interface.properties.push(Property::from_trait_const(constant))
                }
                other => tracing::debug!(
                    interface = %item.ident,
                    "skipping unsupported trait item `{}`",
                    other.to_token_stream()
                ),
            }
        }

        errors.finish_with(interface)
    }
}
