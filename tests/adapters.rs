mod common;

use common::flat;
use decoy::{FunctionSignature, Interface, Property};
use quote::quote;
use syn::parse::Parser as _;

#[test]
fn collects_functions_and_consts_in_order() {
    let item: syn::ItemTrait = syn::parse_quote! {
        pub trait Repository {
            const LIMIT: usize;
            type Item;

            fn get(&self, id: u64) -> Option<Self::Item>;
            async fn save(&mut self, item: Self::Item) -> Result<(), Error>;

            some_macro!();

            fn clear(&mut self);
        }
    };

    let interface = Interface::from_trait(&item).unwrap();

    let functions: Vec<_> = interface
        .functions
        .iter()
        .map(|f| f.name.to_string())
        .collect();
    assert_eq!(functions, ["get", "save", "clear"]);

    assert_eq!(interface.properties.len(), 1);
    assert_eq!(interface.properties[0].name, "LIMIT");
    assert!(interface.properties[0].has_accessor);
}

#[test]
fn classifies_effects() {
    let item: syn::ItemTrait = syn::parse_quote! {
        trait Effects {
            fn plain(&self) -> u8;
            async fn suspends(&self);
            fn fails(&self) -> Result<u8, Error>;
            async fn both(&self) -> anyhow::Result<()>;
            fn option(&self) -> Option<u8>;
        }
    };

    let flags: Vec<_> = Interface::from_trait(&item)
        .unwrap()
        .functions
        .iter()
        .map(|f| (f.is_async, f.is_failable))
        .collect();
    assert_eq!(
        flags,
        [
            (false, false),
            (true, false),
            (false, true),
            (true, true),
            (false, false),
        ]
    );
}

#[test]
fn params_names_and_labels() {
    let sig: syn::Signature = syn::parse_quote! {
        fn apply(&self, plain: u8, mut counted: u32, _: bool, (a, b): (u8, u8), f: impl Fn())
    };

    let apply = FunctionSignature::from_syn(&sig, vec![]).unwrap();
    assert!(apply.receiver.is_some());
    assert_eq!(apply.params.len(), 5);

    let names: Vec<_> = apply.params.iter().map(|p| p.name.to_string()).collect();
    assert_eq!(names, ["plain", "counted", "_decoy_arg_2", "_decoy_arg_3", "f"]);

    let labels: Vec<_> = apply
        .params
        .iter()
        .map(|p| p.label.as_ref().map(flat))
        .collect();
    assert_eq!(
        labels,
        [
            None,
            Some(flat(quote! { mut counted })),
            Some(flat(quote! { _ })),
            Some(flat(quote! { (a, b) })),
            None,
        ]
    );

    let escaping: Vec<_> = apply.params.iter().map(|p| p.escaping).collect();
    assert_eq!(escaping, [false, false, false, false, true]);
}

#[test]
fn nested_impl_trait_is_not_escaping() {
    let sig: syn::Signature = syn::parse_quote! {
        fn visit(&self, f: &mut impl FnMut(u8), g: impl Fn(), items: Vec<impl Display>)
    };

    let visit = FunctionSignature::from_syn(&sig, vec![]).unwrap();
    let escaping: Vec<_> = visit.params.iter().map(|p| p.escaping).collect();
    assert_eq!(escaping, [false, true, false]);
}

#[test]
fn reads_abi() {
    let sig: syn::Signature = syn::parse_quote! { extern "C" fn tick(&self) };

    let tick = FunctionSignature::from_syn(&sig, vec![]).unwrap();
    let expected: syn::Abi = syn::parse_quote!(extern "C");
    assert_eq!(tick.abi, Some(expected));
}

#[test]
fn associated_function_has_no_receiver() {
    let sig: syn::Signature = syn::parse_quote! { fn new(capacity: usize) -> Self };

    let new = FunctionSignature::from_syn(&sig, vec![]).unwrap();
    assert!(new.receiver.is_none());
    assert_eq!(new.params.len(), 1);
}

#[test]
fn rejects_variadics() {
    let mut sig: syn::Signature = syn::parse_quote! { fn printf(&self, format: *const u8) };
    sig.variadic = Some(syn::Variadic {
        attrs: vec![],
        pat: None,
        dots: Default::default(),
        comma: None,
    });

    let error = FunctionSignature::from_syn(&sig, vec![]).unwrap_err();
    assert!(error.to_string().contains("variadic"));
}

#[test]
fn named_field_property() {
    let field = syn::Field::parse_named
        .parse2(quote! { pub title: String })
        .unwrap();

    let title = Property::from_field(&field).unwrap();
    let expected: syn::Type = syn::parse_quote!(String);
    assert_eq!(title.name, "title");
    assert_eq!(title.ty, Some(expected));
}

#[test]
fn tuple_field_property() {
    let field = syn::Field::parse_unnamed
        .parse2(quote! { pub String })
        .unwrap();

    let error = Property::from_field(&field).unwrap_err();
    assert!(error.to_string().contains("named fields"));
}
