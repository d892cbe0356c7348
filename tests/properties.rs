mod common;

use common::flat;
use decoy::{Arity, FunctionSignature, Property, Synthesis, Synthesizer, Variant};
use proptest::prelude::*;
use quote::{format_ident, quote};

#[derive(Clone, Debug)]
struct Shape {
    seed: u16,
    arity: usize,
    is_async: bool,
    is_failable: bool,
}

fn shape_lists() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(
        (0u16..32, 0usize..4, any::<bool>(), any::<bool>()).prop_map(
            |(seed, arity, is_async, is_failable)| Shape {
                seed,
                arity,
                is_async,
                is_failable,
            },
        ),
        0..8,
    )
}

fn build(shape: &Shape) -> FunctionSignature {
    let name = format_ident!("op_{}", shape.seed);
    let params: Vec<_> = (0..shape.arity).map(|i| format_ident!("a{}", i)).collect();
    let types: Vec<syn::Type> = (0..shape.arity)
        .map(|i| match i % 3 {
            0 => syn::parse_quote!(u32),
            1 => syn::parse_quote!(String),
            _ => syn::parse_quote!(impl Fn(u8) + 'static),
        })
        .collect();
    let asyncness = shape.is_async.then(|| quote!(async));
    let output = if shape.is_failable {
        quote!(-> Result<u8, Error>)
    } else {
        quote!(-> u8)
    };

    let sig: syn::Signature = syn::parse_quote! {
        #asyncness fn #name(&self, #(#params: #types),*) #output
    };
    FunctionSignature::from_syn(&sig, vec![]).unwrap()
}

fn render(synthesis: &Synthesis) -> Vec<String> {
    let trackers = synthesis.trackers.iter().map(flat);
    let forwarding = synthesis.forwarding.iter().map(flat);
    let stubs = synthesis.stubs.iter().map(flat);
    trackers.chain(forwarding).chain(stubs).collect()
}

proptest! {
    #[test]
    fn synthesis_is_idempotent(shapes in shape_lists()) {
        let functions: Vec<_> = shapes.iter().map(build).collect();
        let properties = [
            Property::typed(format_ident!("id"), syn::parse_quote!(u64)),
            Property::untyped(format_ident!("computed")),
        ];

        let synthesizer = Synthesizer::default();
        let first = synthesizer.synthesize(&functions, &properties);
        let second = synthesizer.synthesize(&functions, &properties);
        prop_assert_eq!(render(&first), render(&second));
        prop_assert_eq!(first.omitted, second.omitted);
    }

    #[test]
    fn outputs_follow_input_order(shapes in shape_lists()) {
        let functions: Vec<_> = shapes.iter().map(build).collect();
        let synthesis = decoy::synthesize(&functions, &[]);

        prop_assert_eq!(synthesis.trackers.len(), shapes.len());
        prop_assert_eq!(synthesis.forwarding.len(), shapes.len());
        prop_assert_eq!(synthesis.stubs.len(), shapes.len());

        for (k, shape) in shapes.iter().enumerate() {
            let name = format!("op_{}", shape.seed);
            prop_assert_eq!(synthesis.trackers[k].ident.to_string(), format!("{}_mock", name));
            prop_assert_eq!(synthesis.forwarding[k].sig.ident.to_string(), name.clone());
            prop_assert_eq!(synthesis.stubs[k].sig.ident.to_string(), name);
        }
    }

    #[test]
    fn recorder_matches_effects_and_arity(shapes in shape_lists()) {
        for shape in &shapes {
            let recorder = Synthesizer::default().recorder_type(&build(shape));

            let variant = match (shape.is_async, shape.is_failable) {
                (false, false) => Variant::Plain,
                (true, false) => Variant::Async,
                (false, true) => Variant::Failable,
                (true, true) => Variant::AsyncFailable,
            };
            prop_assert_eq!(recorder.variant, variant);

            if shape.arity == 0 {
                prop_assert_eq!(recorder.arity, Arity::Zero);
                prop_assert_eq!(recorder.args.len(), 1);
            } else {
                prop_assert_eq!(recorder.arity, Arity::NonZero);
                prop_assert_eq!(recorder.args.len(), 2);
            }

            // the success type of `Result<u8, Error>` or the plain `u8`
            let output: syn::Type = syn::parse_quote!(u8);
            prop_assert_eq!(recorder.args.last(), Some(&output));
        }
    }
}
