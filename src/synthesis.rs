pub mod effects;
pub mod forwarding;
pub mod recorder;
pub mod stub;
pub mod tracker;

use std::fmt;

use quote::ToTokens as _;

use crate::{
    args::{Args, UntypedProperties},
    declaration::{FunctionSignature, Property},
};
use effects::Effects;
use recorder::RecorderType;
use tracker::TrackerField;

/// Everything synthesized for one interface.
///
/// Each list follows the order of the declarations it came from. `stubs`
/// holds the function stubs followed by the property stubs.
#[derive(Clone, Debug, Default)]
pub struct Synthesis {
    pub trackers: Vec<TrackerField>,
    pub forwarding: Vec<syn::ImplItemFn>,
    pub stubs: Vec<syn::TraitItemFn>,
    pub omitted: Vec<Omission>,
}

/// A property that got no stub, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Omission {
    pub property: syn::Ident,
    pub reason: OmissionReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OmissionReason {
    /// No type annotation, so there is nothing for a getter to return.
    Untyped,
}

#[derive(Clone, Debug, Default)]
pub struct Synthesizer {
    args: Args,
}

impl Synthesizer {
    pub fn new(args: Args) -> Self {
        Synthesizer { args }
    }

    pub fn recorder_type(&self, signature: &FunctionSignature) -> RecorderType {
        RecorderType::new(signature, Effects::of(signature), self.args.recorder.as_ref())
    }

    pub fn tracker_fields(&self, functions: &[FunctionSignature]) -> Vec<TrackerField> {
        functions
            .iter()
            .map(|signature| {
                let recorder = self.recorder_type(signature);
                tracing::trace!(
                    function = %signature.name,
                    variant = %recorder.variant,
                    "tracking with `{}`",
                    recorder.to_type().to_token_stream()
                );
                TrackerField::new(signature, recorder)
            })
            .collect()
    }

    pub fn forwarding_bodies(&self, functions: &[FunctionSignature]) -> Vec<syn::ImplItemFn> {
        functions
            .iter()
            .map(|signature| forwarding::emit(signature, Effects::of(signature)))
            .collect()
    }

    pub fn function_stubs(&self, functions: &[FunctionSignature]) -> Vec<syn::TraitItemFn> {
        functions.iter().map(stub::function).collect()
    }

    /// Stubs for every typed property, and the untyped ones that were left out.
    pub fn property_stubs(
        &self,
        properties: &[Property],
    ) -> (Vec<syn::TraitItemFn>, Vec<Omission>) {
        let mut stubs = Vec::with_capacity(properties.len());
        let mut omitted = vec![];

        for property in properties {
            match stub::property(property) {
                Some(getter) => stubs.push(getter),
                None => {
                    tracing::debug!(
                        property = %property.name,
                        "no type annotation; property stub omitted"
                    );
                    omitted.push(Omission {
                        property: property.name.clone(),
                        reason: OmissionReason::Untyped,
                    });
                }
            }
        }

        (stubs, omitted)
    }

    /// Runs every emitter. Untyped properties are skipped and reported in
    /// [`Synthesis::omitted`] whatever the configured policy.
    pub fn synthesize(&self, functions: &[FunctionSignature], properties: &[Property]) -> Synthesis {
        let mut stubs = self.function_stubs(functions);
        let (property_stubs, omitted) = self.property_stubs(properties);
        stubs.extend(property_stubs);

        Synthesis {
            trackers: self.tracker_fields(functions),
            forwarding: self.forwarding_bodies(functions),
            stubs,
            omitted,
        }
    }

    /// Like [`Synthesizer::synthesize`] but enforces the untyped property
    /// policy: with `reject` every omission becomes an error.
    pub fn run(
        &self,
        functions: &[FunctionSignature],
        properties: &[Property],
    ) -> darling::Result<Synthesis> {
        let synthesis = self.synthesize(functions, properties);

        match self.args.untyped_properties {
            UntypedProperties::Skip => Ok(synthesis),
            UntypedProperties::Reject => {
                let mut errors = darling::Error::accumulator();
                for omission in &synthesis.omitted {
                    errors.push(darling::Error::custom(omission).with_span(&omission.property));
                }
                errors.finish_with(synthesis)
            }
        }
    }
}

impl Synthesis {
    /// `Self { .. }` with every tracker field default-initialized, in order.
    pub fn constructor(&self) -> syn::ExprStruct {
        tracker::construct_self(&self.trackers)
    }
}

impl fmt::Display for Omission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decoy cannot stub property '{}' {}", self.property, self.reason)
    }
}

impl fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OmissionReason::Untyped => "without a type annotation",
        })
    }
}
