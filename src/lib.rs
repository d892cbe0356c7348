//! Synthesizes recording test doubles from the declarations of an interface.
//!
//! From a list of [`FunctionSignature`]s and [`Property`]s, decoy derives
//! three groups of declarations:
//!
//! * tracker fields, one recorder per function, to be placed in the mock's
//!   struct,
//! * forwarding methods, whose bodies hand every call to the matching
//!   tracker,
//! * bodiless stubs, stating the conformance surface as a trait would.
//!
//! The recorder types (`Mock`, `MockAsync`, `MockThrowing`,
//! `MockAsyncThrowing` and their `Void` specializations) are not part of
//! this crate. Neither is placing the generated declarations; every output
//! implements [`quote::ToTokens`] and the host splices them where they
//! belong.
//!
//! Type expressions are never checked. Whatever the interface declares is
//! carried into the output as written, and mistakes surface when the
//! generated code is compiled. That includes escaping parameters: an
//! argument-position `impl Trait` is recorded as `Box<dyn Trait>`, which is
//! `'static`, so the parameter has to be declared `impl Trait + 'static` for
//! the forwarding call to compile.
//!
//! ```
//! use quote::ToTokens;
//!
//! let item: syn::ItemTrait = syn::parse_quote! {
//!     trait Store {
//!         fn get(&self, key: u32) -> Option<String>;
//!     }
//! };
//!
//! let interface = decoy::Interface::from_trait(&item).unwrap();
//! let synthesis = decoy::synthesize(&interface.functions, &interface.properties);
//!
//! let recorder: syn::Type = syn::parse_quote!(Mock<u32, Option<String>>);
//! assert_eq!(synthesis.trackers[0].ident, "get_mock");
//! assert_eq!(synthesis.trackers[0].recorder.to_type(), recorder);
//!
//! let forwarding = synthesis.forwarding[0].to_token_stream().to_string();
//! assert!(forwarding.contains("record"));
//! ```

mod args;
mod declaration;
mod synthesis;

pub use args::{Args, UntypedProperties};
pub use declaration::{FunctionSignature, Interface, Param, Property};
pub use synthesis::{
    effects::{self, Effects, Variant},
    recorder::{self, Arity, RecorderType},
    tracker::TrackerField,
    Omission, OmissionReason, Synthesis, Synthesizer,
};

/// Runs every emitter with the default [`Args`].
pub fn synthesize(functions: &[FunctionSignature], properties: &[Property]) -> Synthesis {
    Synthesizer::default().synthesize(functions, properties)
}
