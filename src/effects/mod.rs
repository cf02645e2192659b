//! Effect pipeline composition
//!
//! This module is the composition core: it turns individual effect requests
//! into an ordered pipeline and hands that pipeline to an external rendering
//! runtime as one atomic unit.
//!
//! # Architecture
//!
//! The module keeps the same data/runtime separation used elsewhere in the
//! codebase: descriptors are plain serializable data, and the runtime is
//! reached only through a capability trait.
//!
//! - **Catalog** (`catalog.rs`): `EffectKind`, the fixed catalog of effect
//!   kinds and their stable wire identifiers
//! - **Types** (`types.rs`): value primitives and per-kind parameter structs
//!   with documented defaults
//! - **Descriptor** (`descriptor.rs`): `EffectParams` (one variant per kind)
//!   and the `EffectDescriptor` factory
//! - **Adapter** (`adapter.rs`): `RuntimeAdapter` capability trait plus a
//!   host-less `RecordingAdapter`
//! - **Composer** (`composer.rs`): `PipelineComposer`, owner of all pipeline
//!   state and the composition protocol
//! - **Looks** (`looks.rs`): named multi-step composite effects
//!
//! # Usage
//!
//! ```
//! use stream_effects::effects::{
//!     BlurParams, EffectDescriptor, EffectParams, PipelineComposer, RecordingAdapter,
//! };
//!
//! let mut composer = PipelineComposer::new(RecordingAdapter::new());
//!
//! // Run a single effect with a partial parameter record.
//! composer.run(EffectDescriptor::new(EffectParams::Blur(BlurParams {
//!     window_size: 21,
//!     ..Default::default()
//! })))?;
//!
//! // Chain a second effect on top of it.
//! composer.set_chain_enabled(true);
//! composer.run(EffectDescriptor::from_id("sepia")?)?;
//!
//! assert_eq!(composer.len(), 2);
//! # Ok::<(), stream_effects::EffectError>(())
//! ```

mod adapter;
mod catalog;
mod composer;
mod descriptor;
mod error;
mod types;
pub mod looks;

pub use adapter::*;
pub use catalog::*;
pub use composer::*;
pub use descriptor::*;
pub use error::*;
pub use types::*;
