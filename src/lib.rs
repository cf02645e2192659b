//! Stream Effects - effect pipeline composition for live video streams
//!
//! A library for building named, ordered pipelines of video-processing
//! effects and submitting them atomically to an external rendering runtime.
//! The library describes effects symbolically (a catalog kind plus a typed
//! parameter record) and hands ordered descriptor lists to the runtime; it
//! never processes pixels itself.

pub mod effects;

pub use effects::{
    EffectDescriptor, EffectError, EffectKind, EffectParams, PipelineComposer, RuntimeAdapter,
};
