//! Runtime adapter interface
//!
//! The composer never processes pixels; it hands ordered descriptor lists to
//! an external rendering runtime through this capability trait. Calls have
//! unspecified latency and the composer interprets their results only as
//! success or failure. An adapter that needs to do slow work is expected to
//! queue internally and return immediately; the composer does not wait for
//! runtime-side completion (see `PipelineComposer::commit`).

use super::descriptor::EffectDescriptor;

/// Error reported by a runtime adapter
///
/// Adapter failures are surfaced to composer callers as-is and never
/// retried or interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("runtime adapter failure: {message}")]
pub struct AdapterError {
    message: String,
}

impl AdapterError {
    /// Create a new adapter error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability interface to the external rendering runtime
pub trait RuntimeAdapter {
    /// Runtime-side pipeline handle
    type Handle;

    /// Allocate a pipeline on the runtime
    fn create_pipeline_handle(&mut self) -> Result<Self::Handle, AdapterError>;

    /// First commit phase: the runtime allocates and validates resources
    /// for the full ordered list
    fn initialize(
        &mut self,
        handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError>;

    /// Second commit phase: the runtime begins applying the list in order
    fn start(
        &mut self,
        handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError>;

    /// Drop all effects staged on the runtime pipeline
    fn clear(&mut self, handle: &Self::Handle) -> Result<(), AdapterError>;
}

/// One recorded capability call
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    CreateHandle,
    Initialize(Vec<EffectDescriptor>),
    Start(Vec<EffectDescriptor>),
    Clear,
}

/// Host-less adapter that records every capability call
///
/// Useful for tests and for inspecting what a composition sequence sends to
/// the runtime without a rendering backend attached.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    calls: Vec<AdapterCall>,
    next_handle: u32,
}

impl RecordingAdapter {
    /// Create a new recording adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in call order
    pub fn calls(&self) -> &[AdapterCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty
    pub fn take_calls(&mut self) -> Vec<AdapterCall> {
        std::mem::take(&mut self.calls)
    }
}

impl RuntimeAdapter for RecordingAdapter {
    type Handle = u32;

    fn create_pipeline_handle(&mut self) -> Result<Self::Handle, AdapterError> {
        self.calls.push(AdapterCall::CreateHandle);
        self.next_handle += 1;
        Ok(self.next_handle)
    }

    fn initialize(
        &mut self,
        _handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError> {
        self.calls.push(AdapterCall::Initialize(descriptors.to_vec()));
        Ok(())
    }

    fn start(
        &mut self,
        _handle: &Self::Handle,
        descriptors: &[EffectDescriptor],
    ) -> Result<(), AdapterError> {
        self.calls.push(AdapterCall::Start(descriptors.to_vec()));
        Ok(())
    }

    fn clear(&mut self, _handle: &Self::Handle) -> Result<(), AdapterError> {
        self.calls.push(AdapterCall::Clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectKind;

    #[test]
    fn test_recording_adapter_logs_calls() {
        let mut adapter = RecordingAdapter::new();
        let handle = adapter.create_pipeline_handle().unwrap();

        let sepia = EffectDescriptor::with_defaults(EffectKind::Sepia);
        adapter.initialize(&handle, &[sepia.clone()]).unwrap();
        adapter.start(&handle, &[sepia.clone()]).unwrap();
        adapter.clear(&handle).unwrap();

        assert_eq!(
            adapter.calls(),
            &[
                AdapterCall::CreateHandle,
                AdapterCall::Initialize(vec![sepia.clone()]),
                AdapterCall::Start(vec![sepia]),
                AdapterCall::Clear,
            ]
        );
    }

    #[test]
    fn test_take_calls_drains_the_log() {
        let mut adapter = RecordingAdapter::new();
        adapter.create_pipeline_handle().unwrap();
        assert_eq!(adapter.take_calls().len(), 1);
        assert!(adapter.calls().is_empty());
    }
}
