//! Pipeline composer
//!
//! `PipelineComposer` owns all pipeline state: the ordered descriptor list,
//! the chain-mode flag, the inspection history, and the lazily created
//! runtime handle. Callers hold an explicit composer instance; there is no
//! global pipeline.
//!
//! The composer is single-threaded by design: the host delivers events one
//! at a time to one logical thread of control, so state is mutated in place
//! with no locking and at most one composition sequence is in flight.

use super::adapter::RuntimeAdapter;
use super::catalog::EffectKind;
use super::descriptor::EffectDescriptor;
use super::error::EffectError;

/// Composes ordered effect pipelines and submits them to the runtime
pub struct PipelineComposer<A: RuntimeAdapter> {
    /// Runtime adapter
    adapter: A,
    /// Runtime pipeline handle, created on first use
    handle: Option<A::Handle>,
    /// Staged descriptors; insertion order is the processing order
    entries: Vec<EffectDescriptor>,
    /// Kind history mirroring `entries`, kept for inspection
    history: Vec<EffectKind>,
    /// When true, new effect requests append instead of replacing
    chain_enabled: bool,
}

impl<A: RuntimeAdapter> PipelineComposer<A> {
    /// Create a composer with chaining disabled
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            handle: None,
            entries: Vec::new(),
            history: Vec::new(),
            chain_enabled: false,
        }
    }

    /// Get a reference to the runtime adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Get a mutable reference to the runtime adapter
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Check whether chain mode is enabled
    pub fn chain_enabled(&self) -> bool {
        self.chain_enabled
    }

    /// Enable or disable chain mode
    ///
    /// This is the ambient mode: the host toggles it from its own controls,
    /// and it stays in force until toggled again or overridden by a
    /// composite scope.
    pub fn set_chain_enabled(&mut self, enabled: bool) {
        self.chain_enabled = enabled;
    }

    /// Staged descriptors, in processing order
    pub fn entries(&self) -> &[EffectDescriptor] {
        &self.entries
    }

    /// Kind history, mirroring `entries`
    pub fn history(&self) -> &[EffectKind] {
        &self.history
    }

    /// Number of staged effects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset the pipeline to a fresh state unless chaining
    ///
    /// With chaining off this clears the runtime pipeline and both staged
    /// sequences (idempotent); with chaining on it leaves everything in
    /// place so the caller can keep appending. Creates the runtime handle
    /// if absent; callers invoke this before the first append of a session.
    pub fn reset(&mut self) -> Result<(), EffectError> {
        self.ensure_handle()?;
        if !self.chain_enabled {
            if let Some(handle) = &self.handle {
                self.adapter.clear(handle)?;
            }
            self.entries.clear();
            self.history.clear();
            log::debug!("pipeline reset");
        }
        Ok(())
    }

    /// Unconditionally clear the pipeline, even mid-chain
    ///
    /// Chain mode is forced off for the duration of the call and restored
    /// afterward, on error exits included.
    pub fn clear(&mut self) -> Result<(), EffectError> {
        let saved = self.chain_enabled;
        self.chain_enabled = false;
        let result = self.reset();
        self.chain_enabled = saved;
        result
    }

    /// Stage a single effect, replacing the pipeline unless chaining
    ///
    /// Calls `reset()` first: with chaining off the descriptor replaces the
    /// whole pipeline, with chaining on it lands on top of the existing
    /// entries. The append happens only after a successful reset, so a
    /// failed call leaves state untouched.
    pub fn append_effect(&mut self, descriptor: EffectDescriptor) -> Result<(), EffectError> {
        self.reset()?;
        self.push(descriptor);
        Ok(())
    }

    /// Stage an effect on top of the existing pipeline, with no implicit
    /// clearing
    ///
    /// Used when assembling a multi-step composite over state the caller
    /// has already established.
    pub fn append_to_chain(&mut self, descriptor: EffectDescriptor) {
        self.push(descriptor);
    }

    /// Remove the most recently staged effect and recommit
    ///
    /// Fails with `EmptyPipeline` if nothing is staged; state is unchanged
    /// in that case.
    pub fn remove_last(&mut self) -> Result<(), EffectError> {
        if self.entries.is_empty() {
            return Err(EffectError::EmptyPipeline);
        }
        self.entries.pop();
        self.history.pop();
        self.commit()
    }

    /// Submit the current pipeline snapshot to the runtime
    ///
    /// Two phases: `initialize` (the runtime allocates and validates
    /// resources for the full ordered list), then `start` (the runtime
    /// begins applying it in order). The complete current list is sent both
    /// times, never a delta.
    ///
    /// Commit is fire-and-forget: the composer returns without waiting for
    /// runtime-side completion, and the adapter owns any internal queuing.
    /// Two rapid successive commits may therefore reach the runtime in
    /// either order; the last write wins. That race is accepted, not
    /// serialized away.
    pub fn commit(&mut self) -> Result<(), EffectError> {
        self.ensure_handle()?;
        if let Some(handle) = &self.handle {
            log::debug!("committing {} effect(s)", self.entries.len());
            self.adapter.initialize(handle, &self.entries)?;
            self.adapter.start(handle, &self.entries)?;
        }
        Ok(())
    }

    /// Stage a single effect and commit in one call
    pub fn run(&mut self, descriptor: EffectDescriptor) -> Result<(), EffectError> {
        self.append_effect(descriptor)?;
        self.commit()
    }

    /// Run `body` with chain mode forced on, restoring the prior mode on
    /// every exit path
    ///
    /// The body's effect calls chain together even when the ambient mode is
    /// "replace", and callers after the scope see the ambient mode they set.
    /// Scopes save exactly one prior flag value; a body must not open
    /// another scope.
    pub fn with_composite_scope<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, EffectError>,
    ) -> Result<T, EffectError> {
        let saved = self.chain_enabled;
        self.chain_enabled = true;
        let result = body(self);
        self.chain_enabled = saved;
        result
    }

    /// Render the staged kind history for display
    ///
    /// Fails with `EmptyPipeline` when nothing is staged; the error's
    /// display text is the user-visible notice for that case.
    pub fn inspect(&self) -> Result<String, EffectError> {
        if self.history.is_empty() {
            return Err(EffectError::EmptyPipeline);
        }
        let mut out = String::from("[Start]\n");
        for (i, kind) in self.history.iter().enumerate() {
            if i > 0 {
                out.push_str(" > ");
            }
            out.push_str(kind.id());
        }
        out.push_str("\n[END]");
        Ok(out)
    }

    fn ensure_handle(&mut self) -> Result<(), EffectError> {
        if self.handle.is_none() {
            log::debug!("creating runtime pipeline handle");
            self.handle = Some(self.adapter.create_pipeline_handle()?);
        }
        Ok(())
    }

    fn push(&mut self, descriptor: EffectDescriptor) {
        self.history.push(descriptor.kind());
        self.entries.push(descriptor);
        debug_assert_eq!(self.entries.len(), self.history.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::adapter::{AdapterCall, AdapterError, RecordingAdapter};
    use crate::effects::descriptor::EffectParams;
    use crate::effects::types::BlurParams;

    fn descriptor(kind: EffectKind) -> EffectDescriptor {
        EffectDescriptor::with_defaults(kind)
    }

    fn kinds(composer: &PipelineComposer<RecordingAdapter>) -> Vec<EffectKind> {
        composer.entries().iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_replace_semantics_without_chaining() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());

        for kind in [EffectKind::Sepia, EffectKind::Blur, EffectKind::Grain] {
            composer.append_effect(descriptor(kind)).unwrap();
            assert_eq!(kinds(&composer), vec![kind]);
            assert_eq!(composer.history(), &[kind]);
        }
    }

    #[test]
    fn test_chain_semantics_grow_in_call_order() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);

        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        composer.append_effect(descriptor(EffectKind::Blur)).unwrap();
        composer.append_to_chain(descriptor(EffectKind::Grain));

        assert_eq!(
            kinds(&composer),
            vec![EffectKind::Sepia, EffectKind::Blur, EffectKind::Grain]
        );
    }

    #[test]
    fn test_history_mirrors_entries_after_every_operation() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());

        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        assert_eq!(composer.entries().len(), composer.history().len());

        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Blur)).unwrap();
        composer.append_to_chain(descriptor(EffectKind::Grain));
        assert_eq!(composer.entries().len(), composer.history().len());

        composer.remove_last().unwrap();
        assert_eq!(composer.entries().len(), composer.history().len());

        composer.clear().unwrap();
        assert_eq!(composer.entries().len(), 0);
        assert_eq!(composer.history().len(), 0);
    }

    #[test]
    fn test_remove_last_on_empty_pipeline() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());

        let err = composer.remove_last().unwrap_err();
        assert!(matches!(err, EffectError::EmptyPipeline));
        assert!(composer.is_empty());
        // Nothing reached the adapter
        assert!(composer.adapter().calls().is_empty());
    }

    #[test]
    fn test_remove_last_shortens_and_recommits() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        composer.append_effect(descriptor(EffectKind::Blur)).unwrap();

        composer.adapter_mut().take_calls();
        composer.remove_last().unwrap();

        assert_eq!(kinds(&composer), vec![EffectKind::Sepia]);
        assert_eq!(composer.history(), &[EffectKind::Sepia]);

        // Recommit sends the complete shortened list, both phases
        let calls = composer.adapter_mut().take_calls();
        assert_eq!(
            calls,
            vec![
                AdapterCall::Initialize(vec![descriptor(EffectKind::Sepia)]),
                AdapterCall::Start(vec![descriptor(EffectKind::Sepia)]),
            ]
        );
    }

    #[test]
    fn test_commit_is_two_phase_with_full_snapshot() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        composer.append_effect(descriptor(EffectKind::Blur)).unwrap();

        composer.adapter_mut().take_calls();
        composer.commit().unwrap();

        let expected = vec![descriptor(EffectKind::Sepia), descriptor(EffectKind::Blur)];
        assert_eq!(
            composer.adapter().calls(),
            &[
                AdapterCall::Initialize(expected.clone()),
                AdapterCall::Start(expected),
            ]
        );
    }

    #[test]
    fn test_run_stages_and_commits() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer
            .run(EffectDescriptor::new(EffectParams::Blur(BlurParams {
                window_size: 21,
                ..Default::default()
            })))
            .unwrap();

        assert_eq!(kinds(&composer), vec![EffectKind::Blur]);
        let calls = composer.adapter().calls();
        assert!(matches!(calls.last(), Some(AdapterCall::Start(list)) if list.len() == 1));
    }

    #[test]
    fn test_handle_is_created_once() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        composer.commit().unwrap();
        composer.reset().unwrap();

        let creates = composer
            .adapter()
            .calls()
            .iter()
            .filter(|c| **c == AdapterCall::CreateHandle)
            .count();
        assert_eq!(creates, 1);
    }

    #[test]
    fn test_composite_scope_restores_flag_on_normal_exit() {
        for ambient in [false, true] {
            let mut composer = PipelineComposer::new(RecordingAdapter::new());
            composer.set_chain_enabled(ambient);

            composer
                .with_composite_scope(|c| {
                    assert!(c.chain_enabled());
                    c.append_effect(descriptor(EffectKind::Sepia))
                })
                .unwrap();

            assert_eq!(composer.chain_enabled(), ambient);
        }
    }

    #[test]
    fn test_composite_scope_restores_flag_on_error_exit() {
        for ambient in [false, true] {
            let mut composer = PipelineComposer::new(RecordingAdapter::new());
            composer.set_chain_enabled(ambient);

            let err = composer
                .with_composite_scope(|c| {
                    c.append_effect(descriptor(EffectKind::Sepia))?;
                    c.remove_last()?;
                    c.remove_last() // pipeline is empty now
                })
                .unwrap_err();

            assert!(matches!(err, EffectError::EmptyPipeline));
            assert_eq!(composer.chain_enabled(), ambient);
        }
    }

    #[test]
    fn test_clear_empties_mid_chain_and_restores_flag() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        composer.append_effect(descriptor(EffectKind::Blur)).unwrap();

        composer.clear().unwrap();

        assert!(composer.is_empty());
        assert!(composer.history().is_empty());
        assert!(composer.chain_enabled());
    }

    #[test]
    fn test_inspect_formats_the_history() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Fisheye)).unwrap();
        composer.append_effect(descriptor(EffectKind::CropFace)).unwrap();
        composer
            .append_effect(descriptor(EffectKind::TemporalBlur))
            .unwrap();

        assert_eq!(
            composer.inspect().unwrap(),
            "[Start]\nfisheye > crop_face > temporal_blur\n[END]"
        );
    }

    #[test]
    fn test_inspect_single_entry() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();
        assert_eq!(composer.inspect().unwrap(), "[Start]\nsepia\n[END]");
    }

    #[test]
    fn test_inspect_empty_pipeline_notice() {
        let composer = PipelineComposer::new(RecordingAdapter::new());
        let err = composer.inspect().unwrap_err();
        assert!(matches!(err, EffectError::EmptyPipeline));
        assert_eq!(err.to_string(), "empty effect chain");
    }

    // Adapter that fails every call after handle creation
    struct FailingAdapter;

    impl RuntimeAdapter for FailingAdapter {
        type Handle = ();

        fn create_pipeline_handle(&mut self) -> Result<Self::Handle, AdapterError> {
            Ok(())
        }

        fn initialize(
            &mut self,
            _handle: &Self::Handle,
            _descriptors: &[EffectDescriptor],
        ) -> Result<(), AdapterError> {
            Err(AdapterError::new("initialize rejected"))
        }

        fn start(
            &mut self,
            _handle: &Self::Handle,
            _descriptors: &[EffectDescriptor],
        ) -> Result<(), AdapterError> {
            Err(AdapterError::new("start rejected"))
        }

        fn clear(&mut self, _handle: &Self::Handle) -> Result<(), AdapterError> {
            Err(AdapterError::new("clear rejected"))
        }
    }

    #[test]
    fn test_adapter_failure_surfaces_unretried() {
        let mut composer = PipelineComposer::new(FailingAdapter);
        composer.set_chain_enabled(true);
        composer.append_effect(descriptor(EffectKind::Sepia)).unwrap();

        let err = composer.commit().unwrap_err();
        assert!(matches!(err, EffectError::Adapter(_)));
        // Staged state is untouched; the caller decides what to do next
        assert_eq!(composer.len(), 1);
    }

    #[test]
    fn test_clear_restores_flag_when_adapter_fails() {
        let mut composer = PipelineComposer::new(FailingAdapter);
        composer.set_chain_enabled(true);

        assert!(composer.clear().is_err());
        assert!(composer.chain_enabled());
    }
}
