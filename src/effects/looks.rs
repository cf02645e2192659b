//! Composite looks
//!
//! Named multi-step effects assembled from catalog kinds. Each look chains
//! its sub-effects through a composite scope so the steps land together
//! regardless of the ambient chain mode, and sub-effect order is the
//! processing order: blur-style steps come before color work, overlays
//! come last.

use super::adapter::RuntimeAdapter;
use super::composer::PipelineComposer;
use super::descriptor::{EffectDescriptor, EffectParams};
use super::error::EffectError;
use super::types::*;

/// Buffer key shared by the swap capture and apply passes
///
/// Two racing updates may overwrite each other's buffer under this key;
/// the last write wins at the runtime boundary.
pub const SWAP_RESOURCE_KEY: &str = "temp";

/// A beautifying look built from blur and color vibrance
///
/// Seven steps: temporal blur, surface blur, alpha vignette, copy, auto
/// BCS, background overlay, vignette. The pipeline is cleared first, so the
/// look always stages exactly these seven entries.
pub fn purty<A: RuntimeAdapter>(composer: &mut PipelineComposer<A>) -> Result<(), EffectError> {
    const COPY_KEY: &str = "temp";

    log::info!("applying purty look");
    composer.with_composite_scope(|c| {
        c.clear()?;

        // 1. Temporal blur
        c.append_to_chain(EffectDescriptor::new(EffectParams::TemporalBlur(
            TemporalBlurParams { learning_rate: 0.9 },
        )));

        // 2. Surface blur
        c.append_to_chain(EffectDescriptor::new(EffectParams::SurfaceBlur(
            SurfaceBlurParams {
                window_size: 7,
                edge_min_threshold: 10,
                edge_max_threshold: 80,
            },
        )));

        // 3. Vignette #1 (alpha)
        c.append_to_chain(EffectDescriptor::new(EffectParams::Vignette(
            VignetteParams {
                size: 0.6,
                alpha_only: true,
                ..Default::default()
            },
        )));

        // 4. Copy
        c.append_to_chain(EffectDescriptor::new(EffectParams::Copy(
            CopyParams::to_key(COPY_KEY),
        )));

        // 5. Auto BCS
        c.append_to_chain(EffectDescriptor::new(EffectParams::AutoBcs(
            AutoBcsParams::default(),
        )));

        // 6. Overlay
        c.append_to_chain(EffectDescriptor::new(EffectParams::OverlayBackground(
            OverlayBackgroundParams::from_key(COPY_KEY),
        )));

        // 7. Vignette #2
        c.append_to_chain(EffectDescriptor::new(EffectParams::Vignette(
            VignetteParams {
                size: 0.9,
                ..Default::default()
            },
        )));

        c.commit()
    })
}

/// A silly look that makes you want to squint at the person in frame
///
/// Honors the ambient mode before chaining: with chaining on, the three
/// steps land on top of the existing pipeline.
pub fn squint<A: RuntimeAdapter>(composer: &mut PipelineComposer<A>) -> Result<(), EffectError> {
    log::info!("applying squint look");
    composer.reset()?;
    composer.with_composite_scope(|c| {
        // A fish eye with maximum distortion
        c.run(EffectDescriptor::new(EffectParams::Fisheye(FisheyeParams {
            scale: 0.6,
        })))?;
        // Crop to the face
        c.run(EffectDescriptor::new(EffectParams::CropFace(
            CropFaceParams::default(),
        )))?;
        // Temporal blur
        c.run(EffectDescriptor::new(EffectParams::TemporalBlur(
            TemporalBlurParams::default(),
        )))
    })
}

/// An alternate rotoscope / cartoon look
pub fn roto<A: RuntimeAdapter>(composer: &mut PipelineComposer<A>) -> Result<(), EffectError> {
    log::info!("applying roto look");
    composer.reset()?;
    composer.with_composite_scope(|c| {
        c.run(EffectDescriptor::new(EffectParams::AutoBcs(
            AutoBcsParams::default(),
        )))?;
        c.run(EffectDescriptor::new(EffectParams::Bilateral))?;
        c.run(EffectDescriptor::new(EffectParams::SurfaceBlur(
            SurfaceBlurParams::default(),
        )))?;
        c.run(EffectDescriptor::new(EffectParams::SimpleBcs(
            SimpleBcsParams::default(),
        )))?;
        c.run(EffectDescriptor::new(EffectParams::Quantize(
            QuantizeParams::default(),
        )))
    })
}

/// Background replacement: buffer the background and composite it back
///
/// Copies the current frame into a buffer, blurs it, and overlays it behind
/// the subject.
pub fn background_replacement<A: RuntimeAdapter>(
    composer: &mut PipelineComposer<A>,
) -> Result<(), EffectError> {
    const BACKGROUND_KEY: &str = "background";

    log::info!("applying background replacement");
    composer.reset()?;

    composer.append_to_chain(EffectDescriptor::new(EffectParams::ReplaceBackground));
    // Copy from the current frame into the background buffer
    composer.append_to_chain(EffectDescriptor::new(EffectParams::Copy(
        CopyParams::to_key(BACKGROUND_KEY),
    )));
    // Blur the buffer
    composer.append_to_chain(EffectDescriptor::new(EffectParams::Blur(
        BlurParams::default(),
    )));
    // Overlay the background
    composer.append_to_chain(EffectDescriptor::new(EffectParams::OverlayBackground(
        OverlayBackgroundParams::from_key(BACKGROUND_KEY),
    )));

    composer.commit()
}

/// First swap phase: capture the current frame into the shared buffer
pub fn capture_swap_frame<A: RuntimeAdapter>(
    composer: &mut PipelineComposer<A>,
) -> Result<(), EffectError> {
    log::info!("capturing swap frame");
    composer.reset()?;
    composer.append_to_chain(EffectDescriptor::new(EffectParams::Copy(
        CopyParams::to_key(SWAP_RESOURCE_KEY),
    )));
    composer.commit()
}

/// Second swap phase: show the captured frame in place of the live stream
pub fn apply_swap<A: RuntimeAdapter>(
    composer: &mut PipelineComposer<A>,
) -> Result<(), EffectError> {
    log::info!("applying swap");
    composer.append_to_chain(EffectDescriptor::new(EffectParams::Swap(
        SwapParams::from_key(SWAP_RESOURCE_KEY),
    )));
    composer.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::adapter::{AdapterCall, RecordingAdapter};
    use crate::effects::catalog::EffectKind;

    fn kinds(composer: &PipelineComposer<RecordingAdapter>) -> Vec<EffectKind> {
        composer.entries().iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_purty_is_seven_steps_in_order() {
        let expected = vec![
            EffectKind::TemporalBlur,
            EffectKind::SurfaceBlur,
            EffectKind::Vignette,
            EffectKind::Copy,
            EffectKind::AutoBcs,
            EffectKind::OverlayBackground,
            EffectKind::Vignette,
        ];

        for ambient in [false, true] {
            let mut composer = PipelineComposer::new(RecordingAdapter::new());
            composer.set_chain_enabled(ambient);
            // Pre-existing state must not leak into the look
            composer
                .append_effect(EffectDescriptor::with_defaults(EffectKind::Sepia))
                .unwrap();

            purty(&mut composer).unwrap();

            assert_eq!(kinds(&composer), expected);
            assert_eq!(composer.history().len(), 7);
            assert_eq!(composer.chain_enabled(), ambient);
        }
    }

    #[test]
    fn test_purty_commits_once() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        purty(&mut composer).unwrap();

        let starts = composer
            .adapter()
            .calls()
            .iter()
            .filter(|c| matches!(c, AdapterCall::Start(_)))
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_squint_replaces_when_not_chaining() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer
            .append_effect(EffectDescriptor::with_defaults(EffectKind::Sepia))
            .unwrap();

        squint(&mut composer).unwrap();

        assert_eq!(
            kinds(&composer),
            vec![
                EffectKind::Fisheye,
                EffectKind::CropFace,
                EffectKind::TemporalBlur
            ]
        );
        assert!(!composer.chain_enabled());
    }

    #[test]
    fn test_squint_appends_when_chaining() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        composer.set_chain_enabled(true);
        composer
            .append_effect(EffectDescriptor::with_defaults(EffectKind::Sepia))
            .unwrap();

        squint(&mut composer).unwrap();

        assert_eq!(
            kinds(&composer),
            vec![
                EffectKind::Sepia,
                EffectKind::Fisheye,
                EffectKind::CropFace,
                EffectKind::TemporalBlur
            ]
        );
        assert!(composer.chain_enabled());
    }

    #[test]
    fn test_roto_stages_five_steps() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        roto(&mut composer).unwrap();

        assert_eq!(
            kinds(&composer),
            vec![
                EffectKind::AutoBcs,
                EffectKind::Bilateral,
                EffectKind::SurfaceBlur,
                EffectKind::SimpleBcs,
                EffectKind::Quantize
            ]
        );
    }

    #[test]
    fn test_background_replacement_order() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());
        background_replacement(&mut composer).unwrap();

        assert_eq!(
            kinds(&composer),
            vec![
                EffectKind::ReplaceBackground,
                EffectKind::Copy,
                EffectKind::Blur,
                EffectKind::OverlayBackground
            ]
        );
    }

    #[test]
    fn test_swap_phases_share_the_resource_key() {
        let mut composer = PipelineComposer::new(RecordingAdapter::new());

        capture_swap_frame(&mut composer).unwrap();
        let capture_props = composer.entries()[0].properties();
        assert_eq!(capture_props["resource_key"], SWAP_RESOURCE_KEY);

        apply_swap(&mut composer).unwrap();
        assert_eq!(kinds(&composer), vec![EffectKind::Copy, EffectKind::Swap]);
        let swap_props = composer.entries()[1].properties();
        assert_eq!(swap_props["resource_key"], SWAP_RESOURCE_KEY);
    }
}
