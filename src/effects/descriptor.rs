//! Effect descriptors
//!
//! An `EffectDescriptor` names one pipeline step: an effect kind plus the
//! complete parameter record for that kind. Descriptors are immutable plain
//! data; the composer stages them and the runtime adapter consumes them.
//! Construction is referentially transparent and has no side effects.

use serde::{Deserialize, Serialize};

use super::catalog::EffectKind;
use super::error::EffectError;
use super::types::*;

/// Parameters for one effect, tagged by kind
///
/// One variant per catalog kind. Kinds with no recognized parameters are
/// unit variants; their property record on the wire is an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectParams {
    AutoBcs(AutoBcsParams),
    Backlight(BacklightParams),
    ReplaceBackground,
    Bilateral,
    Blur(BlurParams),
    BlurFace(BlurFaceParams),
    Cartoon(CartoonParams),
    Crop(CropParams),
    CropFace(CropFaceParams),
    ColorCorrect(ColorCorrectParams),
    ColorMatrix(ColorMatrixParams),
    ColorTemp(ColorTempParams),
    Copy(CopyParams),
    Duotone(DuotoneParams),
    FaceData,
    FaceOverlay,
    Fisheye(FisheyeParams),
    Flip(FlipParams),
    FreezeFrame,
    Grain(GrainParams),
    Grayscale,
    HandData,
    HandOverlay,
    LowBandwidthSobel,
    LuminanceEnhancer(LuminanceEnhancerParams),
    MetaEffect,
    Negative,
    Overlay,
    OverlayBackground(OverlayBackgroundParams),
    PlayAudio,
    Quantize(QuantizeParams),
    Resize,
    Saturate(SaturateParams),
    Sepia,
    SimpleBcs(SimpleBcsParams),
    Snapshot,
    Sobel,
    StaticOverlay,
    SurfaceBlur(SurfaceBlurParams),
    Swap(SwapParams),
    TemporalBlur(TemporalBlurParams),
    Tint(TintParams),
    #[serde(rename = "vignetting")]
    Vignette(VignetteParams),
    Whiteblack(WhiteblackParams),
}

impl EffectParams {
    /// The catalog kind this parameter record belongs to
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectParams::AutoBcs(_) => EffectKind::AutoBcs,
            EffectParams::Backlight(_) => EffectKind::Backlight,
            EffectParams::ReplaceBackground => EffectKind::ReplaceBackground,
            EffectParams::Bilateral => EffectKind::Bilateral,
            EffectParams::Blur(_) => EffectKind::Blur,
            EffectParams::BlurFace(_) => EffectKind::BlurFace,
            EffectParams::Cartoon(_) => EffectKind::Cartoon,
            EffectParams::Crop(_) => EffectKind::Crop,
            EffectParams::CropFace(_) => EffectKind::CropFace,
            EffectParams::ColorCorrect(_) => EffectKind::ColorCorrect,
            EffectParams::ColorMatrix(_) => EffectKind::ColorMatrix,
            EffectParams::ColorTemp(_) => EffectKind::ColorTemp,
            EffectParams::Copy(_) => EffectKind::Copy,
            EffectParams::Duotone(_) => EffectKind::Duotone,
            EffectParams::FaceData => EffectKind::FaceData,
            EffectParams::FaceOverlay => EffectKind::FaceOverlay,
            EffectParams::Fisheye(_) => EffectKind::Fisheye,
            EffectParams::Flip(_) => EffectKind::Flip,
            EffectParams::FreezeFrame => EffectKind::FreezeFrame,
            EffectParams::Grain(_) => EffectKind::Grain,
            EffectParams::Grayscale => EffectKind::Grayscale,
            EffectParams::HandData => EffectKind::HandData,
            EffectParams::HandOverlay => EffectKind::HandOverlay,
            EffectParams::LowBandwidthSobel => EffectKind::LowBandwidthSobel,
            EffectParams::LuminanceEnhancer(_) => EffectKind::LuminanceEnhancer,
            EffectParams::MetaEffect => EffectKind::MetaEffect,
            EffectParams::Negative => EffectKind::Negative,
            EffectParams::Overlay => EffectKind::Overlay,
            EffectParams::OverlayBackground(_) => EffectKind::OverlayBackground,
            EffectParams::PlayAudio => EffectKind::PlayAudio,
            EffectParams::Quantize(_) => EffectKind::Quantize,
            EffectParams::Resize => EffectKind::Resize,
            EffectParams::Saturate(_) => EffectKind::Saturate,
            EffectParams::Sepia => EffectKind::Sepia,
            EffectParams::SimpleBcs(_) => EffectKind::SimpleBcs,
            EffectParams::Snapshot => EffectKind::Snapshot,
            EffectParams::Sobel => EffectKind::Sobel,
            EffectParams::StaticOverlay => EffectKind::StaticOverlay,
            EffectParams::SurfaceBlur(_) => EffectKind::SurfaceBlur,
            EffectParams::Swap(_) => EffectKind::Swap,
            EffectParams::TemporalBlur(_) => EffectKind::TemporalBlur,
            EffectParams::Tint(_) => EffectKind::Tint,
            EffectParams::Vignette(_) => EffectKind::Vignette,
            EffectParams::Whiteblack(_) => EffectKind::Whiteblack,
        }
    }

    /// Default parameter record for a catalog kind
    pub fn defaults_for(kind: EffectKind) -> EffectParams {
        match kind {
            EffectKind::AutoBcs => EffectParams::AutoBcs(Default::default()),
            EffectKind::Backlight => EffectParams::Backlight(Default::default()),
            EffectKind::ReplaceBackground => EffectParams::ReplaceBackground,
            EffectKind::Bilateral => EffectParams::Bilateral,
            EffectKind::Blur => EffectParams::Blur(Default::default()),
            EffectKind::BlurFace => EffectParams::BlurFace(Default::default()),
            EffectKind::Cartoon => EffectParams::Cartoon(Default::default()),
            EffectKind::Crop => EffectParams::Crop(Default::default()),
            EffectKind::CropFace => EffectParams::CropFace(Default::default()),
            EffectKind::ColorCorrect => EffectParams::ColorCorrect(Default::default()),
            EffectKind::ColorMatrix => EffectParams::ColorMatrix(Default::default()),
            EffectKind::ColorTemp => EffectParams::ColorTemp(Default::default()),
            EffectKind::Copy => EffectParams::Copy(Default::default()),
            EffectKind::Duotone => EffectParams::Duotone(Default::default()),
            EffectKind::FaceData => EffectParams::FaceData,
            EffectKind::FaceOverlay => EffectParams::FaceOverlay,
            EffectKind::Fisheye => EffectParams::Fisheye(Default::default()),
            EffectKind::Flip => EffectParams::Flip(Default::default()),
            EffectKind::FreezeFrame => EffectParams::FreezeFrame,
            EffectKind::Grain => EffectParams::Grain(Default::default()),
            EffectKind::Grayscale => EffectParams::Grayscale,
            EffectKind::HandData => EffectParams::HandData,
            EffectKind::HandOverlay => EffectParams::HandOverlay,
            EffectKind::LowBandwidthSobel => EffectParams::LowBandwidthSobel,
            EffectKind::LuminanceEnhancer => EffectParams::LuminanceEnhancer(Default::default()),
            EffectKind::MetaEffect => EffectParams::MetaEffect,
            EffectKind::Negative => EffectParams::Negative,
            EffectKind::Overlay => EffectParams::Overlay,
            EffectKind::OverlayBackground => EffectParams::OverlayBackground(Default::default()),
            EffectKind::PlayAudio => EffectParams::PlayAudio,
            EffectKind::Quantize => EffectParams::Quantize(Default::default()),
            EffectKind::Resize => EffectParams::Resize,
            EffectKind::Saturate => EffectParams::Saturate(Default::default()),
            EffectKind::Sepia => EffectParams::Sepia,
            EffectKind::SimpleBcs => EffectParams::SimpleBcs(Default::default()),
            EffectKind::Snapshot => EffectParams::Snapshot,
            EffectKind::Sobel => EffectParams::Sobel,
            EffectKind::StaticOverlay => EffectParams::StaticOverlay,
            EffectKind::SurfaceBlur => EffectParams::SurfaceBlur(Default::default()),
            EffectKind::Swap => EffectParams::Swap(Default::default()),
            EffectKind::TemporalBlur => EffectParams::TemporalBlur(Default::default()),
            EffectKind::Tint => EffectParams::Tint(Default::default()),
            EffectKind::Vignette => EffectParams::Vignette(Default::default()),
            EffectKind::Whiteblack => EffectParams::Whiteblack(Default::default()),
        }
    }

    /// Property record handed to the runtime adapter
    ///
    /// Kinds without parameters produce an empty object.
    pub fn to_properties(&self) -> serde_json::Value {
        match self {
            EffectParams::AutoBcs(p) => properties_of(p),
            EffectParams::Backlight(p) => properties_of(p),
            EffectParams::Blur(p) => properties_of(p),
            EffectParams::BlurFace(p) => properties_of(p),
            EffectParams::Cartoon(p) => properties_of(p),
            EffectParams::Crop(p) => properties_of(p),
            EffectParams::CropFace(p) => properties_of(p),
            EffectParams::ColorCorrect(p) => properties_of(p),
            EffectParams::ColorMatrix(p) => properties_of(p),
            EffectParams::ColorTemp(p) => properties_of(p),
            EffectParams::Copy(p) => properties_of(p),
            EffectParams::Duotone(p) => properties_of(p),
            EffectParams::Fisheye(p) => properties_of(p),
            EffectParams::Flip(p) => properties_of(p),
            EffectParams::Grain(p) => properties_of(p),
            EffectParams::LuminanceEnhancer(p) => properties_of(p),
            EffectParams::OverlayBackground(p) => properties_of(p),
            EffectParams::Quantize(p) => properties_of(p),
            EffectParams::Saturate(p) => properties_of(p),
            EffectParams::SimpleBcs(p) => properties_of(p),
            EffectParams::SurfaceBlur(p) => properties_of(p),
            EffectParams::Swap(p) => properties_of(p),
            EffectParams::TemporalBlur(p) => properties_of(p),
            EffectParams::Tint(p) => properties_of(p),
            EffectParams::Vignette(p) => properties_of(p),
            EffectParams::Whiteblack(p) => properties_of(p),
            EffectParams::ReplaceBackground
            | EffectParams::Bilateral
            | EffectParams::FaceData
            | EffectParams::FaceOverlay
            | EffectParams::FreezeFrame
            | EffectParams::Grayscale
            | EffectParams::HandData
            | EffectParams::HandOverlay
            | EffectParams::LowBandwidthSobel
            | EffectParams::MetaEffect
            | EffectParams::Negative
            | EffectParams::Overlay
            | EffectParams::PlayAudio
            | EffectParams::Resize
            | EffectParams::Sepia
            | EffectParams::Snapshot
            | EffectParams::Sobel
            | EffectParams::StaticOverlay => serde_json::Value::Object(Default::default()),
        }
    }
}

fn properties_of<T: Serialize>(params: &T) -> serde_json::Value {
    // Parameter structs are plain field records; serialization cannot fail.
    serde_json::to_value(params).expect("parameter record serializes to JSON")
}

/// One staged pipeline step: an effect kind plus its concrete parameters
///
/// Immutable once constructed; a new descriptor is created for each pipeline
/// entry, even for repeated uses of the same kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    kind: EffectKind,
    params: EffectParams,
}

impl EffectDescriptor {
    /// Create a descriptor from a complete parameter record
    pub fn new(params: EffectParams) -> Self {
        Self {
            kind: params.kind(),
            params,
        }
    }

    /// Create a descriptor with the kind's default parameters
    pub fn with_defaults(kind: EffectKind) -> Self {
        Self::new(EffectParams::defaults_for(kind))
    }

    /// Create a descriptor from a wire identifier, with default parameters
    ///
    /// Fails with `UnknownEffectKind` for identifiers outside the catalog;
    /// a kind is never silently substituted.
    pub fn from_id(id: &str) -> Result<Self, EffectError> {
        let kind = EffectKind::from_id(id).ok_or_else(|| EffectError::UnknownEffectKind {
            id: id.to_string(),
        })?;
        Ok(Self::with_defaults(kind))
    }

    /// The effect kind
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// The parameter record
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// The property record handed to the runtime adapter
    pub fn properties(&self) -> serde_json::Value {
        self.params.to_properties()
    }
}
