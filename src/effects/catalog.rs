//! Effect kind catalog
//!
//! The fixed catalog of effect kinds understood by the rendering runtime.
//! Each kind has a stable string identifier; those identifiers, together
//! with the per-kind property records, are the only wire format exchanged
//! with the runtime adapter.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Effect kinds available from the rendering runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Automatic brightness/contrast/saturation
    AutoBcs,
    /// Backlight compensation
    Backlight,
    /// Background replacement
    ReplaceBackground,
    /// Bilateral filter
    Bilateral,
    /// Blur over a screen region
    Blur,
    /// Blur the detected face
    BlurFace,
    /// Cartoon rendering
    Cartoon,
    /// Crop the screen
    Crop,
    /// Crop to the detected face
    CropFace,
    /// Color correction
    ColorCorrect,
    /// Color matrix distortion
    ColorMatrix,
    /// Color temperature shift
    ColorTemp,
    /// Copy the frame into a named resource buffer
    Copy,
    /// Force two tones
    Duotone,
    /// Face tracking data capture
    FaceData,
    /// Overlay drawn on the detected face
    FaceOverlay,
    /// Fisheye lens distortion
    Fisheye,
    /// Horizontal/vertical flip
    Flip,
    /// Freeze the current frame
    FreezeFrame,
    /// Film grain
    Grain,
    /// Force grayscale
    Grayscale,
    /// Hand tracking data capture
    HandData,
    /// Overlay drawn on detected hands
    HandOverlay,
    /// Low bandwidth edge rendering
    LowBandwidthSobel,
    /// Luminance enhancement
    LuminanceEnhancer,
    /// Holder for a nested effect pipeline
    MetaEffect,
    /// Color inversion
    Negative,
    /// Overlay drawing
    Overlay,
    /// Overlay drawn on the background
    OverlayBackground,
    /// Audio playback
    PlayAudio,
    /// Color quantization
    Quantize,
    /// Video resize
    Resize,
    /// Color saturation
    Saturate,
    /// Sepia toning
    Sepia,
    /// Direct brightness/contrast/saturation
    SimpleBcs,
    /// Frame snapshot
    Snapshot,
    /// Sobel edge rendering
    Sobel,
    /// Static screen overlay
    StaticOverlay,
    /// Edge-preserving surface smoothing
    SurfaceBlur,
    /// Swap a buffered image in for the video stream
    Swap,
    /// Motion blur across frames
    TemporalBlur,
    /// Color tint
    Tint,
    /// Vignetting on the image edges
    Vignette,
    /// White and black level adjustment
    Whiteblack,
}

impl EffectKind {
    /// All catalog kinds, in catalog order
    pub fn all() -> &'static [EffectKind] {
        &[
            EffectKind::AutoBcs,
            EffectKind::Backlight,
            EffectKind::ReplaceBackground,
            EffectKind::Bilateral,
            EffectKind::Blur,
            EffectKind::BlurFace,
            EffectKind::Cartoon,
            EffectKind::Crop,
            EffectKind::CropFace,
            EffectKind::ColorCorrect,
            EffectKind::ColorMatrix,
            EffectKind::ColorTemp,
            EffectKind::Copy,
            EffectKind::Duotone,
            EffectKind::FaceData,
            EffectKind::FaceOverlay,
            EffectKind::Fisheye,
            EffectKind::Flip,
            EffectKind::FreezeFrame,
            EffectKind::Grain,
            EffectKind::Grayscale,
            EffectKind::HandData,
            EffectKind::HandOverlay,
            EffectKind::LowBandwidthSobel,
            EffectKind::LuminanceEnhancer,
            EffectKind::MetaEffect,
            EffectKind::Negative,
            EffectKind::Overlay,
            EffectKind::OverlayBackground,
            EffectKind::PlayAudio,
            EffectKind::Quantize,
            EffectKind::Resize,
            EffectKind::Saturate,
            EffectKind::Sepia,
            EffectKind::SimpleBcs,
            EffectKind::Snapshot,
            EffectKind::Sobel,
            EffectKind::StaticOverlay,
            EffectKind::SurfaceBlur,
            EffectKind::Swap,
            EffectKind::TemporalBlur,
            EffectKind::Tint,
            EffectKind::Vignette,
            EffectKind::Whiteblack,
        ]
    }

    /// Stable wire identifier for this kind
    pub fn id(&self) -> &'static str {
        match self {
            EffectKind::AutoBcs => "auto_bcs",
            EffectKind::Backlight => "backlight",
            EffectKind::ReplaceBackground => "replace_background",
            EffectKind::Bilateral => "bilateral",
            EffectKind::Blur => "blur",
            EffectKind::BlurFace => "blur_face",
            EffectKind::Cartoon => "cartoon",
            EffectKind::Crop => "crop",
            EffectKind::CropFace => "crop_face",
            EffectKind::ColorCorrect => "color_correct",
            EffectKind::ColorMatrix => "color_matrix",
            EffectKind::ColorTemp => "color_temp",
            EffectKind::Copy => "copy",
            EffectKind::Duotone => "duotone",
            EffectKind::FaceData => "face_data",
            EffectKind::FaceOverlay => "face_overlay",
            EffectKind::Fisheye => "fisheye",
            EffectKind::Flip => "flip",
            EffectKind::FreezeFrame => "freeze_frame",
            EffectKind::Grain => "grain",
            EffectKind::Grayscale => "grayscale",
            EffectKind::HandData => "hand_data",
            EffectKind::HandOverlay => "hand_overlay",
            EffectKind::LowBandwidthSobel => "low_bandwidth_sobel",
            EffectKind::LuminanceEnhancer => "luminance_enhancer",
            EffectKind::MetaEffect => "meta_effect",
            EffectKind::Negative => "negative",
            EffectKind::Overlay => "overlay",
            EffectKind::OverlayBackground => "overlay_background",
            EffectKind::PlayAudio => "play_audio",
            EffectKind::Quantize => "quantize",
            EffectKind::Resize => "resize",
            EffectKind::Saturate => "saturate",
            EffectKind::Sepia => "sepia",
            EffectKind::SimpleBcs => "simple_bcs",
            EffectKind::Snapshot => "snapshot",
            EffectKind::Sobel => "sobel",
            EffectKind::StaticOverlay => "static_overlay",
            EffectKind::SurfaceBlur => "surface_blur",
            EffectKind::Swap => "swap",
            EffectKind::TemporalBlur => "temporal_blur",
            EffectKind::Tint => "tint",
            EffectKind::Vignette => "vignetting",
            EffectKind::Whiteblack => "whiteblack",
        }
    }

    /// Look up a kind by its wire identifier
    ///
    /// Returns `None` for identifiers outside the catalog; callers that need
    /// an error use the descriptor factory, which rejects unknown kinds.
    pub fn from_id(id: &str) -> Option<EffectKind> {
        EffectKind::all().iter().copied().find(|kind| kind.id() == id)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EffectKind::AutoBcs => "Auto BCS",
            EffectKind::Backlight => "Backlight",
            EffectKind::ReplaceBackground => "Background Replacement",
            EffectKind::Bilateral => "Bilateral Filter",
            EffectKind::Blur => "Blur",
            EffectKind::BlurFace => "Blur Face",
            EffectKind::Cartoon => "Cartoon",
            EffectKind::Crop => "Crop",
            EffectKind::CropFace => "Crop Face",
            EffectKind::ColorCorrect => "Color Correct",
            EffectKind::ColorMatrix => "Color Matrix",
            EffectKind::ColorTemp => "Color Temperature",
            EffectKind::Copy => "Copy",
            EffectKind::Duotone => "Duotone",
            EffectKind::FaceData => "Face Data",
            EffectKind::FaceOverlay => "Face Overlay",
            EffectKind::Fisheye => "Fisheye",
            EffectKind::Flip => "Flip",
            EffectKind::FreezeFrame => "Freeze Frame",
            EffectKind::Grain => "Grain",
            EffectKind::Grayscale => "Grayscale",
            EffectKind::HandData => "Hand Data",
            EffectKind::HandOverlay => "Hand Overlay",
            EffectKind::LowBandwidthSobel => "Low Bandwidth Sobel",
            EffectKind::LuminanceEnhancer => "Luminance Enhancer",
            EffectKind::MetaEffect => "Meta Effect",
            EffectKind::Negative => "Negative",
            EffectKind::Overlay => "Overlay",
            EffectKind::OverlayBackground => "Background Overlay",
            EffectKind::PlayAudio => "Play Audio",
            EffectKind::Quantize => "Quantize",
            EffectKind::Resize => "Resize",
            EffectKind::Saturate => "Saturate",
            EffectKind::Sepia => "Sepia",
            EffectKind::SimpleBcs => "Simple BCS",
            EffectKind::Snapshot => "Snapshot",
            EffectKind::Sobel => "Sobel",
            EffectKind::StaticOverlay => "Static Overlay",
            EffectKind::SurfaceBlur => "Surface Blur",
            EffectKind::Swap => "Swap",
            EffectKind::TemporalBlur => "Temporal Blur",
            EffectKind::Tint => "Tint",
            EffectKind::Vignette => "Vignette",
            EffectKind::Whiteblack => "White/Black Levels",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for EffectKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for EffectKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        EffectKind::from_id(&id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown effect kind: {}", id)))
    }
}
