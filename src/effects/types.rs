//! Effect parameter types
//!
//! Value primitives and the per-kind parameter structs. Every struct carries
//! the documented default values for its effect kind, so a caller supplies
//! only the parameters it wants to override:
//!
//! ```
//! use stream_effects::effects::BlurParams;
//!
//! let params = BlurParams { window_size: 21, ..Default::default() };
//! assert_eq!(params.width, 0.5);
//! ```
//!
//! Field names are the runtime's property names; serde uses them verbatim
//! when building the property record handed to the runtime adapter.

use serde::{Deserialize, Serialize};

/// 2-D point in normalized screen coordinates (0.0-1.0 per axis)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Reference to a named frame buffer owned by the runtime
///
/// Buffers are written by the `copy` effect and read back by effects such as
/// `overlay_background` and `swap`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceRef {
    pub key: String,
}

impl ResourceRef {
    /// Create a reference to the named buffer
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Parameters for the auto BCS effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoBcsParams {
    /// Target brightness (0-255)
    pub target_brightness: f32,
    /// Brightness adjustment strength (-1.0-1.0)
    pub brightness: f32,
    /// Contrast adjustment strength (-1.0-1.0)
    pub contrast: f32,
    /// Saturation adjustment strength (-1.0-1.0)
    pub saturation: f32,
}

impl Default for AutoBcsParams {
    fn default() -> Self {
        Self {
            target_brightness: 90.0,
            brightness: 0.6,
            contrast: 0.6,
            saturation: 0.1,
        }
    }
}

/// Parameters for the backlight effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacklightParams {
    /// Compensation strength (-1.0-1.0)
    pub scale: f32,
}

impl Default for BacklightParams {
    fn default() -> Self {
        Self { scale: 0.5 }
    }
}

/// Parameters for the blur effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Blur window size in pixels (odd, 0-640)
    pub window_size: u32,
    /// Top-left corner of the blurred region
    pub top_left: Point,
    /// Region width (0.0-1.0)
    pub width: f32,
    /// Region height (0.0-1.0)
    pub height: f32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            window_size: 15,
            top_left: Point::new(0.25, 0.25),
            width: 0.5,
            height: 0.5,
        }
    }
}

/// Parameters for the face blur effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurFaceParams {
    /// Blur window size in pixels (odd, 0-640)
    pub window_size: u32,
    /// Aspect ratio of the blurred region (0.0-1.0)
    pub aspect_ratio: f32,
    /// Tracking timeout in milliseconds
    pub timeout: u32,
    /// Region scale relative to the detected face
    pub scale: f32,
    /// Tracking affinity (0.0-1.0)
    pub affinity: f32,
}

impl Default for BlurFaceParams {
    fn default() -> Self {
        Self {
            window_size: 33,
            aspect_ratio: 0.7,
            timeout: 1000,
            scale: 6.0,
            affinity: 1.0,
        }
    }
}

/// Parameters for the cartoon effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartoonParams {
    /// Working width in pixels (1-4096)
    pub width: u32,
    /// Working height in pixels (1-4096)
    pub height: u32,
    /// Smoothing window size (3-255)
    pub window_size: u32,
    /// Color similarity range (1-255)
    pub similarity_range: u32,
    /// Smoothing iterations (at least 1)
    pub iterations: u32,
    /// Black level (0.0-1.0)
    pub black: f32,
    /// White level (0.0-1.0)
    pub white: f32,
}

impl Default for CartoonParams {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
            window_size: 25,
            similarity_range: 20,
            iterations: 2,
            black: 0.9,
            white: 0.8,
        }
    }
}

/// Parameters for the crop effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Top-left corner of the kept region
    pub top_left: Point,
    /// Region width (0.0-1.0)
    pub width: f32,
    /// Region height (0.0-1.0)
    pub height: f32,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            top_left: Point::new(0.25, 0.25),
            width: 0.5,
            height: 0.5,
        }
    }
}

/// Parameters for the face crop effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropFaceParams {
    /// Tracking timeout in milliseconds
    pub timeout: u32,
    /// Region scale relative to the detected face
    pub scale: f32,
    /// Tracking affinity (0.0-1.0)
    pub affinity: f32,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl Default for CropFaceParams {
    fn default() -> Self {
        Self {
            timeout: 1000,
            scale: 4.0,
            affinity: 0.4,
            width: 160,
            height: 90,
        }
    }
}

/// Parameters for the color correction effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorCorrectParams {
    /// Smooth the correction across frames
    pub apply_temporal_filtering: bool,
}

/// Parameters for the color matrix effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMatrixParams {
    /// 3x4 row-major color transform matrix
    pub matrix: [f32; 12],
}

impl Default for ColorMatrixParams {
    fn default() -> Self {
        // Luminance-weighted transform
        Self {
            matrix: [
                805.0 / 2048.0,
                1575.0 / 2048.0,
                387.0 / 2048.0,
                0.0,
                715.0 / 2048.0,
                1405.0 / 2048.0,
                344.0 / 2048.0,
                0.0,
                557.0 / 2048.0,
                1094.0 / 2048.0,
                268.0 / 2048.0,
                0.0,
            ],
        }
    }
}

/// Parameters for the color temperature effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTempParams {
    /// Temperature shift (-0.5-0.5)
    pub scale: f32,
}

impl Default for ColorTempParams {
    fn default() -> Self {
        Self { scale: 0.3 }
    }
}

/// Parameters for the copy effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyParams {
    /// Buffer key the current frame is copied into
    pub resource_key: String,
}

impl CopyParams {
    /// Copy into the named buffer
    pub fn to_key(key: impl Into<String>) -> Self {
        Self {
            resource_key: key.into(),
        }
    }
}

/// Parameters for the duotone effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuotoneParams {
    /// Dark tone
    pub color1: Rgb,
    /// Light tone
    pub color2: Rgb,
}

impl Default for DuotoneParams {
    fn default() -> Self {
        Self {
            color1: Rgb::new(0, 0, 255),
            color2: Rgb::new(255, 255, 0),
        }
    }
}

/// Parameters for the fisheye effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FisheyeParams {
    /// Distortion strength (0.0-1.0)
    pub scale: f32,
}

impl Default for FisheyeParams {
    fn default() -> Self {
        Self { scale: 0.5 }
    }
}

/// Parameters for the flip effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipParams {
    /// Mirror left/right
    pub horizontal: bool,
    /// Mirror top/bottom
    pub vertical: bool,
}

impl Default for FlipParams {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: true,
        }
    }
}

/// Parameters for the grain effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrainParams {
    /// Grain strength (0.0-1.0)
    pub scale: f32,
}

impl Default for GrainParams {
    fn default() -> Self {
        Self { scale: 0.75 }
    }
}

/// Parameters for the luminance enhancer effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LuminanceEnhancerParams {
    /// Equalize against a uniform histogram
    pub use_uniform_histogram: bool,
    /// Filter the luminance maps across frames
    pub use_filtered_maps: bool,
}

/// Parameters for the background overlay effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayBackgroundParams {
    /// Buffer composited over the background
    pub foreground_resource: ResourceRef,
}

impl OverlayBackgroundParams {
    /// Overlay from the named buffer
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            foreground_resource: ResourceRef::new(key),
        }
    }
}

/// Parameters for the quantize effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizeParams {
    /// Quantization interval size (1-255)
    pub interval_size: u32,
}

impl Default for QuantizeParams {
    fn default() -> Self {
        Self { interval_size: 150 }
    }
}

/// Parameters for the saturate effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturateParams {
    /// Saturation strength (-1.0-1.0)
    pub scale: f32,
}

impl Default for SaturateParams {
    fn default() -> Self {
        Self { scale: 0.5 }
    }
}

/// Parameters for the simple BCS effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleBcsParams {
    /// Brightness (-1.0-1.0)
    pub brightness: f32,
    /// Contrast (-1.0-1.0)
    pub contrast: f32,
    /// Saturation (-1.0-1.0)
    pub saturation: f32,
}

impl Default for SimpleBcsParams {
    fn default() -> Self {
        Self {
            brightness: 0.9,
            contrast: 0.7,
            saturation: 0.0,
        }
    }
}

/// Parameters for the surface blur effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceBlurParams {
    /// Smoothing window size in pixels
    pub window_size: u32,
    /// Lower edge detection threshold
    pub edge_min_threshold: u32,
    /// Upper edge detection threshold
    pub edge_max_threshold: u32,
}

impl Default for SurfaceBlurParams {
    fn default() -> Self {
        Self {
            window_size: 11,
            edge_min_threshold: 5,
            edge_max_threshold: 90,
        }
    }
}

/// Parameters for the swap effect
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapParams {
    /// Buffer key shown in place of the live stream
    pub resource_key: String,
}

impl SwapParams {
    /// Swap in the named buffer
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            resource_key: key.into(),
        }
    }
}

/// Parameters for the temporal blur effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalBlurParams {
    /// Frame accumulation rate (0.0-1.0)
    pub learning_rate: f32,
}

impl Default for TemporalBlurParams {
    fn default() -> Self {
        Self { learning_rate: 0.9 }
    }
}

/// Parameters for the tint effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintParams {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Default for TintParams {
    fn default() -> Self {
        Self { r: 255, g: 0, b: 255 }
    }
}

/// Parameters for the vignette effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VignetteParams {
    /// Edge color
    pub color: Rgb,
    /// Focus center
    pub focus: Point,
    /// Unshaded region size (0.0-1.0)
    pub size: f32,
    /// Darken the alpha channel only
    pub alpha_only: bool,
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self {
            color: Rgb::new(0, 0, 0),
            focus: Point::new(0.5, 0.5),
            size: 0.7,
            alpha_only: false,
        }
    }
}

/// Parameters for the white/black level effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteblackParams {
    /// White level (0.0-2.0)
    pub white: f32,
    /// Black level (0.0-2.0)
    pub black: f32,
}

impl Default for WhiteblackParams {
    fn default() -> Self {
        Self {
            white: 0.5,
            black: 0.55,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let blur = BlurParams::default();
        assert_eq!(blur.window_size, 15);
        assert_eq!(blur.top_left, Point::new(0.25, 0.25));

        let bcs = AutoBcsParams::default();
        assert_eq!(bcs.target_brightness, 90.0);
        assert_eq!(bcs.brightness, 0.6);
        assert_eq!(bcs.contrast, 0.6);
        assert_eq!(bcs.saturation, 0.1);

        let surface = SurfaceBlurParams::default();
        assert_eq!(surface.window_size, 11);
        assert_eq!(surface.edge_min_threshold, 5);
        assert_eq!(surface.edge_max_threshold, 90);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let params = BlurParams {
            window_size: 33,
            ..Default::default()
        };
        assert_eq!(params.window_size, 33);
        assert_eq!(params.width, 0.5);
        assert_eq!(params.height, 0.5);
    }

    #[test]
    fn test_partial_record_deserialization() {
        // A record carrying a subset of recognized parameters fills the
        // remaining ones with the documented defaults.
        let params: BlurFaceParams = serde_json::from_str("{\"window_size\": 15}").unwrap();
        assert_eq!(params.window_size, 15);
        assert_eq!(params.timeout, 1000);
        assert_eq!(params.scale, 6.0);
    }

    #[test]
    fn test_property_names_on_the_wire() {
        let json = serde_json::to_value(OverlayBackgroundParams::from_key("background")).unwrap();
        assert_eq!(json["foreground_resource"]["key"], "background");

        let json = serde_json::to_value(BlurParams::default()).unwrap();
        assert_eq!(json["window_size"], 15);
        assert_eq!(json["top_left"]["x"], 0.25);
    }
}
