//! Smartcrop Core - content-aware crop suggestions
//!
//! Given an RGB image and a target size, this crate finds the rectangle of
//! that aspect ratio that best frames the interesting content: edges, skin
//! tones and saturated color, weighted toward the center and the
//! rule-of-thirds lines. Optional face rectangles constrain the result to
//! contain every face whenever that is possible.
//!
//! ```ignore
//! use smartcrop_core::{find_best_crop, PixelBuffer};
//!
//! let image = PixelBuffer::from_dynamic_image(&image::open("photo.jpg")?);
//! let rect = find_best_crop(&image, 300, 200)?;
//! ```

pub mod analyzer;
pub mod buffer;
pub mod crop;
pub mod error;
pub mod features;
pub mod geometry;
pub mod luminance;
pub mod observer;
pub mod resize;
pub mod settings;

pub use analyzer::{
    find_best_crop, find_best_crop_with_faces, AnalysisPlan, Analyzer, CropAnalysis,
};
pub use buffer::PixelBuffer;
pub use crop::{Crop, Score, Selection};
pub use error::CropError;
pub use features::{extract_features, FeatureGrid, FeatureMap};
pub use geometry::Rect;
pub use observer::{AnalysisObserver, DebugImages, NoopObserver};
pub use resize::{FilterType, ImageResizer, Resizer};
pub use settings::CropSettings;
