//! WCAG-style color math for theme generation.
//!
//! Every operation is a deterministic, side-effect-free computation over
//! immutable hex-string inputs, safe to call from multiple threads. Malformed
//! input fails fast with `InvalidColorFormat`; in practice that path is only
//! reachable through a programming defect, since callers feed palette-sourced
//! values.

pub mod luminance;
pub mod mix;
pub mod repair;
pub mod rgb;

pub use luminance::{contrast_ratio, linearize, luminance_ratio, relative_luminance};
pub use mix::mix;
pub use repair::{
    DARK_BACKGROUND_LUMINANCE, SWEEP_STEP, SWEEP_STEPS, ensure_colorblind_separation,
    ensure_contrast,
};
pub use rgb::Rgb;
