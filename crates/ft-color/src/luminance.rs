//! Relative luminance and contrast ratios per WCAG 2.1.

use ft_palette::Result;

use crate::rgb::Rgb;

/// Convert a hex color to linear-light RGB components in `[0, 1]^3`.
///
/// Applies the standard sRGB transfer function per channel:
/// `c / 12.92` if `c <= 0.04045`, else `((c + 0.055) / 1.055)^2.4`.
///
/// # Errors
///
/// Fails with `InvalidColorFormat` on malformed input.
pub fn linearize(color: &str) -> Result<(f64, f64, f64)> {
    let rgb = Rgb::parse(color)?;
    Ok((
        to_linear(rgb.r),
        to_linear(rgb.g),
        to_linear(rgb.b),
    ))
}

fn to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, range `[0, 1]`.
///
/// Weighted sum `0.2126*r + 0.7152*g + 0.0722*b` over linearized channels.
///
/// # Errors
///
/// Fails with `InvalidColorFormat` on malformed input.
pub fn relative_luminance(color: &str) -> Result<f64> {
    let (r, g, b) = linearize(color)?;
    Ok(0.2126 * r + 0.7152 * g + 0.0722 * b)
}

/// WCAG contrast ratio between two colors, range `[1, 21]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric in its arguments.
///
/// # Errors
///
/// Fails with `InvalidColorFormat` on malformed input.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    let lum_a = relative_luminance(a)?;
    let lum_b = relative_luminance(b)?;
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Plain luminance ratio `L_lighter / L_darker`, without the 0.05 offset.
///
/// Returns `+inf` when the darker luminance is exactly zero.
///
/// # Errors
///
/// Fails with `InvalidColorFormat` on malformed input.
pub fn luminance_ratio(a: &str, b: &str) -> Result<f64> {
    let lum_a = relative_luminance(a)?;
    let lum_b = relative_luminance(b)?;
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    if darker == 0.0 {
        Ok(f64::INFINITY)
    } else {
        Ok(lighter / darker)
    }
}
