//! Color mixing in 8-bit sRGB space.

use ft_palette::Result;

use crate::rgb::Rgb;

/// Blend two hex colors: per-channel linear interpolation in 8-bit sRGB
/// space (not linear light), `round(a + (b - a) * amount)`.
///
/// `amount` is clamped to `[0, 1]`; 0 returns `a`, 1 returns `b`.
///
/// # Errors
///
/// Fails with `InvalidColorFormat` on malformed input.
pub fn mix(a: &str, b: &str, amount: f64) -> Result<String> {
    let amount = amount.clamp(0.0, 1.0);
    let a = Rgb::parse(a)?;
    let b = Rgb::parse(b)?;
    let channel = |from: u8, to: u8| {
        let value = f64::from(from) + (f64::from(to) - f64::from(from)) * amount;
        value.round().clamp(0.0, 255.0) as u8
    };
    let mixed = Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    };
    Ok(mixed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_at_zero_returns_first() {
        assert_eq!(mix("#990f3d", "#fff1e5", 0.0).unwrap(), "#990f3d");
    }

    #[test]
    fn mix_at_one_returns_second() {
        assert_eq!(mix("#990f3d", "#fff1e5", 1.0).unwrap(), "#fff1e5");
    }

    #[test]
    fn mix_identical_colors_is_identity() {
        for amount in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(mix("#0d7680", "#0d7680", amount).unwrap(), "#0d7680");
        }
    }

    #[test]
    fn mix_midpoint_rounds_per_channel() {
        // 0x00 -> 0xff at 0.5 rounds to 0x80 (127.5 rounds away from zero)
        assert_eq!(mix("#000000", "#ffffff", 0.5).unwrap(), "#808080");
    }

    #[test]
    fn mix_clamps_amount() {
        assert_eq!(mix("#990f3d", "#fff1e5", -1.0).unwrap(), "#990f3d");
        assert_eq!(mix("#990f3d", "#fff1e5", 2.0).unwrap(), "#fff1e5");
    }

    #[test]
    fn mix_rejects_malformed_input() {
        assert!(mix("#990f3d", "bad", 0.5).is_err());
    }
}
