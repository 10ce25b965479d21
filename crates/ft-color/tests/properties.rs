//! Property tests for the color math core.

use ft_color::{contrast_ratio, ensure_contrast, mix, relative_luminance};
use proptest::prelude::{Strategy, proptest};

fn hex_color() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
}

proptest! {
    #[test]
    fn luminance_in_unit_range(color in hex_color()) {
        let lum = relative_luminance(&color).unwrap();
        assert!((0.0..=1.0).contains(&lum), "luminance out of range: {lum}");
    }

    #[test]
    fn contrast_with_self_is_one(color in hex_color()) {
        let ratio = contrast_ratio(&color, &color).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12, "self contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric(a in hex_color(), b in hex_color()) {
        let ab = contrast_ratio(&a, &b).unwrap();
        let ba = contrast_ratio(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
    }

    #[test]
    fn contrast_stays_in_wcag_range(a in hex_color(), b in hex_color()) {
        let ratio = contrast_ratio(&a, &b).unwrap();
        assert!((1.0..=21.0).contains(&ratio), "contrast out of range: {ratio}");
    }

    #[test]
    fn mix_endpoints_are_exact(a in hex_color(), b in hex_color()) {
        assert_eq!(mix(&a, &b, 0.0).unwrap(), a);
        assert_eq!(mix(&a, &b, 1.0).unwrap(), b);
    }

    #[test]
    fn mix_of_identical_colors_is_identity(color in hex_color(), amount in 0.0f64..=1.0) {
        assert_eq!(mix(&color, &color, amount).unwrap(), color);
    }

    #[test]
    fn ensure_contrast_is_total(
        color in hex_color(),
        background in hex_color(),
        fallback in hex_color(),
    ) {
        // result either meets the ratio or is exactly the fallback
        let result = ensure_contrast(&color, &background, &fallback, 4.5).unwrap();
        let ratio = contrast_ratio(&result, &background).unwrap();
        assert!(
            ratio >= 4.5 || result == fallback,
            "neither passing nor fallback: {result} ({ratio})"
        );
    }
}
