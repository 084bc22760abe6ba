// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end tests of the public API: palette lookup through a [`TangoConverter`].

use pretty_assertions::assert_eq;
use r3bl_tango::{ColorModel,
                 ColorRepr,
                 RgbValue,
                 TangoConverter,
                 TangoError,
                 TangoHue,
                 tango_palette};
use strum::IntoEnumIterator;
use test_case::test_case;

fn converter(model: ColorModel) -> TangoConverter { TangoConverter::from(model) }

fn all_names() -> impl Iterator<Item = &'static str> {
    let palette = tango_palette();
    palette
        .canonical_entries()
        .iter()
        .chain(palette.aliases().iter())
        .map(|(name, _)| *name)
}

#[test]
fn test_hex_model_is_identity_for_every_name() {
    let it = converter(ColorModel::Hex);
    for name in all_names() {
        let expected = tango_palette().lookup(name).unwrap().hex;
        assert_eq!(it.lookup(name).unwrap().as_hex(), Some(expected), "{name}");
    }
}

#[test]
fn test_rgb_int_is_truncated_rgb_normalized() {
    let rgb_int = converter(ColorModel::RgbInt);
    let rgb_normalized = converter(ColorModel::RgbNormalized);
    for name in all_names() {
        let (r, g, b) = rgb_int.lookup(name).unwrap().as_rgb_int().unwrap();
        let (nr, ng, nb) = rgb_normalized
            .lookup(name)
            .unwrap()
            .as_rgb_normalized()
            .unwrap();
        let floor = |it: f64| (it * 255.0).floor();
        assert_eq!(
            (f64::from(r), f64::from(g), f64::from(b)),
            (floor(nr), floor(ng), floor(nb)),
            "{name}"
        );
    }
}

#[test]
fn test_rgb_int_matches_hex_digits() {
    let it = converter(ColorModel::RgbInt);
    for (name, color) in tango_palette().canonical_entries() {
        let hex = &color.hex[1..];
        let component = |index: usize| {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).unwrap()
        };
        assert_eq!(
            it.lookup(name).unwrap().as_rgb_int(),
            Some((component(0), component(1), component(2))),
            "{name}"
        );
    }
}

#[test]
fn test_hsv_ranges() {
    let normalized = converter(ColorModel::HsvNormalized);
    let scaled = converter(ColorModel::HsvScaled);
    for name in all_names() {
        let (h, s, v) = normalized.lookup(name).unwrap().as_hsv_normalized().unwrap();
        assert!((0.0..1.0).contains(&h), "{name} hue {h}");
        assert!((0.0..=1.0).contains(&s), "{name} saturation {s}");
        assert!((0.0..=1.0).contains(&v), "{name} value {v}");

        let (h, s, v) = scaled.lookup(name).unwrap().as_hsv_scaled().unwrap();
        assert!(h <= 360, "{name} hue {h}");
        assert!(s <= 100, "{name} saturation {s}");
        assert!(v <= 100, "{name} value {v}");
    }
}

/// Every channel value in steps of 15, plus a few values just off the extremes.
fn hex_grid() -> Vec<String> {
    let steps: Vec<u8> = (0..=255).step_by(15).chain([1, 128, 254]).collect();
    let mut return_it = vec![];
    for &red in &steps {
        for &green in &steps {
            for &blue in &steps {
                return_it.push(RgbValue::from_u8(red, green, blue).to_hex_string());
            }
        }
    }
    return_it
}

#[test]
fn test_properties_hold_across_hex_grid() {
    let hex = converter(ColorModel::Hex);
    let rgb_int = converter(ColorModel::RgbInt);
    let rgb_normalized = converter(ColorModel::RgbNormalized);
    let hsv_scaled = converter(ColorModel::HsvScaled);
    let floor = |it: f64| (it * 255.0).floor();

    for input in hex_grid() {
        let upper = input.to_uppercase();
        assert_eq!(hex.resolve(&input).unwrap().as_hex(), Some(input.as_str()));
        assert_eq!(hex.resolve(&upper).unwrap().as_hex(), Some(upper.as_str()));

        let (r, g, b) = rgb_int.resolve(&input).unwrap().as_rgb_int().unwrap();
        let (nr, ng, nb) = rgb_normalized
            .resolve(&input)
            .unwrap()
            .as_rgb_normalized()
            .unwrap();
        assert_eq!(
            (f64::from(r), f64::from(g), f64::from(b)),
            (floor(nr), floor(ng), floor(nb)),
            "{input}"
        );

        let (h, s, v) = hsv_scaled.resolve(&input).unwrap().as_hsv_scaled().unwrap();
        assert!(h <= 360 && s <= 100 && v <= 100, "{input} -> {h},{s},{v}");
    }
}

#[test_case("#ff0001", (360, 100, 100); "hue just under a full turn rounds to 360")]
#[test_case("#ff0000", (0, 100, 100); "pure red is hue 0")]
fn test_hsv_scaled_hue_wrap(input: &str, expected: (u16, u8, u8)) {
    let it = converter(ColorModel::HsvScaled);
    assert_eq!(it.resolve(input).unwrap().as_hsv_scaled(), Some(expected));
}

#[test]
fn test_grays_have_low_saturation() {
    let it = converter(ColorModel::HsvScaled);
    assert_eq!(it.aluminium1().as_hsv_scaled(), Some((60, 1, 93)));
    assert_eq!(it.aluminium6().as_hsv_scaled(), Some((195, 15, 21)));
    assert_eq!(it.resolve("#000000").unwrap().as_hsv_scaled(), Some((0, 0, 0)));
    assert_eq!(it.resolve("#ffffff").unwrap().as_hsv_scaled(), Some((0, 0, 100)));
}

#[test_case("f57900"; "missing hash")]
#[test_case("#f5790"; "too short")]
#[test_case("#xyz123"; "not hex")]
#[test_case("#f57900 "; "trailing space")]
#[test_case(""; "empty")]
fn test_malformed_hex_fails_under_every_model(input: &str) {
    for model in ColorModel::iter() {
        assert_eq!(
            converter(model).resolve(input),
            Err(TangoError::invalid_color_format(input)),
            "{model}"
        );
    }
}

#[test]
fn test_unknown_model_and_name() {
    assert!(matches!(
        TangoConverter::new("cmyk"),
        Err(TangoError::InvalidModel { model }) if model == "cmyk"
    ));
    for model in ColorModel::iter() {
        assert!(matches!(
            converter(model).lookup("Teal"),
            Err(TangoError::UnknownName { name }) if name == "Teal"
        ));
    }
}

#[test]
fn test_orange2_scenario() {
    let new = |id: &str| TangoConverter::new(id).unwrap();

    assert_eq!(new("hex").orange2().as_hex(), Some("#f57900"));
    assert_eq!(new("rgb-int").orange2().as_rgb_int(), Some((245, 121, 0)));
    assert_eq!(new("hsv-scaled").orange2().as_hsv_scaled(), Some((30, 100, 96)));

    let (r, g, b) = new("rgb-normalized").orange2().as_rgb_normalized().unwrap();
    assert!((r - 0.9608).abs() < 1e-4);
    assert!((g - 0.4745).abs() < 1e-4);
    assert!(b.abs() < 1e-4);

    assert_eq!(new("rgb-int").orange2().to_string(), "245,121,0");
}

#[test]
fn test_light_aliases_equal_shade_one_under_every_model() {
    for model in ColorModel::iter() {
        let it = converter(model);
        assert_eq!(it.light_butter(), it.butter1(), "{model}");
        assert_eq!(it.light_orange(), it.orange1(), "{model}");
        assert_eq!(it.light_chocolate(), it.chocolate1(), "{model}");
        assert_eq!(it.light_chameleon(), it.chameleon1(), "{model}");
        assert_eq!(it.light_sky_blue(), it.skyblue1(), "{model}");
        assert_eq!(it.light_plum(), it.plum1(), "{model}");
        assert_eq!(it.light_scarlet_red(), it.scarletred1(), "{model}");

        for hue in TangoHue::iter().filter(|it| it.has_aliases()) {
            let alias = format!("Light{hue:?}");
            assert_eq!(
                it.lookup(&alias).unwrap(),
                it.lookup_shade(hue, 1).unwrap(),
                "{model} {alias}"
            );
        }
    }
}

#[test]
fn test_plain_and_dark_aliases() {
    let it = converter(ColorModel::Hex);
    assert_eq!(it.butter(), it.butter2());
    assert_eq!(it.dark_butter(), it.butter3());
    assert_eq!(it.scarlet_red(), it.scarletred2());
    assert_eq!(it.dark_sky_blue().as_hex(), Some("#204a87"));
}

#[test]
fn test_repeated_lookups_are_bit_identical() {
    for model in ColorModel::iter() {
        let it = converter(model);
        for name in all_names() {
            let first = it.lookup(name).unwrap();
            let second = it.lookup(name).unwrap();
            assert_eq!(first, second);
            if let (Some(a), Some(b)) =
                (first.as_rgb_normalized(), second.as_rgb_normalized())
            {
                assert_eq!(a.0.to_bits(), b.0.to_bits());
                assert_eq!(a.1.to_bits(), b.1.to_bits());
                assert_eq!(a.2.to_bits(), b.2.to_bits());
            }
        }
    }
}

#[test]
fn test_shared_across_threads() {
    let it = converter(ColorModel::HsvScaled);
    let expected: Vec<(&str, ColorRepr)> = it.convert_all().collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| it.convert_all().collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test_case("#080303", (0, 63, 3); "saturation 62.5 rounds up")]
#[test_case("#080707", (0, 13, 3); "saturation 12.5 rounds up")]
#[test_case("#f57900", (30, 100, 96); "orange2")]
fn test_hsv_scaled_rounding_boundary(hex: &str, expected: (u16, u8, u8)) {
    let it = converter(ColorModel::HsvScaled);
    assert_eq!(it.resolve(hex).unwrap().as_hsv_scaled(), Some(expected));
}

#[test]
fn test_error_converts_into_miette_report() {
    fn run() -> miette::Result<ColorRepr> {
        let it = TangoConverter::new("rgb-int")?;
        Ok(it.lookup("Teal")?)
    }
    let report = run().unwrap_err();
    assert!(report.to_string().contains("Teal"));
}
