//! Unit tests for color downgrade and palette mapping

use legacy_term::color::{ansi_to_native, PaletteMapper, Role, ANSI_TO_NATIVE};
use legacy_term::{Attribute, Color, ColorTier, Style};

#[test]
fn table_swaps_red_and_blue_bits() {
    assert_eq!(ANSI_TO_NATIVE, [0, 4, 2, 6, 1, 5, 3, 7]);
    for ansi in 0..8u8 {
        let native = ansi_to_native(ansi).unwrap();
        // bit 0 (red in ANSI) and bit 2 (blue in ANSI) trade places
        let swapped = (ansi & 0b010) | ((ansi & 1) << 2) | ((ansi >> 2) & 1);
        assert_eq!(native, swapped, "ansi {}", ansi);
    }
    assert_eq!(ansi_to_native(8), None);
}

#[test]
fn attribute_packs_back_high() {
    let attr = Attribute::pack(4, 2);
    assert_eq!(attr, Attribute(36));
    assert_eq!(attr.foreground(), 4);
    assert_eq!(attr.background(), 2);
}

#[test]
fn unset_colors_take_host_defaults() {
    let mapper = PaletteMapper::from_default(Attribute(0x1E));
    assert_eq!(mapper.resolve(None, Role::Foreground), 0x0E & 7);
    assert_eq!(mapper.resolve(None, Role::Background), 1);
    assert_eq!(mapper.attribute_for(&Style::default()), Attribute(6 + 16));
}

#[test]
fn default_color_takes_host_default() {
    let mapper = PaletteMapper::from_default(Attribute::FALLBACK);
    assert_eq!(mapper.resolve(Some(&Color::Default), Role::Foreground), 7);
    assert_eq!(mapper.resolve(Some(&Color::Default), Role::Background), 0);
}

#[test]
fn bright_colors_fold_onto_base() {
    assert_eq!(Color::BrightRed.downgrade(ColorTier::Legacy), Color::Red);
    assert_eq!(Color::BrightWhite.downgrade(ColorTier::Legacy), Color::White);

    let mapper = PaletteMapper::from_default(Attribute::FALLBACK);
    assert_eq!(mapper.resolve(Some(&Color::BrightBlue), Role::Foreground), 1);
}

#[test]
fn rgb_downgrades_to_nearest_legacy_color() {
    assert_eq!(Color::Rgb(250, 5, 5).downgrade(ColorTier::Legacy), Color::Red);
    assert_eq!(Color::Rgb(0, 0, 0).downgrade(ColorTier::Legacy), Color::Black);
    assert_eq!(
        Color::Rgb(250, 250, 250).downgrade(ColorTier::Legacy),
        Color::White
    );
}

#[test]
fn every_legacy_attribute_is_a_byte() {
    let mapper = PaletteMapper::from_default(Attribute::FALLBACK);
    for fg in 0..16u8 {
        for bg in 0..16u8 {
            let style = Style::new(Color::from_ansi(fg), Color::from_ansi(bg));
            let attr = mapper.attribute_for(&style);
            assert!(attr.0 < 0x80, "fg {} bg {} -> {:#x}", fg, bg, attr.0);
        }
    }
}
