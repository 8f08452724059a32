use palette::Srgb;

use crate::channels::ChannelBuffer;
use crate::error::{Error, Result};

/// Gamma applied to every channel value derived from a color. Values
/// below 1.0 brighten midtones to compensate for the dimming curve of
/// typical fixtures.
pub const GAMMA: f32 = 0.6;

/// Parse a "#rrggbb" or "rrggbb" string into a color.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexColor(hex.to_string()));
    }

    let parse = |group: &str| {
        u8::from_str_radix(group, 16).map_err(|_| Error::InvalidHexColor(hex.to_string()))
    };

    Ok(Srgb::new(
        parse(&digits[0..2])?,
        parse(&digits[2..4])?,
        parse(&digits[4..6])?,
    ))
}

/// Scale a color so its brightest component hits full output while the
/// channel ratios (the hue) stay put. Pure black has no brightest
/// component and passes through unchanged.
pub fn normalize_brightness(color: Srgb<u8>) -> Srgb<u8> {
    let max = color.red.max(color.green).max(color.blue);
    if max == 0 {
        return color;
    }

    let scale = 255.0 / max as f32;
    Srgb::new(
        (color.red as f32 * scale).round() as u8,
        (color.green as f32 * scale).round() as u8,
        (color.blue as f32 * scale).round() as u8,
    )
}

/// Perceptual brightness curve: 0 and 255 map to themselves, values in
/// between move along `(v/255)^gamma`.
pub fn gamma_correct(value: u8, gamma: f32) -> u8 {
    ((value as f32 / 255.0).powf(gamma) * 255.0).round() as u8
}

/// Write one RGB fixture starting at `start_channel`, gamma corrected.
pub fn write_rgb(buffer: &mut ChannelBuffer, start_channel: u16, color: Srgb<u8>) -> Result<()> {
    let components = [color.red, color.green, color.blue];
    for (offset, component) in components.iter().enumerate() {
        let channel = start_channel + offset as u16;
        buffer.set(channel, gamma_correct(*component, GAMMA))?;
    }

    Ok(())
}

/// The full pipeline for a hex string: parse, normalize to full
/// brightness, gamma correct, write three consecutive channels.
pub fn write_hex(buffer: &mut ChannelBuffer, start_channel: u16, hex: &str) -> Result<()> {
    let color = normalize_brightness(parse_hex(hex)?);
    write_rgb(buffer, start_channel, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let red = parse_hex("#ff0000").unwrap();
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));

        let green = parse_hex("00ff00").unwrap();
        assert_eq!((green.red, green.green, green.blue), (0, 255, 0));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_hex("ff00").is_err());
        assert!(parse_hex("#ff00001").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(parse_hex("zzzzzz").is_err());
        assert!(parse_hex("#ggaabb").is_err());
        assert!(parse_hex("##ff00f").is_err());
    }

    #[test]
    fn normalize_keeps_black_black() {
        let black = normalize_brightness(Srgb::new(0, 0, 0));
        assert_eq!((black.red, black.green, black.blue), (0, 0, 0));
    }

    #[test]
    fn normalize_raises_max_to_full() {
        let color = normalize_brightness(Srgb::new(128, 64, 32));
        assert_eq!(color.red, 255);
        assert!((color.green as i32 - 128).abs() <= 1);
        assert!((color.blue as i32 - 64).abs() <= 1);
    }

    #[test]
    fn gamma_is_identity_at_bounds() {
        for gamma in [0.3, 0.6, 1.0, 2.2] {
            assert_eq!(gamma_correct(0, gamma), 0);
            assert_eq!(gamma_correct(255, gamma), 255);
        }
    }

    #[test]
    fn gamma_brightens_midtones() {
        assert!(gamma_correct(128, 0.6) > 128);
    }

    #[test]
    fn write_rgb_targets_exactly_three_channels() {
        let mut buffer = ChannelBuffer::new();
        write_rgb(&mut buffer, 17, Srgb::new(255, 0, 0)).unwrap();

        // gamma_correct(255) is 255, gamma_correct(0) is 0, so channels
        // 17..=19 hold (255, 0, 0) and the rest of the universe is
        // untouched.
        for (slot, value) in buffer.values().iter().enumerate() {
            let expected = if slot == 16 { 255 } else { 0 };
            assert_eq!(*value, expected);
        }
    }

    #[test]
    fn write_rgb_applies_the_fixed_gamma() {
        let mut buffer = ChannelBuffer::new();
        write_rgb(&mut buffer, 1, Srgb::new(128, 128, 128)).unwrap();

        let expected = gamma_correct(128, GAMMA);
        assert_eq!(buffer.values()[0], expected);
        assert_eq!(buffer.values()[1], expected);
        assert_eq!(buffer.values()[2], expected);
    }

    #[test]
    fn write_hex_normalizes_before_writing() {
        // Half-brightness red normalizes to full red, which the gamma
        // curve maps to itself.
        let mut buffer = ChannelBuffer::new();
        write_hex(&mut buffer, 1, "#800000").unwrap();

        assert_eq!(buffer.values()[0], 255);
        assert_eq!(buffer.values()[1], 0);
        assert_eq!(buffer.values()[2], 0);
    }

    #[test]
    fn write_rgb_rejects_channels_past_the_universe() {
        let mut buffer = ChannelBuffer::new();
        assert!(write_rgb(&mut buffer, 511, Srgb::new(255, 255, 255)).is_err());
    }
}
