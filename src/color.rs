//! GrayscaleColor type — the color value edited by the grayscale sliders.
//!
//! Stores white on a 0–255 scale and alpha as a 0–100 percentage, matching
//! the slider ranges directly so edits need no rescaling.

/// A color that can be shown in a swatch or as a gradient endpoint.
pub trait PreviewColor {
    /// Normalized (r, g, b, a), all 0.0–1.0.
    fn to_rgba(&self) -> (f64, f64, f64, f64);

    /// Uppercase `#RRGGBB` or `#RRGGBBAA` encoding.
    fn hex_color(&self) -> String;
}

/// Grayscale color with `white` in 0.0–255.0 and `alpha` in 0.0–100.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayscaleColor {
    pub white: f64,
    pub alpha: f64,
}

impl Default for GrayscaleColor {
    fn default() -> Self {
        Self {
            white: 255.0,
            alpha: 100.0,
        }
    }
}

impl GrayscaleColor {
    pub fn new(white: f64, alpha: f64) -> Self {
        Self { white, alpha }
    }

    /// Fully opaque gray.
    pub fn opaque(white: f64) -> Self {
        Self { white, alpha: 100.0 }
    }

    /// Gray level as a byte, rounded and clamped.
    pub fn white_byte(&self) -> u8 {
        self.white.round().clamp(0.0, 255.0) as u8
    }

    /// Alpha as a byte (0–255), rounded and clamped.
    pub fn alpha_byte(&self) -> u8 {
        (self.alpha / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8
    }
}

impl PreviewColor for GrayscaleColor {
    fn to_rgba(&self) -> (f64, f64, f64, f64) {
        let w = (self.white / 255.0).clamp(0.0, 1.0);
        (w, w, w, (self.alpha / 100.0).clamp(0.0, 1.0))
    }

    /// Returns 6 hex digits when fully opaque, 8 otherwise.
    fn hex_color(&self) -> String {
        let w = self.white_byte();
        if self.alpha >= 100.0 {
            format!("#{:02X}{:02X}{:02X}", w, w, w)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", w, w, w, self.alpha_byte())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_opaque_uses_six_digits() {
        assert_eq!(GrayscaleColor::opaque(255.0).hex_color(), "#FFFFFF");
        assert_eq!(GrayscaleColor::opaque(0.0).hex_color(), "#000000");
        assert_eq!(GrayscaleColor::opaque(128.0).hex_color(), "#808080");
    }

    #[test]
    fn hex_translucent_appends_alpha() {
        let c = GrayscaleColor::new(10.0, 50.0);
        assert_eq!(c.hex_color(), "#0A0A0A80");
        assert_eq!(GrayscaleColor::new(255.0, 0.0).hex_color(), "#FFFFFF00");
    }

    #[test]
    fn rgba_is_normalized() {
        let (r, g, b, a) = GrayscaleColor::new(51.0, 20.0).to_rgba();
        assert!((r - 0.2).abs() < 1e-9);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((a - 0.2).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_channels_clamp_for_rendering() {
        let c = GrayscaleColor::new(-4.0, 140.0);
        assert_eq!(c.white_byte(), 0);
        assert_eq!(c.alpha_byte(), 255);
        assert_eq!(c.to_rgba(), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(GrayscaleColor::default(), GrayscaleColor::new(255.0, 100.0));
    }
}
