//! Slider math — gradient interpolation and pointer mapping.
//! Colors are normalized f64 RGBA in 0.0–1.0.

pub(crate) type Rgba = (f64, f64, f64, f64);

/// Linear interpolation between two colors, `t` clamped to 0.0–1.0.
pub(crate) fn lerp_rgba(from: Rgba, to: Rgba, t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    (
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
        from.2 + (to.2 - from.2) * t,
        from.3 + (to.3 - from.3) * t,
    )
}

/// Map a pointer x coordinate to a slider value in `0..=max`, snapped to `step`.
///
/// `inset` is the thumb radius; the thumb center never leaves the track.
pub(crate) fn value_from_position(x: f64, width: f64, inset: f64, max: f64, step: f64) -> Option<f64> {
    let usable = width - 2.0 * inset;
    if usable <= 0.0 {
        return None;
    }
    let raw = ((x - inset) / usable).clamp(0.0, 1.0) * max;
    Some(snap(raw, step).min(max))
}

/// Inverse of [`value_from_position`]: thumb center for `value`.
pub(crate) fn position_from_value(value: f64, width: f64, inset: f64, max: f64) -> f64 {
    let fraction = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    inset + fraction * (width - 2.0 * inset)
}

fn snap(value: f64, step: f64) -> f64 {
    if step > 0.0 {
        (value / step).round() * step
    } else {
        value
    }
}

/// Rasterize a horizontal track gradient to an RGBA8 buffer.
///
/// Alpha is straight, not premultiplied.
pub(crate) fn rasterize_track(width: u32, height: u32, from: Rgba, to: Rgba) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b, a) = lerp_rgba(from, to, t);
        let texel = [
            (r * 255.0 + 0.5) as u8,
            (g * 255.0 + 0.5) as u8,
            (b * 255.0 + 0.5) as u8,
            (a * 255.0 + 0.5) as u8,
        ];
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&texel);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba = (0.0, 0.0, 0.0, 1.0);
    const WHITE: Rgba = (1.0, 1.0, 1.0, 1.0);

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp_rgba(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(lerp_rgba(BLACK, WHITE, 1.0), WHITE);
        assert_eq!(lerp_rgba(BLACK, WHITE, 0.5), (0.5, 0.5, 0.5, 1.0));
        assert_eq!(lerp_rgba(BLACK, WHITE, 3.0), WHITE);
    }

    #[test]
    fn pointer_maps_to_stepped_value() {
        // 100px track, 5px inset → 90px usable.
        assert_eq!(value_from_position(5.0, 100.0, 5.0, 255.0, 1.0), Some(0.0));
        assert_eq!(value_from_position(95.0, 100.0, 5.0, 255.0, 1.0), Some(255.0));
        assert_eq!(value_from_position(50.0, 100.0, 5.0, 100.0, 1.0), Some(50.0));
        assert_eq!(value_from_position(-20.0, 100.0, 5.0, 100.0, 1.0), Some(0.0));
        assert_eq!(value_from_position(500.0, 100.0, 5.0, 100.0, 1.0), Some(100.0));
    }

    #[test]
    fn pointer_on_collapsed_track_is_ignored() {
        assert_eq!(value_from_position(3.0, 8.0, 5.0, 100.0, 1.0), None);
    }

    #[test]
    fn position_round_trips_through_value() {
        let x = position_from_value(50.0, 100.0, 5.0, 100.0);
        assert_eq!(x, 50.0);
        assert_eq!(position_from_value(0.0, 100.0, 5.0, 0.0), 5.0);
    }

    #[test]
    fn raster_has_expected_end_texels() {
        let buf = rasterize_track(3, 2, BLACK, WHITE);
        assert_eq!(buf.len(), 3 * 2 * 4);
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
        assert_eq!(&buf[8..12], &[255, 255, 255, 255]);
        // Second row repeats the first.
        assert_eq!(&buf[12..24], &buf[0..12]);
    }
}
