//! Checkerboard backdrop painted under translucent preview colors.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::appearance::Appearance;
use crate::constants;

/// Cell colors (base, alternate) for the host appearance.
fn cell_colors(appearance: Appearance) -> (Color, Color) {
    match appearance {
        Appearance::Light => (Color::rgb8(255, 255, 255), Color::rgb8(204, 204, 204)),
        Appearance::Dark => (Color::rgb8(51, 51, 51), Color::rgb8(26, 26, 26)),
    }
}

/// Whether a color with normalized alpha `a` shows through to its backdrop.
pub(crate) fn needs_backdrop(a: f64) -> bool {
    a < 1.0
}

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect, appearance: Appearance) {
    let cell = constants::CHECKER_CELL;
    let (base, alternate) = cell_colors(appearance);
    cx.fill(&rect, base, 0.0);
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for (row, col) in (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))) {
        if (row + col) % 2 == 0 {
            continue;
        }
        let x = rect.x0 + col as f64 * cell;
        let y = rect.y0 + row as f64 * cell;
        let cell_rect = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
        cx.fill(&cell_rect, alternate, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GrayscaleColor, PreviewColor};
    use crate::model::GrayscaleSliderModel;
    use crate::slider::ColorSliderModel;

    #[test]
    fn translucent_preview_gets_backdrop() {
        let model = GrayscaleSliderModel::new(GrayscaleColor::new(10.0, 3.0), true, false);
        let (_, _, _, a) = model.preview_color_model().to_rgba();
        assert!(needs_backdrop(a));
    }

    #[test]
    fn opaque_preview_skips_backdrop() {
        let (_, _, _, a) = GrayscaleColor::opaque(10.0).to_rgba();
        assert!(!needs_backdrop(a));
    }

    #[test]
    fn cell_colors_follow_appearance() {
        let (light, _) = cell_colors(Appearance::Light);
        let (dark, _) = cell_colors(Appearance::Dark);
        assert_ne!(light, dark);
    }
}
