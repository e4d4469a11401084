//! Preview swatch. Translucent colors are shown over a checkerboard so the
//! alpha channel stays visible.

use floem::kurbo::Rect;
use floem::peniko::Color;

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::appearance::Appearance;
#[cfg(feature = "alpha")]
use crate::checkerboard;
use crate::constants;
use crate::math::Rgba;

pub struct Swatch {
    id: ViewId,
    color: Rgba,
    appearance: Appearance,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a swatch painting the color returned by `color_fn` (tracked).
pub fn swatch(color_fn: impl Fn() -> Rgba + 'static, appearance: Appearance) -> Swatch {
    let id = ViewId::new();
    let initial = color_fn();

    create_effect(move |_| {
        id.update_state(color_fn());
    });

    Swatch {
        id,
        color: initial,
        appearance,
        size: Default::default(),
    }
    .style(|s| {
        s.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
    })
}

impl View for Swatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(color) = state.downcast::<Rgba>() {
            self.color = *color;
            self.id.request_paint();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);
        let (r, g, b, a) = self.color;

        cx.save();
        cx.clip(&rrect);
        #[cfg(feature = "alpha")]
        if checkerboard::needs_backdrop(a) {
            checkerboard::paint_checkerboard(cx, rect, self.appearance);
        }
        cx.fill(&rect, Color::rgba(r, g, b, a), 0.0);
        cx.restore();

        let border = match self.appearance {
            Appearance::Light => Color::rgb8(180, 180, 180),
            Appearance::Dark => Color::rgb8(90, 90, 90),
        };
        cx.stroke(&rrect, border, &floem::kurbo::Stroke::new(1.0));
    }
}
