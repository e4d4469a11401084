//! Horizontal slider whose track is a gradient between two bound colors.
//!
//! The track is rasterized to an image (vger's linear gradients mishandle
//! coordinates) and cached until the endpoints or size change. The
//! descriptor's rainbow flag is ignored; every track interpolates its two
//! bound colors.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::appearance::Appearance;
use crate::color::PreviewColor;
use crate::constants;
use crate::math::{self, Rgba};
use crate::slider::SliderDescriptor;

/// Track state pushed from the reactive side into the view.
struct TrackState {
    value: f64,
    maximum: f64,
    step: f64,
    from: Rgba,
    to: Rgba,
}

impl TrackState {
    fn from_descriptor<C: PreviewColor>(d: &SliderDescriptor<C>) -> Self {
        Self {
            value: d.value,
            maximum: d.maximum_value,
            step: d.step_interval,
            from: d.minimum_color.to_rgba(),
            to: d.maximum_color.to_rgba(),
        }
    }
}

pub struct GradientSlider {
    id: ViewId,
    held: bool,
    track: TrackState,
    appearance: Appearance,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    /// Cached track image.
    track_img: Option<peniko::Image>,
    track_hash: Vec<u8>,
    cached_key: Option<(u32, u32, [u8; 8])>,
}

/// Creates a gradient slider.
///
/// - `descriptor_fn`: tracked; returns the slider's current descriptor.
/// - `on_change`: receives the new value in `0..=maximum_value`, snapped to
///   the descriptor's step.
pub fn gradient_slider<C: PreviewColor + 'static>(
    descriptor_fn: impl Fn() -> SliderDescriptor<C> + 'static,
    appearance: Appearance,
    on_change: impl Fn(f64) + 'static,
) -> GradientSlider {
    let id = ViewId::new();
    let initial = TrackState::from_descriptor(&descriptor_fn());

    create_effect(move |_| {
        let descriptor = descriptor_fn();
        id.update_state(TrackState::from_descriptor(&descriptor));
    });

    GradientSlider {
        id,
        held: false,
        track: initial,
        appearance,
        size: Default::default(),
        on_change: Box::new(on_change),
        track_img: None,
        track_hash: Vec::new(),
        cached_key: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

fn quantize(c: Rgba) -> [u8; 4] {
    [
        (c.0 * 255.0 + 0.5) as u8,
        (c.1 * 255.0 + 0.5) as u8,
        (c.2 * 255.0 + 0.5) as u8,
        (c.3 * 255.0 + 0.5) as u8,
    ]
}

impl GradientSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let picked = math::value_from_position(
            x,
            self.size.width as f64,
            constants::THUMB_RADIUS,
            self.track.maximum,
            self.track.step,
        );
        if let Some(value) = picked {
            self.track.value = value;
            (self.on_change)(value);
        }
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let mut colors = [0u8; 8];
        colors[..4].copy_from_slice(&quantize(self.track.from));
        colors[4..].copy_from_slice(&quantize(self.track.to));
        let key = (pw, ph, colors);
        if self.cached_key == Some(key) {
            return;
        }

        let pixels = math::rasterize_track(pw, ph, self.track.from, self.track.to);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.track_hash = blob.id().to_le_bytes().to_vec();
        self.track_img = Some(img);
        self.cached_key = Some(key);
    }
}

impl View for GradientSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(track) = state.downcast::<TrackState>() {
            self.track = *track;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
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
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_track_image(scale);
        if let Some(ref img) = self.track_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.track_hash,
                },
                rect,
            );
        }

        cx.restore();

        let outline = match self.appearance {
            Appearance::Light => Color::rgba8(0, 0, 0, 40),
            Appearance::Dark => Color::rgba8(255, 255, 255, 40),
        };
        cx.stroke(&rrect, outline, &floem::kurbo::Stroke::new(1.0));

        // Thumb ring; left = 0, right = maximum
        let radius = constants::THUMB_RADIUS;
        let thumb_x = math::position_from_value(self.track.value, w, radius, self.track.maximum);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
