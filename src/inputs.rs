//! Summary row widgets: key/value text with a copy-to-clipboard button.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// A key label over a value label, followed by a copy button for the value.
pub(crate) fn summary_row(
    key: impl Fn() -> String + 'static,
    value: impl Fn() -> String + Clone + 'static,
) -> impl IntoView {
    let copied = value.clone();
    h_stack((
        v_stack((
            label(key).style(|s| {
                s.font_size(constants::LABEL_FONT)
                    .color(Color::rgb8(120, 120, 120))
            }),
            label(value).style(|s| {
                s.font_size(constants::VALUE_FONT)
                    .font_family("monospace".to_string())
            }),
        ))
        .style(|s| s.gap(1.0).flex_grow(1.0)),
        copy_button(copied),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    if let Err(err) = result {
        log::warn!("failed to copy {text:?} to clipboard: {err}");
    }
}
