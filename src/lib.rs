//! # floem-grayscale
//!
//! Grayscale mode for a slider-based color picker built on
//! [Floem](https://github.com/lapce/floem).
//!
//! [`GrayscaleSliderModel`] maps a [`GrayscaleColor`] onto a white slider and
//! an optional alpha slider, describing each track by its value range and
//! its two endpoint colors. Edits are floored, written back into the color,
//! and reported to a weakly-held [`ChangeDelegate`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_grayscale::{grayscale_picker, GrayscaleColor, GrayscaleSliderModel};
//!
//! let model = GrayscaleSliderModel::new(GrayscaleColor::new(128.0, 100.0), true, false);
//! // Use `grayscale_picker(model)` in your Floem view tree.
//! ```

mod appearance;
#[cfg(feature = "alpha")]
mod checkerboard;
mod color;
mod constants;
mod delegate;
mod gradient_slider;
mod grayscale_editor;
mod inputs;
mod math;
mod model;
mod slider;
mod swatch;

pub use appearance::{Appearance, AppearanceProvider, FixedAppearance};
pub use color::{GrayscaleColor, PreviewColor};
pub use delegate::{ChangeDelegate, SnapshotDelegate};
pub use model::GrayscaleSliderModel;
pub use slider::{ColorSliderModel, ModelSnapshot, SliderDescriptor, SliderIndexError, SliderKind};

use std::sync::Once;

use floem::event::{Event, EventListener};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::text::FONT_SYSTEM;
use floem::views::dyn_container;
use floem::window::Theme;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the grayscale picker view.
///
/// The view takes ownership of `model`. Slider drags edit the model's color
/// and the view re-renders from the snapshot the model publishes after each
/// edit. A delegate set on `model` beforehand keeps being notified.
pub fn grayscale_picker(model: GrayscaleSliderModel) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    grayscale_editor::grayscale_editor(model)
}

/// Creates a grayscale picker that follows the window's light/dark theme.
///
/// `build` is called with the current appearance and again whenever the
/// window reports a theme change; the returned model's appearance is pinned
/// to that value. Hosts that want edits to survive a theme switch build the
/// model from the latest color their delegate has seen.
pub fn themed_grayscale_picker(
    build: impl Fn(Appearance) -> GrayscaleSliderModel + 'static,
) -> impl IntoView {
    let theme = RwSignal::new(None::<Theme>);
    container(dyn_container(
        move || theme.get(),
        move |theme| {
            let appearance = theme.map(Appearance::from).unwrap_or_default();
            log::debug!("building grayscale picker for {appearance:?}");
            grayscale_picker(build(appearance).with_appearance_provider(FixedAppearance(appearance)))
        },
    ))
    .style(|s| s.size_full())
    .on_event_cont(EventListener::ThemeChanged, move |e| {
        if let Event::ThemeChanged(t) = e {
            if theme.get_untracked() != Some(*t) {
                theme.set(Some(*t));
            }
        }
    })
}
