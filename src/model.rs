//! Grayscale slider view-model.
//!
//! Maps a [`GrayscaleColor`] onto a white slider and, when alpha editing is
//! enabled, an alpha slider. Edits are floored and written back into the
//! color, then the change delegate is notified.

use std::cell::OnceCell;
use std::rc::Weak;

use crate::appearance::{Appearance, AppearanceProvider, FixedAppearance};
use crate::color::{GrayscaleColor, PreviewColor};
use crate::delegate::ChangeDelegate;
use crate::slider::{ColorSliderModel, SliderKind};

const WHITE_MAX: f64 = 255.0;
const ALPHA_MAX: f64 = 100.0;

pub struct GrayscaleSliderModel {
    color: GrayscaleColor,
    is_alpha_enabled: bool,
    has_text_or_message: bool,
    appearance_provider: Box<dyn AppearanceProvider>,
    /// Resolved from `appearance_provider` on first use, never refreshed.
    appearance: OnceCell<Appearance>,
    delegate: Option<Weak<dyn ChangeDelegate<GrayscaleSliderModel>>>,
}

impl GrayscaleSliderModel {
    /// Creates a model editing `color`.
    ///
    /// With `is_alpha_enabled` unset only the white slider is exposed.
    /// `has_text_or_message` is a host display hint, kept as is.
    pub fn new(color: GrayscaleColor, is_alpha_enabled: bool, has_text_or_message: bool) -> Self {
        Self {
            color,
            is_alpha_enabled,
            has_text_or_message,
            appearance_provider: Box::new(FixedAppearance::default()),
            appearance: OnceCell::new(),
            delegate: None,
        }
    }

    /// Replace the appearance source. Has no effect once the appearance has
    /// been resolved.
    pub fn with_appearance_provider(mut self, provider: impl AppearanceProvider + 'static) -> Self {
        self.appearance_provider = Box::new(provider);
        self
    }

    /// Sets the observer notified after every edit. Only a weak handle is
    /// kept; the caller owns the delegate.
    pub fn set_delegate(&mut self, delegate: Weak<dyn ChangeDelegate<GrayscaleSliderModel>>) {
        self.delegate = Some(delegate);
    }

    /// The current delegate handle, if one was set.
    pub fn delegate(&self) -> Option<Weak<dyn ChangeDelegate<GrayscaleSliderModel>>> {
        self.delegate.clone()
    }

    /// The color as edited so far.
    pub fn color(&self) -> GrayscaleColor {
        self.color
    }

    /// Display-mode hint passed through from the host.
    pub fn has_text_or_message(&self) -> bool {
        self.has_text_or_message
    }

    /// Host appearance, asked from the provider on first call and cached.
    pub fn appearance(&self) -> Appearance {
        *self.appearance.get_or_init(|| {
            let resolved = self.appearance_provider.current();
            log::trace!("grayscale model resolved appearance {resolved:?}");
            resolved
        })
    }

    fn slider(&self, index: usize) -> SliderKind {
        match SliderKind::from_index(index, self.number_of_sliders()) {
            Ok(kind) => kind,
            Err(err) => panic!("{err}"),
        }
    }

    fn notify(&self) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.did_update_color_component(self),
            None => log::trace!("grayscale model changed with no live delegate"),
        }
    }
}

impl ColorSliderModel for GrayscaleSliderModel {
    type Color = GrayscaleColor;

    fn primary_key_text(&self) -> String {
        "Grayscale".to_string()
    }

    fn primary_value_text(&self) -> String {
        format!(
            "{} {}%",
            self.color.white.trunc() as i64,
            self.color.alpha.trunc() as i64
        )
    }

    fn secondary_key_text(&self) -> String {
        "HEX".to_string()
    }

    fn secondary_value_text(&self) -> String {
        self.color.hex_color()
    }

    fn preview_color_model(&self) -> GrayscaleColor {
        self.color
    }

    fn number_of_sliders(&self) -> usize {
        let max = SliderKind::ALL.len();
        if self.is_alpha_enabled {
            max
        } else {
            max - 1
        }
    }

    fn rainbow_enabled(&self, _index: usize) -> bool {
        false
    }

    fn step_interval(&self, _index: usize) -> f64 {
        1.0
    }

    fn value(&self, index: usize) -> f64 {
        match self.slider(index) {
            SliderKind::White => self.color.white,
            SliderKind::Alpha => self.color.alpha,
        }
    }

    fn maximum_value(&self, index: usize) -> f64 {
        match self.slider(index) {
            SliderKind::White => WHITE_MAX,
            SliderKind::Alpha => ALPHA_MAX,
        }
    }

    fn minimum_color_model(&self, index: usize) -> GrayscaleColor {
        match self.slider(index) {
            SliderKind::White => GrayscaleColor::opaque(0.0),
            // Light backgrounds fade towards white, dark ones towards black.
            SliderKind::Alpha => match self.appearance() {
                Appearance::Light => GrayscaleColor::opaque(WHITE_MAX),
                Appearance::Dark => GrayscaleColor::opaque(0.0),
            },
        }
    }

    fn maximum_color_model(&self, index: usize) -> GrayscaleColor {
        match self.slider(index) {
            SliderKind::White => GrayscaleColor::opaque(WHITE_MAX),
            SliderKind::Alpha => GrayscaleColor::opaque(self.color.white),
        }
    }

    fn thumb_text(&self, index: usize) -> Option<String> {
        let text = match self.slider(index) {
            SliderKind::White => "W",
            SliderKind::Alpha => "%",
        };
        Some(text.to_string())
    }

    fn thumb_icon_name(&self, _index: usize) -> Option<String> {
        None
    }

    /// Stores `floor(value)` without clamping; callers keep values inside
    /// the declared slider range.
    fn slider_value_changed(&mut self, index: usize, value: f64) {
        let kind = self.slider(index);
        let floored = value.floor();
        match kind {
            SliderKind::White => self.color.white = floored,
            SliderKind::Alpha => self.color.alpha = floored,
        }
        log::debug!("grayscale slider {kind:?} set to {floored}");
        self.notify();
    }
}
