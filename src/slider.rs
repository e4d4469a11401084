//! Slider descriptors and the per-mode slider model contract.
//!
//! A color mode exposes an ordered list of sliders. Each slider is described
//! by its current value, its scalar range, and two endpoint colors that the
//! track gradient is painted between.

use thiserror::Error;

use crate::color::PreviewColor;

/// The grayscale channels, in slider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    White,
    Alpha,
}

impl SliderKind {
    pub const ALL: [SliderKind; 2] = [SliderKind::White, SliderKind::Alpha];

    /// Convert a slider index into a channel, given how many sliders are enabled.
    pub fn from_index(index: usize, count: usize) -> Result<Self, SliderIndexError> {
        if index >= count {
            return Err(SliderIndexError::OutOfRange { index, count });
        }
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SliderIndexError::OutOfRange { index, count })
    }
}

/// Slider index outside the enabled set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderIndexError {
    #[error("slider index {index} out of range ({count} sliders)")]
    OutOfRange { index: usize, count: usize },
}

/// Everything a renderer needs for one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderDescriptor<C> {
    pub value: f64,
    pub maximum_value: f64,
    pub step_interval: f64,
    pub minimum_color: C,
    pub maximum_color: C,
    pub thumb_text: Option<String>,
    pub thumb_icon_name: Option<String>,
    pub rainbow_enabled: bool,
}

/// Read-only state of a model, published to views after each edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSnapshot<C> {
    pub sliders: Vec<SliderDescriptor<C>>,
    pub primary_key: String,
    pub primary_value: String,
    pub secondary_key: String,
    pub secondary_value: String,
    pub preview: C,
}

/// View-model contract shared by every color mode.
///
/// Every `index` argument must be below [`number_of_sliders`]; a bad index
/// is a caller bug and panics.
///
/// [`number_of_sliders`]: ColorSliderModel::number_of_sliders
pub trait ColorSliderModel {
    type Color: PreviewColor + Clone;

    fn primary_key_text(&self) -> String;
    fn primary_value_text(&self) -> String;
    fn secondary_key_text(&self) -> String;
    fn secondary_value_text(&self) -> String;
    fn preview_color_model(&self) -> Self::Color;

    fn number_of_sliders(&self) -> usize;
    fn rainbow_enabled(&self, index: usize) -> bool;
    fn step_interval(&self, index: usize) -> f64;
    fn value(&self, index: usize) -> f64;
    fn maximum_value(&self, index: usize) -> f64;
    fn minimum_color_model(&self, index: usize) -> Self::Color;
    fn maximum_color_model(&self, index: usize) -> Self::Color;
    fn thumb_text(&self, index: usize) -> Option<String>;
    fn thumb_icon_name(&self, index: usize) -> Option<String>;

    fn slider_value_changed(&mut self, index: usize, value: f64);

    fn descriptor(&self, index: usize) -> SliderDescriptor<Self::Color> {
        SliderDescriptor {
            value: self.value(index),
            maximum_value: self.maximum_value(index),
            step_interval: self.step_interval(index),
            minimum_color: self.minimum_color_model(index),
            maximum_color: self.maximum_color_model(index),
            thumb_text: self.thumb_text(index),
            thumb_icon_name: self.thumb_icon_name(index),
            rainbow_enabled: self.rainbow_enabled(index),
        }
    }

    fn descriptors(&self) -> Vec<SliderDescriptor<Self::Color>> {
        (0..self.number_of_sliders())
            .map(|i| self.descriptor(i))
            .collect()
    }

    fn snapshot(&self) -> ModelSnapshot<Self::Color> {
        ModelSnapshot {
            sliders: self.descriptors(),
            primary_key: self.primary_key_text(),
            primary_value: self.primary_value_text(),
            secondary_key: self.secondary_key_text(),
            secondary_value: self.secondary_value_text(),
            preview: self.preview_color_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_to_kind() {
        assert_eq!(SliderKind::from_index(0, 2), Ok(SliderKind::White));
        assert_eq!(SliderKind::from_index(1, 2), Ok(SliderKind::Alpha));
        assert_eq!(SliderKind::from_index(0, 1), Ok(SliderKind::White));
    }

    #[test]
    fn index_past_enabled_count_is_rejected() {
        assert_eq!(
            SliderKind::from_index(1, 1),
            Err(SliderIndexError::OutOfRange { index: 1, count: 1 })
        );
        assert!(SliderKind::from_index(2, 2).is_err());
        // Count larger than the channel list still cannot invent a channel.
        assert!(SliderKind::from_index(2, 5).is_err());
    }

    #[test]
    fn error_message_names_index_and_count() {
        let err = SliderKind::from_index(3, 1).unwrap_err();
        assert_eq!(err.to_string(), "slider index 3 out of range (1 sliders)");
    }
}
