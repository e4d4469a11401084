//! Grayscale editor: one gradient slider per enabled channel, a preview
//! swatch, and the summary rows, all driven by a [`GrayscaleSliderModel`].

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalWith};
use floem::views::v_stack_from_iter;

use crate::appearance::Appearance;
use crate::color::{GrayscaleColor, PreviewColor};
use crate::constants;
use crate::delegate::{ChangeDelegate, SnapshotDelegate};
use crate::gradient_slider::gradient_slider;
use crate::inputs::summary_row;
use crate::model::GrayscaleSliderModel;
use crate::slider::{ColorSliderModel, ModelSnapshot};
use crate::swatch::swatch;

/// Owns the model together with the delegate it points at, so the weak
/// delegate handle stays valid for as long as any view holds the editor.
/// A delegate the host set before handing the model over keeps receiving
/// every notification.
struct EditorState {
    model: RefCell<GrayscaleSliderModel>,
    _delegate: Rc<dyn ChangeDelegate<GrayscaleSliderModel>>,
}

impl EditorState {
    fn new(model: GrayscaleSliderModel, snapshot: RwSignal<ModelSnapshot<GrayscaleColor>>) -> Rc<Self> {
        let host = model.delegate();
        let delegate: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> =
            Rc::new(SnapshotDelegate::new(snapshot).forwarding_to(host));
        let model = RefCell::new(model);
        model.borrow_mut().set_delegate(Rc::downgrade(&delegate));
        Rc::new(Self {
            model,
            _delegate: delegate,
        })
    }

    fn edit(&self, index: usize, value: f64) {
        self.model.borrow_mut().slider_value_changed(index, value);
    }
}

fn palette(appearance: Appearance) -> (Color, Color) {
    match appearance {
        Appearance::Light => (Color::rgb8(242, 242, 242), Color::rgb8(30, 30, 30)),
        Appearance::Dark => (Color::rgb8(40, 40, 40), Color::rgb8(230, 230, 230)),
    }
}

/// Creates the grayscale editor panel for `model`.
pub(crate) fn grayscale_editor(model: GrayscaleSliderModel) -> impl IntoView {
    let appearance = model.appearance();
    let snapshot = RwSignal::new(model.snapshot());
    let count = model.number_of_sliders();
    let state = EditorState::new(model, snapshot);
    let (background, foreground) = palette(appearance);

    let sliders = v_stack_from_iter((0..count).map(|index| {
        let state = state.clone();
        h_stack((
            label(move || {
                snapshot.with(|s| s.sliders[index].thumb_text.clone().unwrap_or_default())
            })
            .style(move |s| {
                s.width(constants::THUMB_LABEL_WIDTH)
                    .font_size(constants::LABEL_FONT)
                    .color(foreground)
            }),
            gradient_slider(
                move || snapshot.with(|s| s.sliders[index].clone()),
                appearance,
                move |value| state.edit(index, value),
            )
            .style(|s| s.flex_grow(1.0)),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0))
    }))
    .style(|s| s.gap(constants::GAP));

    let preview = swatch(move || snapshot.with(|s| s.preview.to_rgba()), appearance);

    v_stack((
        h_stack((
            summary_row(
                move || snapshot.with(|s| s.primary_key.clone()),
                move || snapshot.with(|s| s.primary_value.clone()),
            )
            .style(|s| s.flex_grow(1.0)),
            preview,
        ))
        .style(|st| st.items_center().gap(constants::GAP)),
        sliders,
        summary_row(
            move || snapshot.with(|s| s.secondary_key.clone()),
            move || snapshot.with(|s| s.secondary_value.clone()),
        ),
    ))
    .style(move |st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .color(foreground)
            .background(background)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use floem::reactive::SignalGet;

    use super::*;

    #[derive(Default)]
    struct HostDelegate {
        calls: Cell<usize>,
        last: Cell<Option<GrayscaleColor>>,
    }

    impl ChangeDelegate<GrayscaleSliderModel> for HostDelegate {
        fn did_update_color_component(&self, model: &GrayscaleSliderModel) {
            self.calls.set(self.calls.get() + 1);
            self.last.set(Some(model.color()));
        }
    }

    #[test]
    fn edits_reach_host_delegate_and_snapshot() {
        let mut model = GrayscaleSliderModel::new(GrayscaleColor::new(10.0, 50.0), true, false);
        let host = Rc::new(HostDelegate::default());
        let host_dyn: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> = host.clone();
        model.set_delegate(Rc::downgrade(&host_dyn));

        let snapshot = RwSignal::new(model.snapshot());
        let state = EditorState::new(model, snapshot);
        state.edit(0, 200.0);

        assert_eq!(host.calls.get(), 1);
        assert_eq!(host.last.get(), Some(GrayscaleColor::new(200.0, 50.0)));
        let published = snapshot.get_untracked();
        assert_eq!(published.primary_value, "200 50%");
        assert_eq!(published.secondary_value, "#C8C8C880");
        assert_eq!(published.sliders[1].maximum_color.white, 200.0);
    }

    #[test]
    fn editor_without_host_delegate_still_publishes() {
        let model = GrayscaleSliderModel::new(GrayscaleColor::new(10.0, 50.0), true, false);
        let snapshot = RwSignal::new(model.snapshot());
        let state = EditorState::new(model, snapshot);

        state.edit(1, 77.2);

        let published = snapshot.get_untracked();
        assert_eq!(published.primary_value, "10 77%");
        assert_eq!(published.sliders[1].value, 77.0);
        assert_eq!(state.model.borrow().color().alpha, 77.0);
    }
}
