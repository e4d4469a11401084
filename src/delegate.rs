//! Change notification from a slider model to its observer.

use std::rc::Weak;

use floem::reactive::{RwSignal, SignalUpdate};

use crate::slider::{ColorSliderModel, ModelSnapshot};

/// Observer notified after every slider edit.
///
/// Models hold their delegate weakly, so a delegate never keeps a model
/// alive and a dropped delegate is simply not called.
pub trait ChangeDelegate<M: ?Sized> {
    fn did_update_color_component(&self, model: &M);
}

/// Publishes a fresh [`ModelSnapshot`] into a signal on every change, then
/// passes the notification on to the host's delegate, if any.
///
/// Views read the snapshot signal instead of borrowing the model, so the
/// notification can fire while the model is still mutably borrowed.
pub struct SnapshotDelegate<M>
where
    M: ColorSliderModel + 'static,
    M::Color: 'static,
{
    snapshot: RwSignal<ModelSnapshot<M::Color>>,
    host: Option<Weak<dyn ChangeDelegate<M>>>,
}

impl<M> SnapshotDelegate<M>
where
    M: ColorSliderModel + 'static,
    M::Color: 'static,
{
    pub fn new(snapshot: RwSignal<ModelSnapshot<M::Color>>) -> Self {
        Self {
            snapshot,
            host: None,
        }
    }

    /// Forward every notification to `host` after the snapshot is published.
    pub fn forwarding_to(mut self, host: Option<Weak<dyn ChangeDelegate<M>>>) -> Self {
        self.host = host;
        self
    }
}

impl<M> ChangeDelegate<M> for SnapshotDelegate<M>
where
    M: ColorSliderModel + 'static,
    M::Color: 'static,
{
    fn did_update_color_component(&self, model: &M) {
        self.snapshot.set(model.snapshot());
        if let Some(host) = self.host.as_ref().and_then(Weak::upgrade) {
            host.did_update_color_component(model);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use floem::reactive::SignalGet;

    use super::*;
    use crate::color::GrayscaleColor;
    use crate::model::GrayscaleSliderModel;

    #[derive(Default)]
    struct Counter(Cell<usize>);

    impl ChangeDelegate<GrayscaleSliderModel> for Counter {
        fn did_update_color_component(&self, _model: &GrayscaleSliderModel) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn install(
        model: &mut GrayscaleSliderModel,
        delegate: SnapshotDelegate<GrayscaleSliderModel>,
    ) -> Rc<dyn ChangeDelegate<GrayscaleSliderModel>> {
        let delegate: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> = Rc::new(delegate);
        model.set_delegate(Rc::downgrade(&delegate));
        delegate
    }

    #[test]
    fn edit_publishes_snapshot() {
        let mut model = GrayscaleSliderModel::new(GrayscaleColor::new(10.0, 50.0), true, false);
        let snapshot = RwSignal::new(model.snapshot());
        let _delegate = install(&mut model, SnapshotDelegate::new(snapshot));

        model.slider_value_changed(0, 200.4);

        let published = snapshot.get_untracked();
        assert_eq!(published.primary_value, "200 50%");
        assert_eq!(published.secondary_value, "#C8C8C880");
        assert_eq!(published.preview, GrayscaleColor::new(200.0, 50.0));
        assert_eq!(published.sliders[0].value, 200.0);
        assert_eq!(published.sliders[1].maximum_color.white, 200.0);
    }

    #[test]
    fn host_delegate_sees_every_edit() {
        let mut model = GrayscaleSliderModel::new(GrayscaleColor::default(), true, false);
        let host = Rc::new(Counter::default());
        let host_dyn: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> = host.clone();
        let snapshot = RwSignal::new(model.snapshot());
        let bridge = SnapshotDelegate::new(snapshot).forwarding_to(Some(Rc::downgrade(&host_dyn)));
        let _delegate = install(&mut model, bridge);

        model.slider_value_changed(0, 5.0);
        model.slider_value_changed(1, 40.0);

        assert_eq!(host.0.get(), 2);
        assert_eq!(snapshot.get_untracked().primary_value, "5 40%");
    }

    #[test]
    fn dropped_host_still_publishes() {
        let mut model = GrayscaleSliderModel::new(GrayscaleColor::default(), false, false);
        let host: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> = Rc::new(Counter::default());
        let snapshot = RwSignal::new(model.snapshot());
        let bridge = SnapshotDelegate::new(snapshot).forwarding_to(Some(Rc::downgrade(&host)));
        let _delegate = install(&mut model, bridge);
        drop(host);

        model.slider_value_changed(0, 9.0);

        assert_eq!(snapshot.get_untracked().preview.white, 9.0);
    }
}
