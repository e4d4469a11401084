//! Standalone demo: opens a window with the grayscale picker, following the
//! system light/dark theme and logging every edit.

use std::cell::Cell;
use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_grayscale::{
    themed_grayscale_picker, ChangeDelegate, GrayscaleColor, GrayscaleSliderModel, PreviewColor,
};

/// Remembers the last edited color so a theme switch rebuilds from it.
struct LastColor(Cell<GrayscaleColor>);

impl ChangeDelegate<GrayscaleSliderModel> for LastColor {
    fn did_update_color_component(&self, model: &GrayscaleSliderModel) {
        let color = model.color();
        log::info!("picked {}", color.hex_color());
        self.0.set(color);
    }
}

fn main() {
    env_logger::init();

    floem::Application::new()
        .window(
            move |_| {
                let host = Rc::new(LastColor(Cell::new(GrayscaleColor::new(128.0, 100.0))));
                themed_grayscale_picker(move |_appearance| {
                    let mut model = GrayscaleSliderModel::new(host.0.get(), true, false);
                    let delegate: Rc<dyn ChangeDelegate<GrayscaleSliderModel>> = host.clone();
                    model.set_delegate(Rc::downgrade(&delegate));
                    model
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 200.0))
                    .title("floem-grayscale"),
            ),
        )
        .run();
}
