//! Host light/dark appearance.

use floem::window::Theme;

/// The host UI's display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl From<Theme> for Appearance {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
        }
    }
}

/// Source of the current appearance.
pub trait AppearanceProvider {
    fn current(&self) -> Appearance;
}

/// Always reports the same appearance.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub Appearance);

impl AppearanceProvider for FixedAppearance {
    fn current(&self) -> Appearance {
        self.0
    }
}

impl<F> AppearanceProvider for F
where
    F: Fn() -> Appearance,
{
    fn current(&self) -> Appearance {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_providers() {
        let provider = || Appearance::Dark;
        assert_eq!(provider.current(), Appearance::Dark);
        assert_eq!(FixedAppearance::default().current(), Appearance::Light);
    }

    #[test]
    fn window_theme_maps_to_appearance() {
        assert_eq!(Appearance::from(Theme::Dark), Appearance::Dark);
        assert_eq!(Appearance::from(Theme::Light), Appearance::Light);
    }
}
