// File: crates/trapviz-core/src/theme.rs
// Summary: Color presets for the trapezoid scene.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub trapezoid_fill: Color,
    pub trapezoid_outline: Color,
    pub axes: Color,
    pub function: Color,
}

impl Theme {
    /// White canvas, light blue trapezoids, red axes, green curve.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::WHITE,
            trapezoid_fill: Color::LIGHT_BLUE,
            trapezoid_outline: Color::BLUE,
            axes: Color::RED,
            function: Color::GREEN,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            trapezoid_fill: Color::from_argb(96, 64, 160, 255),
            trapezoid_outline: Color::from_argb(255, 64, 160, 255),
            axes: Color::from_argb(255, 220, 80, 80),
            function: Color::from_argb(255, 40, 200, 120),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3),        // base3
            trapezoid_fill: Color::from_argb(80, 0x26, 0x8b, 0xd2),     // blue
            trapezoid_outline: Color::from_argb(255, 0x26, 0x8b, 0xd2),
            axes: Color::from_argb(255, 0xdc, 0x32, 0x2f),              // red
            function: Color::from_argb(255, 0x85, 0x99, 0x00),          // green
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            trapezoid_fill: Color::from_argb(120, 0x00, 0xaa, 0xff),
            trapezoid_outline: Color::from_argb(255, 0x00, 0xff, 0xff),
            axes: Color::from_argb(255, 0xff, 0xff, 0xff),
            function: Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, if it is one of the presets.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
