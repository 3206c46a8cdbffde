use crate::config::{ColorSettings, HexColor};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgb, Srgba};

pub struct ThemeColors {
    pub dot: Srgba<f64>,
    pub selected: Srgba<f64>,
    pub backdrop: Srgba<f64>,
}

impl ThemeColors {
    /// Theme colours, with the configured ones taking precedence. An unset
    /// selected colour follows the dot colour.
    pub fn from_context(context: &gtk::StyleContext, overrides: &ColorSettings) -> Self {
        let dot = overrides.dot.map(opaque).unwrap_or_else(|| {
            Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.6, 0.6, 0.6, 0.6),
                Some(0.6),
            )
        });
        let selected = overrides
            .selected
            .or(overrides.dot)
            .map(opaque)
            .unwrap_or_else(|| {
                Self::lookup_color(
                    context,
                    "theme_selected_bg_color",
                    Srgba::new(0.4, 0.4, 0.8, 1.0),
                    Some(1.0),
                )
            });

        Self {
            dot,
            selected,
            backdrop: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.15, 0.15, 0.15, 0.5),
                Some(0.5),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

fn opaque(color: HexColor) -> Srgba<f64> {
    let c: Srgb<f64> = color.0.into_format();
    Srgba::new(c.red, c.green, c.blue, 1.0)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.pagerdots-window, .pagerdots-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
