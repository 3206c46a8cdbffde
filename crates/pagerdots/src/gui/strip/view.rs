use super::BACKDROP_PADDING;
use super::model::State;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use dotwin::{Bounds, RenderDot};
use std::f64::consts::PI;

struct DotRenderer<'a> {
    dot: &'a RenderDot,
}

impl<'a> DotRenderer<'a> {
    fn new(dot: &'a RenderDot) -> Self {
        Self { dot }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = if self.dot.selected {
            colors.selected
        } else {
            colors.dot
        };
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.arc(
            self.dot.center.x,
            self.dot.center.y,
            self.dot.radius,
            0.0,
            2.0 * PI,
        );
        cr.fill()
    }
}

/// Paints the strip centred in a `width` x `height` area.
pub fn draw(
    cr: &Context,
    state: &State,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let bounds = state.bounds();
    if bounds.width <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.translate(
        (width - bounds.width) / 2.0,
        (height - bounds.height) / 2.0,
    );
    draw_backdrop(cr, bounds, colors)?;
    for dot in state.driver.dots() {
        DotRenderer::new(&dot).draw(cr, colors)?;
    }
    cr.restore()
}

fn draw_backdrop(cr: &Context, bounds: Bounds, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let radius = bounds.height / 2.0 + BACKDROP_PADDING;
    let (left, right) = (bounds.height / 2.0, bounds.width - bounds.height / 2.0);
    let (r, g, b, a) = colors.backdrop.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.new_sub_path();
    cr.arc(left, bounds.height / 2.0, radius, PI / 2.0, 3.0 * PI / 2.0);
    cr.arc(right, bounds.height / 2.0, radius, -PI / 2.0, PI / 2.0);
    cr.close_path();
    cr.fill()
}
