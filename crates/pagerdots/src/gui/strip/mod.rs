use std::time::Duration;

pub mod model;
pub mod view;

pub use model::{State, StripAction};
pub use view::draw;

pub const ANIMATION_DURATION: Duration = dotwin::motion::DEFAULT_DURATION;
pub const BOTTOM_MARGIN: i32 = 48; // distance from the bottom screen edge
pub const BACKDROP_PADDING: f64 = 4.0;
