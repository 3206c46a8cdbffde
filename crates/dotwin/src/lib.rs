pub mod config;
pub mod dot;
pub mod frame;
pub mod indicator;
pub mod motion;
pub mod pager;
mod settle;
pub mod transition;
pub mod window;

pub use config::{IndicatorConfig, IndicatorSettings};
pub use dot::{DotSlot, DotType, Point, SlotId};
pub use frame::{DotTarget, Frame, Motion, Recycled};
pub use indicator::{Indicator, IndicatorError, PageSource};
pub use motion::{AnimationDriver, RenderDot};
pub use pager::{Pager, PagerCommand};
pub use transition::Direction;
pub use window::{Bounds, DotWindow};
