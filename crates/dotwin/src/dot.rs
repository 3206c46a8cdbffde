use crate::config::IndicatorConfig;
use derive_more::{Display, From, Into};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size class of a dot. Ordered from the selected dot outwards along the
/// shrinking gradient at the edges of a long row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum DotType {
    #[strum(serialize = "SEL")]
    Selected,
    #[strum(serialize = "N")]
    Normal,
    #[strum(serialize = "M")]
    Medium,
    #[strum(serialize = "S")]
    Small,
    /// Invisible placeholder kept so a dot can slide in from off-screen.
    #[strum(serialize = "NO")]
    None,
}

impl DotType {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Stable identity of a slot. It is the slot's position at the time the
/// window was built and does not change when the slot is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct SlotId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct DotSlot {
    pub id: SlotId,
    pub center: Point,
    pub radius: f64,
    pub dot_type: DotType,
}

impl DotSlot {
    pub fn new(id: SlotId, center: Point, dot_type: DotType, config: &IndicatorConfig) -> Self {
        Self {
            id,
            center,
            radius: config.radius(dot_type),
            dot_type,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.dot_type == DotType::Selected
    }

    pub(crate) fn set_type(&mut self, dot_type: DotType, config: &IndicatorConfig) {
        self.dot_type = dot_type;
        self.radius = config.radius(dot_type);
    }
}
