use crate::dot::{DotType, Point, SlotId};
use crate::transition::Direction;
use std::fmt;

/// How a collaborator should reach the targets of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump straight to the targets.
    Snap,
    /// Every slot slides one centre distance against the paging direction.
    Slide(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotTarget {
    pub id: SlotId,
    pub center: Point,
    pub radius: f64,
    pub dot_type: DotType,
}

impl DotTarget {
    pub fn is_selected(&self) -> bool {
        self.dot_type == DotType::Selected
    }
}

/// A placeholder moved from one end of the window to the other. It is
/// teleported to `from` before its slide starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recycled {
    pub id: SlotId,
    pub from: Point,
}

/// Target state of every slot after one indicator update, in window order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub motion: Motion,
    pub targets: Vec<DotTarget>,
    pub recycled: Option<Recycled>,
}

impl Frame {
    pub fn types(&self) -> Vec<DotType> {
        self.targets.iter().map(|t| t.dot_type).collect()
    }

    pub fn selected(&self) -> Option<&DotTarget> {
        self.targets.iter().find(|t| t.is_selected())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs: Vec<String> = self.targets.iter().map(|t| t.dot_type.to_string()).collect();
        write!(f, "| {} |", glyphs.join(" "))
    }
}
