//! Per-slot type transitions for a full slide of the window.
//!
//! A slide moves the whole size gradient (SEL → N → M → S → NO) one slot
//! towards the leading edge when paging forward and towards the trailing edge
//! when paging backward. The controller scans the slots in paging order and
//! asks [`next_type`] for each one, passing the type its neighbour was just
//! given in the same scan.

use crate::dot::DotType;
use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum Direction {
    /// Towards higher page indices (swipe to the left).
    Forward,
    /// Towards lower page indices (swipe to the right).
    Backward,
}

/// Facts about the slot being re-typed that its own type cannot tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotRole {
    /// The slot the selection lands on.
    pub new_selection: bool,
    /// First normal dot reached in a forward scan.
    pub first_normal: bool,
    /// More than a small run of pages remains after the current one.
    pub pages_ahead: bool,
}

/// `neighbor` is the predecessor's new type when moving forward and the
/// successor's new type when moving backward; `None` at the window's edge.
pub fn next_type(
    direction: Direction,
    current: DotType,
    neighbor: Option<DotType>,
    role: SlotRole,
) -> DotType {
    match direction {
        Direction::Forward => forward(current, neighbor, role),
        Direction::Backward => backward(current, neighbor, role),
    }
}

fn forward(current: DotType, prev: Option<DotType>, role: SlotRole) -> DotType {
    match (current, prev) {
        (DotType::Selected, _) => DotType::Normal,
        (DotType::Normal, _) if role.first_normal => DotType::Medium,
        (DotType::Normal, _) => DotType::Normal,
        (DotType::Medium, Some(DotType::Normal)) if role.new_selection => DotType::Selected,
        (DotType::Medium, Some(DotType::Normal)) => DotType::Normal,
        (DotType::Medium, _) => DotType::Small,
        (DotType::Small, Some(DotType::Normal | DotType::Selected)) => DotType::Medium,
        (DotType::Small, _) => DotType::None,
        (DotType::None, Some(DotType::Medium)) if role.pages_ahead => DotType::Small,
        (DotType::None, _) => DotType::None,
    }
}

fn backward(current: DotType, next: Option<DotType>, role: SlotRole) -> DotType {
    match (current, next) {
        (DotType::Selected, _) => DotType::Normal,
        (DotType::Normal, Some(DotType::Normal | DotType::Medium)) => DotType::Normal,
        // also the rightmost dot of a six page row, which has no successor
        (DotType::Normal, _) => DotType::Medium,
        (DotType::Medium, Some(DotType::Normal)) if role.new_selection => DotType::Selected,
        (DotType::Medium, Some(DotType::Normal)) => DotType::Normal,
        (DotType::Medium, _) => DotType::Small,
        (DotType::Small, Some(DotType::Normal | DotType::Selected)) => DotType::Medium,
        (DotType::Small, _) => DotType::None,
        (DotType::None, Some(DotType::Medium)) => DotType::Small,
        (DotType::None, _) => DotType::None,
    }
}
