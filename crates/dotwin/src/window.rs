use crate::config::{
    IndicatorConfig, MAX_VISIBLE_DOT_COUNT, NORMAL_AND_SELECTED_RUN_LENGTH, SMALL_DOT_RUN_LENGTH,
};
use crate::dot::{DotSlot, DotType, Point, SlotId};
use crate::frame::{DotTarget, Frame, Motion, Recycled};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// The ordered slots of an indicator plus the page they currently stand for.
///
/// A window never holds more than `MAX_VISIBLE_DOT_COUNT + 1` slots; the
/// extra one is the placeholder that gets recycled from one end to the other
/// while paging through long lists.
#[derive(Debug, Clone, PartialEq)]
pub struct DotWindow {
    pub(crate) slots: Vec<DotSlot>,
    pub(crate) item_count: usize,
    pub(crate) page_index: usize,
    pub(crate) selected: usize,
    bounds: Bounds,
}

impl DotWindow {
    /// Lays out the window for `item_count` pages.
    ///
    /// Initially it looks like `| SEL N N N N M S NO |`: up to five full-size
    /// dots, then the shrinking run, then placeholders ready to slide in.
    /// Returns `None` when there are fewer pages than the configured minimum.
    pub fn initialize(item_count: usize, config: &IndicatorConfig) -> Option<Self> {
        if item_count < config.min_visible_dot_count() {
            log::debug!(
                "Not building a window for {} pages (minimum is {})",
                item_count,
                config.min_visible_dot_count()
            );
            return None;
        }

        let visible = item_count.min(MAX_VISIBLE_DOT_COUNT);
        let step = config.center_distance();

        let width = visible as f64 * config.radius_normal()
            + (visible - 1) as f64 * step
            + 2.0 * config.padding();
        // +4 keeps the selected dot clear of rounding at the edges
        let height = config.radius_selected() * 2.0 + 4.0;

        let first_x = if item_count > NORMAL_AND_SELECTED_RUN_LENGTH {
            // leave room on the left for the run that slides in later
            let trailing =
                SMALL_DOT_RUN_LENGTH.min(item_count - NORMAL_AND_SELECTED_RUN_LENGTH);
            width / 2.0 - trailing as f64 * step
        } else {
            width / 2.0 - (item_count - 1) as f64 * step / 2.0
        };

        let len = if item_count > MAX_VISIBLE_DOT_COUNT {
            MAX_VISIBLE_DOT_COUNT + 1
        } else {
            visible
        };

        let mut slots = Vec::with_capacity(MAX_VISIBLE_DOT_COUNT + 1);
        slots.extend((0..len).map(|i| {
            let center = Point::new(first_x + i as f64 * step, height / 2.0);
            DotSlot::new(SlotId::from(i), center, initial_type(i), config)
        }));

        log::debug!("Built a window of {} slots for {} pages", len, item_count);

        let window = Self {
            slots,
            item_count,
            page_index: 0,
            selected: 0,
            bounds: Bounds { width, height },
        };
        window.debug_check();
        Some(window)
    }

    pub fn slots(&self) -> &[DotSlot] {
        &self.slots
    }

    pub fn types(&self) -> Vec<DotType> {
        self.slots.iter().map(|s| s.dot_type).collect()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn frame(&self, motion: Motion, recycled: Option<Recycled>) -> Frame {
        Frame {
            motion,
            targets: self
                .slots
                .iter()
                .map(|s| DotTarget {
                    id: s.id,
                    center: s.center,
                    radius: s.radius,
                    dot_type: s.dot_type,
                })
                .collect(),
            recycled,
        }
    }

    pub(crate) fn debug_check(&self) {
        debug_assert!(self.selected < self.slots.len());
        debug_assert!(self.slots[self.selected].is_selected());
        debug_assert_eq!(self.slots.iter().filter(|s| s.is_selected()).count(), 1);
        debug_assert!(self.page_index < self.item_count);
    }
}

fn initial_type(index: usize) -> DotType {
    match index {
        0 => DotType::Selected,
        i if i < NORMAL_AND_SELECTED_RUN_LENGTH => DotType::Normal,
        i if i == NORMAL_AND_SELECTED_RUN_LENGTH => DotType::Medium,
        i if i == NORMAL_AND_SELECTED_RUN_LENGTH + 1 => DotType::Small,
        _ => DotType::None,
    }
}
