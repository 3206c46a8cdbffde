use crate::config::{IndicatorConfig, NORMAL_AND_SELECTED_RUN_LENGTH, SMALL_DOT_RUN_LENGTH};
use crate::dot::DotType;
use crate::frame::{Frame, Motion, Recycled};
use crate::transition::{self, Direction, SlotRole};
use crate::window::DotWindow;

impl DotWindow {
    /// Moves the window to `page`, which the caller has already checked to be
    /// a valid page different from the current one.
    pub(crate) fn settle(&mut self, page: usize, config: &IndicatorConfig) -> Frame {
        let direction = if page > self.page_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.page_index = page;

        let recycled = self.recycle(direction, config);
        let target = self.step(direction);
        let slide = self.should_slide(direction, target);
        self.selected = target;

        let motion = if slide {
            self.slide(direction, config);
            Motion::Slide(direction)
        } else {
            self.reselect(config);
            Motion::Snap
        };

        log::trace!(
            "Settled on page {} ({}): slot {} selected, {:?}",
            page,
            direction,
            self.selected,
            motion
        );

        self.debug_check();
        self.frame(motion, recycled)
    }

    /// Settles on every page between the current one and `page`, so the
    /// window ends up exactly as if the pager had been swiped there.
    pub(crate) fn replay_to(&mut self, page: usize, config: &IndicatorConfig) {
        while self.page_index != page {
            let next = if page > self.page_index {
                self.page_index + 1
            } else {
                self.page_index - 1
            };
            self.settle(next, config);
        }
    }

    /// The slot next to the selection in `direction`, kept inside the window
    /// so that a page source skipping pages still moves by one slot.
    fn step(&self, direction: Direction) -> usize {
        match direction {
            // only a skipped page can find the selection on the last slot;
            // it then stays put while page_index moves on
            Direction::Forward => (self.selected + 1).min(self.slots.len() - 1),
            Direction::Backward => self.selected.saturating_sub(1),
        }
    }

    /// Moves the placeholder at the edge we are paging away from to the other
    /// end, so that the slide has a dot to bring in. E.g. paging backward on
    /// `| S M N N N N SEL M S NO |` yields `| NO S M N N N N SEL M S |`.
    fn recycle(&mut self, direction: Direction, config: &IndicatorConfig) -> Option<Recycled> {
        let len = self.slots.len();
        if len < 2 {
            return None;
        }
        let step = config.center_distance();

        match direction {
            Direction::Forward => {
                let eligible = self.slots[0].dot_type == DotType::None
                    && self.slots[1].dot_type == DotType::Small
                    && self.item_count.saturating_sub(SMALL_DOT_RUN_LENGTH) > self.page_index;
                if !eligible {
                    return None;
                }

                self.selected -= 1;
                self.slots.rotate_left(1);
                let x = self.slots[len - 2].center.x + step;
                let slot = &mut self.slots[len - 1];
                slot.center.x = x;
                log::trace!("Recycled slot {} to the tail", slot.id);
                Some(Recycled {
                    id: slot.id,
                    from: slot.center,
                })
            }
            Direction::Backward => {
                let eligible = self.slots[len - 1].dot_type == DotType::None
                    && self.slots[len - 2].dot_type == DotType::Small
                    && self.page_index >= self.selected;
                if !eligible {
                    return None;
                }

                self.selected += 1;
                self.slots.rotate_right(1);
                let x = self.slots[1].center.x - step;
                let slot = &mut self.slots[0];
                slot.center.x = x;
                log::trace!("Recycled slot {} to the head", slot.id);
                Some(Recycled {
                    id: slot.id,
                    from: slot.center,
                })
            }
        }
    }

    /// A slide only happens when the selection would step onto the medium dot
    /// of the shrinking run; moving forward it additionally has to leave the
    /// leading run of full-size dots.
    fn should_slide(&self, direction: Direction, target: usize) -> bool {
        let entered = self.slots[target].dot_type;
        match direction {
            Direction::Forward => {
                target >= NORMAL_AND_SELECTED_RUN_LENGTH && entered == DotType::Medium
            }
            Direction::Backward => entered == DotType::Medium,
        }
    }

    fn reselect(&mut self, config: &IndicatorConfig) {
        let selected = self.selected;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if i == selected {
                slot.set_type(DotType::Selected, config);
            } else if slot.is_selected() {
                slot.set_type(DotType::Normal, config);
            }
        }
    }

    fn slide(&mut self, direction: Direction, config: &IndicatorConfig) {
        let selected = self.selected;
        let step = config.center_distance();
        let pages_ahead = self.page_index + SMALL_DOT_RUN_LENGTH < self.item_count;
        let mut neighbor = None;

        match direction {
            Direction::Forward => {
                let mut normal_seen = false;
                for (i, slot) in self.slots.iter_mut().enumerate() {
                    let first_normal = !normal_seen && slot.dot_type == DotType::Normal;
                    normal_seen |= first_normal;
                    let role = SlotRole {
                        new_selection: i == selected,
                        first_normal,
                        pages_ahead,
                    };
                    let next = transition::next_type(direction, slot.dot_type, neighbor, role);
                    slot.set_type(next, config);
                    slot.center.x -= step;
                    neighbor = Some(next);
                }
            }
            Direction::Backward => {
                for (i, slot) in self.slots.iter_mut().enumerate().rev() {
                    let role = SlotRole {
                        new_selection: i == selected,
                        first_normal: false,
                        pages_ahead,
                    };
                    let next = transition::next_type(direction, slot.dot_type, neighbor, role);
                    slot.set_type(next, config);
                    slot.center.x += step;
                    neighbor = Some(next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorSettings;
    use crate::dot::DotType::{Medium as M, Normal as N, Selected as SEL, Small as S};

    const NO: DotType = DotType::None;

    fn config() -> IndicatorConfig {
        IndicatorSettings {
            normal_radius: Some(4.0),
            spacing: Some(4.0),
            ..Default::default()
        }
        .resolve()
    }

    fn walk(window: &mut DotWindow, pages: impl IntoIterator<Item = usize>, config: &IndicatorConfig) {
        for page in pages {
            window.settle(page, config);
        }
    }

    #[test]
    fn test_reselect_inside_leading_run() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();

        let frame = window.settle(1, &config);
        assert_eq!(frame.motion, Motion::Snap);
        assert_eq!(frame.recycled, None);
        assert_eq!(window.types(), vec![N, SEL, N, N, N, M, S, NO, NO, NO]);

        walk(&mut window, 2..=4, &config);
        assert_eq!(window.types(), vec![N, N, N, N, SEL, M, S, NO, NO, NO]);
        assert_eq!(window.selected_index(), 4);
    }

    #[test]
    fn test_forward_slides_gradient() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();
        walk(&mut window, 1..=4, &config);
        let before: Vec<f64> = window.slots().iter().map(|s| s.center.x).collect();

        let frame = window.settle(5, &config);
        assert_eq!(frame.motion, Motion::Slide(Direction::Forward));
        assert_eq!(window.types(), vec![M, N, N, N, N, SEL, M, S, NO, NO]);
        assert_eq!(window.selected_index(), 5);

        let step = config.center_distance();
        for (slot, x) in window.slots().iter().zip(before) {
            assert_eq!(slot.center.x, x - step);
        }

        window.settle(6, &config);
        assert_eq!(window.types(), vec![S, M, N, N, N, N, SEL, M, S, NO]);
        window.settle(7, &config);
        assert_eq!(window.types(), vec![NO, S, M, N, N, N, N, SEL, M, S]);
    }

    #[test]
    fn test_forward_recycles_head_placeholder() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();
        walk(&mut window, 1..=7, &config);
        let head = window.slots()[0].id;
        let last_x = window.slots()[9].center.x;

        let frame = window.settle(8, &config);
        let recycled = frame.recycled.unwrap();
        assert_eq!(recycled.id, head);
        assert_eq!(recycled.from.x, last_x + config.center_distance());
        assert_eq!(window.slots()[9].id, head);
        assert_eq!(window.slots()[9].center.x, last_x);

        assert_eq!(window.types(), vec![NO, S, M, N, N, N, N, SEL, M, S]);
        assert_eq!(window.slots().len(), 10);
        assert_eq!(window.selected_index(), 7);
    }

    #[test]
    fn test_forward_runs_out_at_the_end() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();
        walk(&mut window, 1..=17, &config);
        assert_eq!(window.types(), vec![NO, S, M, N, N, N, N, SEL, M, S]);

        let frame = window.settle(18, &config);
        assert_eq!(frame.recycled, None);
        assert_eq!(window.types(), vec![NO, NO, S, M, N, N, N, N, SEL, M]);

        window.settle(19, &config);
        assert_eq!(window.types(), vec![NO, NO, NO, S, M, N, N, N, N, SEL]);
        assert_eq!(window.selected_index(), 9);
    }

    #[test]
    fn test_backward_recycles_tail_placeholder() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();
        walk(&mut window, (1..=19).chain((12..=18).rev()), &config);
        assert_eq!(window.types(), vec![S, M, SEL, N, N, N, N, M, S, NO]);
        let tail = window.slots()[9].id;

        let frame = window.settle(11, &config);
        assert_eq!(frame.motion, Motion::Slide(Direction::Backward));
        assert_eq!(frame.recycled.map(|r| r.id), Some(tail));
        assert_eq!(window.slots()[0].id, tail);
        assert_eq!(window.types(), vec![S, M, SEL, N, N, N, N, M, S, NO]);
    }

    #[test]
    fn test_backward_returns_to_initial_layout() {
        let config = config();
        let initial = DotWindow::initialize(20, &config).unwrap();
        let mut window = initial.clone();
        walk(&mut window, (1..=19).chain((0..=18).rev()), &config);

        assert_eq!(window.types(), initial.types());
        assert_eq!(window.selected_index(), 0);
        assert_eq!(window.page_index(), 0);
    }

    #[test]
    fn test_six_pages_backward_edge() {
        let config = config();
        let mut window = DotWindow::initialize(6, &config).unwrap();
        walk(&mut window, 1..=5, &config);
        assert_eq!(window.types(), vec![M, N, N, N, N, SEL]);

        walk(&mut window, (0..=4).rev(), &config);
        assert_eq!(window.types(), vec![SEL, N, N, N, N, M]);
    }

    #[test]
    fn test_replay_matches_paging_one_by_one() {
        let config = config();
        let mut paged = DotWindow::initialize(20, &config).unwrap();
        walk(&mut paged, 1..=13, &config);

        let mut replayed = DotWindow::initialize(20, &config).unwrap();
        replayed.replay_to(13, &config);
        assert_eq!(replayed, paged);

        walk(&mut paged, (4..=12).rev(), &config);
        replayed.replay_to(4, &config);
        assert_eq!(replayed, paged);
        assert_eq!(replayed.page_index(), 4);
    }

    #[test]
    fn test_skipped_pages_move_one_slot() {
        let config = config();
        let mut window = DotWindow::initialize(20, &config).unwrap();

        window.settle(12, &config);
        assert_eq!(window.selected_index(), 1);
        assert_eq!(window.page_index(), 12);

        window.settle(3, &config);
        window.settle(1, &config);
        assert_eq!(window.selected_index(), 0);
        assert_eq!(window.types()[0], SEL);
    }
}
