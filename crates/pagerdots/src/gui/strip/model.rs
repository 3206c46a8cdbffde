use super::ANIMATION_DURATION;
use crate::config::{ColorSettings, Config};
use dotwin::{AnimationDriver, Bounds, Frame, Indicator, IndicatorError, PageSource, Pager};
use std::time::Duration;

pub struct State {
    pub indicator: Indicator,
    pub pager: Pager,
    pub driver: AnimationDriver,
    pub colors: ColorSettings,
    pub ticking: bool,
    last_frame_time: Option<i64>,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let mut state = Self {
            indicator: Indicator::new(config.indicator.resolve()),
            pager: Pager::new(config.pages),
            driver: AnimationDriver::new(ANIMATION_DURATION),
            colors: config.colors.clone(),
            ticking: false,
            last_frame_time: None,
        };
        state.attach();
        state
    }

    pub fn page_forward(&mut self) -> StripAction {
        if !self.pager.next() {
            return StripAction::default();
        }
        self.settle()
    }

    pub fn page_backward(&mut self) -> StripAction {
        if !self.pager.prev() {
            return StripAction::default();
        }
        self.settle()
    }

    pub fn jump(&mut self, page: usize) -> StripAction {
        if !self.pager.jump(page) {
            log::debug!(
                "Ignoring jump to page {} of {}",
                page,
                self.pager.item_count()
            );
            return StripAction::default();
        }
        let page = isize::try_from(page).unwrap_or(isize::MAX);
        let result = self.indicator.seek(page);
        self.present(result)
    }

    /// Puts every dot straight on its current target, e.g. when the strip is
    /// shown again after animations were left running while hidden.
    pub fn resync(&mut self) -> StripAction {
        let Some(frame) = self.indicator.frame() else {
            return StripAction::default();
        };
        self.driver.reset(&frame);
        StripAction::new(true, false)
    }

    pub fn set_page_count(&mut self, count: usize) -> StripAction {
        self.pager.set_item_count(count);
        self.attach()
    }

    pub fn reconfigure(&mut self, config: &Config) -> StripAction {
        let recolored = self.colors != config.colors;
        self.colors = config.colors.clone();

        if config.pages != self.pager.item_count() {
            self.indicator.configure(config.indicator.resolve());
            return self.set_page_count(config.pages);
        }

        let frame = self.indicator.configure(config.indicator.resolve());
        let action = self.present(Ok(frame));
        StripAction::new(action.should_redraw || recolored, action.should_animate)
    }

    pub fn bounds(&self) -> Bounds {
        self.indicator
            .window()
            .map(|w| w.bounds())
            .unwrap_or_default()
    }

    /// Advances the animation to the frame clock time in microseconds.
    /// Returns whether another tick is needed.
    pub fn tick(&mut self, frame_time: i64) -> bool {
        let elapsed = self
            .last_frame_time
            .map(|prev| Duration::from_micros(frame_time.saturating_sub(prev).max(0) as u64))
            .unwrap_or_default();
        self.last_frame_time = Some(frame_time);

        let running = self.driver.advance(elapsed);
        if !running {
            self.last_frame_time = None;
        }
        running
    }

    fn attach(&mut self) -> StripAction {
        let result = self.indicator.reattach(&self.pager);
        self.present(result)
    }

    fn settle(&mut self) -> StripAction {
        let page = isize::try_from(self.pager.current_page()).unwrap_or(isize::MAX);
        let result = self.indicator.on_page_settled(page);
        self.present(result)
    }

    fn present(&mut self, result: Result<Option<Frame>, IndicatorError>) -> StripAction {
        match result {
            Ok(Some(frame)) => {
                self.driver.apply(&frame);
                StripAction::new(true, self.driver.is_animating())
            }
            Ok(None) => StripAction::default(),
            Err(e) => {
                log::error!("Indicator rejected the pager state: {}", e);
                StripAction::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripAction {
    pub should_redraw: bool,
    pub should_animate: bool,
}

impl StripAction {
    pub fn new(should_redraw: bool, should_animate: bool) -> Self {
        Self {
            should_redraw,
            should_animate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotwin::{DotType, IndicatorSettings};

    fn state(pages: usize) -> State {
        State::new(&Config {
            pages,
            ..Default::default()
        })
    }

    fn selected_slot(state: &State) -> usize {
        state.indicator.window().unwrap().selected_index()
    }

    #[test]
    fn test_starts_on_first_page() {
        let state = state(20);
        assert_eq!(state.indicator.item_count(), 20);
        assert_eq!(selected_slot(&state), 0);
        assert!(!state.driver.is_animating());
        assert!(state.bounds().width > 0.0);
    }

    #[test]
    fn test_paging_stops_at_the_ends() {
        let mut state = state(3);
        assert_eq!(state.page_backward(), StripAction::default());

        let action = state.page_forward();
        assert!(action.should_redraw);
        assert!(!action.should_animate);
        assert_eq!(selected_slot(&state), 1);

        state.page_forward();
        assert_eq!(state.page_forward(), StripAction::default());
        assert_eq!(state.indicator.page_index(), 2);
    }

    #[test]
    fn test_slide_animates_until_finished() {
        let mut state = state(20);
        for page in 1..=4 {
            state.jump(page);
        }
        let action = state.page_forward();
        assert!(action.should_animate);

        assert!(state.tick(1_000_000));
        assert!(state.tick(1_100_000));
        assert!(!state.tick(1_200_000));
        assert!(!state.driver.is_animating());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut state = state(5);
        assert_eq!(state.jump(9), StripAction::default());
        assert_eq!(state.indicator.page_index(), 0);
    }

    #[test]
    fn test_far_jump_lands_on_page() {
        let mut jumped = state(20);
        assert!(jumped.jump(13).should_redraw);
        assert!(!jumped.driver.is_animating());

        let mut paged = state(20);
        for _ in 0..13 {
            paged.page_forward();
        }
        assert_eq!(jumped.indicator.window(), paged.indicator.window());
        assert_eq!(selected_slot(&jumped), 7);
    }

    #[test]
    fn test_resync_stops_animation() {
        let mut state = state(20);
        for page in 1..=4 {
            state.jump(page);
        }
        assert!(state.page_forward().should_animate);

        assert!(state.resync().should_redraw);
        assert!(!state.driver.is_animating());
        let selected: Vec<_> = state.driver.dots().filter(|d| d.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(
            selected[0].center,
            state.indicator.window().unwrap().slots()[5].center
        );
    }

    #[test]
    fn test_page_count_change_rebuilds() {
        let mut state = state(20);
        state.jump(3);

        assert!(state.set_page_count(4).should_redraw);
        assert_eq!(state.indicator.item_count(), 4);
        assert_eq!(state.indicator.page_index(), 3);
        assert_eq!(selected_slot(&state), 3);
        assert!(!state.driver.is_animating());

        // below the minimum the previous window stays
        state.set_page_count(1);
        assert_eq!(state.indicator.item_count(), 4);
    }

    #[test]
    fn test_reconfigure_keeps_page() {
        let mut state = state(20);
        state.jump(1);

        let config = Config {
            pages: 20,
            indicator: IndicatorSettings {
                normal_radius: Some(9.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(state.reconfigure(&config).should_redraw);
        assert_eq!(state.indicator.page_index(), 1);
        let window = state.indicator.window().unwrap();
        assert_eq!(window.slots()[1].dot_type, DotType::Selected);
        assert_eq!(window.slots()[2].radius, 9.0);

        assert_eq!(state.reconfigure(&config), StripAction::default());
    }
}
