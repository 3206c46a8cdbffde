use crate::config::IndicatorConfig;
use crate::frame::{Frame, Motion};
use crate::window::DotWindow;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Page {page} is out of range, expected [0, {item_count})")]
    OutOfRange { page: isize, item_count: usize },
}

/// Anything that knows how many pages there are and which one is showing.
///
/// Whoever owns the source reports changes to the indicator:
/// [`Indicator::set_item_count`] and [`Indicator::on_page_settled`] initially
/// and after each page selection, [`Indicator::reattach`] whenever the set of
/// pages changes behind the indicator's back.
pub trait PageSource {
    fn item_count(&self) -> usize;
    fn current_page(&self) -> usize;
}

/// Scrolling page indicator: owns the dot window and turns item count and
/// settle notifications into [`Frame`]s for a renderer.
#[derive(Debug, Clone)]
pub struct Indicator {
    config: IndicatorConfig,
    window: Option<DotWindow>,
    initialized: bool,
}

impl Indicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            window: None,
            initialized: false,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn window(&self) -> Option<&DotWindow> {
        self.window.as_ref()
    }

    /// Current state of every slot, for collaborators that start late.
    pub fn frame(&self) -> Option<Frame> {
        self.window.as_ref().map(|w| w.frame(Motion::Snap, None))
    }

    /// Replaces the configuration. A live window is rebuilt with the new
    /// geometry and replayed to its page.
    pub fn configure(&mut self, config: IndicatorConfig) -> Option<Frame> {
        if self.config == config {
            return None;
        }
        self.config = config;

        let previous = self.window.take()?;
        log::debug!("Configuration changed, rebuilding the window");
        let frame = self.rebuild(previous.item_count(), previous.page_index());
        if frame.is_none() {
            // the new minimum is larger than the item count
            self.initialized = false;
        }
        frame
    }

    /// Rebuilds the window for `count` pages. Repeating the current count is
    /// a no-op, as is a count below the configured minimum, which leaves the
    /// previous window in place.
    pub fn set_item_count(&mut self, count: usize) -> Option<Frame> {
        if self.initialized && self.item_count() == count {
            return None;
        }
        self.rebuild(count, 0)
    }

    pub fn item_count(&self) -> usize {
        self.window.as_ref().map_or(0, DotWindow::item_count)
    }

    pub fn page_index(&self) -> usize {
        self.window.as_ref().map_or(0, DotWindow::page_index)
    }

    /// Reports that the pager came to rest on `page`.
    ///
    /// Returns the new frame, or `None` when nothing changed: the page is
    /// already the current one, or there is no window yet.
    pub fn on_page_settled(&mut self, page: isize) -> Result<Option<Frame>, IndicatorError> {
        let page = self.check_page(page)?;
        let Some(window) = self.window.as_mut() else {
            log::trace!("Ignoring page {} before the first window", page);
            return Ok(None);
        };

        if window.page_index() == page {
            return Ok(None);
        }
        Ok(Some(window.settle(page, &self.config)))
    }

    /// Moves to `page` the way swiping through every page in between would.
    ///
    /// A neighbouring page behaves like [`Indicator::on_page_settled`]. A
    /// farther one yields a single [`Motion::Snap`] frame of the end state.
    pub fn seek(&mut self, page: isize) -> Result<Option<Frame>, IndicatorError> {
        let page = self.check_page(page)?;
        let Some(window) = self.window.as_mut() else {
            return Ok(None);
        };

        if window.page_index().abs_diff(page) <= 1 {
            return self.on_page_settled(page as isize);
        }
        window.replay_to(page, &self.config);
        Ok(Some(window.frame(Motion::Snap, None)))
    }

    /// Syncs with `source`: item count first, then its current page.
    pub fn attach<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<Option<Frame>, IndicatorError> {
        let rebuilt = self.set_item_count(source.item_count());
        let page = isize::try_from(source.current_page()).unwrap_or(isize::MAX);
        let settled = self.seek(page)?;
        Ok(settled.or(rebuilt))
    }

    /// Forgets the item count and attaches to `source` again. Use it after
    /// the source's pages changed.
    pub fn reattach<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<Option<Frame>, IndicatorError> {
        self.initialized = false;
        self.attach(source)
    }

    /// The next [`Indicator::set_item_count`] rebuilds the window even when
    /// the count did not change.
    pub fn detach(&mut self) {
        self.initialized = false;
    }

    fn check_page(&self, page: isize) -> Result<usize, IndicatorError> {
        let item_count = self.item_count();
        if page < 0 || (page != 0 && page as usize >= item_count) {
            return Err(IndicatorError::OutOfRange { page, item_count });
        }
        Ok(page as usize)
    }

    /// Builds a fresh window replayed to `page`. Leaves everything untouched
    /// when `item_count` is below the minimum.
    fn rebuild(&mut self, item_count: usize, page: usize) -> Option<Frame> {
        let mut window = DotWindow::initialize(item_count, &self.config)?;
        window.replay_to(page.min(item_count - 1), &self.config);
        let frame = window.frame(Motion::Snap, None);
        self.window = Some(window);
        self.initialized = true;
        Some(frame)
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorSettings;
    use crate::dot::DotType::{self, Medium as M, Normal as N, Selected as SEL, Small as S};
    use crate::pager::Pager;

    const NO: DotType = DotType::None;

    fn indicator(count: usize) -> Indicator {
        let mut indicator = Indicator::default();
        indicator.set_item_count(count).unwrap();
        indicator
    }

    fn types(indicator: &Indicator) -> Vec<DotType> {
        indicator.window().unwrap().types()
    }

    fn assert_single_selection(indicator: &Indicator) {
        let window = indicator.window().unwrap();
        let selected: Vec<usize> = window
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_selected())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![window.selected_index()]);
    }

    #[test]
    fn test_three_pages_out_of_range() {
        let mut indicator = indicator(3);
        assert_eq!(types(&indicator), vec![SEL, N, N]);

        assert_eq!(
            indicator.on_page_settled(3),
            Err(IndicatorError::OutOfRange {
                page: 3,
                item_count: 3
            })
        );
        assert!(indicator.on_page_settled(-1).is_err());
        assert_eq!(types(&indicator), vec![SEL, N, N]);
    }

    #[test]
    fn test_settle_on_current_page_is_noop() {
        let mut indicator = indicator(20);
        indicator.on_page_settled(1).unwrap();
        let before = indicator.window().unwrap().clone();

        assert_eq!(indicator.on_page_settled(1), Ok(None));
        assert_eq!(indicator.window().unwrap(), &before);
    }

    #[test]
    fn test_not_attached_is_ignored() {
        let mut indicator = Indicator::default();
        assert_eq!(indicator.on_page_settled(0), Ok(None));
        assert!(indicator.on_page_settled(1).is_err());
        assert!(indicator.frame().is_none());
    }

    #[test]
    fn test_underflow_keeps_previous_window() {
        let mut indicator = indicator(4);
        assert_eq!(indicator.set_item_count(1), None);
        assert_eq!(indicator.item_count(), 4);
    }

    #[test]
    fn test_same_count_is_noop_until_detached() {
        let mut indicator = indicator(8);
        indicator.on_page_settled(2).unwrap();

        assert_eq!(indicator.set_item_count(8), None);
        assert_eq!(indicator.page_index(), 2);

        indicator.detach();
        let frame = indicator.set_item_count(8).unwrap();
        assert_eq!(frame.motion, Motion::Snap);
        assert_eq!(indicator.page_index(), 0);
    }

    #[test]
    fn test_nine_page_round_trip() {
        let mut indicator = indicator(9);
        let initial = indicator.window().unwrap().clone();

        for page in (1..=8).chain((0..=7).rev()) {
            indicator.on_page_settled(page).unwrap();
            assert_single_selection(&indicator);
            assert_eq!(indicator.window().unwrap().slots().len(), 9);
        }

        let window = indicator.window().unwrap();
        assert_eq!(window.types(), initial.types());
        for (slot, start) in window.slots().iter().zip(initial.slots()) {
            assert!((slot.center.x - start.center.x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nine_pages_last_page() {
        let mut indicator = indicator(9);
        for page in 1..=8 {
            indicator.on_page_settled(page).unwrap();
        }
        assert_eq!(types(&indicator), vec![NO, NO, S, M, N, N, N, N, SEL]);
    }

    #[test]
    fn test_twenty_page_conveyor_keeps_length() {
        let mut indicator = indicator(20);
        for page in (1..20).chain((0..19).rev()) {
            let frame = indicator.on_page_settled(page).unwrap().unwrap();
            assert_eq!(frame.targets.len(), 10);
            assert_single_selection(&indicator);
            assert!(frame.selected().is_some());
        }
        assert_eq!(types(&indicator), vec![SEL, N, N, N, N, M, S, NO, NO, NO]);
    }

    #[test]
    fn test_small_counts_have_no_placeholders() {
        for count in 2..=7 {
            let mut indicator = indicator(count);
            for page in (1..count as isize).chain((0..count as isize - 1).rev()) {
                indicator.on_page_settled(page).unwrap();
                let window = indicator.window().unwrap();
                assert_eq!(window.slots().len(), count);
                assert!(window.slots().iter().all(|s| s.dot_type.is_visible()));
                assert_single_selection(&indicator);
            }
        }
    }

    #[test]
    fn test_attach_and_reattach() {
        let mut indicator = Indicator::default();
        let mut pager = Pager::new(12);
        pager.next();

        let frame = indicator.attach(&pager).unwrap().unwrap();
        assert_eq!(frame.types()[1], SEL);
        assert_eq!(indicator.page_index(), 1);

        pager.set_item_count(6);
        let frame = indicator.reattach(&pager).unwrap().unwrap();
        assert_eq!(frame.targets.len(), 6);
        assert_eq!(indicator.item_count(), 6);
        assert_eq!(indicator.page_index(), 1);
    }

    #[test]
    fn test_configure_rebuilds_at_same_page() {
        let mut indicator = indicator(20);
        indicator.on_page_settled(1).unwrap();

        assert_eq!(indicator.configure(IndicatorConfig::default()), None);

        let bigger = IndicatorSettings {
            normal_radius: Some(10.0),
            ..Default::default()
        }
        .resolve();
        let frame = indicator.configure(bigger).unwrap();
        assert_eq!(frame.types()[1], SEL);
        assert_eq!(frame.targets[2].radius, 10.0);
        assert_eq!(indicator.page_index(), 1);
    }

    #[test]
    fn test_configure_replays_deep_page() {
        let mut indicator = indicator(9);
        for page in 1..=7 {
            indicator.on_page_settled(page).unwrap();
        }
        let before = types(&indicator);
        assert_eq!(before, vec![NO, S, M, N, N, N, N, SEL, M]);

        let bigger = IndicatorSettings {
            normal_radius: Some(10.0),
            ..Default::default()
        }
        .resolve();
        let frame = indicator.configure(bigger).unwrap();

        assert_eq!(frame.motion, Motion::Snap);
        assert_eq!(frame.recycled, None);
        assert_eq!(frame.types(), before);
        assert_eq!(indicator.window().unwrap().selected_index(), 7);
        assert_eq!(indicator.page_index(), 7);
    }

    #[test]
    fn test_reattach_to_fewer_pages_keeps_selection_on_page() {
        let mut indicator = Indicator::default();
        let mut pager = Pager::new(20);
        pager.jump(3);
        indicator.attach(&pager).unwrap();

        pager.set_item_count(4);
        let frame = indicator.reattach(&pager).unwrap().unwrap();
        assert_eq!(frame.types(), vec![N, N, N, SEL]);
        assert_eq!(frame.selected().map(|t| t.id), Some(crate::dot::SlotId::from(3)));
        assert_eq!(indicator.window().unwrap().selected_index(), 3);
    }

    #[test]
    fn test_attach_deep_page_matches_paging() {
        let mut paged = indicator(20);
        for page in 1..=13 {
            paged.on_page_settled(page).unwrap();
        }

        let mut pager = Pager::new(20);
        pager.jump(13);
        let mut attached = Indicator::default();
        let frame = attached.attach(&pager).unwrap().unwrap();

        assert_eq!(frame.motion, Motion::Snap);
        assert_eq!(attached.window(), paged.window());
    }

    #[test]
    fn test_seek_skips_like_paging() {
        let mut seeking = indicator(20);
        let frame = seeking.seek(13).unwrap().unwrap();
        assert_eq!(frame.motion, Motion::Snap);
        assert_eq!(frame.recycled, None);

        let mut paged = indicator(20);
        for page in 1..=13 {
            paged.on_page_settled(page).unwrap();
        }
        assert_eq!(seeking.window(), paged.window());

        // a neighbouring page is an ordinary settle
        assert_eq!(seeking.seek(14), paged.on_page_settled(14));
        assert_eq!(seeking.seek(14), Ok(None));
        assert!(seeking.seek(20).is_err());
    }
}
