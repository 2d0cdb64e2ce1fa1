//! Showcase modal state machine.
//!
//! `Closed -> Open(index) -> Closed`, with a nested frame state
//! `Loading -> Ready | Failed` for the embedded page.

use crate::site::{Catalog, CatalogEntry};

/// Source that halts whatever the frame was showing
pub const BLANK_FRAME: &str = "about:blank";

/// Delay between clearing the frame and pointing it at the next page
pub const FRAME_SETTLE_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// What the caller has to do after the modal (re)opened an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePlan {
    /// Wait for the settle delay, then call [`ShowcaseModel::settle`]
    Settle { generation: u64 },
    /// Entry has nothing to load; the placeholder is already showing
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Closed,
    Navigated(FramePlan),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open { index: usize, frame: FrameState },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseModel {
    catalog: Catalog,
    phase: Phase,
    // Bumped on every open and close so late settles are dropped
    generation: u64,
    frame_source: Option<String>,
}

impl ShowcaseModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            phase: Phase::Closed,
            generation: 0,
            frame_source: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Open { index, .. } => Some(index),
            Phase::Closed => None,
        }
    }

    pub fn current(&self) -> Option<&CatalogEntry> {
        self.open_index().and_then(|index| self.catalog.get(index))
    }

    pub fn frame_state(&self) -> Option<FrameState> {
        match self.phase {
            Phase::Open { frame, .. } => Some(frame),
            Phase::Closed => None,
        }
    }

    /// Value for the frame's `src` attribute
    pub fn frame_source(&self) -> &str {
        self.frame_source.as_deref().unwrap_or(BLANK_FRAME)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Open the entry at `index`. Out-of-range indices leave the state untouched.
    pub fn open(&mut self, index: usize) -> Option<FramePlan> {
        let available = self.catalog.get(index)?.loadable_url().is_some();
        self.generation += 1;
        self.frame_source = None;
        if available {
            self.phase = Phase::Open {
                index,
                frame: FrameState::Loading,
            };
            Some(FramePlan::Settle {
                generation: self.generation,
            })
        } else {
            self.phase = Phase::Open {
                index,
                frame: FrameState::Failed,
            };
            Some(FramePlan::Unavailable)
        }
    }

    pub fn open_by_id(&mut self, id: &str) -> Option<FramePlan> {
        let index = self.catalog.index_of(id)?;
        self.open(index)
    }

    /// Move by one entry; clamps at both ends of the catalog
    pub fn navigate(&mut self, direction: Direction) -> Option<FramePlan> {
        let index = self.open_index()?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1)?,
            Direction::Next => index + 1,
        };
        self.open(target)
    }

    /// Returns whether the modal was open
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.phase = Phase::Closed;
        self.frame_source = None;
        self.generation += 1;
        was_open
    }

    /// Point the frame at the open entry once the settle delay elapsed.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let Phase::Open {
            index,
            frame: FrameState::Loading,
        } = self.phase
        else {
            return false;
        };
        let Some(url) = self.catalog.get(index).and_then(|e| e.loadable_url()) else {
            return false;
        };
        self.frame_source = Some(url.to_string());
        true
    }

    /// Frame `load` event. Loads of the blank page are ignored.
    pub fn frame_loaded(&mut self) -> bool {
        self.finish_frame(FrameState::Ready)
    }

    /// Frame `error` event
    pub fn frame_failed(&mut self) -> bool {
        self.finish_frame(FrameState::Failed)
    }

    fn finish_frame(&mut self, outcome: FrameState) -> bool {
        if self.frame_source.is_none() {
            return false;
        }
        match self.phase {
            Phase::Open {
                index,
                frame: FrameState::Loading,
            } => {
                self.phase = Phase::Open {
                    index,
                    frame: outcome,
                };
                true
            }
            _ => false,
        }
    }

    pub fn prev_disabled(&self) -> bool {
        self.open_index().map_or(true, |index| index == 0)
    }

    pub fn next_disabled(&self) -> bool {
        self.open_index()
            .map_or(true, |index| index + 1 >= self.catalog.len())
    }

    /// Keyboard contract while the modal is open
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        let plan = match key {
            "Escape" => {
                self.close();
                return KeyOutcome::Closed;
            }
            "ArrowLeft" if !self.prev_disabled() => self.navigate(Direction::Previous),
            "ArrowRight" if !self.next_disabled() => self.navigate(Direction::Next),
            _ => None,
        };
        plan.map_or(KeyOutcome::Ignored, KeyOutcome::Navigated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(len: usize) -> Catalog {
        Catalog::new(
            (0..len)
                .map(|i| CatalogEntry {
                    id: format!("c{}", i),
                    title: format!("Component {}", i),
                    subtitle: format!("Subtitle {}", i),
                    icon: format!("fas fa-icon-{}", i),
                    content_url: Some(format!("widgets/c{}/index.html", i)),
                    available: true,
                })
                .collect(),
        )
    }

    #[test]
    fn test_open_shows_entry() {
        let mut model = ShowcaseModel::new(catalog(3));
        let plan = model.open(1);
        assert!(matches!(plan, Some(FramePlan::Settle { .. })));
        let entry = model.current().unwrap();
        assert_eq!(entry.title, "Component 1");
        assert_eq!(entry.subtitle, "Subtitle 1");
        assert_eq!(entry.icon, "fas fa-icon-1");
        assert_eq!(model.frame_state(), Some(FrameState::Loading));
        assert_eq!(model.frame_source(), BLANK_FRAME);
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut model = ShowcaseModel::new(catalog(3));
        assert_eq!(model.open(3), None);
        assert!(!model.is_open());
    }

    #[test]
    fn test_twelve_entry_boundaries() {
        let mut model = ShowcaseModel::new(catalog(12));
        model.open(0);
        assert!(model.prev_disabled());
        assert!(!model.next_disabled());

        assert_eq!(model.handle_key("ArrowLeft"), KeyOutcome::Ignored);
        assert_eq!(model.open_index(), Some(0));

        for _ in 0..11 {
            assert!(model.navigate(Direction::Next).is_some());
        }
        assert_eq!(model.open_index(), Some(11));
        assert!(model.next_disabled());
        assert!(!model.prev_disabled());

        assert_eq!(model.navigate(Direction::Next), None);
        assert_eq!(model.handle_key("ArrowRight"), KeyOutcome::Ignored);
        assert_eq!(model.open_index(), Some(11));
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut model = ShowcaseModel::new(catalog(4));
        model.open(2);
        assert!(matches!(model.handle_key("ArrowLeft"), KeyOutcome::Navigated(_)));
        assert_eq!(model.open_index(), Some(1));
        assert!(matches!(model.handle_key("ArrowRight"), KeyOutcome::Navigated(_)));
        assert_eq!(model.open_index(), Some(2));
        assert_eq!(model.handle_key("Enter"), KeyOutcome::Ignored);
    }

    #[test]
    fn test_escape_closes_and_keys_ignored_when_closed() {
        let mut model = ShowcaseModel::new(catalog(4));
        assert_eq!(model.handle_key("Escape"), KeyOutcome::Ignored);
        model.open(1);
        assert_eq!(model.handle_key("Escape"), KeyOutcome::Closed);
        assert!(!model.is_open());
        assert_eq!(model.handle_key("ArrowRight"), KeyOutcome::Ignored);
    }

    #[test]
    fn test_frame_lifecycle() {
        let mut model = ShowcaseModel::new(catalog(2));
        let Some(FramePlan::Settle { generation }) = model.open(0) else {
            panic!("expected settle plan");
        };
        // load of the blank page does not count
        assert!(!model.frame_loaded());
        assert!(model.settle(generation));
        assert_eq!(model.frame_source(), "widgets/c0/index.html");
        assert!(model.frame_loaded());
        assert_eq!(model.frame_state(), Some(FrameState::Ready));
        // later events do not move a finished frame
        assert!(!model.frame_failed());
    }

    #[test]
    fn test_frame_error_shows_placeholder() {
        let mut model = ShowcaseModel::new(catalog(2));
        let Some(FramePlan::Settle { generation }) = model.open(1) else {
            panic!("expected settle plan");
        };
        model.settle(generation);
        assert!(model.frame_failed());
        assert_eq!(model.frame_state(), Some(FrameState::Failed));
    }

    #[test]
    fn test_unavailable_entry_never_loads() {
        let mut entries = catalog(2).entries().to_vec();
        entries[1].available = false;
        let mut model = ShowcaseModel::new(Catalog::new(entries));

        assert_eq!(model.open(1), Some(FramePlan::Unavailable));
        assert_eq!(model.frame_state(), Some(FrameState::Failed));
        assert_eq!(model.frame_source(), BLANK_FRAME);
        assert!(!model.frame_loaded());
    }

    #[test]
    fn test_stale_settle_is_dropped() {
        let mut model = ShowcaseModel::new(catalog(3));
        let Some(FramePlan::Settle { generation: first }) = model.open(0) else {
            panic!("expected settle plan");
        };
        model.navigate(Direction::Next);
        assert!(!model.settle(first));
        assert_eq!(model.frame_source(), BLANK_FRAME);

        model.close();
        let Some(FramePlan::Settle { generation }) = model.open(2) else {
            panic!("expected settle plan");
        };
        model.close();
        assert!(!model.settle(generation));
    }

    #[test]
    fn test_close_resets_frame_source() {
        let mut model = ShowcaseModel::new(catalog(2));
        let Some(FramePlan::Settle { generation }) = model.open(0) else {
            panic!("expected settle plan");
        };
        model.settle(generation);
        model.frame_loaded();
        assert!(model.close());
        assert_eq!(model.frame_source(), BLANK_FRAME);
        assert_eq!(model.frame_state(), None);
        assert!(!model.close());
    }

    #[test]
    fn test_open_by_id() {
        let mut model = ShowcaseModel::new(catalog(5));
        assert!(model.open_by_id("c3").is_some());
        assert_eq!(model.open_index(), Some(3));
        assert_eq!(model.open_by_id("nope"), None);
        assert_eq!(model.open_index(), Some(3));
    }
}
