//! Selection of the highlighted API navigation link from pane observations.

/// One intersection observation of a section inside the scrollable pane
#[derive(Debug, Clone, PartialEq)]
pub struct SectionObservation {
    pub section_id: String,
    /// Top edge of the section's client rect
    pub top: f64,
    pub intersecting: bool,
}

/// Pane state sampled when a batch of observations arrives
#[derive(Debug, Clone, Copy)]
pub struct PaneSnapshot<'a> {
    /// Whether the tab owning the pane is still the active tab
    pub owner_active: bool,
    pub scroll_top: f64,
    /// Section ids targeted by the nav links, in menu order
    pub link_targets: &'a [String],
}

/// Result of feeding one observation batch to the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneUpdate {
    /// The owning tab is no longer active; the batch must not touch the page
    Ignored,
    /// Reveal the intersecting sections, and move the highlight to
    /// `highlight` when set
    Applied { highlight: Option<String> },
}

impl PaneUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, PaneUpdate::Applied { .. })
    }

    pub fn highlight(&self) -> Option<&str> {
        match self {
            PaneUpdate::Applied { highlight } => highlight.as_deref(),
            PaneUpdate::Ignored => None,
        }
    }
}

/// Intersecting section whose top edge is nearest the viewport top
pub fn best_visible(batch: &[SectionObservation]) -> Option<&SectionObservation> {
    batch
        .iter()
        .filter(|obs| obs.intersecting)
        .fold(None, |best: Option<&SectionObservation>, obs| match best {
            Some(current) if current.top <= obs.top => Some(current),
            _ => Some(obs),
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLinkTracker {
    current: Option<String>,
}

impl ActiveLinkTracker {
    /// Section id of the highlighted link
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Consume a batch of observations.
    ///
    /// Batches arriving after the owning tab was left are ignored as a whole.
    pub fn observe(&mut self, batch: &[SectionObservation], pane: PaneSnapshot<'_>) -> PaneUpdate {
        if !pane.owner_active {
            return PaneUpdate::Ignored;
        }
        PaneUpdate::Applied {
            highlight: self.pick(batch, pane),
        }
    }

    fn pick(&mut self, batch: &[SectionObservation], pane: PaneSnapshot<'_>) -> Option<String> {
        if let Some(best) = best_visible(batch) {
            if !pane.link_targets.contains(&best.section_id) {
                return None;
            }
            let id = best.section_id.clone();
            return self.highlight(&id);
        }
        if self.current.is_some() && pane.scroll_top <= 0.0 {
            let first = pane.link_targets.first()?.clone();
            return self.highlight(&first);
        }
        None
    }

    /// First link gets highlighted when the pane starts at its top with nothing selected
    pub fn settle_initial(&mut self, pane: PaneSnapshot<'_>) -> Option<String> {
        if !pane.owner_active || self.current.is_some() || pane.scroll_top > 0.0 {
            return None;
        }
        let first = pane.link_targets.first()?.clone();
        self.highlight(&first)
    }

    /// Explicit selection from a nav link click
    pub fn select(&mut self, section_id: &str) {
        self.current = Some(section_id.to_string());
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    fn highlight(&mut self, section_id: &str) -> Option<String> {
        if self.current.as_deref() == Some(section_id) {
            return None;
        }
        self.current = Some(section_id.to_string());
        Some(section_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: &str, top: f64, intersecting: bool) -> SectionObservation {
        SectionObservation {
            section_id: id.to_string(),
            top,
            intersecting,
        }
    }

    fn links() -> Vec<String> {
        vec!["intro".into(), "usage".into(), "reference".into()]
    }

    fn pane(links: &[String], scroll_top: f64) -> PaneSnapshot<'_> {
        PaneSnapshot {
            owner_active: true,
            scroll_top,
            link_targets: links,
        }
    }

    #[test]
    fn test_best_visible_picks_smallest_top() {
        let batch = vec![
            obs("usage", 120.0, true),
            obs("intro", -40.0, true),
            obs("reference", -200.0, false),
        ];
        assert_eq!(best_visible(&batch).unwrap().section_id, "intro");
        assert!(best_visible(&[obs("intro", 0.0, false)]).is_none());
    }

    #[test]
    fn test_best_visible_keeps_first_on_tie() {
        let batch = vec![obs("usage", 10.0, true), obs("intro", 10.0, true)];
        assert_eq!(best_visible(&batch).unwrap().section_id, "usage");
    }

    #[test]
    fn test_highlight_only_on_change() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        let batch = vec![obs("usage", 5.0, true)];
        assert_eq!(tracker.observe(&batch, pane(&links, 300.0)).highlight(), Some("usage"));
        let again = tracker.observe(&batch, pane(&links, 310.0));
        assert!(again.is_applied());
        assert_eq!(again.highlight(), None);
        assert_eq!(tracker.current(), Some("usage"));
    }

    #[test]
    fn test_ignores_batches_when_tab_inactive() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        let snapshot = PaneSnapshot {
            owner_active: false,
            ..pane(&links, 0.0)
        };
        assert_eq!(tracker.observe(&[obs("usage", 5.0, true)], snapshot), PaneUpdate::Ignored);
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.settle_initial(snapshot), None);
    }

    #[test]
    fn test_section_without_link_is_ignored() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        assert_eq!(
            tracker.observe(&[obs("appendix", 5.0, true)], pane(&links, 100.0)),
            PaneUpdate::Applied { highlight: None }
        );
    }

    #[test]
    fn test_falls_back_to_first_link_at_top() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        tracker.observe(&[obs("reference", 0.0, true)], pane(&links, 900.0));

        // scrolled away from the top: nothing changes
        let away = tracker.observe(&[obs("reference", 0.0, false)], pane(&links, 50.0));
        assert_eq!(away.highlight(), None);
        // back at the top with nothing intersecting
        let top = tracker.observe(&[obs("reference", 0.0, false)], pane(&links, 0.0));
        assert_eq!(top.highlight(), Some("intro"));
    }

    #[test]
    fn test_no_fallback_without_previous_highlight() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        assert_eq!(tracker.observe(&[], pane(&links, 0.0)).highlight(), None);
    }

    #[test]
    fn test_settle_initial() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        assert_eq!(tracker.settle_initial(pane(&links, 40.0)), None);
        assert_eq!(tracker.settle_initial(pane(&links, 0.0)), Some("intro".into()));
        assert_eq!(tracker.settle_initial(pane(&links, 0.0)), None);
        assert_eq!(ActiveLinkTracker::default().settle_initial(pane(&[], 0.0)), None);
    }

    #[test]
    fn test_select_then_reset() {
        let links = links();
        let mut tracker = ActiveLinkTracker::default();
        tracker.select("reference");
        assert_eq!(
            tracker.observe(&[obs("reference", 3.0, true)], pane(&links, 400.0)).highlight(),
            None
        );
        tracker.reset();
        assert_eq!(tracker.current(), None);
    }
}
