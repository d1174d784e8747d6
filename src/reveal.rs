use indextree::{Arena, NodeId};
use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    #[error("reveal threshold must be within (0, 1], got {0}")]
    Threshold(f64),
}

/// What to do with registered regions when the browser has no
/// `IntersectionObserver`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegradePolicy {
    /// Show every region as soon as it registers.
    #[default]
    RevealImmediately,
    /// Leave regions hidden.
    StayHidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub degrade: DegradePolicy,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            degrade: DegradePolicy::default(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), RevealError> {
        if self.threshold > 0.0 && self.threshold <= 1.0 {
            Ok(())
        } else {
            Err(RevealError::Threshold(self.threshold))
        }
    }
}

/// Handle to a registered region. Only meaningful for the registry that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(NodeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The region just became visible.
    Revealed,
    /// Nothing changed, either still hidden or already revealed.
    Unchanged,
    /// The region was released; the event is ignored.
    Released,
}

#[derive(Debug, Clone)]
enum Entry {
    Page,
    Region {
        revealed: bool,
    },
}

/// Arena of revealable regions for one mounted page.
///
/// Regions hang off a single page node. The `revealed` flag of a region only
/// ever goes from `false` to `true`; releasing a region removes it from the
/// arena and any later event for its handle is dropped.
#[derive(Debug)]
pub struct RevealRegistry {
    arena: Arena<Entry>,
    page: NodeId,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealRegistry {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let page = arena.new_node(Entry::Page);
        Self { arena, page }
    }

    pub fn register(&mut self) -> RegionId {
        let node = self.arena.new_node(Entry::Region { revealed: false });
        self.page.append(node, &mut self.arena);
        RegionId(node)
    }

    /// Feed one intersection event for `id`.
    pub fn record(&mut self, id: RegionId, intersecting: bool) -> Transition {
        if !intersecting {
            return match self.entry(id) {
                Some(_) => Transition::Unchanged,
                None => Transition::Released,
            };
        }
        self.reveal(id)
    }

    /// Mark `id` revealed without an intersection event.
    pub fn reveal(&mut self, id: RegionId) -> Transition {
        match self.entry_mut(id) {
            Some(Entry::Region { revealed }) if !*revealed => {
                *revealed = true;
                Transition::Revealed
            }
            Some(_) => Transition::Unchanged,
            None => Transition::Released,
        }
    }

    pub fn release(&mut self, id: RegionId) {
        if self.entry(id).is_some() {
            id.0.remove(&mut self.arena);
        }
    }

    pub fn is_revealed(&self, id: RegionId) -> bool {
        matches!(self.entry(id), Some(Entry::Region { revealed: true }))
    }

    pub fn len(&self) -> usize {
        self.page.children(&self.arena).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn revealed_count(&self) -> usize {
        self.page
            .children(&self.arena)
            .filter(|n| matches!(self.arena[*n].get(), Entry::Region { revealed: true }))
            .count()
    }

    fn is_live(&self, id: RegionId) -> bool {
        // stamps catch a slot reused by a later registration
        id.0 != self.page && !id.0.is_removed(&self.arena)
    }

    fn entry(&self, id: RegionId) -> Option<&Entry> {
        if !self.is_live(id) {
            return None;
        }
        self.arena.get(id.0).map(|n| n.get())
    }

    fn entry_mut(&mut self, id: RegionId) -> Option<&mut Entry> {
        if !self.is_live(id) {
            return None;
        }
        self.arena.get_mut(id.0).map(|n| n.get_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_stays_hidden_until_intersecting() {
        let mut registry = RevealRegistry::new();
        let id = registry.register();

        for _ in 0..5 {
            assert_eq!(registry.record(id, false), Transition::Unchanged);
        }
        assert!(!registry.is_revealed(id));
        assert_eq!(registry.revealed_count(), 0);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut registry = RevealRegistry::new();
        let id = registry.register();

        assert_eq!(registry.record(id, true), Transition::Revealed);
        assert!(registry.is_revealed(id));

        // scrolling away and back never changes it again
        assert_eq!(registry.record(id, false), Transition::Unchanged);
        assert_eq!(registry.record(id, true), Transition::Unchanged);
        assert_eq!(registry.reveal(id), Transition::Unchanged);
        assert!(registry.is_revealed(id));
    }

    #[test]
    fn test_regions_reveal_independently() {
        let mut registry = RevealRegistry::new();
        let top = registry.register();
        let middle = registry.register();
        let bottom = registry.register();
        assert_eq!(registry.len(), 3);

        // bottom first: order follows scroll position, not registration
        assert_eq!(registry.record(bottom, true), Transition::Revealed);
        assert!(!registry.is_revealed(top));
        assert!(!registry.is_revealed(middle));

        assert_eq!(registry.record(top, true), Transition::Revealed);
        assert_eq!(registry.revealed_count(), 2);
        assert!(!registry.is_revealed(middle));
    }

    #[test]
    fn test_released_region_ignores_events() {
        let mut registry = RevealRegistry::new();
        let keep = registry.register();
        let gone = registry.register();

        registry.release(gone);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.record(gone, true), Transition::Released);
        assert_eq!(registry.reveal(gone), Transition::Released);
        assert!(!registry.is_revealed(gone));

        // releasing twice is harmless
        registry.release(gone);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.record(keep, true), Transition::Revealed);

        // a new registration may reuse the slot; the stale handle stays dead
        let fresh = registry.register();
        assert_eq!(registry.record(gone, true), Transition::Released);
        assert!(!registry.is_revealed(fresh));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(RevealConfig::default().validate().is_ok());
        let full = RevealConfig {
            threshold: 1.0,
            ..Default::default()
        };
        assert!(full.validate().is_ok());
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let config = RevealConfig {
                threshold: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }
}
