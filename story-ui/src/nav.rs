//! Navigation state machine for the story screens.
//!
//! Which view sits on top is not tracked with independent boolean flags;
//! the whole surface is one enum and every legal transition is spelled out
//! here, so two modals can never be open at once.
//!
//! The one deliberate asymmetry: Cancel from the full-story view returns to
//! the version-history modal, while Back to Grid always returns to the
//! gallery no matter where it is pressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    /// The saved-stories grid with the filter bar.
    #[default]
    Gallery,
    /// The version-history modal for one version group.
    VersionHistory,
    /// One version opened for reading/editing.
    FullView,
    /// The diff between a selected version and the latest version.
    Compare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    OpenHistory,
    CloseHistory,
    OpenVersion,
    Cancel,
    SaveComplete,
    CompareSelected,
    CloseCompare,
    BackToGrid,
}

/// Transition table. Events that make no sense for the current surface
/// leave it unchanged.
pub fn transition(surface: Surface, event: NavEvent) -> Surface {
    use NavEvent::*;
    use Surface::*;

    match (surface, event) {
        (_, BackToGrid) => Gallery,
        (Gallery, OpenHistory) => VersionHistory,
        (VersionHistory, OpenVersion) => FullView,
        (VersionHistory, CompareSelected) => Compare,
        (VersionHistory, CloseHistory) => Gallery,
        (FullView, Cancel) | (FullView, SaveComplete) => VersionHistory,
        (Compare, CloseCompare) => VersionHistory,
        (current, _) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_from_full_view_returns_to_history_not_gallery() {
        assert_eq!(
            transition(Surface::FullView, NavEvent::Cancel),
            Surface::VersionHistory
        );
    }

    #[test]
    fn back_to_grid_reaches_gallery_from_every_surface() {
        for surface in [
            Surface::Gallery,
            Surface::VersionHistory,
            Surface::FullView,
            Surface::Compare,
        ] {
            assert_eq!(transition(surface, NavEvent::BackToGrid), Surface::Gallery);
        }
    }

    #[test]
    fn compare_closes_back_to_history() {
        let surface = transition(Surface::VersionHistory, NavEvent::CompareSelected);
        assert_eq!(surface, Surface::Compare);
        assert_eq!(
            transition(surface, NavEvent::CloseCompare),
            Surface::VersionHistory
        );
    }

    #[test]
    fn history_opens_only_from_gallery() {
        assert_eq!(
            transition(Surface::Gallery, NavEvent::OpenHistory),
            Surface::VersionHistory
        );
        assert_eq!(
            transition(Surface::Compare, NavEvent::OpenHistory),
            Surface::Compare
        );
    }

    #[test]
    fn unrelated_events_are_no_ops() {
        assert_eq!(
            transition(Surface::Gallery, NavEvent::Cancel),
            Surface::Gallery
        );
        assert_eq!(
            transition(Surface::FullView, NavEvent::CompareSelected),
            Surface::FullView
        );
    }
}
