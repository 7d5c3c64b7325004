//! Line-level diff between two story texts.
//!
//! Thin wrapper over the `similar` crate that flattens its change stream
//! into tagged segments, with consecutive lines sharing a tag coalesced
//! into one run. Recomputed on every compare; nothing here is persisted.

use similar::{ChangeTag, TextDiff};

/// A run of text that is unchanged, added (present only in the new text),
/// or removed (present only in the old text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub value: String,
    pub added: bool,
    pub removed: bool,
}

impl DiffSegment {
    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }
}

/// Compute a line diff of `old` against `new`.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_lines(old, new);
    let mut segments: Vec<DiffSegment> = Vec::new();

    for change in diff.iter_all_changes() {
        let (added, removed) = match change.tag() {
            ChangeTag::Equal => (false, false),
            ChangeTag::Insert => (true, false),
            ChangeTag::Delete => (false, true),
        };

        match segments.last_mut() {
            Some(last) if last.added == added && last.removed == removed => {
                last.value.push_str(change.value());
            }
            _ => segments.push(DiffSegment {
                value: change.value().to_string(),
                added,
                removed,
            }),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaced_content_is_marked_removed_then_added() {
        let segments = diff_lines("A", "B");
        assert_eq!(
            segments,
            vec![
                DiffSegment {
                    value: "A".to_string(),
                    added: false,
                    removed: true,
                },
                DiffSegment {
                    value: "B".to_string(),
                    added: true,
                    removed: false,
                },
            ]
        );
    }

    #[test]
    fn identical_texts_yield_one_unchanged_segment() {
        let segments = diff_lines("one\ntwo\n", "one\ntwo\n");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_unchanged());
        assert_eq!(segments[0].value, "one\ntwo\n");
    }

    #[test]
    fn consecutive_changes_coalesce_into_runs() {
        let segments = diff_lines("keep\na\nb\nkeep\n", "keep\nx\ny\nkeep\n");
        let removed: Vec<_> = segments.iter().filter(|s| s.removed).collect();
        let added: Vec<_> = segments.iter().filter(|s| s.added).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].value, "a\nb\n");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].value, "x\ny\n");
    }

    #[test]
    fn empty_old_text_is_all_additions() {
        let segments = diff_lines("", "fresh\nstart\n");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].added);
        assert_eq!(segments[0].value, "fresh\nstart\n");
    }
}
