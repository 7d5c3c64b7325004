use dioxus::prelude::*;

use crate::diff::{diff_lines, DiffSegment};

fn segment_class(segment: &DiffSegment) -> &'static str {
    if segment.added {
        "diff-added"
    } else if segment.removed {
        "diff-removed"
    } else {
        "diff-unchanged"
    }
}

/// Read-only diff of the selected version against the group's latest.
/// Recomputed on every render from the two texts.
#[component]
pub fn CompareView(old_text: String, new_text: String, on_close: Callback<()>) -> Element {
    let segments = diff_lines(&old_text, &new_text);

    rsx! {
        div {
            class: "compare-view",
            div {
                class: "modal-header",
                h2 { "Compare with Latest" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_close.call(()),
                    "Back to History"
                }
            }
            div {
                class: "compare-legend",
                span {
                    span { class: "legend-swatch diff-removed" }
                    "Selected version"
                }
                span {
                    span { class: "legend-swatch diff-added" }
                    "Latest version"
                }
            }
            div {
                class: "compare-body",
                for (i, segment) in segments.iter().enumerate() {
                    span {
                        key: "{i}",
                        class: segment_class(segment),
                        "{segment.value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_classes_map_to_css() {
        let added = DiffSegment {
            value: "new\n".to_string(),
            added: true,
            removed: false,
        };
        let removed = DiffSegment {
            value: "old\n".to_string(),
            added: false,
            removed: true,
        };
        let unchanged = DiffSegment {
            value: "same\n".to_string(),
            added: false,
            removed: false,
        };
        assert_eq!(segment_class(&added), "diff-added");
        assert_eq!(segment_class(&removed), "diff-removed");
        assert_eq!(segment_class(&unchanged), "diff-unchanged");
    }
}
