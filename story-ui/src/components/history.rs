//! Version-history modal and the pure controller rules behind it.
//!
//! The modal renders one version group in backend order with a radio
//! selection. The rules that guard the lineage root, pick the latest
//! version, and drive the refresh/close decision live here as plain
//! functions so they are testable off-wasm.

use dioxus::prelude::*;
use std::future::Future;

use crate::api::ApiError;
use story_types::StoryVersion;

/// The `id` of the group's original (`version_id == 1`) member, falling
/// back to the opened story's id when the list has no original — the
/// remembered key for refresh calls.
pub fn resolve_original_id(versions: &[StoryVersion], fallback: i64) -> i64 {
    versions
        .iter()
        .find(|v| v.is_original())
        .map(|v| v.id)
        .unwrap_or(fallback)
}

/// The latest version of a group: maximal `version_id`, ties broken by
/// timestamp then id. A deterministic total order, not array position.
pub fn latest_version(versions: &[StoryVersion]) -> Option<&StoryVersion> {
    versions
        .iter()
        .max_by_key(|v| (v.version_id, v.timestamp, v.id))
}

/// Why a compare request could not proceed. Blocked outcomes are surfaced
/// as notices and never change which view is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareBlocked {
    EmptyGroup,
    NothingSelected,
    SelectionMissing,
}

/// The `(selected, latest)` content pair for the compare view, or the
/// reason the compare cannot happen.
pub fn compare_with_latest(
    versions: &[StoryVersion],
    selected_id: Option<i64>,
) -> Result<(String, String), CompareBlocked> {
    if versions.is_empty() {
        return Err(CompareBlocked::EmptyGroup);
    }
    let selected_id = selected_id.ok_or(CompareBlocked::NothingSelected)?;
    let selected = versions
        .iter()
        .find(|v| v.id == selected_id)
        .ok_or(CompareBlocked::SelectionMissing)?;
    let latest = latest_version(versions).ok_or(CompareBlocked::EmptyGroup)?;
    Ok((selected.content.clone(), latest.content.clone()))
}

/// The original may not be deleted while other versions still descend from
/// it; once it is the sole survivor it may go.
pub fn can_delete_version(version: &StoryVersion, group_len: usize) -> bool {
    !(version.is_original() && group_len > 1)
}

/// What to do with the history view after a refreshed group list arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRefresh {
    KeepOpen,
    CloseAndRefreshGallery,
}

pub fn refresh_outcome(versions: &[StoryVersion]) -> HistoryRefresh {
    if versions.is_empty() {
        HistoryRefresh::CloseAndRefreshGallery
    } else {
        HistoryRefresh::KeepOpen
    }
}

/// Delete every member of a group, one call in flight at a time. Individual
/// failures are logged and skipped; returns how many deletes failed.
pub async fn delete_versions_sequentially<F, Fut>(versions: &[StoryVersion], mut delete: F) -> usize
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut failed = 0;
    for version in versions {
        if let Err(e) = delete(version.id).await {
            log::warn!(
                "failed to delete version {} (v{}): {e}",
                version.id,
                version.version_id
            );
            failed += 1;
        }
    }
    failed
}

#[component]
pub fn VersionHistoryModal(
    versions: Vec<StoryVersion>,
    selected_version_id: Option<i64>,
    on_select: Callback<i64>,
    on_open: Callback<StoryVersion>,
    on_compare: Callback<()>,
    on_delete: Callback<StoryVersion>,
    on_delete_all: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    let group_len = versions.len();

    rsx! {
        div {
            class: "modal-scrim",
            div {
                class: "modal-panel modal-wide",
                div {
                    class: "modal-header",
                    h2 { "Version History" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }

                div {
                    class: "history-table",
                    div {
                        class: "history-row history-head",
                        div { "" }
                        div { "Version" }
                        div { "Title" }
                        div { "Status" }
                        div { "Saved" }
                        div { "" }
                    }
                    for version in versions.clone() {
                        {
                            let deletable = can_delete_version(&version, group_len);
                            let is_selected = selected_version_id == Some(version.id);
                            let version_for_select = version.clone();
                            let version_for_open = version.clone();
                            let version_for_delete = version.clone();
                            rsx! {
                                div {
                                    key: "{version.id}",
                                    class: if is_selected { "history-row selected" } else { "history-row" },
                                    div {
                                        input {
                                            r#type: "radio",
                                            name: "history-selection",
                                            checked: is_selected,
                                            oninput: move |_| on_select.call(version_for_select.id),
                                        }
                                    }
                                    div {
                                        if version.is_original() {
                                            "v{version.version_id} (original)"
                                        } else {
                                            "v{version.version_id}"
                                        }
                                    }
                                    div { "{version.title}" }
                                    div { "{version.status.as_str()}" }
                                    div { {version.timestamp.format("%Y-%m-%d %H:%M").to_string()} }
                                    div {
                                        class: "history-actions",
                                        button {
                                            class: "btn btn-ghost btn-small",
                                            onclick: move |_| on_open.call(version_for_open.clone()),
                                            "Open"
                                        }
                                        button {
                                            class: "btn btn-danger btn-small",
                                            disabled: !deletable,
                                            title: if deletable { "Delete this version" } else { "The original cannot be deleted while other versions exist" },
                                            onclick: move |_| on_delete.call(version_for_delete.clone()),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_compare.call(()),
                        "Compare with Latest"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_delete_all.call(()),
                        "Delete All Versions"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::cell::RefCell;
    use story_types::StoryStatus;

    fn version(id: i64, version_id: i64, ts_offset: i64) -> StoryVersion {
        StoryVersion {
            id,
            version_id,
            title: format!("story-{id}"),
            genre: "Fantasy".to_string(),
            setting: String::new(),
            characters: String::new(),
            themes: String::new(),
            details: String::new(),
            status: StoryStatus::Draft,
            content: format!("content-{id}"),
            user_id: "user-1".to_string(),
            timestamp: DateTime::from_timestamp(1_700_000_000 + ts_offset, 0).unwrap(),
        }
    }

    #[test]
    fn original_resolves_by_version_id_with_fallback() {
        let group = vec![version(10, 3, 2), version(4, 1, 0), version(9, 2, 1)];
        assert_eq!(resolve_original_id(&group, 99), 4);

        let no_original = vec![version(10, 3, 2), version(9, 2, 1)];
        assert_eq!(resolve_original_id(&no_original, 99), 99);
    }

    #[test]
    fn latest_is_max_version_id() {
        let group = vec![version(4, 1, 0), version(10, 3, 2), version(9, 2, 1)];
        assert_eq!(latest_version(&group).unwrap().id, 10);
    }

    #[test]
    fn latest_ties_break_on_timestamp_then_id() {
        let group = vec![version(4, 2, 5), version(7, 2, 1)];
        assert_eq!(latest_version(&group).unwrap().id, 4);

        let same_ts = vec![version(4, 2, 1), version(7, 2, 1)];
        assert_eq!(latest_version(&same_ts).unwrap().id, 7);
    }

    #[test]
    fn latest_of_empty_group_is_none() {
        assert_eq!(latest_version(&[]), None);
    }

    #[test]
    fn compare_requires_a_selection() {
        let group = vec![version(1, 1, 0), version(2, 2, 1)];
        assert_eq!(
            compare_with_latest(&group, None),
            Err(CompareBlocked::NothingSelected)
        );
    }

    #[test]
    fn compare_on_empty_group_is_blocked() {
        assert_eq!(
            compare_with_latest(&[], Some(1)),
            Err(CompareBlocked::EmptyGroup)
        );
        assert_eq!(compare_with_latest(&[], None), Err(CompareBlocked::EmptyGroup));
    }

    #[test]
    fn compare_with_stale_selection_is_blocked() {
        let group = vec![version(1, 1, 0)];
        assert_eq!(
            compare_with_latest(&group, Some(42)),
            Err(CompareBlocked::SelectionMissing)
        );
    }

    #[test]
    fn compare_pairs_selected_content_with_latest() {
        let group = vec![version(1, 1, 0), version(2, 2, 1), version(3, 3, 2)];
        assert_eq!(
            compare_with_latest(&group, Some(1)),
            Ok(("content-1".to_string(), "content-3".to_string()))
        );
    }

    #[test]
    fn original_is_protected_until_sole_survivor() {
        let original = version(4, 1, 0);
        let copy = version(9, 2, 1);
        assert!(!can_delete_version(&original, 2));
        assert!(can_delete_version(&original, 1));
        assert!(can_delete_version(&copy, 2));
    }

    #[test]
    fn empty_refresh_closes_history_and_refreshes_gallery() {
        assert_eq!(refresh_outcome(&[]), HistoryRefresh::CloseAndRefreshGallery);
        assert_eq!(
            refresh_outcome(&[version(4, 1, 0)]),
            HistoryRefresh::KeepOpen
        );
    }

    #[test]
    fn bulk_delete_attempts_every_member_despite_failures() {
        let group = vec![version(1, 1, 0), version(2, 2, 1), version(3, 3, 2)];
        let calls = RefCell::new(Vec::new());

        let failed = futures::executor::block_on(delete_versions_sequentially(&group, |id| {
            calls.borrow_mut().push(id);
            let result = if id == 2 {
                Err(ApiError::Http {
                    status: 500,
                    detail: "boom".to_string(),
                })
            } else {
                Ok(())
            };
            async move { result }
        }));

        assert_eq!(calls.into_inner(), vec![1, 2, 3]);
        assert_eq!(failed, 1);
    }

    #[test]
    fn bulk_delete_issues_one_call_per_member() {
        let group = vec![version(1, 1, 0), version(2, 2, 1)];
        let calls = RefCell::new(0usize);

        let failed = futures::executor::block_on(delete_versions_sequentially(&group, |_| {
            *calls.borrow_mut() += 1;
            async { Ok(()) }
        }));

        assert_eq!(*calls.borrow(), group.len());
        assert_eq!(failed, 0);
    }
}
