//! Saved-stories screen: filter bar, story grid, and the surface state
//! machine that hosts the version-history, editor, and compare views.
//!
//! All mutation goes through the backend; every handler refetches the data
//! it changed rather than patching local state optimistically.

use dioxus::prelude::*;

use crate::api::{self, ApiError};
use crate::components::compare::CompareView;
use crate::components::dialogs::ConfirmDialog;
use crate::components::full_view::FullStoryView;
use crate::components::history::{
    self, compare_with_latest, delete_versions_sequentially, refresh_outcome, CompareBlocked,
    HistoryRefresh, VersionHistoryModal,
};
use crate::components::styles;
use crate::nav::{transition, NavEvent, Surface};
use story_types::{
    SortField, SortOrder, StoryFilters, StoryStatus, StoryVersion, UpdateStoryRequest,
};

/// Which destructive action is awaiting confirmation, if any.
#[derive(Clone, PartialEq)]
enum ConfirmState {
    None,
    DeleteStory(StoryVersion),
    DeleteVersion(StoryVersion),
    DeleteGroup(StoryVersion),
}

fn describe_error(context: &str, err: &ApiError) -> String {
    format!("{context}: {err}")
}

#[component]
pub fn StoryGallery() -> Element {
    let mut filters = use_signal(StoryFilters::default);
    let mut stories = use_signal(Vec::<StoryVersion>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let mut surface = use_signal(|| Surface::Gallery);
    let mut versions = use_signal(Vec::<StoryVersion>::new);
    let mut original_story_id = use_signal(|| None::<i64>);
    let mut selected_version_id = use_signal(|| None::<i64>);
    let mut open_version = use_signal(|| None::<StoryVersion>);
    let mut compare_pair = use_signal(|| None::<(String, String)>);
    let mut confirm = use_signal(|| ConfirmState::None);

    let load_stories = use_callback(move |_: ()| {
        let current = filters();
        spawn(async move {
            loading.set(true);
            match api::fetch_stories(&current).await {
                Ok(list) => {
                    error.set(None);
                    stories.set(list);
                }
                Err(e) => {
                    log::error!("fetching stories failed: {e}");
                    error.set(Some(describe_error("Could not load stories", &e)));
                }
            }
            loading.set(false);
        });
    });

    // Initial load plus refetch whenever any filter field changes.
    use_effect(move || {
        let _ = filters();
        load_stories.call(());
    });

    // Refresh the open history group after a version-level change. An empty
    // group means the whole lineage is gone, so fall back to the gallery.
    let refresh_history = use_callback(move |_: ()| {
        let Some(story_id) = original_story_id() else {
            return;
        };
        spawn(async move {
            match api::fetch_version_history(story_id).await {
                Ok(group) => match refresh_outcome(&group) {
                    HistoryRefresh::KeepOpen => {
                        // Drop a selection that no longer exists.
                        if let Some(selected) = selected_version_id() {
                            if !group.iter().any(|v| v.id == selected) {
                                selected_version_id.set(None);
                            }
                        }
                        versions.set(group);
                    }
                    HistoryRefresh::CloseAndRefreshGallery => {
                        versions.set(Vec::new());
                        selected_version_id.set(None);
                        original_story_id.set(None);
                        surface.set(Surface::Gallery);
                        load_stories.call(());
                    }
                },
                Err(e) => {
                    log::error!("refreshing version history failed: {e}");
                    error.set(Some(describe_error("Could not refresh history", &e)));
                }
            }
        });
    });

    let open_history = use_callback(move |story: StoryVersion| {
        spawn(async move {
            match api::fetch_version_history(story.id).await {
                Ok(group) => {
                    original_story_id.set(Some(history::resolve_original_id(&group, story.id)));
                    selected_version_id.set(None);
                    versions.set(group);
                    error.set(None);
                    surface.set(transition(surface(), NavEvent::OpenHistory));
                }
                Err(e) => {
                    log::error!("fetching version history failed: {e}");
                    error.set(Some(describe_error("Could not load version history", &e)));
                }
            }
        });
    });

    let confirm_delete_version = use_callback(move |version: StoryVersion| {
        spawn(async move {
            match api::delete_version(version.id).await {
                Ok(()) => {
                    notice.set(Some(format!("Deleted v{}", version.version_id)));
                    refresh_history.call(());
                }
                Err(e) => {
                    log::error!("deleting version {} failed: {e}", version.id);
                    error.set(Some(describe_error("Could not delete version", &e)));
                }
            }
        });
    });

    // Bulk delete always lands back on the gallery, even when some deletes
    // fail, because the group's membership is now unknown.
    let confirm_delete_group = use_callback(move |story: StoryVersion| {
        spawn(async move {
            match api::fetch_version_history(story.id).await {
                Ok(group) => {
                    let failed =
                        delete_versions_sequentially(&group, |id| api::delete_version(id)).await;
                    if failed > 0 {
                        error.set(Some(format!(
                            "{failed} of {} versions could not be deleted",
                            group.len()
                        )));
                    } else {
                        notice.set(Some(format!("Deleted {} versions", group.len())));
                    }
                }
                Err(e) => {
                    log::error!("fetching group for bulk delete failed: {e}");
                    error.set(Some(describe_error("Could not delete versions", &e)));
                }
            }
            versions.set(Vec::new());
            selected_version_id.set(None);
            original_story_id.set(None);
            surface.set(Surface::Gallery);
            load_stories.call(());
        });
    });

    let confirm_delete_story = use_callback(move |story: StoryVersion| {
        spawn(async move {
            match api::delete_story(story.id).await {
                Ok(()) => {
                    notice.set(Some(format!("Deleted \"{}\"", story.title)));
                    load_stories.call(());
                }
                Err(e) => {
                    log::error!("deleting story {} failed: {e}", story.id);
                    error.set(Some(describe_error("Could not delete story", &e)));
                }
            }
        });
    });

    let compare_selected = use_callback(move |_: ()| {
        match compare_with_latest(&versions(), selected_version_id()) {
            Ok(pair) => {
                compare_pair.set(Some(pair));
                surface.set(transition(surface(), NavEvent::CompareSelected));
            }
            Err(CompareBlocked::EmptyGroup) => {
                notice.set(Some("There are no versions to compare.".to_string()));
            }
            Err(CompareBlocked::NothingSelected) => {
                notice.set(Some("Select a version to compare first.".to_string()));
            }
            Err(CompareBlocked::SelectionMissing) => {
                notice.set(Some("The selected version is no longer available.".to_string()));
            }
        }
    });

    let save_version = use_callback(move |request: UpdateStoryRequest| {
        spawn(async move {
            match api::update_story(&request).await {
                Ok(saved) => {
                    notice.set(Some(format!("Saved v{} of \"{}\"", saved.version_id, saved.title)));
                    refresh_history.call(());
                    load_stories.call(());
                    open_version.set(None);
                    surface.set(transition(surface(), NavEvent::SaveComplete));
                }
                Err(e) => {
                    log::error!("saving story failed: {e}");
                    error.set(Some(describe_error("Could not save story", &e)));
                }
            }
        });
    });

    let back_to_grid = use_callback(move |_: ()| {
        open_version.set(None);
        compare_pair.set(None);
        versions.set(Vec::new());
        selected_version_id.set(None);
        original_story_id.set(None);
        surface.set(transition(surface(), NavEvent::BackToGrid));
    });

    let current_filters = filters();
    let current_surface = surface();
    let status_value = match current_filters.status {
        None => "all",
        Some(StoryStatus::Draft) => "draft",
        Some(StoryStatus::Completed) => "completed",
    };

    rsx! {
        style { {styles::GALLERY_STYLES} }

        div {
            class: "stories-screen",

            div {
                class: "stories-header",
                h1 { "Saved Stories" }
                if loading() {
                    span { class: "filter-label", "Loading\u{2026}" }
                }
            }

            if let Some(message) = error() {
                div {
                    class: "banner banner-error",
                    span { "{message}" }
                    button {
                        class: "banner-dismiss",
                        onclick: move |_| error.set(None),
                        "\u{00d7}"
                    }
                }
            }

            if let Some(message) = notice() {
                div {
                    class: "banner banner-notice",
                    span { "{message}" }
                    button {
                        class: "banner-dismiss",
                        onclick: move |_| notice.set(None),
                        "\u{00d7}"
                    }
                }
            }

            match current_surface {
                Surface::Gallery => rsx! {
                    div {
                        class: "filter-bar",
                        input {
                            r#type: "text",
                            placeholder: "Filter by genre",
                            value: "{current_filters.genre}",
                            oninput: move |e| filters.with_mut(|f| f.genre = e.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Filter by title",
                            value: "{current_filters.title}",
                            oninput: move |e| filters.with_mut(|f| f.title = e.value()),
                        }
                        select {
                            value: status_value,
                            oninput: move |e| filters.with_mut(|f| {
                                f.status = match e.value().as_str() {
                                    "draft" => Some(StoryStatus::Draft),
                                    "completed" => Some(StoryStatus::Completed),
                                    _ => None,
                                };
                            }),
                            option { value: "all", "All statuses" }
                            option { value: "draft", "Draft" }
                            option { value: "completed", "Completed" }
                        }
                        span { class: "filter-label", "Sort by" }
                        select {
                            value: current_filters.sort_by.as_str(),
                            oninput: move |e| filters.with_mut(|f| {
                                f.sort_by = match e.value().as_str() {
                                    "title" => SortField::Title,
                                    "genre" => SortField::Genre,
                                    _ => SortField::Timestamp,
                                };
                            }),
                            option { value: "timestamp", "Date saved" }
                            option { value: "title", "Title" }
                            option { value: "genre", "Genre" }
                        }
                        select {
                            value: current_filters.order.as_str(),
                            oninput: move |e| filters.with_mut(|f| {
                                f.order = if e.value() == "asc" {
                                    SortOrder::Asc
                                } else {
                                    SortOrder::Desc
                                };
                            }),
                            option { value: "desc", "Newest first" }
                            option { value: "asc", "Oldest first" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| load_stories.call(()),
                            "Apply"
                        }
                    }

                    if stories().is_empty() && !loading() {
                        div {
                            class: "empty-state",
                            "No stories match the current filters."
                        }
                    } else {
                        div {
                            class: "story-grid",
                            for story in stories() {
                                {
                                    let story_for_open = story.clone();
                                    let story_for_delete = story.clone();
                                    let story_for_group = story.clone();
                                    let excerpt: String = story.content.chars().take(200).collect();
                                    rsx! {
                                        div {
                                            key: "{story.id}",
                                            class: "story-card",
                                            h3 { "{story.title}" }
                                            div {
                                                class: "story-card-meta",
                                                span { "{story.genre}" }
                                                span {
                                                    class: if story.status == StoryStatus::Completed {
                                                        "status-badge status-completed"
                                                    } else {
                                                        "status-badge status-draft"
                                                    },
                                                    "{story.status.as_str()}"
                                                }
                                                span { {story.timestamp.format("%Y-%m-%d").to_string()} }
                                            }
                                            p { class: "story-card-excerpt", "{excerpt}" }
                                            div {
                                                class: "story-card-actions",
                                                button {
                                                    class: "btn btn-primary btn-small",
                                                    onclick: move |_| open_history.call(story_for_open.clone()),
                                                    "History"
                                                }
                                                button {
                                                    class: "btn btn-danger btn-small",
                                                    onclick: move |_| confirm.set(ConfirmState::DeleteStory(story_for_delete.clone())),
                                                    "Delete"
                                                }
                                                if story.status != StoryStatus::Completed {
                                                    button {
                                                        class: "btn btn-ghost btn-small",
                                                        onclick: move |_| confirm.set(ConfirmState::DeleteGroup(story_for_group.clone())),
                                                        "Delete All Versions"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },

                Surface::VersionHistory => rsx! {
                    VersionHistoryModal {
                        versions: versions(),
                        selected_version_id: selected_version_id(),
                        on_select: move |id| selected_version_id.set(Some(id)),
                        on_open: move |version: StoryVersion| {
                            open_version.set(Some(version));
                            surface.set(transition(surface(), NavEvent::OpenVersion));
                        },
                        on_compare: move |_| compare_selected.call(()),
                        on_delete: move |version| confirm.set(ConfirmState::DeleteVersion(version)),
                        on_delete_all: move |_| {
                            if let Some(original) = versions().iter().find(|v| v.is_original()).cloned() {
                                confirm.set(ConfirmState::DeleteGroup(original));
                            } else if let Some(first) = versions().first().cloned() {
                                confirm.set(ConfirmState::DeleteGroup(first));
                            }
                        },
                        on_close: move |_| {
                            versions.set(Vec::new());
                            selected_version_id.set(None);
                            original_story_id.set(None);
                            surface.set(transition(surface(), NavEvent::CloseHistory));
                        },
                    }
                },

                Surface::FullView => rsx! {
                    if let Some(version) = open_version() {
                        FullStoryView {
                            version,
                            on_save: move |request| save_version.call(request),
                            on_cancel: move |_| {
                                open_version.set(None);
                                surface.set(transition(surface(), NavEvent::Cancel));
                            },
                            on_back: move |_| back_to_grid.call(()),
                        }
                    }
                },

                Surface::Compare => rsx! {
                    if let Some((old_text, new_text)) = compare_pair() {
                        CompareView {
                            old_text,
                            new_text,
                            on_close: move |_| {
                                compare_pair.set(None);
                                surface.set(transition(surface(), NavEvent::CloseCompare));
                            },
                        }
                    }
                },
            }

            match confirm() {
                ConfirmState::None => rsx! {},
                ConfirmState::DeleteStory(story) => rsx! {
                    ConfirmDialog {
                        title: "Delete story?",
                        message: format!("\"{}\" will be permanently deleted.", story.title),
                        confirm_text: "Delete",
                        is_dangerous: true,
                        on_confirm: move |_| {
                            confirm.set(ConfirmState::None);
                            confirm_delete_story.call(story.clone());
                        },
                        on_cancel: move |_| confirm.set(ConfirmState::None),
                    }
                },
                ConfirmState::DeleteVersion(version) => rsx! {
                    ConfirmDialog {
                        title: "Delete version?",
                        message: format!("Version {} of \"{}\" will be permanently deleted.", version.version_id, version.title),
                        confirm_text: "Delete",
                        is_dangerous: true,
                        on_confirm: move |_| {
                            confirm.set(ConfirmState::None);
                            confirm_delete_version.call(version.clone());
                        },
                        on_cancel: move |_| confirm.set(ConfirmState::None),
                    }
                },
                ConfirmState::DeleteGroup(story) => rsx! {
                    ConfirmDialog {
                        title: "Delete all versions?",
                        message: format!("Every version of \"{}\" will be permanently deleted.", story.title),
                        confirm_text: "Delete All",
                        is_dangerous: true,
                        on_confirm: move |_| {
                            confirm.set(ConfirmState::None);
                            confirm_delete_group.call(story.clone());
                        },
                        on_cancel: move |_| confirm.set(ConfirmState::None),
                    }
                },
            }
        }
    }
}
