use dioxus::prelude::*;

use crate::session::Session;
use story_types::{StoryStatus, StoryVersion, UpdateStoryRequest};

/// Full-page editor for one story version. Completed versions render
/// read-only; Save builds an update request against the opened version's id
/// and leaves persistence to the caller.
#[component]
pub fn FullStoryView(
    version: StoryVersion,
    on_save: Callback<UpdateStoryRequest>,
    on_cancel: Callback<()>,
    on_back: Callback<()>,
) -> Element {
    let session = use_context::<Session>();

    let mut title = use_signal(|| version.title.clone());
    let mut genre = use_signal(|| version.genre.clone());
    let mut setting = use_signal(|| version.setting.clone());
    let mut characters = use_signal(|| version.characters.clone());
    let mut themes = use_signal(|| version.themes.clone());
    let mut details = use_signal(|| version.details.clone());
    let mut content = use_signal(|| version.content.clone());
    let mut status = use_signal(|| version.status);

    let read_only = version.status.is_read_only();
    let base_id = version.id;

    let save = move |_| {
        on_save.call(UpdateStoryRequest {
            base_id,
            title: title(),
            genre: genre(),
            setting: setting(),
            characters: characters(),
            themes: themes(),
            details: details(),
            status: status(),
            content: content(),
            user_id: session.user_id.clone(),
        });
    };

    rsx! {
        div {
            class: "full-view",
            div {
                class: "modal-header",
                h2 { "v{version.version_id}: {version.title}" }
            }

            if read_only {
                div {
                    class: "read-only-note",
                    "This version is completed and can no longer be edited."
                }
            }

            div {
                class: "full-view-field",
                label { "Title" }
                input {
                    r#type: "text",
                    value: "{title}",
                    disabled: read_only,
                    oninput: move |e| title.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Genre" }
                input {
                    r#type: "text",
                    value: "{genre}",
                    disabled: read_only,
                    oninput: move |e| genre.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Setting" }
                input {
                    r#type: "text",
                    value: "{setting}",
                    disabled: read_only,
                    oninput: move |e| setting.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Characters" }
                input {
                    r#type: "text",
                    value: "{characters}",
                    disabled: read_only,
                    oninput: move |e| characters.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Themes" }
                input {
                    r#type: "text",
                    value: "{themes}",
                    disabled: read_only,
                    oninput: move |e| themes.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Additional details" }
                textarea {
                    rows: "3",
                    value: "{details}",
                    disabled: read_only,
                    oninput: move |e| details.set(e.value()),
                }
            }

            div {
                class: "full-view-field",
                label { "Status" }
                select {
                    value: status().as_str(),
                    disabled: read_only,
                    oninput: move |e| {
                        if e.value() == "completed" {
                            status.set(StoryStatus::Completed);
                        } else {
                            status.set(StoryStatus::Draft);
                        }
                    },
                    option { value: "draft", "Draft" }
                    option { value: "completed", "Completed" }
                }
            }

            div {
                class: "full-view-field",
                label { "Story" }
                textarea {
                    class: "full-view-content",
                    value: "{content}",
                    disabled: read_only,
                    oninput: move |e| content.set(e.value()),
                }
            }

            div {
                class: "full-view-actions",
                button {
                    class: "btn btn-primary",
                    disabled: read_only,
                    onclick: save,
                    "Save"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_back.call(()),
                    "Back to Grid"
                }
            }
        }
    }
}
