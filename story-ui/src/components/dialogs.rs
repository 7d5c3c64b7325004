use dioxus::prelude::*;

/// Confirmation dialog overlay. Clicking the scrim cancels; clicking the
/// panel does not.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_text: String,
    is_dangerous: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let confirm_class = if is_dangerous {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    rsx! {
        div {
            class: "dialog-scrim",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog-panel",
                onclick: move |e| e.stop_propagation(),
                h3 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "{confirm_class}",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
