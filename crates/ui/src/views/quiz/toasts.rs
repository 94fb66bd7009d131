use dioxus::prelude::*;
use services::ToastQueue;

use crate::vm::ToastVm;

/// Move queued toasts onto the screen; each one removes itself after its
/// duration.
pub(super) fn show_pending_toasts(
    queue: &ToastQueue,
    mut active: Signal<Vec<ToastVm>>,
    mut next_id: Signal<u64>,
) {
    for toast in queue.drain() {
        let id = *next_id.peek();
        next_id.set(id + 1);
        let toast = ToastVm::new(id, toast);
        let duration = toast.duration;
        active.write().push(toast);
        spawn(async move {
            tokio::time::sleep(duration).await;
            active.write().retain(|toast| toast.id != id);
        });
    }
}

#[component]
pub(super) fn ToastStack(toasts: Signal<Vec<ToastVm>>) -> Element {
    rsx! {
        div { class: "toast-stack", role: "status",
            for toast in toasts.read().iter().cloned() {
                div { key: "{toast.id}", class: toast.class(), "{toast.title}" }
            }
        }
    }
}
