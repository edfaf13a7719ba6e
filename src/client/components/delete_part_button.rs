use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

/// Deletes a part and all of its installations in one request
///
/// `on_deleted` only fires on success, a failed request is logged and changes nothing.
#[component]
pub fn DeletePartButton(part_id: String, on_deleted: EventHandler<()>) -> Element {
    let pending = use_signal(|| false);

    let onclick = move |_| {
        #[cfg(feature = "web")]
        {
            use dioxus_logger::tracing;

            let mut pending = pending;
            let part_id = part_id.clone();
            pending.set(true);

            spawn(async move {
                match crate::client::util::api::delete_part(&part_id).await {
                    Ok(()) => on_deleted.call(()),
                    Err(err) => tracing::error!("Failed to delete part {}: {}", part_id, err),
                }
                pending.set(false);
            });
        }
    };

    #[cfg(not(feature = "web"))]
    let _ = (&part_id, on_deleted);

    rsx!(
        button {
            class: "btn btn-error btn-sm btn-outline",
            title: "Delete part",
            disabled: pending(),
            onclick,
            Icon {
                width: 14,
                height: 14,
                icon: FaTrash
            }
        }
    )
}
