use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLinkSlash;
use dioxus_free_icons::Icon;

use crate::{client::components::DeletePartButton, model::installation::InstallationDto};

/// Parts installed on a bike, newest installation first
///
/// Refetches whenever a row is uninstalled or its part deleted.
#[component]
pub fn InstallationsTable(bike_id: String) -> Element {
    let installations = use_signal(Vec::<InstallationDto>::new);
    let mut refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let bike_id = bike_id.clone();

        use_effect(move || {
            use dioxus_logger::tracing;

            // Subscribe to refresh requests
            let _ = refresh();
            let bike_id = bike_id.clone();
            let mut installations = installations;

            spawn(async move {
                match crate::client::util::api::get_bike_installations(&bike_id).await {
                    Ok(list) => installations.set(list),
                    Err(err) => tracing::error!("{}", err),
                }
            });
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = &bike_id;

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Part" }
                        th { "Type" }
                        th { "Manufacturer" }
                        th { "Installed" }
                        th { "Price" }
                        th { "Weight" }
                        th { "Status" }
                        th { }
                    }
                }
                tbody {
                    if installations.read().is_empty() {
                        tr {
                            td { colspan: 8, class: "text-center opacity-60",
                                "No parts installed yet"
                            }
                        }
                    }
                    for installation in installations.read().iter().cloned() {
                        InstallationRow {
                            key: "{installation.id}",
                            installation,
                            on_change: move |_| refresh += 1,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn InstallationRow(installation: InstallationDto, on_change: EventHandler<()>) -> Element {
    let part = installation.part.clone();
    let manufacturer = part
        .manufacturer
        .as_ref()
        .map(|m| m.name.clone())
        .unwrap_or_default();

    let installation_id = installation.id.clone();

    let uninstall = move |_| {
        #[cfg(feature = "web")]
        {
            use dioxus_logger::tracing;

            let installation_id = installation_id.clone();

            spawn(async move {
                match crate::client::util::api::uninstall_part(&installation_id).await {
                    Ok(()) => on_change.call(()),
                    Err(err) => tracing::error!(
                        "Failed to uninstall installation {}: {}",
                        installation_id,
                        err
                    ),
                }
            });
        }
    };

    #[cfg(not(feature = "web"))]
    let _ = (&installation_id, on_change);

    rsx!(
        tr {
            td {
                if let Some(url) = part.shop_url.as_ref() {
                    a { class: "link", href: "{url}", target: "_blank", "{part.name}" }
                } else {
                    "{part.name}"
                }
            }
            td { "{part.part_type}" }
            td { "{manufacturer}" }
            td { "{installation.installed_at}" }
            td { {format!("{:.2}", part.purchase_price)} }
            td { "{part.weight}" }
            td { "{part.sell_status.label()}" }
            td {
                div { class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm btn-outline",
                        title: "Uninstall part",
                        onclick: uninstall,
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaLinkSlash
                        }
                    }
                    DeletePartButton {
                        part_id: part.id.clone(),
                        on_deleted: move |_| on_change.call(()),
                    }
                }
            }
        }
    )
}
