use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaXmark};
use dioxus_free_icons::Icon;

use crate::{
    client::store::user::UserState,
    model::{
        manufacturer::ManufacturerDto,
        part::{PartType, SellStatus},
    },
};

const INPUT_CLASS: &str = "input input-bordered w-full";
const SELECT_CLASS: &str = "select select-bordered w-full";

/// Button opening the add part dialog for one bike
#[component]
pub fn AddPartModal(bike_id: String, bike_name: String) -> Element {
    let mut open = use_signal(|| false);

    rsx!(
        button {
            class: "btn btn-primary flex gap-2",
            onclick: move |_| open.set(true),
            Icon {
                width: 14,
                height: 14,
                icon: FaPlus
            }
            "Add part"
        }
        if open() {
            AddPartDialog {
                bike_id,
                bike_name,
                on_close: move |_| open.set(false),
            }
        }
    )
}

/// Closes on Escape, on a click outside the dialog or with the close button
#[component]
fn AddPartDialog(bike_id: String, bike_name: String, on_close: EventHandler<()>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let manufacturers = use_signal(Vec::<ManufacturerDto>::new);
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    // Manufacturers are only requested once the user is known to be signed in
    #[cfg(feature = "web")]
    use_effect(move || {
        use dioxus_logger::tracing;

        if !user_state.read().is_authenticated() {
            return;
        }

        let mut manufacturers = manufacturers;
        spawn(async move {
            match crate::client::util::api::get_manufacturers().await {
                Ok(list) => manufacturers.set(list),
                Err(err) => tracing::error!("{}", err),
            }
        });
    });

    #[cfg(not(feature = "web"))]
    let _ = user_state;

    rsx!(
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center overflow-y-auto bg-black/50",
            tabindex: "-1",
            onmounted: move |event| async move {
                let _ = event.set_focus(true).await;
            },
            onkeydown: move |event: KeyboardEvent| {
                if event.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "card bg-base-100 shadow-xl w-full max-w-md m-4",
                onclick: move |event: MouseEvent| event.stop_propagation(),
                div { class: "card-body",
                    div { class: "flex items-center justify-between",
                        h3 { class: "card-title", "Add part" }
                        button {
                            r#type: "button",
                            class: "btn btn-ghost btn-sm btn-square",
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            Icon {
                                width: 14,
                                height: 14,
                                icon: FaXmark
                            }
                        }
                    }
                    form {
                        method: "post",
                        action: "/api/installations",
                        class: "grid grid-cols-2 gap-4",
                        label { class: "form-control col-span-2",
                            span { class: "label-text", "Bike" }
                            select { class: SELECT_CLASS, name: "bike", required: true,
                                option { value: "{bike_id}", selected: true, "{bike_name}" }
                            }
                        }
                        label { class: "form-control col-span-2",
                            span { class: "label-text", "Manufacturer" }
                            select { class: SELECT_CLASS, name: "manufacturer", required: true,
                                option { value: "", disabled: true, selected: true, hidden: true,
                                    "Select manufacturer"
                                }
                                for manufacturer in manufacturers.read().iter() {
                                    option {
                                        key: "{manufacturer.id}",
                                        value: "{manufacturer.id}",
                                        "{manufacturer.name}"
                                    }
                                }
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Model name" }
                            input { class: INPUT_CLASS, r#type: "text", name: "name", required: true }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Model year" }
                            input {
                                class: INPUT_CLASS,
                                r#type: "number",
                                name: "year",
                                placeholder: "1985",
                                required: true
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Purchase price" }
                            input {
                                class: INPUT_CLASS,
                                r#type: "number",
                                name: "price",
                                min: "0",
                                step: "0.01",
                                placeholder: "399",
                                required: true
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Purchase date" }
                            input { class: INPUT_CLASS, r#type: "date", name: "purchase_date", required: true }
                        }
                        fieldset { class: "col-span-1",
                            legend { class: "label-text", "For sale" }
                            for status in SellStatus::ALL {
                                label { key: "{status.as_str()}", class: "label cursor-pointer justify-start gap-2",
                                    input {
                                        class: "radio radio-sm",
                                        r#type: "radio",
                                        name: "sell_status",
                                        value: status.as_str(),
                                        checked: status == SellStatus::default(),
                                    }
                                    span { "{status.label()}" }
                                }
                            }
                        }
                        div { class: "col-span-1 flex flex-col gap-4",
                            label { class: "form-control",
                                span { class: "label-text", "Sell price" }
                                input {
                                    class: INPUT_CLASS,
                                    r#type: "number",
                                    name: "sell_price",
                                    min: "0",
                                    step: "0.01"
                                }
                            }
                            label { class: "label cursor-pointer justify-start gap-2",
                                input {
                                    class: "checkbox checkbox-sm",
                                    r#type: "checkbox",
                                    name: "secondhand",
                                    value: "true"
                                }
                                span { "Secondhand" }
                            }
                        }
                        label { class: "form-control col-span-2",
                            span { class: "label-text", "Shop URL" }
                            input { class: INPUT_CLASS, r#type: "url", name: "shop_url" }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Type" }
                            select { class: SELECT_CLASS, name: "type", required: true,
                                for part_type in PartType::ALL {
                                    option { key: "{part_type}", value: part_type.as_str(), "{part_type}" }
                                }
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Weight" }
                            input {
                                class: INPUT_CLASS,
                                r#type: "text",
                                name: "weight",
                                placeholder: "1.2kg",
                                required: true
                            }
                        }
                        label { class: "form-control col-span-2",
                            span { class: "label-text", "Installed at" }
                            input {
                                class: INPUT_CLASS,
                                r#type: "date",
                                name: "installed_at",
                                initial_value: "{today}",
                                required: true
                            }
                        }
                        button { class: "btn btn-primary col-span-2", r#type: "submit",
                            "Add part"
                        }
                    }
                }
            }
        }
    )
}
