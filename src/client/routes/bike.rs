use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{AddPartModal, InstallationsTable, Page},
        store::user::UserState,
    },
    model::bike::BikeDetailDto,
};

#[component]
pub fn BikePage(id: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1200px] p-6 flex flex-col gap-4",
                if user_state.read().is_authenticated() {
                    BikeDetail { key: "{id}", bike_id: id.clone() }
                } else if user_state.read().fetched {
                    p { "Sign in to see this bike." }
                }
            }
        }
    )
}

#[component]
fn BikeDetail(bike_id: String) -> Element {
    // `None` until loaded, then zero or one bikes
    let bike = use_signal(|| None::<Vec<BikeDetailDto>>);

    #[cfg(feature = "web")]
    {
        let bike_id = bike_id.clone();

        use_effect(move || {
            use dioxus_logger::tracing;

            let bike_id = bike_id.clone();
            let mut bike = bike;
            spawn(async move {
                match crate::client::util::api::get_bike(&bike_id).await {
                    Ok(found) => bike.set(Some(found)),
                    Err(err) => tracing::error!("{}", err),
                }
            });
        });
    }

    let bike = bike.read();

    match bike.as_ref().map(|found| found.first()) {
        None => rsx!(div { class: "skeleton h-8 w-64" }),
        Some(None) => rsx!(
            Title { "Bike not found | Bike Parts Tracker" }
            p { "This bike does not exist or belongs to someone else." }
        ),
        Some(Some(detail)) => rsx!(
            Title { "{detail.name} | Bike Parts Tracker" }
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold", "{detail.name}" }
                    if let Some(discipline) = detail.discipline.as_ref() {
                        p { class: "opacity-60", "{discipline.name}" }
                    }
                }
                AddPartModal {
                    bike_id: detail.id.clone(),
                    bike_name: detail.name.clone(),
                }
            }
            InstallationsTable { bike_id: bike_id.clone() }
        ),
    }
}
