use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBicycle;
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, router::Route, store::user::UserState},
    model::bike::BikeDto,
};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx!(
        Title { "Bikes | Bike Parts Tracker" }
        Meta {
            name: "description",
            content: "Track your bikes, the parts installed on them and when they were installed."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1200px] p-6 flex flex-col gap-4",
                if user_state.read().is_authenticated() {
                    h1 { class: "text-2xl font-bold", "Your bikes" }
                    BikeTable {}
                } else if user_state.read().fetched {
                    div { class: "flex flex-col items-center gap-4 pt-16",
                        Icon {
                            width: 64,
                            height: 64,
                            icon: FaBicycle
                        }
                        p { class: "text-lg", "Sign in to see your bikes and their parts." }
                        a { href: "/api/auth/login",
                            button { class: "btn btn-primary w-28", "Login" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn BikeTable() -> Element {
    let bikes = use_signal(Vec::<BikeDto>::new);

    #[cfg(feature = "web")]
    use_effect(move || {
        use dioxus_logger::tracing;

        let mut bikes = bikes;
        spawn(async move {
            match crate::client::util::api::get_bikes().await {
                Ok(list) => bikes.set(list),
                Err(err) => tracing::error!("{}", err),
            }
        });
    });

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Name" }
                        th { "Discipline" }
                        th { "Strava" }
                    }
                }
                tbody {
                    for bike in bikes.read().iter() {
                        tr { key: "{bike.id}",
                            td {
                                Link {
                                    class: "link",
                                    to: Route::BikePage { id: bike.id.clone() },
                                    "{bike.name}"
                                }
                            }
                            td {
                                if let Some(discipline) = bike.discipline.as_ref() {
                                    span { title: "{discipline.name}", "{discipline.abbr}" }
                                }
                            }
                            td {
                                if bike.strava_bike { "Yes" } else { "No" }
                            }
                        }
                    }
                }
            }
        }
    )
}
