use dioxus::prelude::*;

use crate::client::{components::TrackerTitleButton, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                TrackerTitleButton {}
            }
            div {
                class: "navbar-end",
                if user_state.read().is_authenticated() {
                    a { href: "/api/auth/logout",
                        button {
                            class: "btn btn-outline",
                            "Logout"
                        }
                    }
                } else if user_state.read().fetched {
                    a { href: "/api/auth/login",
                        button {
                            class: "btn btn-primary",
                            "Login"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
