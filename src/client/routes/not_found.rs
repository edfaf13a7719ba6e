use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not found | Bike Parts Tracker" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-xl", "Nothing here" }
            p { class: "opacity-60", "/{path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to bikes" }
        }
    )
}
