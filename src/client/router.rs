use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{BikePage, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/bikes/:id")]
    BikePage { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
