use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

#[component]
pub fn App() -> Element {
    let user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the signed in user once on load
    #[cfg(feature = "web")]
    use_future(move || async move {
        use dioxus_logger::tracing;

        let mut user_state = user_state;
        match crate::client::util::api::get_user().await {
            Ok(user) => user_state.set(UserState {
                user,
                fetched: true,
            }),
            Err(err) => {
                tracing::error!("{}", err);
                user_state.write().fetched = true;
            }
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = user_state;

    rsx!(
        document::Title { "Bike Parts Tracker" }
        Router::<Route> {}
    )
}
