use dioxus::prelude::*;
use store::controller;
use store::render::person_qualifier;

use crate::session::{report_error, use_api, use_app_state, use_config, use_session};

/// Follower count and follow/unfollow button for one author. Anonymous
/// visitors get the sign-in popup instead.
#[component]
pub(crate) fn FollowControl(author_id: u64, following: bool, followers: u64) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let mut is_following = use_signal(|| following);
    let mut follower_count = use_signal(|| followers);
    use_effect(use_reactive((&following, &followers), move |(following, followers)| {
        is_following.set(following);
        follower_count.set(followers);
    }));

    let on_toggle = move |_| {
        let Some(token) = session() else {
            state.write().popups_mut().show_sign_in(false);
            return;
        };
        let api = api.clone();
        let config = config.clone();
        let current = is_following();
        spawn(async move {
            match controller::toggle_follow(&api, &token, author_id, current).await {
                Ok((now_following, count)) => {
                    is_following.set(now_following);
                    follower_count.set(count);
                }
                Err(e) => report_error(state, &config, &e),
            }
        });
    };

    let count = follower_count();
    let qualifier = person_qualifier(count);

    rsx! {
        p { class: "followers", "{count} {qualifier} following" }
        button {
            class: if is_following() { "follow following" } else { "follow" },
            onclick: on_toggle,
            if is_following() { "Unfollow" } else { "Follow" }
        }
    }
}
