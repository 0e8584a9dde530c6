use dioxus::prelude::*;
use store::{render_stars, StarEntry, StarIcon};

use crate::icons::{FaStar, FaStarHalfStroke};
use crate::Icon;
use dioxus_free_icons::icons::fa_regular_icons::FaStar as FaStarOutline;

/// Five read-only stars for a rating in `[0, 5]`.
#[component]
pub fn Stars(rating: f64, #[props(default = 14)] size: u32) -> Element {
    rsx! {
        StarIcons { icons: render_stars(rating), size }
    }
}

#[component]
pub fn StarIcons(icons: [StarIcon; 5], #[props(default = 14)] size: u32) -> Element {
    rsx! {
        span {
            class: "stars",
            for (i, icon) in icons.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: "star",
                    match icon {
                        StarIcon::Full => rsx! { Icon { icon: FaStar, width: size, height: size } },
                        StarIcon::Half => rsx! { Icon { icon: FaStarHalfStroke, width: size, height: size } },
                        StarIcon::Empty => rsx! { Icon { icon: FaStarOutline, width: size, height: size } },
                    }
                }
            }
        }
    }
}

/// Average rating with its stars and the number of ratings behind it.
#[component]
pub fn RatingSummary(average: f64, count: u32) -> Element {
    rsx! {
        div {
            class: "rating-summary",
            Stars { rating: average }
            span { class: "average-review", "{average}" }
            span { class: "num-review", "({count})" }
        }
    }
}

/// Clickable five-star entry. Clicking star `n` highlights stars `1..=n`.
#[component]
pub fn StarEntryInput(label: String, value: Signal<StarEntry>) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "rating-entry",
            span { class: "rating-entry-label", "{label}" }
            for n in 1..=5u8 {
                button {
                    key: "{n}",
                    r#type: "button",
                    class: if value.read().is_highlighted(n) { "star-button highlight" } else { "star-button" },
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        value.write().select(n);
                    },
                    if value.read().is_highlighted(n) {
                        Icon { icon: FaStar, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaStarOutline, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
