use dioxus::prelude::*;
use store::validation::ReviewForm;
use store::StarEntry;

use crate::stars::StarEntryInput;

/// Inputs behind a review: three star ratings and the free text.
#[derive(Clone, Copy, PartialEq)]
pub struct ReviewInputs {
    pub overall: Signal<StarEntry>,
    pub plot: Signal<StarEntry>,
    pub character: Signal<StarEntry>,
    pub summary: Signal<String>,
    pub thoughts: Signal<String>,
}

impl ReviewInputs {
    pub fn form(&self) -> ReviewForm {
        ReviewForm {
            overall_rating: self.overall.read().value(),
            plot_rating: self.plot.read().value(),
            character_rating: self.character.read().value(),
            summary: self.summary.read().trim().to_string(),
            thoughts: self.thoughts.read().trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.overall.write().clear();
        self.plot.write().clear();
        self.character.write().clear();
        self.summary.set(String::new());
        self.thoughts.set(String::new());
    }
}

pub fn use_review_inputs() -> ReviewInputs {
    ReviewInputs {
        overall: use_signal(StarEntry::default),
        plot: use_signal(StarEntry::default),
        character: use_signal(StarEntry::default),
        summary: use_signal(String::new),
        thoughts: use_signal(String::new),
    }
}

#[component]
pub fn ReviewFields(inputs: ReviewInputs) -> Element {
    let mut summary = inputs.summary;
    let mut thoughts = inputs.thoughts;
    rsx! {
        div {
            class: "review-fields",
            StarEntryInput { label: "Overall", value: inputs.overall }
            StarEntryInput { label: "Plot", value: inputs.plot }
            StarEntryInput { label: "Characters", value: inputs.character }
            label { "Summary"
                input {
                    name: "summary",
                    value: summary(),
                    oninput: move |evt| summary.set(evt.value()),
                }
            }
            label { "Thoughts and feelings"
                textarea {
                    name: "thoughts",
                    value: thoughts(),
                    oninput: move |evt| thoughts.set(evt.value()),
                }
            }
        }
    }
}
