use api::models::SignInRequest;
use dioxus::prelude::*;
use store::controller;
use store::validation::SignUpForm;
use store::{Dismissal, Popup};

use super::ModalOverlay;
use crate::session::{
    complete_sign_in, report_submit_error, show_alert, use_api, use_app_state, use_config,
};

/// Sign-in and sign-up windows, whichever is open.
#[component]
pub fn AccountPopups() -> Element {
    let mut state = use_app_state();
    let nav = use_navigator();

    let open = state.read().popups().open().cloned();
    let notice = state.read().popups().sign_in_notice();

    let dismiss = move |_| {
        let outcome = state.write().dismiss_popups();
        if outcome.dismissal == Dismissal::Blocked {
            return;
        }
        if outcome.redirect_home {
            nav.push("/");
        }
    };

    rsx! {
        match open {
            Some(Popup::SignIn) => rsx! {
                ModalOverlay {
                    id: "sign-in",
                    on_close: dismiss,
                    SignInForm { notice, on_cancel: dismiss }
                }
            },
            Some(Popup::SignUp) => rsx! {
                ModalOverlay {
                    id: "sign-up",
                    on_close: dismiss,
                    SignUpFormView { on_cancel: dismiss }
                }
            },
            _ => rsx! {},
        }
    }
}

#[component]
fn SignInForm(notice: bool, on_cancel: EventHandler<()>) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.write().popups_mut().begin_submit() {
            return;
        }
        let request = SignInRequest {
            username: username(),
            password: password(),
        };
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let result = controller::sign_in(&api, &request).await;
            state.write().popups_mut().finish_submit();
            match result {
                Ok(token) => complete_sign_in(state, &config, token, remember()),
                Err(e) => report_submit_error(state, &config, e),
            }
        });
    };

    let sign_in_notice = use_config().ui.sign_in_notice;

    rsx! {
        h2 { "Sign in" }
        if notice {
            p { class: "page-sign-notice", "{sign_in_notice}" }
        }
        form {
            onsubmit: on_submit,
            label { "Username"
                input { name: "username", required: true, value: username(), oninput: move |evt| username.set(evt.value()) }
            }
            label { "Password"
                input { name: "password", r#type: "password", required: true, value: password(), oninput: move |evt| password.set(evt.value()) }
            }
            label { class: "remember",
                input { name: "remember", r#type: "checkbox", checked: remember(), onchange: move |evt| remember.set(evt.checked()) }
                "Remember me"
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "primary", "Sign in" }
                button { r#type: "button", class: "cancel-button", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
        p {
            "No account? "
            a {
                href: "#",
                onclick: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    state.write().popups_mut().show(Popup::SignUp);
                },
                "Sign up"
            }
        }
    }
}

#[component]
fn SignUpFormView(on_cancel: EventHandler<()>) -> Element {
    let mut state = use_app_state();
    let api = use_api();
    let config = use_config();
    let mut form = use_signal(SignUpForm::default);
    let mut remember = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if let Err(e) = current.validate() {
            show_alert(state, &config, e.to_string());
            return;
        }
        if !state.write().popups_mut().begin_submit() {
            return;
        }
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let result = controller::sign_up(&api, &current).await;
            state.write().popups_mut().finish_submit();
            match result {
                Ok(token) => complete_sign_in(state, &config, token, remember()),
                Err(e) => report_submit_error(state, &config, e),
            }
        });
    };

    rsx! {
        h2 { "Sign up" }
        form {
            onsubmit: on_submit,
            label { "First name"
                input { name: "first-name", required: true, value: form.read().first_name.clone(), oninput: move |evt| form.write().first_name = evt.value() }
            }
            label { "Surname"
                input { name: "surname", required: true, value: form.read().surname.clone(), oninput: move |evt| form.write().surname = evt.value() }
            }
            label { "Username"
                input { name: "username", required: true, value: form.read().username.clone(), oninput: move |evt| form.write().username = evt.value() }
            }
            label { "Password"
                input { name: "password", r#type: "password", required: true, value: form.read().password.clone(), oninput: move |evt| form.write().password = evt.value() }
            }
            label { "Repeat password"
                input { name: "password-repeat", r#type: "password", required: true, value: form.read().password_repeat.clone(), oninput: move |evt| form.write().password_repeat = evt.value() }
            }
            label { class: "remember",
                input { name: "remember", r#type: "checkbox", checked: remember(), onchange: move |evt| remember.set(evt.checked()) }
                "Remember me"
            }
            div {
                class: "form-actions",
                button { r#type: "submit", class: "primary", "Sign up" }
                button { r#type: "button", class: "cancel-button", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}
