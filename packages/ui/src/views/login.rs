use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaGraduationCap, FaMobileScreen, FaRightToBracket, FaUser};
use crate::{use_portal, use_session, Icon};

/// Login form (DNI and phone). Platform packages navigate in `on_success`.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut dni = use_signal(String::new);
    let mut celular = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let portal = portal.clone();
        loading.set(true);
        error.set(None);
        spawn(async move {
            match portal.login(&dni(), &celular()).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-container",
                div {
                    class: "login-header",
                    div {
                        class: "logo-container",
                        Icon { icon: FaGraduationCap, width: 32, height: 32 }
                    }
                    h1 { "Bienvenido" }
                    p { "Plataforma Estudiantil CEPRE UNDAC" }
                }

                if let Some(message) = error() {
                    div {
                        class: "error-message",
                        Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                        span { "{message}" }
                    }
                }

                form {
                    class: "login-form",
                    onsubmit: onsubmit,

                    label { class: "field-label", r#for: "login-dni", "DNI" }
                    div {
                        class: "input-with-icon",
                        Icon { icon: FaUser, width: 16, height: 16 }
                        input {
                            id: "login-dni",
                            r#type: "text",
                            inputmode: "numeric",
                            placeholder: "Ingrese su número de DNI",
                            maxlength: 8,
                            required: true,
                            value: dni(),
                            oninput: move |evt: FormEvent| dni.set(evt.value()),
                        }
                    }

                    label { class: "field-label", r#for: "login-celular", "Celular" }
                    div {
                        class: "input-with-icon",
                        Icon { icon: FaMobileScreen, width: 16, height: 16 }
                        input {
                            id: "login-celular",
                            r#type: "tel",
                            placeholder: "Ingrese su número de celular reg.",
                            maxlength: 9,
                            required: true,
                            value: celular(),
                            oninput: move |evt: FormEvent| celular.set(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        Icon { icon: FaRightToBracket, width: 16, height: 16 }
                        if loading() {
                            span { "Ingresando..." }
                        } else {
                            span { "Ingresar" }
                        }
                    }
                }

                div {
                    class: "login-footer",
                    p { "¿Problemas para ingresar? Contacte a soporte." }
                }
            }
        }
    }
}
