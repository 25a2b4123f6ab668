use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use todoc_core::ToastLevel;

use crate::components::{show_toast, use_toasts};

/// Why a sign-in attempt was turned away before it left the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginRejection {
    MissingEmail,
    InvalidEmail,
    MissingPassword,
}

impl LoginRejection {
    fn message(self) -> &'static str {
        match self {
            LoginRejection::MissingEmail => "Enter your email.",
            LoginRejection::InvalidEmail => "That email doesn't look right.",
            LoginRejection::MissingPassword => "Enter your password.",
        }
    }
}

pub(crate) fn check_credentials(email: &str, password: &str) -> Result<(), LoginRejection> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginRejection::MissingEmail);
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => {}
        _ => return Err(LoginRejection::InvalidEmail),
    }
    if password.is_empty() {
        return Err(LoginRejection::MissingPassword);
    }
    Ok(())
}

/// Sign-in form. Calls `on_login_success` only once credentials pass.
#[component]
pub fn LoginScreen(on_login_success: EventHandler<()>) -> Element {
    let toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = check_credentials(&email.read(), &password.read());
        match outcome {
            Ok(()) => {
                info!("Login accepted");
                password.set(String::new());
                on_login_success.call(());
            }
            Err(rejection) => {
                show_toast(toasts, ToastLevel::Error, rejection.message());
            }
        }
    };

    rsx! {
        section { class: "td-login",
            div { class: "td-logo td-logo--large",
                span { class: "td-logo-word", "to" }
                span { class: "td-logo-word td-logo-word--accent", "doc" }
            }
            p { class: "td-login-tagline", "Every little day, recorded." }

            form { class: "td-login-form", onsubmit: submit,
                input {
                    class: "td-input",
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "td-input",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "td-btn td-btn--primary", r#type: "submit", "Log in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_credentials() {
        assert_eq!(check_credentials(" mom@example.com ", "secret"), Ok(()));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            check_credentials("", "secret"),
            Err(LoginRejection::MissingEmail)
        );
        assert_eq!(
            check_credentials("not-an-email", "secret"),
            Err(LoginRejection::InvalidEmail)
        );
        assert_eq!(
            check_credentials("@example.com", "secret"),
            Err(LoginRejection::InvalidEmail)
        );
        assert_eq!(
            check_credentials("dad@example.com", ""),
            Err(LoginRejection::MissingPassword)
        );
    }
}
