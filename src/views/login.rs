// ============================================================================
// LOGIN - Shared sign-in for passengers and admins
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{LoginRequest, NotificationKind, Role};
use crate::router::Page;
use crate::services::ApiError;
use crate::state::AppContext;
use crate::utils::validate::is_valid_email;
use crate::views::labeled_field;

const EMAIL_ID: &str = "login-email";
const PASSWORD_ID: &str = "login-password";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("Login").build();
    let hint = ElementBuilder::new("p")?
        .class("small muted")
        .text("One door for passengers and admins; where you land depends on your account.")
        .build();

    let email = ElementBuilder::new("input")?
        .id(EMAIL_ID)?
        .class("input")
        .attr("type", "email")?
        .attr("placeholder", "you@example.com")?
        .attr("autocomplete", "email")?
        .build();
    let password = ElementBuilder::new("input")?
        .id(PASSWORD_ID)?
        .class("input")
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .build();

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Login")
        .build();

    let form = ElementBuilder::new("form")?
        .class("form")
        .child(labeled_field("Email", email)?)?
        .child(labeled_field("Password", password)?)?
        .child(submit.clone())?
        .build();

    // One in-flight login at a time.
    let loading = Rc::new(Cell::new(false));
    {
        let ctx = ctx.clone();
        let loading = loading.clone();
        dom::on_submit(&form, move |_| {
            if loading.get() {
                return;
            }
            let email = dom::get_element_by_id(EMAIL_ID)
                .map(|e| dom::input_value(&e))
                .unwrap_or_default()
                .trim()
                .to_string();
            let password = dom::get_element_by_id(PASSWORD_ID)
                .map(|e| dom::input_value(&e))
                .unwrap_or_default();

            if email.is_empty() && password.is_empty() {
                ctx.notify("Email and password are required", NotificationKind::Warn);
                return;
            }
            if email.is_empty() {
                ctx.notify("Email is required", NotificationKind::Warn);
                return;
            }
            if password.is_empty() {
                ctx.notify("Password is required", NotificationKind::Warn);
                return;
            }
            if !is_valid_email(&email) {
                ctx.notify("Please enter a valid email address", NotificationKind::Warn);
                return;
            }

            loading.set(true);
            dom::set_attribute(&submit, "disabled", "true").ok();
            let ctx = ctx.clone();
            let loading = loading.clone();
            let submit = submit.clone();
            spawn_local(async move {
                let result = ctx.api.login(&LoginRequest { email, password }).await;
                loading.set(false);
                let _ = submit.remove_attribute("disabled");
                match result {
                    Ok(payload) => {
                        ctx.session.set_logged_in(&payload);
                        match ctx.session.role() {
                            Role::Admin => {
                                ctx.notify("Welcome back, admin", NotificationKind::Success);
                                ctx.navigate(Page::AdminStats);
                            }
                            Role::Passenger => {
                                ctx.notify("Logged in", NotificationKind::Success);
                                ctx.navigate(Page::Search);
                            }
                            Role::Guest => {
                                // Backend answered 200 with a role we do not know.
                                ctx.notify(
                                    "Login failed (unexpected response)",
                                    NotificationKind::Error,
                                );
                            }
                        }
                        ctx.request_render();
                    }
                    Err(e) => ctx.notify(classify_login_error(&e), NotificationKind::Error),
                }
            });
        })?;
    }

    let register_link = ElementBuilder::new("a")?
        .class("small")
        .attr("href", &Page::Register.hash())?
        .text("New here? Create an account")
        .build();

    let card = ElementBuilder::new("section")?
        .class("card card-narrow")
        .child(title)?
        .child(hint)?
        .child(form)?
        .child(register_link)?
        .build();

    Ok(ElementBuilder::new("div")?.class("page-login").child(card)?.build())
}

/// Map the backend's free-form auth failure to the short messages the login
/// form shows. Best-effort keyword matching; anything unrecognised is shown
/// verbatim.
fn classify_login_error(error: &ApiError) -> String {
    let lower = error.message.to_lowercase();
    let mentions_email =
        lower.contains("email") || lower.contains("user not found") || lower.contains("no user");
    let mentions_password = lower.contains("password");
    if mentions_email && mentions_password {
        return "Incorrect email and password".to_string();
    }
    if mentions_email {
        return "Incorrect email".to_string();
    }
    if mentions_password {
        return "Incorrect password".to_string();
    }
    let denied = matches!(error.status, Some(401) | Some(403))
        || lower.contains("invalid credentials")
        || lower.contains("bad credentials");
    if denied {
        return "Incorrect email or password".to_string();
    }
    error.message.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(status: Option<u16>, message: &str) -> ApiError {
        ApiError {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn both_fields_mentioned() {
        assert_eq!(
            classify_login_error(&err(Some(401), "Invalid email and password")),
            "Incorrect email and password"
        );
    }

    #[test]
    fn single_field_mentioned() {
        assert_eq!(
            classify_login_error(&err(Some(404), "User not found")),
            "Incorrect email"
        );
        assert_eq!(
            classify_login_error(&err(Some(401), "Wrong password")),
            "Incorrect password"
        );
    }

    #[test]
    fn bare_auth_rejection_gets_generic_message() {
        assert_eq!(
            classify_login_error(&err(Some(401), "Request failed (401)")),
            "Incorrect email or password"
        );
        assert_eq!(
            classify_login_error(&err(Some(400), "Bad credentials")),
            "Incorrect email or password"
        );
    }

    #[test]
    fn unrelated_errors_pass_through() {
        assert_eq!(
            classify_login_error(&err(None, "Network error")),
            "Network error"
        );
        assert_eq!(
            classify_login_error(&err(Some(500), "Request failed (500)")),
            "Request failed (500)"
        );
    }
}
