// ============================================================================
// REGISTER - Passenger account creation
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{Gender, LoginRequest, NotificationKind, RegisterRequest};
use crate::router::Page;
use crate::state::AppContext;
use crate::utils::validate::{
    is_letters_and_spaces, is_valid_email, sanitize_person_name, sanitize_phone, validate_password,
    validate_phone,
};
use crate::views::labeled_field;

const NAME_ID: &str = "register-name";
const EMAIL_ID: &str = "register-email";
const PHONE_ID: &str = "register-phone";
const GENDER_ID: &str = "register-gender";
const PASSWORD_ID: &str = "register-password";
const CONFIRM_ID: &str = "register-confirm";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("Create account").build();

    let name = sanitized_input(NAME_ID, "Full name", sanitize_person_name)?;
    let email = ElementBuilder::new("input")?
        .id(EMAIL_ID)?
        .class("input")
        .attr("type", "email")?
        .attr("placeholder", "you@example.com")?
        .attr("autocomplete", "email")?
        .build();
    let phone = sanitized_input(PHONE_ID, "10-digit phone", sanitize_phone)?;
    let gender = gender_select()?;
    let password = password_input(PASSWORD_ID, "Password")?;
    let confirm = password_input(CONFIRM_ID, "Confirm password")?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Register")
        .build();

    let form = ElementBuilder::new("form")?
        .class("form")
        .child(labeled_field("Name", name)?)?
        .child(labeled_field("Email", email)?)?
        .child(labeled_field("Phone", phone)?)?
        .child(labeled_field("Gender", gender)?)?
        .child(labeled_field("Password", password)?)?
        .child(labeled_field("Confirm password", confirm)?)?
        .child(submit.clone())?
        .build();

    let loading = Rc::new(Cell::new(false));
    {
        let ctx = ctx.clone();
        let loading = loading.clone();
        dom::on_submit(&form, move |_| {
            if loading.get() {
                return;
            }
            let payload = match read_and_validate() {
                Ok(payload) => payload,
                Err(message) => {
                    ctx.notify(message, NotificationKind::Warn);
                    return;
                }
            };

            loading.set(true);
            dom::set_attribute(&submit, "disabled", "true").ok();
            let ctx = ctx.clone();
            let loading = loading.clone();
            let submit = submit.clone();
            spawn_local(async move {
                let result = ctx.api.register(&payload).await;
                loading.set(false);
                let _ = submit.remove_attribute("disabled");
                match result {
                    Ok(()) => finish_registration(&ctx, &payload).await,
                    Err(e) => ctx.notify(e.message, NotificationKind::Error),
                }
            });
        })?;
    }

    let login_link = ElementBuilder::new("a")?
        .class("small")
        .attr("href", &Page::Login.hash())?
        .text("Already registered? Login")
        .build();

    let card = ElementBuilder::new("section")?
        .class("card card-narrow")
        .child(title)?
        .child(form)?
        .child(login_link)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page-register")
        .child(card)?
        .build())
}

/// Best-effort auto-login with the fresh credentials. A failure here is not
/// an error: the account exists, the user just has to sign in manually.
async fn finish_registration(ctx: &AppContext, payload: &RegisterRequest) {
    let login = LoginRequest {
        email: payload.email.clone(),
        password: payload.password.clone(),
    };
    match ctx.api.login(&login).await {
        Ok(response) => {
            ctx.session.set_logged_in(&response);
            ctx.notify("Welcome aboard!", NotificationKind::Success);
            ctx.navigate(Page::Home);
            ctx.request_render();
        }
        Err(e) => {
            log::warn!("auto-login after registration failed: {}", e.message);
            ctx.notify(
                "Registered. Please log in to continue.",
                NotificationKind::Success,
            );
            ctx.navigate(Page::Login);
        }
    }
}

/// Collect the form values and run the submit-time checks in display order.
fn read_and_validate() -> Result<RegisterRequest, String> {
    let value = |id: &str| {
        dom::get_element_by_id(id)
            .map(|e| dom::input_value(&e))
            .unwrap_or_default()
    };

    let name = value(NAME_ID).trim().to_string();
    if !is_letters_and_spaces(&name) {
        return Err("Please enter your name (letters and spaces only)".to_string());
    }

    let email = value(EMAIL_ID).trim().to_string();
    if !is_valid_email(&email) {
        return Err("Please enter a valid email address".to_string());
    }

    let phone = value(PHONE_ID);
    validate_phone(&phone).map_err(str::to_string)?;
    // The sanitizer guarantees digits only, so this parse cannot fail.
    let phone: u64 = phone.parse().map_err(|_| "Phone number must be 10 digits")?;

    let gender = dom::get_element_by_id(GENDER_ID)
        .map(|e| dom::select_value(&e))
        .unwrap_or_default();
    if gender.is_empty() {
        return Err("Please select a gender".to_string());
    }
    let gender = Gender::from_value(&gender);

    let password = value(PASSWORD_ID);
    validate_password(&password).map_err(str::to_string)?;
    if value(CONFIRM_ID) != password {
        return Err("Passwords do not match".to_string());
    }

    Ok(RegisterRequest {
        name,
        email,
        phone,
        gender,
        password,
    })
}

/// Text input that rewrites its own value through a sanitizer on every
/// keystroke.
pub(crate) fn sanitized_input(
    id: &str,
    placeholder: &str,
    sanitize: fn(&str) -> String,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("input")
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .build();
    let input_ref = input.clone();
    dom::on_input(&input, move |event| {
        let raw = dom::event_target_value(&event);
        let clean = sanitize(&raw);
        if clean != raw {
            dom::set_input_value(&input_ref, &clean);
        }
    })?;
    Ok(input)
}

fn password_input(id: &str, placeholder: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .id(id)?
        .class("input")
        .attr("type", "password")?
        .attr("placeholder", placeholder)?
        .attr("autocomplete", "new-password")?
        .build())
}

fn gender_select() -> Result<Element, JsValue> {
    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Select gender")
        .build();
    let mut select = ElementBuilder::new("select")?
        .id(GENDER_ID)?
        .class("input")
        .child(placeholder)?;
    for gender in Gender::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", gender.as_str())?
            .text(gender.label())
            .build();
        select = select.child(option)?;
    }
    Ok(select.build())
}
