//! Contact form route handlers.
//!
//! The form collects a name, an email, and a message. Submissions are
//! validated and logged; actual delivery belongs to a form-submission
//! service that is not part of this system.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use sakura_core::Email;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Form result fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_result.html")]
pub struct ContactResultTemplate {
    pub success: bool,
    pub message: String,
}

/// Submit the contact form.
///
/// POST /contact
///
/// Validates the fields and records the message in the log. Returns a
/// result fragment swapped into the form area.
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    let name = form.name.trim();
    let message = form.message.trim();

    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                ContactResultTemplate {
                    success: false,
                    message: format!("Проверьте адрес почты: {e}"),
                },
            );
        }
    };

    if name.is_empty() || message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            ContactResultTemplate {
                success: false,
                message: "Имя и сообщение обязательны.".to_string(),
            },
        );
    }

    tracing::info!(
        name = %name,
        email = %email,
        message_len = message.len(),
        "Contact message received"
    );

    (
        StatusCode::OK,
        ContactResultTemplate {
            success: true,
            message: "Спасибо! Мы свяжемся с вами.".to_string(),
        },
    )
}
