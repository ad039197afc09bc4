//! Reader-facing forms and their validation.
//!
//! Forms are submitted url-encoded. Every field defaults to empty so a
//! missing field becomes a field error rather than a rejected request.
//! Field errors never fail a request; they are returned inside the form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field name -> human readable messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A form whose fields can be cleaned before validation.
pub trait Form: Validate + Default {
    /// Strip surrounding whitespace from free-text fields.
    fn cleaned(self) -> Self;
}

/// Comment left on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[serde(default)]
    #[validate(email, length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub body: String,
}

impl Form for CommentForm {
    fn cleaned(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            body: self.body.trim().to_string(),
        }
    }
}

/// "Recommend this post" email form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailPostForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 25))]
    pub name: String,
    #[serde(default)]
    #[validate(email, length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(email, length(max = 254))]
    pub to: String,
    #[serde(default)]
    pub comments: String,
}

impl Form for EmailPostForm {
    fn cleaned(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            to: self.to.trim().to_string(),
            comments: self.comments.trim().to_string(),
        }
    }
}

/// A form as handed to the renderer: unbound (fresh) or bound to submitted data.
#[derive(Debug, Clone, Serialize)]
pub struct FormState<F> {
    pub is_bound: bool,
    pub data: F,
    pub errors: FieldErrors,
}

impl<F: Form> FormState<F> {
    pub fn unbound() -> Self {
        Self {
            is_bound: false,
            data: F::default(),
            errors: FieldErrors::new(),
        }
    }

    /// Clean and validate submitted data.
    pub fn bind(data: F) -> Self {
        let data = data.cleaned();
        let errors = match data.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_messages(&errors),
        };
        Self {
            is_bound: true,
            data,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_bound && self.errors.is_empty()
    }
}

fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs.iter().map(describe).collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn describe(err: &ValidationError) -> String {
    let submitted_empty = err
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map_or(true, str::is_empty);
    if submitted_empty {
        return "This field is required.".to_string();
    }

    match err.code.as_ref() {
        "email" => "Enter a valid email address.".to_string(),
        "length" => match err.params.get("max").and_then(|v| v.as_u64()) {
            Some(max) => format!("Ensure this value has at most {} characters.", max),
            None => "Enter a valid value.".to_string(),
        },
        _ => err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Enter a valid value.".to_string()),
    }
}
