//! Response rendering.
//!
//! Handlers hand a template name and a serializable context to a
//! [`Renderer`]; the renderer owns the output format.

use crate::error::Result;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;

pub const LIST_TEMPLATE: &str = "blog/post/list";
pub const DETAIL_TEMPLATE: &str = "blog/post/detail";
pub const COMMENT_TEMPLATE: &str = "blog/post/comment";
pub const SHARE_TEMPLATE: &str = "blog/post/share";

pub trait Renderer: Send + Sync {
    /// Produce a response body for `template` from `context`.
    fn render(&self, template: &str, context: Value) -> Result<String>;

    fn content_type(&self) -> &'static str;
}

/// Renders `{"template": name, "context": {...}}` JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, template: &str, context: Value) -> Result<String> {
        let body = serde_json::to_string(&serde_json::json!({
            "template": template,
            "context": context,
        }))?;
        Ok(body)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Serialize `context` and render it into a 200 response.
pub fn render<C: Serialize>(
    renderer: &dyn Renderer,
    template: &str,
    context: &C,
) -> Result<HttpResponse> {
    let body = renderer.render(template, serde_json::to_value(context)?)?;
    Ok(HttpResponse::Ok()
        .content_type(renderer.content_type())
        .body(body))
}
