/// Share service - emails a post recommendation to a third party
use crate::db::BlogStore;
use crate::error::Result;
use crate::forms::{EmailPostForm, FormState};
use crate::metrics::blog::SHARE_EMAILS_TOTAL;
use crate::models::Post;
use crate::services::email::Mailer;
use crate::services::posts::PostService;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ShareOutcome {
    pub post: Post,
    pub form: FormState<EmailPostForm>,
    pub sent: bool,
}

pub struct ShareService {
    store: Arc<dyn BlogStore>,
    mailer: Arc<dyn Mailer>,
    from_address: String,
}

impl ShareService {
    pub fn new(store: Arc<dyn BlogStore>, mailer: Arc<dyn Mailer>, from_address: String) -> Self {
        Self {
            store,
            mailer,
            from_address,
        }
    }

    /// Present (`submission == None`) or process the share form for a post.
    ///
    /// `base_url` is the scheme and authority the post link is built on,
    /// e.g. `https://blog.example.com`.
    pub async fn share_post(
        &self,
        post_id: i64,
        submission: Option<EmailPostForm>,
        base_url: &str,
    ) -> Result<ShareOutcome> {
        let post = PostService::new(self.store.clone())
            .get_published(post_id)
            .await?;

        let Some(data) = submission else {
            return Ok(ShareOutcome {
                post,
                form: FormState::unbound(),
                sent: false,
            });
        };

        let form = FormState::bind(data);
        if !form.is_valid() {
            SHARE_EMAILS_TOTAL.with_label_values(&["invalid"]).inc();
            return Ok(ShareOutcome {
                post,
                form,
                sent: false,
            });
        }

        let post_url = format!("{}{}", base_url.trim_end_matches('/'), post.absolute_path());
        let (subject, body) = compose_message(&post, &form.data, &post_url);

        self.mailer
            .send_mail(&subject, &body, &self.from_address, &[form.data.to.clone()])
            .await?;

        tracing::info!(post_id, "post recommendation sent");
        SHARE_EMAILS_TOTAL.with_label_values(&["sent"]).inc();

        Ok(ShareOutcome {
            post,
            form,
            sent: true,
        })
    }
}

/// Subject and plain-text body of a recommendation email
pub fn compose_message(post: &Post, data: &EmailPostForm, post_url: &str) -> (String, String) {
    let subject = format!("{} recommends you read {}", data.name, post.title);
    let body = format!(
        "Read {} at {}\n\n{}'s comments: {}",
        post.title, post_url, data.name, data.comments
    );
    (subject, body)
}
