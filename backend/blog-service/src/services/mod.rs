/// Business logic layer for blog-service
///
/// This module provides high-level operations:
/// - Post service: Listing and detail lookups of published posts
/// - Comment service: Validated comment submission
/// - Share service: "Recommend this post" emails
/// - Pagination and mail delivery primitives used by the services
pub mod comments;
pub mod email;
pub mod pagination;
pub mod posts;
pub mod share;

// Re-export commonly used services
pub use comments::{CommentService, CommentSubmission};
pub use email::{Mailer, SmtpMailer};
pub use pagination::{Page, PageError, Paginator};
pub use posts::{PostDetail, PostService};
pub use share::{ShareOutcome, ShareService};
