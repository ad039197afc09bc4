/// HTTP handlers for blog endpoints
///
/// This module contains handlers for:
/// - Posts: Paginated listing and permalink detail pages
/// - Comments: Comment form submission
/// - Share: "Recommend this post" email form
pub mod comments;
pub mod posts;
pub mod share;

// Re-export handler functions at module level
pub use comments::{comment_method_not_allowed, post_comment};
pub use posts::{post_detail, post_list};
pub use share::{share_form, share_method_not_allowed, share_submit};
