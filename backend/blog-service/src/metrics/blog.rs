use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Comment submissions by outcome (created, invalid).
    pub static ref COMMENTS_SUBMITTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_comments_submitted_total",
        "Comment submissions segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register blog_comments_submitted_total");

    /// Share form submissions by outcome (sent, invalid).
    pub static ref SHARE_EMAILS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_share_emails_total",
        "Share form submissions segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register blog_share_emails_total");

    /// Listing requests whose page parameter had to be replaced.
    pub static ref LISTING_PAGE_FALLBACKS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_listing_page_fallbacks_total",
        "Listing page parameters replaced by a fallback page",
        &["reason"]
    )
    .expect("failed to register blog_listing_page_fallbacks_total");
}
