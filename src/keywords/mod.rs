// Keyword generation — input tokens merged with static keyword lists.

pub mod lists;
pub mod local;
pub mod samples;
pub mod traits;

/// Hard cap on the number of keywords returned for one request.
pub const MAX_KEYWORDS: usize = 30;

/// Pick the text to generate from: the title when it has content,
/// otherwise the description.
pub fn select_text<'a>(title: Option<&'a str>, description: Option<&'a str>) -> Option<&'a str> {
    title
        .filter(|t| !t.trim().is_empty())
        .or(description)
}
