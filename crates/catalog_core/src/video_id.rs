use std::sync::LazyLock;

use regex::Regex;

/// Length of a platform video identifier, in UTF-16 code units.
pub const VIDEO_ID_LEN: usize = 11;

// Greedy prefix: the candidate follows the last recognized marker.
// The `u/x/` channel marker takes a single ASCII word character.
static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/(?-u:\w)/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("video id pattern is valid")
});

/// Extract the 11-character video identifier embedded in a source URL.
///
/// Recognizes short links (`youtu.be/ID`), path forms (`/v/ID`, `/embed/ID`,
/// `/u/x/ID`) and query forms (`watch?v=ID`, `&v=ID`). Returns `None` when
/// no form matches or the candidate is not exactly 11 UTF-16 code units long,
/// the length a browser reports for the same string.
pub fn extract_video_id(url: &str) -> Option<String> {
    let captures = VIDEO_ID_PATTERN.captures(url)?;
    let candidate = captures.get(2)?.as_str();
    if candidate.encode_utf16().count() == VIDEO_ID_LEN {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Thumbnail image address for a video identifier. The identifier is not checked.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}
