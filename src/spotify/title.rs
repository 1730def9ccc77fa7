use std::sync::LazyLock;

use regex::Regex;

use crate::types::SplitTitle;

static FEATURING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*\(feat\.\s+([^)]+)\)").expect("featuring pattern is valid")
});

const BY_SEPARATOR: &str = " by ";

/// Splits a combined oEmbed title into track title and artist.
///
/// Rules are tried in order and the first hit wins:
/// 1. `<title> by <artist>`, split on the first ` by `
/// 2. `<title> (feat. <artist>)`
/// 3. the whole string is the title, artist unknown
///
/// Track names that legitimately contain ` by ` or `(feat. ` are split all
/// the same; the oEmbed title carries no better signal.
pub fn split_title(title: &str) -> SplitTitle {
    if let Some((left, right)) = split_on_by(title) {
        return SplitTitle {
            track_title: left,
            artist: Some(right),
        };
    }

    if let Some(captures) = FEATURING_PATTERN.captures(title) {
        let left = captures[1].trim();
        let right = captures[2].trim();
        if !left.is_empty() && !right.is_empty() {
            return SplitTitle {
                track_title: left.to_string(),
                artist: Some(right.to_string()),
            };
        }
    }

    SplitTitle {
        track_title: title.trim().to_string(),
        artist: None,
    }
}

/// Splits `<left> by <right>` on the first ` by `; `None` when either side is blank.
///
/// Album oEmbed titles only ever use this form.
pub fn split_on_by(title: &str) -> Option<(String, String)> {
    let (left, right) = title.split_once(BY_SEPARATOR)?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left.to_string(), right.to_string()))
}
