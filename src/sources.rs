//! Per-account ranked-list heuristics: which tweets to keep and how to pull entities out of them.
//!
//! - `FbTopTen` (@FacebooksTop10) numbers its items "1." .. "10." at the start of a line.
//! - `CitizenBrowser` (@citizenbrowser) prefixes items with keycap emoji 1..5,
//!   followed by a URL.

/// Rank markers in ascending numeric order. "1." is never a textual prefix of "10.",
/// so first-match in this order is unambiguous.
pub const FB_RANK_MARKERS: [&str; 10] = ["1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "10."];

/// Keycap emoji 1..5: digit + U+FE0F (variation selector-16) + U+20E3 (combining enclosing keycap).
pub const KEYCAP_MARKERS: [&str; 5] = [
    "1\u{FE0F}\u{20E3}",
    "2\u{FE0F}\u{20E3}",
    "3\u{FE0F}\u{20E3}",
    "4\u{FE0F}\u{20E3}",
    "5\u{FE0F}\u{20E3}",
];

/// Source account of a ranked-list tweet stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankedSource {
    FbTopTen,
    CitizenBrowser,
}

impl RankedSource {
    pub fn handle(self) -> &'static str {
        match self {
            RankedSource::FbTopTen => "@FacebooksTop10",
            RankedSource::CitizenBrowser => "@citizenbrowser",
        }
    }

    /// Output file stem for this source's month-keyed entity map.
    pub fn output_stem(self) -> &'static str {
        match self {
            RankedSource::FbTopTen => crate::config::OUTPUT_NAME_FB_TEN,
            RankedSource::CitizenBrowser => crate::config::OUTPUT_NAME_CITIZEN_BROWSER,
        }
    }

    /// Inclusion predicate: is this a ranked-list post worth extracting from?
    pub fn is_wanted(self, text: &str) -> bool {
        match self {
            RankedSource::FbTopTen => is_fbtopten_tweet_i_want(text),
            RankedSource::CitizenBrowser => is_citizenbrowser_tweet_i_want(text),
        }
    }

    /// Ordered entities in line order.
    pub fn extract(self, text: &str) -> Vec<String> {
        match self {
            RankedSource::FbTopTen => get_fb_top_ten(text),
            RankedSource::CitizenBrowser => get_citizenbrowser_top_five(text),
        }
    }
}

/// True if any rank marker occurs anywhere in the text. Coarse on purpose:
/// unrelated numbered text ("version 2.0") also passes.
pub fn is_fbtopten_tweet_i_want(text: &str) -> bool {
    FB_RANK_MARKERS.iter().any(|m| text.contains(m))
}

/// Lines starting with a rank marker, with the marker and one following space removed.
pub fn get_fb_top_ten(text: &str) -> Vec<String> {
    let mut topten = Vec::new();
    for line in text.split('\n') {
        if let Some(rest) = FB_RANK_MARKERS.iter().find_map(|m| line.strip_prefix(m)) {
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            topten.push(rest.to_string());
        }
    }
    topten
}

/// True if any keycap 1..5 occurs in the text. Plain digits never match.
pub fn is_citizenbrowser_tweet_i_want(text: &str) -> bool {
    KEYCAP_MARKERS.iter().any(|m| text.contains(m))
}

/// For each keycap-prefixed line, the second whitespace-delimited token.
/// A ranked line without one (rank listed with no URL) is skipped.
pub fn get_citizenbrowser_top_five(text: &str) -> Vec<String> {
    let mut topranked = Vec::new();
    for line in text.split('\n') {
        if !KEYCAP_MARKERS.iter().any(|m| line.starts_with(m)) {
            continue;
        }
        match line.split_whitespace().nth(1) {
            Some(tok) => topranked.push(tok.to_string()),
            None => tracing::warn!("One of the ranks was not reported. Skipping line {:?}", line),
        }
    }
    topranked
}
