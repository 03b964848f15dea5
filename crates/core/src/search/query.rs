//! Feed query construction.

/// Build a feed query like `"One Piece 02 1080p"`.
///
/// Empty components are skipped; an episode of 0 means unspecified.
pub fn build_query(title: &str, episode: u32, quality: &str) -> String {
    let mut parts = Vec::with_capacity(3);

    let title = title.trim();
    if !title.is_empty() {
        parts.push(title.to_string());
    }
    if episode > 0 {
        parts.push(format!("{:02}", episode));
    }
    let quality = quality.trim();
    if !quality.is_empty() {
        parts.push(quality.to_string());
    }

    parts.join(" ")
}

/// Whether `s` contains any Han, Hiragana or Katakana character.
///
/// Native-script titles are not worth a round trip on a Latin-indexed feed.
pub fn is_likely_cjk(s: &str) -> bool {
    s.chars().any(|c| {
        matches!(c,
            // Hiragana
            '\u{3041}'..='\u{3096}'
            | '\u{309D}'..='\u{309F}'
            | '\u{1B001}'..='\u{1B11F}'
            | '\u{1B132}'
            | '\u{1B150}'..='\u{1B152}'
            | '\u{1F200}'
            // Katakana
            | '\u{30A1}'..='\u{30FA}'
            | '\u{30FD}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{32D0}'..='\u{32FE}'
            | '\u{3300}'..='\u{3357}'
            | '\u{FF66}'..='\u{FF6F}'
            | '\u{FF71}'..='\u{FF9D}'
            | '\u{1AFF0}'..='\u{1AFF3}'
            | '\u{1AFF5}'..='\u{1AFFB}'
            | '\u{1AFFD}'..='\u{1AFFE}'
            | '\u{1B000}'
            | '\u{1B120}'..='\u{1B122}'
            | '\u{1B155}'
            | '\u{1B164}'..='\u{1B167}'
            // Han
            | '\u{2E80}'..='\u{2FD5}'
            | '\u{3005}'
            | '\u{3007}'
            | '\u{3021}'..='\u{3029}'
            | '\u{3038}'..='\u{303B}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{16FE2}'..='\u{16FE3}'
            | '\u{16FF0}'..='\u{16FF1}'
            | '\u{20000}'..='\u{323AF}'
        )
    })
}
