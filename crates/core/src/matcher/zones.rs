//! Splitting release titles into group, core and technical zones.

/// The three zones of a release title.
///
/// `"[SubsPlease] Takt Op. Destiny - 01 (1080p) [ABC123]"` splits into
/// group tags `["subsplease"]`, core title `"Takt Op. Destiny - 01"` and
/// tech tags `"(1080p) [ABC123]"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleZones {
    /// Leading bracketed tags, lowercased, in order of appearance.
    pub group_tags: Vec<String>,
    /// What is left once both bracket zones are stripped.
    pub core_title: String,
    /// Trailing bracket/parenthesis run, original casing.
    pub tech_tags: String,
}

impl TitleZones {
    pub fn parse(raw: &str) -> Self {
        let mut rest = raw.trim();
        if rest.is_empty() {
            return Self::default();
        }

        let mut group_tags = Vec::new();
        while rest.starts_with('[') {
            let Some(end) = rest.find(']') else {
                break;
            };
            let tag = rest[1..end].trim().to_lowercase();
            if !tag.is_empty() {
                group_tags.push(tag);
            }
            rest = rest[end + 1..].trim();
        }

        // Walk back over contiguous trailing [..] and (..) runs. `rest` has no
        // leading whitespace, so indices into the trimmed head are indices
        // into `rest`.
        let mut trailing_start = rest.len();
        while trailing_start > 0 {
            let head = rest[..trailing_start].trim_end();
            let opener = match head.chars().last() {
                Some(']') => '[',
                Some(')') => '(',
                _ => break,
            };
            match head.rfind(opener) {
                Some(open) => trailing_start = open,
                None => break,
            }
        }

        Self {
            group_tags,
            core_title: rest[..trailing_start].trim().to_string(),
            tech_tags: rest[trailing_start..].trim().to_string(),
        }
    }
}
