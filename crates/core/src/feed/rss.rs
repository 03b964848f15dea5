//! RSS decoding for nyaa-style feeds.
//!
//! nyaa.si extends RSS 2.0 with a `nyaa:` namespace carrying swarm
//! counters, the info hash and uploader flags. Elements are matched on their
//! local name, so `<size>` and `<nyaa:size>` decode to the same field.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{FeedItem, SearchError};

/// Decode an RSS document into feed items, in document order.
pub fn parse_rss(xml: &str) -> Result<Vec<FeedItem>, SearchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current_item: Option<FeedItem> = None;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag_name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if tag_name == "item" {
                    current_item = Some(FeedItem::default());
                }
                current_tag = tag_name;
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"item" {
                    if let Some(item) = current_item.take() {
                        items.push(item);
                    }
                }
                current_tag.clear();
            }
            Ok(Event::Text(ref e)) => {
                if let Some(ref mut item) = current_item {
                    let text = e
                        .unescape()
                        .map_err(|err| SearchError::Parse(err.to_string()))?;
                    apply_field(item, &current_tag, &text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(ref mut item) = current_item {
                    let text = String::from_utf8_lossy(e.as_ref());
                    apply_field(item, &current_tag, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SearchError::Parse(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(items)
}

fn apply_field(item: &mut FeedItem, tag: &str, text: &str) {
    match tag {
        "title" => item.title = text.to_string(),
        "link" => item.link = text.to_string(),
        "guid" => item.guid = text.to_string(),
        "pubDate" => item.pub_date = text.to_string(),
        "category" => item.category = text.to_string(),
        "size" => item.size = text.to_string(),
        "seeders" => item.seeders = parse_counter(text),
        "leechers" => item.leechers = parse_counter(text),
        "downloads" => item.downloads = parse_counter(text),
        "infoHash" => item.info_hash = text.trim().to_string(),
        "trusted" => item.trusted = text.to_string(),
        "remake" => item.remake = text.to_string(),
        _ => {}
    }
}

/// Counters that are missing or malformed decode as zero.
fn parse_counter(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
