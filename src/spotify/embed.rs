use tl::{HTMLTag, Node, ParserOptions, VDom};

use crate::types::TrackCredits;

const TITLE_CLASS_PREFIX: &str = "TitleAndSubtitle_title";
const SUBTITLE_CLASS_PREFIX: &str = "TitleAndSubtitle_subtitle";
const TEXT_LINK_ID: &str = "textLink";

/// Pulls track title and artist out of an embedded player document.
pub trait EmbedExtractor: Send + Sync {
    fn extract(&self, markup: &str) -> Option<TrackCredits>;
}

/// Reads the credits from the Spotify embed player markup.
///
/// The title is the text of the `data-encore-id="textLink"` element below
/// the element whose class starts with `TitleAndSubtitle_title`, the artist
/// the same below `TitleAndSubtitle_subtitle`. The class names carry a
/// build hash suffix (`TitleAndSubtitle_title__Nwyku`), hence the prefix match.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerMarkupExtractor;

impl EmbedExtractor for PlayerMarkupExtractor {
    fn extract(&self, markup: &str) -> Option<TrackCredits> {
        let dom = tl::parse(markup, ParserOptions::new()).ok()?;

        let title = text_link_below(&dom, TITLE_CLASS_PREFIX)?;
        let artist = text_link_below(&dom, SUBTITLE_CLASS_PREFIX)?;

        Some(TrackCredits { title, artist })
    }
}

fn text_link_below(dom: &VDom<'_>, class_prefix: &str) -> Option<String> {
    let parser = dom.parser();

    dom.nodes()
        .iter()
        .filter_map(Node::as_tag)
        .filter(|tag| has_class_prefix(tag, class_prefix))
        .find_map(|container| {
            container
                .children()
                .all(parser)
                .iter()
                .filter_map(Node::as_tag)
                .filter(|tag| is_text_link(tag))
                .map(|tag| decode_text(&tag.inner_text(parser)))
                .find(|text| !text.is_empty())
        })
}

fn has_class_prefix(tag: &HTMLTag<'_>, prefix: &str) -> bool {
    tag.attributes()
        .class()
        .map(|classes| {
            classes
                .as_utf8_str()
                .split_whitespace()
                .any(|class| class.starts_with(prefix))
        })
        .unwrap_or(false)
}

fn is_text_link(tag: &HTMLTag<'_>) -> bool {
    tag.attributes()
        .get("data-encore-id")
        .flatten()
        .map(|value| value.as_utf8_str() == TEXT_LINK_ID)
        .unwrap_or(false)
}

fn decode_text(raw: &str) -> String {
    html_escape::decode_html_entities(raw).trim().to_string()
}
