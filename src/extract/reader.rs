use crate::models::{Metadata, OpenGraph};

use super::entities::decode_html_entities;

const SITE_NAMES: [&str; 3] = ["title", "description", "image"];
const OG_NAMES: [&str; 6] = [
    "og:title",
    "og:description",
    "og:image",
    "og:url",
    "og:site_name",
    "og:type",
];

/// Collects metadata from the `<meta>` tags of one document.
///
/// Fed one tag at a time in document order. The record stays `None` until
/// the first recognised tag, and a later tag for the same field replaces the
/// earlier value.
#[derive(Debug, Default)]
pub struct MetaReader {
    metadata: Option<Metadata>,
}

impl MetaReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a single `<meta>` element. Empty attribute values count as missing.
    pub fn read_tag(&mut self, name: Option<&str>, property: Option<&str>, content: Option<&str>) {
        let meta_name = non_empty(name).or_else(|| non_empty(property));
        let (Some(meta_name), Some(content)) = (meta_name, non_empty(content)) else {
            return;
        };

        let content = decode_html_entities(content);

        self.read_site_data(meta_name, &content);
        self.read_open_graph(meta_name, &content);
    }

    pub fn finish(self) -> Option<Metadata> {
        self.metadata
    }

    fn read_site_data(&mut self, name: &str, content: &str) {
        if !SITE_NAMES.contains(&name) {
            return;
        }

        let metadata = self.metadata.get_or_insert_with(Metadata::default);
        let slot = match name {
            "title" => &mut metadata.title,
            "description" => &mut metadata.description,
            "image" => &mut metadata.image,
            _ => return,
        };
        *slot = Some(content.to_owned());
    }

    fn read_open_graph(&mut self, name: &str, content: &str) {
        if !OG_NAMES.contains(&name) {
            return;
        }

        let og = self
            .metadata
            .get_or_insert_with(Metadata::default)
            .og
            .get_or_insert_with(OpenGraph::default);

        let key = name.split_once(':').map_or(name, |(_, key)| key);
        let slot = match key {
            "title" => &mut og.title,
            "description" => &mut og.description,
            "image" => &mut og.image,
            "url" => &mut og.url,
            "site_name" => &mut og.site_name,
            // og:type is recognised but not stored.
            _ => return,
        };
        *slot = Some(content.to_owned());
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
