use serde::{Deserialize, Serialize};

use crate::provider::error::ProviderError;

/// A normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    /// Provider identifier, stable across searches.
    pub id: String,
    pub title: String,
    /// Fixed-width rendition URL.
    pub url: String,
}

impl Gif {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}

// Wire schema of `GET /v1/gifs/search`. Only the fields the store needs are
// declared; everything else in the payload is ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub data: Vec<RawGif>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGif {
    pub id: String,
    pub title: String,
    pub images: RawImages,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawImages {
    pub fixed_width: RawRendition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRendition {
    pub url: String,
}

impl SearchResponse {
    /// Convert the payload into records, preserving provider order.
    pub fn into_gifs(self) -> Result<Vec<Gif>, ProviderError> {
        self.data
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_gif(index))
            .collect()
    }
}

impl RawGif {
    fn into_gif(self, index: usize) -> Result<Gif, ProviderError> {
        if self.id.trim().is_empty() {
            return Err(ProviderError::InvalidRecord {
                index,
                reason: "empty id".to_string(),
            });
        }
        if self.images.fixed_width.url.trim().is_empty() {
            return Err(ProviderError::InvalidRecord {
                index,
                reason: format!("gif '{}' has no fixed_width url", self.id),
            });
        }
        Ok(Gif {
            id: self.id,
            title: self.title,
            url: self.images.fixed_width.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<Gif>, ProviderError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|source| ProviderError::Decode { source })?;
        response.into_gifs()
    }

    #[test]
    fn maps_fixed_width_url_and_keeps_order() {
        let body = r#"{
            "data": [
                {"id": "b", "title": "Second", "images": {
                    "original": {"url": "https://x/orig-b.gif"},
                    "fixed_width": {"url": "https://x/fw-b.gif", "width": "200"}
                }},
                {"id": "a", "title": "First", "images": {
                    "fixed_width": {"url": "https://x/fw-a.gif"}
                }}
            ],
            "pagination": {"count": 2}
        }"#;

        let gifs = parse(body).unwrap();
        assert_eq!(
            gifs,
            vec![
                Gif::new("b", "Second", "https://x/fw-b.gif"),
                Gif::new("a", "First", "https://x/fw-a.gif"),
            ]
        );
    }

    #[test]
    fn empty_data_is_valid() {
        assert!(parse(r#"{"data": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_rendition_is_a_decode_error() {
        let body = r#"{"data": [{"id": "a", "title": "t", "images": {}}]}"#;
        assert!(matches!(parse(body), Err(ProviderError::Decode { .. })));
    }

    #[test]
    fn empty_id_is_rejected_with_index() {
        let body = r#"{"data": [
            {"id": "ok", "title": "t", "images": {"fixed_width": {"url": "u"}}},
            {"id": "", "title": "t", "images": {"fixed_width": {"url": "u"}}}
        ]}"#;
        match parse(body) {
            Err(ProviderError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }
}
