// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Media attachments: images and documents linked to a record.
//!
//! The `MediaAttachments` column holds a JSON array as text. Two shapes occur
//! in the wild: objects with a `url` and metadata, and bare URL strings. Both
//! normalize to [`MediaItem`]. Sentinels (`""`, `"NA"`, `"[]"`) and anything
//! that fails to parse mean "no media".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaItem {
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub caption: Option<String>,
    pub mime_type: Option<String>,
    pub original_filename: Option<String>,
    pub is_cover_image: bool,
}

impl MediaItem {
    fn has_tag(&self, pattern: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(pattern))
    }

    fn has_category(&self, pattern: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(pattern))
    }

    fn is_certificate(&self) -> bool {
        self.has_category("certificate") || self.has_category("papers")
    }

    /// URL for a thumbnail, falling back to the full-size URL.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().or(self.url.as_deref())
    }

    /// URL for the full-size file, falling back to the thumbnail.
    pub fn full_url(&self) -> Option<&str> {
        self.url.as_deref().or(self.thumbnail_url.as_deref())
    }

    pub fn is_image(&self) -> bool {
        let Some(url) = self.url.as_deref() else {
            return false;
        };
        let lower = url.to_lowercase();
        [".jpg", ".jpeg", ".png", ".gif", ".webp"]
            .iter()
            .any(|ext| lower.ends_with(ext))
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type.as_deref() == Some("application/pdf")
            || self
                .url
                .as_deref()
                .is_some_and(|url| url.to_lowercase().ends_with(".pdf"))
    }

    fn mentions_translation(&self) -> bool {
        let hit = |s: &str| {
            let lower = s.to_lowercase();
            lower.contains("translation") || lower.contains("translated")
        };
        self.caption.as_deref().is_some_and(hit)
            || self.tags.iter().any(|t| hit(t))
            || self.original_filename.as_deref().is_some_and(hit)
    }
}

fn is_sentinel(raw: &str) -> bool {
    matches!(raw, "" | "NA" | "[]")
}

/// Parse an attachment list. Never fails; bad input yields an empty list.
pub fn parse_media_attachments(raw: &str) -> Vec<MediaItem> {
    if is_sentinel(raw) {
        return Vec::new();
    }
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Vec::new(),
        Err(e) => {
            warn!("unparseable media attachments: {}", e);
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(MediaItem {
                url: Some(url),
                ..Default::default()
            }),
            other => match serde_json::from_value::<MediaItem>(other) {
                Ok(media) => Some(media),
                Err(e) => {
                    warn!("skipping malformed media item: {}", e);
                    None
                }
            },
        })
        .collect()
}

/// Does the raw attachment list hold at least one entry?
///
/// Quiet counterpart of [`parse_media_attachments`] for per-record filtering:
/// malformed input is "no media" and is not logged.
pub fn has_media(raw: &str) -> bool {
    if is_sentinel(raw) {
        return false;
    }
    serde_json::from_str::<Vec<serde::de::IgnoredAny>>(raw).is_ok_and(|items| !items.is_empty())
}

/// Pick the attachment that best represents a record.
///
/// In order: an explicit cover image, a Tokubetsu Juyo certificate, a Juyo
/// certificate, a full-blade (sugata) shot, the first item.
pub fn priority_thumbnail(media: &[MediaItem]) -> Option<&MediaItem> {
    media
        .iter()
        .find(|m| m.is_cover_image)
        .or_else(|| {
            media
                .iter()
                .find(|m| m.has_tag("tokubetsu juyo") && m.is_certificate())
        })
        .or_else(|| {
            media.iter().find(|m| {
                m.has_tag("juyo") && !m.has_tag("tokubetsu juyo") && m.is_certificate()
            })
        })
        .or_else(|| {
            media
                .iter()
                .find(|m| m.has_category("full blade") || m.has_category("sugata"))
        })
        .or_else(|| media.first())
}

/// Is there a translated certificate among the attachments?
pub fn has_translation_pdf(media: &[MediaItem]) -> bool {
    media
        .iter()
        .any(|m| m.is_pdf() && m.mentions_translation())
}
