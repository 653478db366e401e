use serde::{Deserialize, Serialize};

/// One row of the book metadata table.
///
/// Several records may share a title (one per edition); table order decides
/// which record represents a title. The wire names keep the source table's
/// column headers, and extra snapshot columns are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    #[serde(rename = "Book-Title")]
    pub title: String,

    #[serde(rename = "Book-Author")]
    pub author: String,

    #[serde(rename = "Image-URL-M")]
    pub image_url: String,
}

impl BookRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
        }
    }
}
