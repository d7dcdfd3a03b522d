use serde::{Deserialize, Serialize};

/// Knowledge-base article found for a rule's external reference id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KbaDocument {
    #[serde(default, rename = "view_uri")]
    pub view_uri: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub published_title: Option<String>,
}

impl KbaDocument {
    /// Title to show for the article; falls back to the id
    pub fn display_title(&self) -> Option<&str> {
        self.published_title.as_deref().or(self.id.as_deref())
    }
}
