use crate::error::Result;
use crate::git::TagSource;

/// In-memory tag source for testing without a repository
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
}

impl MockTagSource {
    /// Create a mock source holding the given tags
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags = self.tags.clone();
        tags.sort();
        Ok(tags)
    }
}
