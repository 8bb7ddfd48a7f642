use gem_matrix::prelude::*;
use std::path::Path;

/// Mock GemListSource returning fixed gem list content
pub struct MockGemListSource {
    content: String,
}

impl MockGemListSource {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl GemListSource for MockGemListSource {
    fn read_gem_list(&self, _path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}
