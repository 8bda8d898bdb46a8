use crate::error::Result;
use crate::types::{FaqEntry, FaqId};

/// Reduces a token to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    fn lemma(&self, token: &str) -> String;
}

/// Source of FAQ rows. The matcher only ever calls `load_all`.
pub trait FaqStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<FaqEntry>>;

    fn count(&self) -> Result<usize> {
        Ok(self.load_all()?.len())
    }

    fn find_by_id(&self, id: FaqId) -> Result<Option<FaqEntry>> {
        Ok(self.load_all()?.into_iter().find(|e| e.id == id))
    }
}
