//! Week records and partial updates

use serde::{Deserialize, Serialize};

/// One study unit: a titled, ordered list of vocabulary words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: String,
    pub title: String,
    /// Order is significant; duplicates and empty entries are kept as given.
    pub words: Vec<String>,
}

impl Week {
    pub fn new(id: String, title: String, words: Vec<String>) -> Self {
        Week { id, title, words }
    }
}

/// Fields to overwrite on an existing week.
///
/// `None` leaves the field unchanged, `Some` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub words: Option<Vec<String>>,
}

impl WeekPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title.is_none() && self.words.is_none()
    }

    /// Shallow merge: supplied fields win, the rest come from `week`
    pub fn apply_to(&self, week: &Week) -> Week {
        Week {
            id: self.id.clone().unwrap_or_else(|| week.id.clone()),
            title: self.title.clone().unwrap_or_else(|| week.title.clone()),
            words: self.words.clone().unwrap_or_else(|| week.words.clone()),
        }
    }
}
