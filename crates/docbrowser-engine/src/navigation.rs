//! Category → topic navigation state.
//!
//! A [`Menu`] is the static structure (categories and their topics). A
//! [`Navigator`] owns the current selection and is the only thing that
//! changes it.

use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

use crate::io::document_path;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    #[error("Menu has no categories")]
    EmptyMenu,
    #[error("Category '{0}' has no topics")]
    EmptyCategory(String),
    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown topic '{topic}' in category '{category}'")]
    UnknownTopic { category: String, topic: String },
}

/// A top-level section of the documentation, e.g. `python`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Directory name under the content root.
    pub key: String,
    /// Heading shown above the topic list.
    pub title: String,
    /// Topic slugs in display order; each maps to `<key>/<topic>.md`.
    pub topics: Vec<String>,
}

impl Category {
    pub fn new(key: impl Into<String>, title: impl Into<String>, topics: &[&str]) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn topic_index(&self, topic: &str) -> Option<usize> {
        self.topics.iter().position(|t| t == topic)
    }
}

/// Validated menu structure: at least one category, every category with
/// at least one topic, keys unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    categories: Vec<Category>,
}

impl Menu {
    pub fn new(categories: Vec<Category>) -> Result<Self, NavError> {
        if categories.is_empty() {
            return Err(NavError::EmptyMenu);
        }
        for (i, category) in categories.iter().enumerate() {
            if category.topics.is_empty() {
                return Err(NavError::EmptyCategory(category.key.clone()));
            }
            if categories[..i].iter().any(|c| c.key == category.key) {
                return Err(NavError::DuplicateCategory(category.key.clone()));
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    fn category_index(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.key == key)
    }
}

/// Current category/topic selection over a [`Menu`].
///
/// Starts on the first topic of the first category.
#[derive(Debug, Clone)]
pub struct Navigator {
    menu: Menu,
    category: usize,
    topic: usize,
}

impl Navigator {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            category: 0,
            topic: 0,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn current_category(&self) -> &Category {
        &self.menu.categories[self.category]
    }

    pub fn current_category_index(&self) -> usize {
        self.category
    }

    pub fn current_topic(&self) -> &str {
        &self.current_category().topics[self.topic]
    }

    pub fn current_topic_index(&self) -> usize {
        self.topic
    }

    /// Switches category and resets the topic to the category's first.
    pub fn select_category(&mut self, key: &str) -> Result<(), NavError> {
        let index = self
            .menu
            .category_index(key)
            .ok_or_else(|| NavError::UnknownCategory(key.to_string()))?;
        self.category = index;
        self.topic = 0;
        Ok(())
    }

    /// Switches topic within the current category.
    pub fn select_topic(&mut self, topic: &str) -> Result<(), NavError> {
        let category = self.current_category();
        let index = category
            .topic_index(topic)
            .ok_or_else(|| NavError::UnknownTopic {
                category: category.key.clone(),
                topic: topic.to_string(),
            })?;
        self.topic = index;
        Ok(())
    }

    /// Moves to the next category, wrapping around. Resets the topic.
    pub fn next_category(&mut self) {
        self.category = (self.category + 1) % self.menu.categories.len();
        self.topic = 0;
    }

    /// Moves to the previous category, wrapping around. Resets the topic.
    pub fn previous_category(&mut self) {
        let len = self.menu.categories.len();
        self.category = (self.category + len - 1) % len;
        self.topic = 0;
    }

    /// Steps the topic carousel forward, wrapping around.
    pub fn next_topic(&mut self) {
        self.topic = (self.topic + 1) % self.current_category().topics.len();
    }

    /// Steps the topic carousel back, wrapping around.
    pub fn previous_topic(&mut self) {
        let len = self.current_category().topics.len();
        self.topic = (self.topic + len - 1) % len;
    }

    /// Content-root relative path of the current document.
    pub fn current_document_path(&self) -> RelativePathBuf {
        document_path(&self.current_category().key, self.current_topic())
    }
}

/// Human label for a topic slug: dashes become spaces.
pub fn topic_label(topic: &str) -> String {
    topic.replace('-', " ")
}
