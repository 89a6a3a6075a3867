//! Board service configuration.

use serde::Deserialize;

/// Default text given to newly created entities.
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.default_column_title, "New column");
///
/// let custom = BoardConfig::default().with_default_task_content("Todo");
/// assert_eq!(custom.default_task_content, "Todo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Title given to columns created without one.
    pub default_column_title: String,
    /// Content given to tasks created without any.
    pub default_task_content: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_column_title: "New column".to_owned(),
            default_task_content: "New task".to_owned(),
        }
    }
}

impl BoardConfig {
    /// Sets the title for new columns.
    #[must_use]
    pub fn with_default_column_title(mut self, title: impl Into<String>) -> Self {
        self.default_column_title = title.into();
        self
    }

    /// Sets the content for new tasks.
    #[must_use]
    pub fn with_default_task_content(mut self, content: impl Into<String>) -> Self {
        self.default_task_content = content.into();
        self
    }
}
