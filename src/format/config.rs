use std::path::Path;

use thiserror::Error;

use crate::format::template::FormatTemplate;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read templates: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse templates: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Template list is empty; at least one template is required")]
    Empty,
}

/// Ordered list of output templates.
///
/// The first template is the default (click-to-copy) format; the rest are
/// alternatives offered in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<FormatTemplate>,
}

impl TemplateSet {
    /// Build a set from an ordered list.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Empty` if `templates` is empty.
    pub fn new(templates: Vec<FormatTemplate>) -> Result<Self, TemplateError> {
        if templates.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(Self { templates })
    }

    /// Load templates from a JSON file (`[{"pattern": ..., "transform": ...}]`)
    pub fn load_from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let templates: Vec<FormatTemplate> = serde_json::from_str(json)?;
        Self::new(templates)
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(&self.templates)?)
    }

    /// The click-to-copy template
    pub fn default_template(&self) -> &FormatTemplate {
        &self.templates[0]
    }

    /// Every template after the default, in order
    pub fn alternatives(&self) -> &[FormatTemplate] {
        &self.templates[1..]
    }

    pub fn get(&self, index: usize) -> Option<&FormatTemplate> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; a set holds at least one template
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            templates: vec![
                FormatTemplate::new("$HUE $VALUE").with_transform("Xx"),
                FormatTemplate::new("$HUE-$VALUE").with_transform("x"),
                FormatTemplate::new("$HUE_$VALUE").with_transform("_X"),
                FormatTemplate::new("$HUE $VALUE $ALPHA%").with_transform("Xx"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a FormatTemplate;
    type IntoIter = std::slice::Iter<'a, FormatTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
