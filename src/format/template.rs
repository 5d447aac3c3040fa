use serde::{Deserialize, Serialize};

use crate::core::record::{ColorQuery, SearchableRecord};
use crate::format::transform::Transform;
use crate::utils::validation::alpha_percent;

pub const HUE_PLACEHOLDER: &str = "$HUE";
pub const VALUE_PLACEHOLDER: &str = "$VALUE";
pub const ALPHA_PLACEHOLDER: &str = "$ALPHA";

/// A user-defined output template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTemplate {
    /// Text containing `$HUE`, `$VALUE`, and `$ALPHA` placeholders
    pub pattern: String,

    /// Transform spec for `$HUE`/`$VALUE` (see [`Transform`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl FormatTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            transform: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Render this template for `data`
    pub fn render(&self, data: &FormatData) -> String {
        render(self, data)
    }
}

/// Names and alpha of the color being formatted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatData {
    pub hue_name: String,
    pub group_name: Option<String>,
    pub value_name: String,
    pub alpha: Option<f64>,
}

impl FormatData {
    pub fn new(hue_name: impl Into<String>, value_name: impl Into<String>) -> Self {
        Self {
            hue_name: hue_name.into(),
            value_name: value_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: Option<f64>) -> Self {
        self.alpha = alpha;
        self
    }

    /// Data for a catalog record
    pub fn from_record(record: &SearchableRecord) -> Self {
        Self {
            hue_name: record.hue_name.clone(),
            group_name: record.group_name.clone(),
            value_name: record.value_name.clone(),
            alpha: None,
        }
    }

    /// Data for a color outside the catalog: the bare hex stands in for the hue name
    pub fn from_query(query: &ColorQuery) -> Self {
        let hex = query.hex();
        Self {
            hue_name: hex.trim_start_matches('#').to_string(),
            group_name: None,
            value_name: String::new(),
            alpha: query.alpha,
        }
    }

    /// `$VALUE` text: the value name, prefixed by its group as `group-value`.
    ///
    /// The group and value are transformed as separate words so the joining
    /// hyphen survives separator substitution.
    fn transformed_value_name(&self, transform: &Transform) -> String {
        let value = transform.apply(&self.value_name);
        match &self.group_name {
            Some(group) => format!("{}-{value}", transform.apply(group)),
            None => value,
        }
    }
}

/// Render a template for one color.
///
/// Substitutes every `$HUE`, `$VALUE`, and `$ALPHA` in the pattern; any other
/// `$` text is left as is. There is no escape for literal placeholder text.
///
/// # Examples
///
/// ```
/// use swatch_solver::format::template::{render, FormatData, FormatTemplate};
///
/// let template = FormatTemplate::new("$HUE $VALUE").with_transform("Xx");
/// let data = FormatData::new("light-blue", "500");
/// assert_eq!(render(&template, &data), "Light Blue 500");
/// ```
#[must_use]
pub fn render(template: &FormatTemplate, data: &FormatData) -> String {
    let transform = Transform::parse(template.transform.as_deref());

    let hue = transform.apply(&data.hue_name);
    let value = data.transformed_value_name(&transform);
    let alpha = alpha_percent(data.alpha);

    template
        .pattern
        .replace(HUE_PLACEHOLDER, &hue)
        .replace(VALUE_PLACEHOLDER, &value)
        .replace(ALPHA_PLACEHOLDER, &alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sentence_case() {
        let template = FormatTemplate::new("$HUE $VALUE").with_transform("Xx");
        let data = FormatData::new("light-blue", "500");
        assert_eq!(render(&template, &data), "Light Blue 500");
    }

    #[test]
    fn test_render_delete_separators() {
        let template = FormatTemplate::new("$HUE-$VALUE").with_transform("dX");
        let data = FormatData::new("light blue", "a100");
        assert_eq!(render(&template, &data), "LIGHTBLUE-A100");
    }

    #[test]
    fn test_render_alpha() {
        let template = FormatTemplate::new("$ALPHA");
        let data = FormatData::new("red", "500");
        assert_eq!(render(&template, &data), "100");
        assert_eq!(render(&template, &data.clone().with_alpha(Some(0.5))), "50");
        assert_eq!(render(&template, &data.with_alpha(Some(0.0))), "100");
    }

    #[test]
    fn test_render_grouped_value() {
        let data = FormatData::new("", "a100").with_group("accent");

        assert_eq!(render(&FormatTemplate::new("$VALUE"), &data), "accent-a100");
        assert_eq!(
            render(&FormatTemplate::new("$VALUE").with_transform("Xx"), &data),
            "Accent-A100"
        );
        assert_eq!(
            render(&FormatTemplate::new("$VALUE").with_transform("_x"), &data),
            "accent-a100"
        );

        let spaced = FormatData::new("", "a 100").with_group("bright accent");
        assert_eq!(
            render(&FormatTemplate::new("$VALUE").with_transform("dX"), &spaced),
            "BRIGHTACCENT-A100"
        );
    }

    #[test]
    fn test_render_invalid_transform_passes_through() {
        let template = FormatTemplate::new("$HUE/$VALUE").with_transform("nope");
        let data = FormatData::new("deep-purple", "a100").with_group("accent");
        assert_eq!(render(&template, &data), "deep-purple/accent-a100");
    }

    #[test]
    fn test_render_repeated_and_unknown_placeholders() {
        let template = FormatTemplate::new("$HUE $HUE $NAME $VALUE").with_transform("x");
        let data = FormatData::new("Red", "500");
        assert_eq!(render(&template, &data), "red red $NAME 500");
    }

    #[test]
    fn test_render_missing_names_default_empty() {
        let template = FormatTemplate::new("[$HUE][$VALUE]");
        assert_eq!(render(&template, &FormatData::default()), "[][]");
    }

    #[test]
    fn test_render_is_idempotent() {
        let template = FormatTemplate::new("$HUE_$VALUE $ALPHA%").with_transform("_X");
        let data = FormatData::new("blue grey", "700").with_alpha(Some(0.33));
        let first = template.render(&data);
        assert_eq!(first, template.render(&data));
        assert_eq!(first, "BLUE_GREY_700 33%");
    }

    #[test]
    fn test_from_query() {
        let query = ColorQuery::from_hex("#ABCDEF").unwrap().with_alpha(0.4);
        let data = FormatData::from_query(&query);
        assert_eq!(data.hue_name, "abcdef");
        assert_eq!(data.value_name, "");
        assert_eq!(render(&FormatTemplate::new("$HUE@$ALPHA"), &data), "abcdef@40");
    }
}
