use serde::Serialize;

use crate::core::types::{HueMember, Rgb};

/// One flattened catalog color, the unit the index searches over
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchableRecord {
    pub hue_name: String,

    /// Title of the group the color was declared in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Direct-value name (or key), or the grouped color's name; never empty
    pub value_name: String,

    /// Lowercase `#rrggbb`
    pub hex: String,

    #[serde(skip)]
    pub rgb: Rgb,
}

impl SearchableRecord {
    /// Flatten a hue member into a record.
    /// Returns None if the member's hex is invalid or it has no usable name.
    pub fn from_member(hue_name: &str, member: &HueMember<'_>) -> Option<Self> {
        let rgb = Rgb::from_hex(&member.value().hex)?;
        let value_name = member.value_name();
        if value_name.is_empty() {
            return None;
        }

        Some(Self {
            hue_name: hue_name.to_string(),
            group_name: member.group_name().map(str::to_string),
            value_name: value_name.to_string(),
            hex: rgb.to_hex(),
            rgb,
        })
    }

    /// Group-qualified value name (`accent-a100`), or the bare value name
    pub fn qualified_value_name(&self) -> String {
        match &self.group_name {
            Some(group) => format!("{group}-{}", self.value_name),
            None => self.value_name.clone(),
        }
    }
}

impl std::fmt::Display for SearchableRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.hue_name,
            self.qualified_value_name(),
            self.hex
        )
    }
}

/// An ad-hoc color to look up; not a catalog member
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorQuery {
    pub rgb: Rgb,

    /// Alpha in `[0, 1]`; carried for formatting, never used for matching
    pub alpha: Option<f64>,
}

impl ColorQuery {
    pub fn new(rgb: Rgb) -> Self {
        Self { rgb, alpha: None }
    }

    /// Build a query from a 6-digit hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        Rgb::from_hex(hex).map(Self::new)
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Lowercase `#rrggbb`
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Alpha, defaulting to fully opaque
    pub fn alpha_or_default(&self) -> f64 {
        self.alpha.unwrap_or(1.0)
    }
}
