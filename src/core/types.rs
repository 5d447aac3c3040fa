use serde::{Deserialize, Serialize};

use crate::utils::validation::normalize_hex;

/// An 8-bit-per-channel RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = normalize_hex(hex)?;
        let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A single color in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    /// 6-digit RGB hex, normalized to lowercase `#rrggbb` once added to a catalog
    pub hex: String,

    /// Display name; required for grouped colors, optional for direct values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColorValue {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A direct value of a hue, keyed by name (e.g. "500")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectValue {
    pub key: String,

    #[serde(flatten)]
    pub value: ColorValue,
}

/// An ordered group of colors under an optional title (e.g. "accent")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub colors: Vec<ColorValue>,
}

/// Representative colors shown in navigation; never used for matching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

/// One named hue of the catalog with its direct values and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueEntry {
    /// Unique hue name (e.g. "red", "light-blue")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorHints>,

    /// Direct values in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<DirectValue>,

    /// Groups in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ColorGroup>,
}

impl HueEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: None,
            values: Vec::new(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: ColorValue) -> Self {
        self.values.push(DirectValue {
            key: key.into(),
            value,
        });
        self
    }

    #[must_use]
    pub fn with_group(mut self, title: Option<&str>, colors: Vec<ColorValue>) -> Self {
        self.groups.push(ColorGroup {
            title: title.map(str::to_string),
            colors,
        });
        self
    }

    #[must_use]
    pub fn with_selector(mut self, light: Option<&str>, dark: Option<&str>) -> Self {
        self.selector = Some(SelectorHints {
            light: light.map(str::to_string),
            dark: dark.map(str::to_string),
        });
        self
    }

    /// Every leaf color of this hue: direct values first, then each group's colors
    pub fn members(&self) -> impl Iterator<Item = HueMember<'_>> {
        let direct = self.values.iter().map(|v| HueMember::Direct {
            key: &v.key,
            value: &v.value,
        });
        let grouped = self.groups.iter().flat_map(|group| {
            group.colors.iter().map(move |value| HueMember::Grouped {
                title: group.title.as_deref(),
                value,
            })
        });
        direct.chain(grouped)
    }

    /// Total number of leaf colors
    pub fn color_count(&self) -> usize {
        self.values.len() + self.groups.iter().map(|g| g.colors.len()).sum::<usize>()
    }
}

/// A leaf color of a hue, tagged with where it was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueMember<'a> {
    Direct {
        key: &'a str,
        value: &'a ColorValue,
    },
    Grouped {
        title: Option<&'a str>,
        value: &'a ColorValue,
    },
}

impl<'a> HueMember<'a> {
    pub fn value(&self) -> &'a ColorValue {
        match *self {
            Self::Direct { value, .. } | Self::Grouped { value, .. } => value,
        }
    }

    /// Name used for formatting: a direct value's own name falls back to its key
    pub fn value_name(&self) -> &'a str {
        match *self {
            Self::Direct { key, value } => value.name.as_deref().unwrap_or(key),
            Self::Grouped { value, .. } => value.name.as_deref().unwrap_or_default(),
        }
    }

    pub fn group_name(&self) -> Option<&'a str> {
        match *self {
            Self::Direct { .. } => None,
            Self::Grouped { title, .. } => title,
        }
    }
}
