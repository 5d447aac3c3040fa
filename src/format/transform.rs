//! The casing/separator mini-language applied to `$HUE` and `$VALUE`.
//!
//! A transform spec is at most three characters: an optional replacer followed
//! by a casing code.
//!
//! | Spec  | Casing        | Separator     |
//! |-------|---------------|---------------|
//! | `x`   | lowercase     | single space  |
//! | `X`   | uppercase     | single space  |
//! | `Xx`  | sentence case | single space  |
//! | `dX`  | uppercase     | deleted       |
//! | `_x`  | lowercase     | `_`           |
//!
//! Anything else parses to [`Transform::IDENTITY`], which leaves names untouched.

/// Maximum length of a transform spec, in characters
pub const MAX_TRANSFORM_LEN: usize = 3;

/// Replacer that deletes separators instead of substituting them
pub const DELETE_REPLACER: char = 'd';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    /// Leave the name untouched
    #[default]
    None,
    Lower,
    Upper,
    /// Uppercase the first letter of each space- or hyphen-separated word
    SentenceCase,
}

impl Casing {
    fn parse(code: &str) -> Option<Self> {
        match code {
            "x" => Some(Self::Lower),
            "X" => Some(Self::Upper),
            "Xx" => Some(Self::SentenceCase),
            _ => None,
        }
    }

    fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Lower => s.to_lowercase(),
            Self::Upper => s.to_uppercase(),
            Self::SentenceCase => sentence_case(s),
        }
    }
}

/// What spaces and hyphens become after casing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    DefaultSpace,
    Delete,
    Literal(char),
}

impl Separator {
    fn from_replacer(replacer: char) -> Self {
        if replacer == DELETE_REPLACER {
            Self::Delete
        } else {
            Self::Literal(replacer)
        }
    }

    fn apply(self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if is_separator(c) {
                match self {
                    Self::DefaultSpace => out.push(' '),
                    Self::Delete => {}
                    Self::Literal(r) => out.push(r),
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '-'
}

/// A parsed transform spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transform {
    pub casing: Casing,
    pub separator: Separator,
}

impl Transform {
    /// Names pass through unmodified
    pub const IDENTITY: Self = Self {
        casing: Casing::None,
        separator: Separator::DefaultSpace,
    };

    /// Parse a transform spec; invalid or absent specs yield [`Transform::IDENTITY`].
    ///
    /// The whole spec is tried as a casing code first, so `Xx` is sentence case
    /// rather than replacer `X` with lowercase.
    pub fn parse(spec: Option<&str>) -> Self {
        spec.and_then(Self::try_parse).unwrap_or(Self::IDENTITY)
    }

    fn try_parse(spec: &str) -> Option<Self> {
        if spec.is_empty() || spec.chars().count() > MAX_TRANSFORM_LEN {
            return None;
        }

        if let Some(casing) = Casing::parse(spec) {
            return Some(Self {
                casing,
                separator: Separator::DefaultSpace,
            });
        }

        let mut chars = spec.chars();
        let replacer = chars.next()?;
        if replacer != DELETE_REPLACER && replacer.is_alphanumeric() {
            return None;
        }

        Casing::parse(chars.as_str()).map(|casing| Self {
            casing,
            separator: Separator::from_replacer(replacer),
        })
    }

    pub fn is_identity(&self) -> bool {
        self.casing == Casing::None
    }

    /// Apply casing, then separator substitution.
    ///
    /// Casing runs first because sentence case needs the original word boundaries.
    pub fn apply(&self, s: &str) -> String {
        if self.is_identity() {
            return s.to_string();
        }
        self.separator.apply(&self.casing.apply(s))
    }
}

/// Uppercase the first character and every character after whitespace or a hyphen.
///
/// Other characters are left as they are; nothing is lowercased.
///
/// # Examples
///
/// ```
/// use swatch_solver::format::transform::sentence_case;
///
/// assert_eq!(sentence_case("light-blue"), "Light-Blue");
/// assert_eq!(sentence_case("deep PURPLE a100"), "Deep PURPLE A100");
/// ```
#[must_use]
pub fn sentence_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace() || c == '-';
    }
    out
}
