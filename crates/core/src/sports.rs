//! Sport categories and URL slug generation.
//!
//! Sports are grouped into men's, women's and co-ed ("other") programs. Each
//! sport is addressed publicly by a slug derived from its name, e.g.
//! `/sports/mens-basketball`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Men's program category identifier.
pub const CATEGORY_MENS: &str = "mens";

/// Women's program category identifier.
pub const CATEGORY_WOMENS: &str = "womens";

/// Co-ed and club program category identifier.
pub const CATEGORY_OTHER: &str = "other";

/// Valid category values, in display order.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_MENS, CATEGORY_WOMENS, CATEGORY_OTHER];

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("static regex is valid"));

/// Program category a sport belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportCategory {
    Mens,
    Womens,
    Other,
}

impl SportCategory {
    /// Parse from the database `category` column.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            CATEGORY_MENS => Ok(Self::Mens),
            CATEGORY_WOMENS => Ok(Self::Womens),
            CATEGORY_OTHER => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: {VALID_CATEGORIES:?}"
            ))),
        }
    }

    /// Database value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mens => CATEGORY_MENS,
            Self::Womens => CATEGORY_WOMENS,
            Self::Other => CATEGORY_OTHER,
        }
    }

    /// Heading shown above the group on the sports index.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mens => "Men's Sports",
            Self::Womens => "Women's Sports",
            Self::Other => "Other Sports",
        }
    }
}

/// Validate that `category` is one of the known program categories.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    SportCategory::parse(category).map(|_| ())
}

/// Derive a URL slug from a sport name.
///
/// Lowercases, strips accents (`"Équipe"` -> `"equipe"`), drops
/// apostrophes so possessives stay readable (`"Men's"` -> `"mens"`), and
/// collapses every other run of non-alphanumeric characters into a single
/// hyphen. Letters with no ASCII base form (e.g. CJK) are dropped.
///
/// ```
/// use unbenched_core::sports::slugify;
///
/// assert_eq!(slugify("Men's Basketball"), "mens-basketball");
/// assert_eq!(slugify("  Track & Field  "), "track-field");
/// ```
pub fn slugify(name: &str) -> String {
    let folded: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = folded.to_lowercase().replace(['\'', '\u{2019}'], "");
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Derive a slug and reject names that produce an empty one.
pub fn slug_for_name(name: &str) -> Result<String, CoreError> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(CoreError::Validation(format!(
            "Sport name '{name}' must contain at least one letter or digit"
        )));
    }
    Ok(slug)
}
