//! Keyword-based menu categories.
//!
//! A product belongs to a category when its lowercased name or description
//! contains one of the category's keywords.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A menu category as selected by the category buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Every product.
    #[default]
    All,
    Sushi,
    Rolls,
    Wok,
    Drinks,
}

/// The label is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in button order.
    pub const ALL: [Self; 5] = [Self::All, Self::Sushi, Self::Rolls, Self::Wok, Self::Drinks];

    /// Parse either the slug (`"sushi"`) or the button label (`"Суши"`).
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] for any other input.
    pub fn parse(input: &str) -> Result<Self, UnknownCategory> {
        let wanted = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.slug() == wanted || category.label().to_lowercase() == wanted
            })
            .ok_or_else(|| UnknownCategory(input.to_owned()))
    }

    /// URL-safe identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sushi => "sushi",
            Self::Rolls => "rolls",
            Self::Wok => "wok",
            Self::Drinks => "drinks",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Sushi => "Суши",
            Self::Rolls => "Роллы",
            Self::Wok => "Вок",
            Self::Drinks => "Напитки",
        }
    }

    /// Lowercase keywords that place a product in this category.
    ///
    /// Empty for [`Category::All`], which matches everything.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Sushi => &["суши", "нигири", "сашими", "онигири"],
            Self::Rolls => &["ролл", "филадельфия", "калифорния", "запеченный"],
            Self::Wok => &["вок"],
            Self::Drinks => &["напиток", "кола", "сок", "чай", "кофе"],
        }
    }

    /// Whether a product with this name and description is shown.
    #[must_use]
    pub fn matches(self, name: &str, description: &str) -> bool {
        if self == Self::All {
            return true;
        }
        let text = format!("{name} {description}").to_lowercase();
        self.keywords().iter().any(|keyword| text.contains(keyword))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether a product is visible under `category` (slug or label).
///
/// Unknown categories match nothing.
#[must_use]
pub fn matches(category: &str, name: &str, description: &str) -> bool {
    Category::parse(category).is_ok_and(|category| category.matches(name, description))
}
