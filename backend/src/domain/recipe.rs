//! Recipe data model and search criteria.
//!
//! Recipes travel through three shapes:
//! - [`RecipeDraft`]: untrusted caller input.
//! - [`RecipeContent`]: the same fields after the validator accepted them.
//! - [`Recipe`]: validated content plus the store-assigned identity,
//!   modification timestamp, and author.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Store-assigned recipe identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(i64);

impl RecipeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecipeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Untrusted recipe payload as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub category: String,
}

/// Recipe fields that satisfied every field constraint.
///
/// Only the validator and the store adapters construct this type, so a
/// value in hand is always safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeContent {
    name: String,
    description: String,
    ingredients: Vec<String>,
    directions: Vec<String>,
    category: String,
}

impl RecipeContent {
    /// Rebuild content from a validated draft or a persisted row.
    pub(crate) fn from_stored(draft: RecipeDraft) -> Self {
        let RecipeDraft {
            name,
            description,
            ingredients,
            directions,
            category,
        } = draft;
        Self {
            name,
            description,
            ingredients,
            directions,
            category,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }
}

/// Persisted recipe.
///
/// ## Invariants
/// - `content` satisfies every field constraint.
/// - `id` and `author` never change after the first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    content: RecipeContent,
    modified_at: DateTime<Utc>,
    author: Option<UserId>,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        content: RecipeContent,
        modified_at: DateTime<Utc>,
        author: Option<UserId>,
    ) -> Self {
        Self {
            id,
            content,
            modified_at,
            author,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn content(&self) -> &RecipeContent {
        &self.content
    }

    /// Timestamp of the most recent write, set by the store.
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Owning account, absent when the recipe was created anonymously.
    pub fn author(&self) -> Option<&UserId> {
        self.author.as_ref()
    }

    /// Whether `user` is the recorded author.
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author.as_ref() == Some(user)
    }
}

/// Write request handed to a recipe store.
///
/// `id` is `None` for a first save; the store then assigns one. With an id
/// present the store replaces the stored content in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeWrite {
    pub id: Option<RecipeId>,
    pub author: Option<UserId>,
    pub content: RecipeContent,
}

/// Reasons a search request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQueryError {
    NoParameter,
    BothParameters,
    BlankCategory,
    BlankName,
}

impl fmt::Display for SearchQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParameter => write!(f, "supply either category or name"),
            Self::BothParameters => write!(f, "supply only one of category or name"),
            Self::BlankCategory => write!(f, "category must not be blank"),
            Self::BlankName => write!(f, "name must not be blank"),
        }
    }
}

impl std::error::Error for SearchQueryError {}

/// Raw search parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub category: Option<String>,
    pub name: Option<String>,
}

/// Resolved search criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeFilter {
    /// Category equals the value, ignoring case.
    CategoryEquals(String),
    /// Name contains the value, ignoring case.
    NameContains(String),
}

impl RecipeFilter {
    /// Resolve raw parameters into exactly one criterion.
    ///
    /// Presence is checked before blankness, so `?category=&name=x` reports
    /// both parameters rather than a blank category.
    ///
    /// # Examples
    /// ```
    /// use recipes_backend::domain::{RecipeFilter, SearchParams};
    ///
    /// let filter = RecipeFilter::from_params(&SearchParams {
    ///     category: Some("Dessert".into()),
    ///     name: None,
    /// })
    /// .expect("single parameter");
    /// assert_eq!(filter, RecipeFilter::CategoryEquals("Dessert".into()));
    /// ```
    pub fn from_params(params: &SearchParams) -> Result<Self, SearchQueryError> {
        match (params.category.as_deref(), params.name.as_deref()) {
            (None, None) => Err(SearchQueryError::NoParameter),
            (Some(_), Some(_)) => Err(SearchQueryError::BothParameters),
            (Some(category), None) if category.trim().is_empty() => {
                Err(SearchQueryError::BlankCategory)
            }
            (None, Some(name)) if name.trim().is_empty() => Err(SearchQueryError::BlankName),
            (Some(category), None) => Ok(Self::CategoryEquals(category.to_owned())),
            (None, Some(name)) => Ok(Self::NameContains(name.to_owned())),
        }
    }

    /// Whether `content` satisfies this criterion.
    pub fn matches(&self, content: &RecipeContent) -> bool {
        match self {
            Self::CategoryEquals(category) => {
                content.category().to_lowercase() == category.to_lowercase()
            }
            Self::NameContains(fragment) => content
                .name()
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
        }
    }
}
