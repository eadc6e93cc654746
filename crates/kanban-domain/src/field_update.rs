use crate::card::{normalize_labels, Card};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a field update operation for partial updates
///
/// This type provides a clear, three-state pattern for updating optional fields:
/// - `NoChange`: Field keeps its existing value
/// - `Set(value)`: Field is updated to the provided value
/// - `Clear`: Field is cleared (set to None)
///
/// # Example
///
/// ```
/// use kanban_domain::FieldUpdate;
///
/// let description_update = FieldUpdate::Set("New description".to_string());
/// let image_update: FieldUpdate<String> = FieldUpdate::Clear;
/// let labels_update: FieldUpdate<Vec<String>> = FieldUpdate::NoChange;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate<T> {
    /// Do not modify this field (keep existing value)
    NoChange,
    /// Set the field to the provided value
    Set(T),
    /// Clear the field (set to None)
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field
    ///
    /// # Example
    ///
    /// ```
    /// use kanban_domain::FieldUpdate;
    ///
    /// let mut field = Some("old value".to_string());
    /// let update = FieldUpdate::Set("new value".to_string());
    /// update.apply_to(&mut field);
    /// assert_eq!(field, Some("new value".to_string()));
    ///
    /// let clear = FieldUpdate::Clear;
    /// clear.apply_to(&mut field);
    /// assert_eq!(field, None);
    /// ```
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    /// Check if this represents a change (not NoChange)
    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            FieldUpdate::NoChange => FieldUpdate::NoChange,
            FieldUpdate::Set(value) => FieldUpdate::Set(f(value)),
            FieldUpdate::Clear => FieldUpdate::Clear,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// Convert Option<T> to FieldUpdate<T>
    /// - Some(value) becomes Set(value)
    /// - None becomes Clear
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

/// Partial update of a card's fields.
///
/// `title` is required on a card, so it is either replaced or left alone.
/// The optional fields distinguish "leave as is" from "remove".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: FieldUpdate<String>,
    #[serde(default)]
    pub image: FieldUpdate<String>,
    #[serde(default)]
    pub due_date: FieldUpdate<NaiveDate>,
    #[serde(default)]
    pub labels: FieldUpdate<Vec<String>>,
}

impl CardUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && !self.description.is_change()
            && !self.image.is_change()
            && !self.due_date.is_change()
            && !self.labels.is_change()
    }

    /// A replacement title that would leave the card without one.
    pub fn has_blank_title(&self) -> bool {
        self.title.as_ref().is_some_and(|t| t.trim().is_empty())
    }

    /// Merge into `card`, leaving unspecified fields untouched.
    ///
    /// Replacement titles are trimmed and replacement labels normalized the
    /// same way as on creation. Callers reject blank titles beforehand.
    pub fn apply_to(self, card: &mut Card) {
        if let Some(title) = self.title {
            card.title = title.trim().to_string();
        }
        self.description.apply_to(&mut card.description);
        self.image.apply_to(&mut card.image);
        self.due_date.apply_to(&mut card.due_date);
        self.labels.map(normalize_labels).apply_to(&mut card.labels);
    }
}
