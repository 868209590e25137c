//! Structured listing queries.
//!
//! [`LinkListQuery`] is the only place listing SQL is built, so it is also
//! the only place the local-list filter is applied.

use crate::error::StorageResult;
use crate::store::LinkListStore;
use crate::visibility;
use linklists_model::{LinkList, Locality};
use linklists_types::LinkListId;
use rusqlite::types::Value as SqlValue;
use std::collections::BTreeSet;
use tracing::debug;

/// Queryable properties of a link list. Titles are those of the base
/// translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Bundle,
    Status,
    Local,
    Title,
    AdministrativeTitle,
    DefaultLangcode,
    Created,
    Changed,
}

impl Field {
    pub(crate) const fn column(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Bundle => "bundle",
            Field::Status => "status",
            Field::Local => "local",
            Field::Title => "title",
            Field::AdministrativeTitle => "administrative_title",
            Field::DefaultLangcode => "default_langcode",
            Field::Created => "created",
            Field::Changed => "changed",
        }
    }
}

/// A value compared against a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Null,
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    fn to_sql(&self) -> SqlValue {
        match self {
            PropertyValue::Null => SqlValue::Null,
            PropertyValue::Integer(i) => SqlValue::Integer(*i),
            PropertyValue::Text(s) => SqlValue::Text(s.clone()),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

impl From<LinkListId> for PropertyValue {
    fn from(value: LinkListId) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<Locality> for PropertyValue {
    fn from(value: Locality) -> Self {
        match value.as_flag() {
            None => PropertyValue::Null,
            Some(flag) => PropertyValue::from(flag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    /// Substring match on text values.
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
struct Condition {
    field: Field,
    operator: Operator,
    value: PropertyValue,
}

impl Condition {
    fn push_sql(&self, clauses: &mut Vec<String>, params: &mut Vec<SqlValue>) {
        let column = self.field.column();
        let is_null = self.value == PropertyValue::Null;
        let clause = match self.operator {
            // Containing nothing means having no value, not matching every row.
            Operator::Equal | Operator::Contains if is_null => format!("{column} IS NULL"),
            Operator::NotEqual if is_null => format!("{column} IS NOT NULL"),
            Operator::Equal => format!("{column} = ?"),
            // NULL never compares unequal in SQL; keep those rows.
            Operator::NotEqual => format!("({column} IS NULL OR {column} <> ?)"),
            Operator::LessThan => format!("{column} < ?"),
            Operator::GreaterThan => format!("{column} > ?"),
            Operator::Contains => {
                let needle = match &self.value {
                    PropertyValue::Text(s) => s.clone(),
                    PropertyValue::Integer(i) => i.to_string(),
                    PropertyValue::Null => String::new(),
                };
                clauses.push(format!("{column} LIKE ? ESCAPE '\\'"));
                params.push(SqlValue::Text(format!("%{}%", escape_like(&needle))));
                return;
            }
        };
        if !is_null
            || !matches!(
                self.operator,
                Operator::Equal | Operator::NotEqual | Operator::Contains
            )
        {
            params.push(self.value.to_sql());
        }
        clauses.push(clause);
    }
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// What a built statement selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Ids,
    Count,
}

/// Builder for listing queries over the current revision of every list.
///
/// Local lists are excluded unless the query carries
/// [`visibility::ALLOW_LOCAL_TAG`].
pub struct LinkListQuery<'a> {
    store: &'a LinkListStore,
    conditions: Vec<Condition>,
    sorts: Vec<(Field, SortDirection)>,
    range: Option<(usize, usize)>,
    tags: BTreeSet<String>,
}

impl<'a> LinkListQuery<'a> {
    pub(crate) fn new(store: &'a LinkListStore) -> Self {
        Self {
            store,
            conditions: Vec::new(),
            sorts: Vec::new(),
            range: None,
            tags: BTreeSet::new(),
        }
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn condition(self, field: Field, value: impl Into<PropertyValue>) -> Self {
        self.condition_with(field, Operator::Equal, value)
    }

    #[must_use]
    pub fn condition_with(
        mut self,
        field: Field,
        operator: Operator,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.conditions.push(Condition {
            field,
            operator,
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn sort(mut self, field: Field, direction: SortDirection) -> Self {
        self.sorts.push((field, direction));
        self
    }

    #[must_use]
    pub fn range(mut self, offset: usize, limit: usize) -> Self {
        self.range = Some((offset, limit));
        self
    }

    #[must_use]
    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Ids of the matching lists.
    pub fn execute(&self) -> StorageResult<Vec<LinkListId>> {
        let (sql, params) = self.build_sql(Selection::Ids);
        self.store.query_ids(&sql, &params)
    }

    /// Number of matching lists. Ignores the range.
    pub fn count(&self) -> StorageResult<usize> {
        let (sql, params) = self.build_sql(Selection::Count);
        self.store.query_count(&sql, &params)
    }

    /// Loads the matching lists in query order.
    pub fn load(&self) -> StorageResult<Vec<LinkList>> {
        let ids = self.execute()?;
        self.store.load_multiple(Some(&ids))
    }

    pub(crate) fn build_sql(&self, selection: Selection) -> (String, Vec<SqlValue>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        match visibility::listing_predicate(&self.tags) {
            Some(predicate) => clauses.push(predicate.to_string()),
            None => debug!(tags = ?self.tags, "Listing query includes local link lists"),
        }
        for condition in &self.conditions {
            condition.push_sql(&mut clauses, &mut params);
        }

        let mut sql = match selection {
            Selection::Ids => String::from("SELECT id FROM link_list"),
            Selection::Count => String::from("SELECT COUNT(*) FROM link_list"),
        };
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if selection == Selection::Ids {
            let mut order: Vec<String> = self
                .sorts
                .iter()
                .map(|(field, direction)| {
                    let dir = match direction {
                        SortDirection::Ascending => "ASC",
                        SortDirection::Descending => "DESC",
                    };
                    format!("{} {dir}", field.column())
                })
                .collect();
            // Ties fall back to creation order; ids are time-ordered.
            order.push("created ASC".to_string());
            order.push("id ASC".to_string());
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.join(", "));

            if let Some((offset, limit)) = self.range {
                sql.push_str(" LIMIT ? OFFSET ?");
                params.push(SqlValue::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
                params.push(SqlValue::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));
            }
        }

        (sql, params)
    }
}
