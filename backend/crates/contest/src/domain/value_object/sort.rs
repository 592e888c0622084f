//! Browse Query Value Objects
//!
//! Sort parameters are caller-supplied strings; the field is validated
//! against an allow-list of known columns before it gets near SQL.

use crate::error::{ContestError, ContestResult};

/// Allow-listed sortable contest fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    ParticipationCount,
    Deadline,
    CreatedAt,
}

impl SortField {
    /// Parse a caller-supplied field name
    pub fn parse(field: &str) -> ContestResult<Self> {
        match field {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "participationCount" => Ok(SortField::ParticipationCount),
            "deadline" => Ok(SortField::Deadline),
            "createdAt" => Ok(SortField::CreatedAt),
            other => Err(ContestError::InvalidSortField(other.to_string())),
        }
    }

    /// The column this field maps to. Only these constants ever reach
    /// an ORDER BY clause.
    pub const fn column(&self) -> &'static str {
        match self {
            SortField::Name => "contest_name",
            SortField::Price => "price",
            SortField::ParticipationCount => "participation_count",
            SortField::Deadline => "deadline",
            SortField::CreatedAt => "created_at",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(order: &str) -> ContestResult<Self> {
        match order {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ContestError::InvalidSortOrder(other.to_string())),
        }
    }

    pub const fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated browse query for published contests
#[derive(Debug, Clone, Default)]
pub struct ContestQuery {
    /// Case-insensitive substring match against the tags field
    pub tags: Option<String>,
    /// Validated sort; `None` falls back to newest-first
    pub sort: Option<(SortField, SortOrder)>,
}

impl ContestQuery {
    /// Build a query from raw request parameters.
    ///
    /// A sort order without a sort field is meaningless and rejected;
    /// a sort field alone defaults to ascending.
    pub fn from_params(
        tags: Option<String>,
        sort_field: Option<String>,
        sort_order: Option<String>,
    ) -> ContestResult<Self> {
        let sort = match (sort_field, sort_order) {
            (None, None) => None,
            (None, Some(order)) => return Err(ContestError::InvalidSortOrder(order)),
            (Some(field), order) => {
                let field = SortField::parse(&field)?;
                let order = match order {
                    Some(order) => SortOrder::parse(&order)?,
                    None => SortOrder::default(),
                };
                Some((field, order))
            }
        };

        Ok(Self {
            tags: tags.filter(|t| !t.trim().is_empty()),
            sort,
        })
    }
}
