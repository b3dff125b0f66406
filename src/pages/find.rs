use serde_json::Value;

use super::error::QueryError;
use super::filter::filter_eq;
use super::order::sort_by_order;
use super::record::PageRecord;
use super::types::{PageQuery, SortDirection};

/// A validated, ready-to-run find request over a page list.
///
/// Mirrors the wire shape of [`PageQuery`]: exact-match conditions applied
/// in declaration order, then the sort direction, then the limit.
#[derive(Debug)]
pub struct PageFind {
    conditions: Vec<(String, Value)>,
    direction: SortDirection,
    limit: Option<usize>,
}

impl PageFind {
    pub fn new() -> Self {
        Self {
            conditions: vec![],
            direction: SortDirection::Asc,
            limit: None,
        }
    }

    pub fn from_query(query: PageQuery) -> Result<Self, QueryError> {
        let mut find = Self::new();
        if let Some(where_clause) = query.where_clause {
            find.where_clause(where_clause)?;
        }
        if let Some(order) = query.order {
            find.order(&order)?;
        }
        if let Some(limit) = query.limit {
            find.limit(limit)?;
        }
        Ok(find)
    }

    pub fn where_clause(&mut self, conditions: Value) -> Result<&mut Self, QueryError> {
        match conditions {
            Value::Object(fields) => {
                for (field, value) in fields {
                    self.conditions.push((field, value));
                }
                Ok(self)
            }
            Value::Null => Ok(self),
            _ => Err(QueryError::InvalidWhere(
                "WHERE must be an object of field/value pairs".to_string(),
            )),
        }
    }

    pub fn order(&mut self, order: &Value) -> Result<&mut Self, QueryError> {
        match order {
            Value::String(s) => {
                self.direction = SortDirection::parse(s);
                Ok(self)
            }
            Value::Null => Ok(self),
            _ => Err(QueryError::InvalidOrder("order must be \"asc\" or \"desc\"".to_string())),
        }
    }

    pub fn limit(&mut self, limit: i64) -> Result<&mut Self, QueryError> {
        if limit < 0 {
            return Err(QueryError::InvalidLimit("Limit must be non-negative".to_string()));
        }

        // Apply max limit from config
        let limit = limit as usize;
        let max_limit = crate::config::CONFIG.nav.max_limit.unwrap_or(usize::MAX);
        let applied_limit = if limit > max_limit {
            if crate::config::CONFIG.nav.debug_logging {
                tracing::warn!("Limit {} exceeds max {}, capping to max", limit, max_limit);
            }
            max_limit
        } else {
            limit
        };

        self.limit = Some(applied_limit);
        Ok(self)
    }

    /// Run the find against a page list, returning a new vec.
    pub fn apply(&self, records: &[PageRecord]) -> Vec<PageRecord> {
        let mut result: Vec<PageRecord> = records.to_vec();
        for (field, value) in &self.conditions {
            result = filter_eq(&result, field, value);
        }
        result = sort_by_order(result, self.direction);
        if let Some(limit) = self.limit {
            result.truncate(limit);
        }
        result
    }
}

impl Default for PageFind {
    fn default() -> Self {
        Self::new()
    }
}
