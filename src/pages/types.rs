use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/pages/find`. All fields optional; an empty query
/// returns every page in ascending `order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "where")]
    pub where_clause: Option<Value>,
    pub order: Option<Value>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Tolerant parse: "desc" in any case sorts descending, anything else
    /// ascending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
