//! Article listing query engine: parameter validation and pagination.
//!
//! `GET /articles` accepts `topic`, `sorted_by`, `order`, `limit` and `p`.
//! [`ArticleListParams::validate`] turns the raw strings into an
//! [`ArticleQuery`]; the repository layer turns that into a single read, and
//! [`paginate`] slices the full sorted result afterwards so the total count
//! and out-of-range pages can be reported accurately.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults and messages
// ---------------------------------------------------------------------------

/// Page size used when `limit` is present but empty.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page used when `limit` is given without `p`.
pub const DEFAULT_PAGE: i64 = 1;

pub const INVALID_SORT_KEY: &str = "cannot sort by given attribute";
pub const INVALID_ORDER: &str = "order must be 'asc' or 'desc'";
pub const PAGE_WITHOUT_LIMIT: &str = "cannot serve page without limit";
pub const LIMIT_NOT_A_NUMBER: &str = "limit must be a number";
pub const LIMIT_TOO_SMALL: &str = "cannot serve fewer than 1 article";
pub const PAGE_NOT_A_NUMBER: &str = "page must be a number";
pub const PAGE_OUT_OF_RANGE: &str = "cannot serve requested page";

// ---------------------------------------------------------------------------
// Sort key / order
// ---------------------------------------------------------------------------

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Author,
    Title,
    ArticleId,
    Topic,
    Votes,
    /// Derived aggregate, not a stored column.
    CommentCount,
}

impl SortKey {
    /// The allow-list, in the order it is documented.
    pub const ALL: [SortKey; 7] = [
        SortKey::CreatedAt,
        SortKey::Author,
        SortKey::Title,
        SortKey::ArticleId,
        SortKey::Topic,
        SortKey::Votes,
        SortKey::CommentCount,
    ];

    /// Query-string spelling of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Author => "author",
            SortKey::Title => "title",
            SortKey::ArticleId => "article_id",
            SortKey::Topic => "topic",
            SortKey::Votes => "votes",
            SortKey::CommentCount => "comment_count",
        }
    }

    /// Exact, case-sensitive lookup in the allow-list.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validated query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// No `limit` was supplied: return every row and omit `total_count`.
    Unpaged,
    /// 1-based page of `limit` rows.
    Paged { limit: i64, page: i64 },
}

/// A fully validated article listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Topic slug to filter on. Existence is checked against storage by the
    /// caller; the validator only guarantees it is non-empty.
    pub topic: Option<String>,
    pub sort_key: SortKey,
    pub order: SortOrder,
    pub pagination: Pagination,
}

/// Raw query parameters for `GET /articles`.
///
/// Every field is kept as the unparsed string so that "present but empty"
/// and "not a number" can be told apart from "absent". Unknown keys are
/// rejected at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sorted_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl ArticleListParams {
    /// Validate and normalize the parameters.
    ///
    /// Checks run in a fixed order (sort key, order, pagination, topic) and
    /// the first failure is returned.
    pub fn validate(&self) -> Result<ArticleQuery, CoreError> {
        let sort_key = parse_sort_key(self.sorted_by.as_deref())?;
        let order = parse_order(self.order.as_deref())?;
        let pagination = parse_pagination(self.limit.as_deref(), self.p.as_deref())?;
        let topic = parse_topic(self.topic.as_deref())?;

        Ok(ArticleQuery {
            topic,
            sort_key,
            order,
            pagination,
        })
    }
}

fn validation(msg: &str) -> CoreError {
    CoreError::Validation(msg.to_string())
}

fn parse_sort_key(raw: Option<&str>) -> Result<SortKey, CoreError> {
    match raw {
        None => Ok(SortKey::default()),
        Some(raw) => SortKey::parse(raw).ok_or_else(|| validation(INVALID_SORT_KEY)),
    }
}

fn parse_order(raw: Option<&str>) -> Result<SortOrder, CoreError> {
    match raw {
        None => Ok(SortOrder::default()),
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| validation(INVALID_ORDER)),
    }
}

fn parse_pagination(limit: Option<&str>, page: Option<&str>) -> Result<Pagination, CoreError> {
    let Some(limit) = limit else {
        return match page {
            Some(_) => Err(validation(PAGE_WITHOUT_LIMIT)),
            None => Ok(Pagination::Unpaged),
        };
    };

    let limit = if limit.is_empty() {
        DEFAULT_PAGE_SIZE
    } else {
        limit
            .parse::<i64>()
            .map_err(|_| validation(LIMIT_NOT_A_NUMBER))?
    };
    if limit <= 0 {
        return Err(validation(LIMIT_TOO_SMALL));
    }

    let page = match page {
        None => DEFAULT_PAGE,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| validation(PAGE_NOT_A_NUMBER))?,
    };
    if page <= 0 {
        return Err(validation(PAGE_OUT_OF_RANGE));
    }

    Ok(Pagination::Paged { limit, page })
}

fn parse_topic(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    match raw {
        None => Ok(None),
        // An empty filter is an unknown topic, not "no filter".
        Some("") => Err(CoreError::topic_not_found()),
        Some(slug) => Ok(Some(slug.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Paginator
// ---------------------------------------------------------------------------

/// One page of a listing, serialized as `{ "articles": [...], "total_count": n }`.
///
/// `total_count` is omitted entirely for unpaged requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePage<T> {
    pub articles: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

/// Slice a fully sorted candidate list according to `pagination`.
///
/// A page whose first row lies beyond the end of `rows` is an error rather
/// than an empty page. An empty result has no pages at all, so even page 1
/// of it is out of range.
pub fn paginate<T>(rows: Vec<T>, pagination: Pagination) -> Result<ArticlePage<T>, CoreError> {
    let (limit, page) = match pagination {
        Pagination::Unpaged => {
            return Ok(ArticlePage {
                articles: rows,
                total_count: None,
            })
        }
        Pagination::Paged { limit, page } => (limit, page),
    };

    if limit <= 0 {
        return Err(validation(LIMIT_TOO_SMALL));
    }
    if page <= 0 {
        return Err(validation(PAGE_OUT_OF_RANGE));
    }

    let total = i64::try_from(rows.len()).unwrap_or(i64::MAX);

    let start = limit
        .checked_mul(page - 1)
        .filter(|start| *start < total)
        .ok_or_else(|| validation(PAGE_OUT_OF_RANGE))?;
    let end = start.saturating_add(limit).min(total);

    // Both bounds are within `0..=rows.len()` here.
    let articles = rows
        .into_iter()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect();

    Ok(ArticlePage {
        articles,
        total_count: Some(total),
    })
}
