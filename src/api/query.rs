use std::fmt;

/// Number of episodes shown on the homepage
pub const HOME_EPISODE_LIMIT: usize = 12;

/// Sort direction understood by the episodes endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the episodes listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeQuery {
    pub limit: usize,
    pub sort: String,
    pub order: SortOrder,
}

impl EpisodeQuery {
    /// The most recently published episodes, newest first
    pub fn latest() -> Self {
        Self {
            limit: HOME_EPISODE_LIMIT,
            sort: "published_at".to_string(),
            order: SortOrder::Desc,
        }
    }

    /// Query string pairs in the order the API documents them
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("_limit", self.limit.to_string()),
            ("_sort", self.sort.clone()),
            ("_order", self.order.to_string()),
        ]
    }
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_query_params() {
        let params = EpisodeQuery::latest().to_params();

        assert_eq!(
            params,
            vec![
                ("_limit", "12".to_string()),
                ("_sort", "published_at".to_string()),
                ("_order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn ascending_order_param() {
        let query = EpisodeQuery {
            limit: 5,
            sort: "title".to_string(),
            order: SortOrder::Asc,
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("_limit", "5".to_string()),
                ("_sort", "title".to_string()),
                ("_order", "asc".to_string()),
            ]
        );
    }
}
