//! Pagination parameters for list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Offset pagination as accepted by the API (`?skip=..&limit=..`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_skip")]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_skip() -> u32 {
    DEFAULT_SKIP
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl PageParams {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Query pairs in the order the API documents them
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
        assert_eq!(
            params.to_query(),
            vec![
                ("skip".to_string(), "0".to_string()),
                ("limit".to_string(), "100".to_string())
            ]
        );
    }
}
