use serde::{Deserialize, Serialize};

/// Parameters for paged list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(rename = "Page")]
    pub page: u32,

    /// Items per page.
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, page_size: 20 }
    }
}

/// Result wrapper for paged list operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Items on this page.
    #[serde(rename = "List")]
    pub list: Vec<T>,

    /// Total item count across all pages.
    #[serde(rename = "Total")]
    pub total: u64,
}

/// Generic mutation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    #[serde(rename = "Result")]
    pub result: bool,
}

/// User permission level. The wire carries the sentinel numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Authority {
    Guest,
    Ordinary,
    Administrator,
}

impl Authority {
    /// True iff this level grants moderation endpoints.
    pub fn is_admin(self) -> bool {
        self == Authority::Administrator
    }
}

impl From<Authority> for u8 {
    fn from(a: Authority) -> u8 {
        match a {
            Authority::Guest => 1,
            Authority::Ordinary => 3,
            Authority::Administrator => 5,
        }
    }
}

impl TryFrom<u8> for Authority {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Authority::Guest),
            3 => Ok(Authority::Ordinary),
            5 => Ok(Authority::Administrator),
            other => Err(format!("unknown authority level: {}", other)),
        }
    }
}
