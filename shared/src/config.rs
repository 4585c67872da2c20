//! Page bootstrap configuration.
//!
//! The server embeds one JSON document per page in
//! `<script type="application/json" id="page-data">`. It names the page to
//! mount, where the API lives, and the data the page starts from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthConfig;
use crate::subcategories::SubcategoryGroup;
use crate::{Payee, TransactionRow};

pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed page data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Login,
    #[default]
    Transactions,
    PlanSettings,
    DisplaySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub page: PageKind,
    /// Prefix for API paths; empty means the hosting origin
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default)]
    pub payees: Vec<Payee>,
    #[serde(default)]
    pub transactions: Vec<TransactionRow>,
    #[serde(default)]
    pub subcategory_groups: Vec<SubcategoryGroup>,
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Join the API base with an absolute path such as `/api/payees`.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
