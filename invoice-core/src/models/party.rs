//! Company and client profiles.

use serde::{Deserialize, Serialize};

pub const COMPANY_NAME_PLACEHOLDER: &str = "Your Company Name";
pub const CLIENT_NAME_PLACEHOLDER: &str = "Client Name";

/// The issuing party shown on the invoice header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub logo_url: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: COMPANY_NAME_PLACEHOLDER.to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            logo_url: String::new(),
        }
    }
}

/// The billed party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            name: CLIENT_NAME_PLACEHOLDER.to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }
}
