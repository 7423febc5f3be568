use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type the service exposes through its query and CRUD endpoints.
pub trait Entity: DeserializeOwned + Serialize {
    /// Name used in query statements and response envelopes, e.g. `Customer`.
    const NAME: &'static str;
    /// Lowercase resource segment used in CRUD paths, e.g. `customer`.
    const PATH: &'static str;
}

/// Audit timestamps maintained by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetaData {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub last_updated_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TelephoneNumber {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub free_form_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EmailAddress {
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSiteAddress {
    #[serde(rename = "URI", deserialize_with = "super::null_as_default")]
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhysicalAddress {
    #[serde(
        rename = "Id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub line1: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub line2: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub country_sub_division_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub postal_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub country: String,
}

/// Pointer to another record by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceType {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub name: String,
}

impl ReferenceType {
    fn is_empty(&self) -> bool {
        self.value.is_empty() && self.name.is_empty()
    }
}

/// A customer of the company, or a job/project nested under one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    #[serde(
        rename = "Id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub sync_token: String,
    #[serde(skip_serializing, deserialize_with = "super::null_as_default")]
    pub meta_data: MetaData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub print_on_check_name: String,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "super::null_as_default")]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_addr: Option<WebSiteAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(rename = "TaxExemptionReasonId", skip_serializing_if = "Option::is_none")]
    pub tax_exemption_reason_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<bool>,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "super::null_as_default")]
    pub bill_with_parent: bool,
    #[serde(
        skip_serializing_if = "ReferenceType::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub parent_ref: ReferenceType,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "super::null_as_default")]
    pub level: u32,
    #[serde(skip_serializing, deserialize_with = "super::null_as_default")]
    pub balance: f64,
    #[serde(skip_serializing, deserialize_with = "super::null_as_default")]
    pub balance_with_jobs: f64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub open_balance_date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_project: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Customer {
    /// Preferred postal address: shipping first, then billing, else empty.
    pub fn address(&self) -> PhysicalAddress {
        self.ship_addr
            .as_ref()
            .or(self.bill_addr.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    pub fn website(&self) -> &str {
        self.web_addr.as_ref().map_or("", |web| web.uri.as_str())
    }

    pub fn primary_email(&self) -> &str {
        self.primary_email_addr
            .as_ref()
            .map_or("", |email| email.address.as_str())
    }
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";
    const PATH: &'static str = "customer";
}
