//! Case record types
//!
//! The wire shape follows the case-management API: camelCase keys, with
//! the plaintiff and defendant objects using role-prefixed field names
//! (`plaintiffName`, `defendantName`, ...). One shared [`Party`] type
//! covers both via serde aliases. Every field is optional; missing values
//! render as the "N/A" placeholder rather than failing composition.

use crate::Result;
use serde::{Deserialize, Serialize};

/// The immutable input to one render call
///
/// Supplied fully resolved by the caller; the engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(default)]
    pub case_title: Option<String>,

    #[serde(default)]
    pub case_type: Option<String>,

    #[serde(default)]
    pub case_description: Option<String>,

    #[serde(default)]
    pub plaintiff: Option<Party>,

    #[serde(default)]
    pub defendant: Option<Party>,

    /// Legal representative; the wire key is `lawyer`
    #[serde(default, alias = "lawyer")]
    pub representative: Option<Representative>,

    /// Attached evidence entries, in upload order
    #[serde(default)]
    pub evidence_files: Vec<EvidenceFile>,
}

/// One party to the case (plaintiff or defendant)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default, alias = "plaintiffName", alias = "defendantName")]
    pub name: Option<String>,

    #[serde(default, alias = "plaintiffEmail", alias = "defendantEmail")]
    pub email: Option<String>,

    #[serde(default, alias = "plaintiffHomeAddress", alias = "defendantHomeAddress")]
    pub home_address: Option<String>,

    #[serde(
        default,
        alias = "plaintiffBusinessAddress",
        alias = "defendantBusinessAddress"
    )]
    pub business_address: Option<String>,

    #[serde(default, alias = "plaintiffContactNo", alias = "defendantContactNo")]
    pub contact_no: Option<String>,

    #[serde(default, alias = "plaintiffDOB", alias = "defendantDOB")]
    pub date_of_birth: Option<String>,

    /// National identity card number
    #[serde(default, alias = "plaintiffNIC", alias = "defendantNIC")]
    pub nic: Option<String>,

    /// Employer identification number
    #[serde(default, alias = "plaintiffEIN", alias = "defendantEIN")]
    pub ein: Option<String>,

    /// Taxpayer identification number
    #[serde(default, alias = "plaintiffTIN", alias = "defendantTIN")]
    pub tin: Option<String>,
}

/// The case's legal representative
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    #[serde(default, alias = "LawyerFullName")]
    pub full_name: Option<String>,

    #[serde(default, alias = "lawFirmName")]
    pub firm_name: Option<String>,

    #[serde(default, alias = "contactInfo")]
    pub contact: Option<ContactInfo>,

    #[serde(default)]
    pub bar_registration: Option<BarRegistration>,
}

/// Contact details of the representative
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub office_address: Option<String>,

    #[serde(default)]
    pub phone_no: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// Bar admission details of the representative
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRegistration {
    #[serde(default, alias = "barAssociationID")]
    pub bar_association_id: Option<String>,

    #[serde(default)]
    pub date_of_admission: Option<String>,
}

/// One attached evidence entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceFile {
    #[serde(default)]
    pub file_name: Option<String>,
}

impl EvidenceFile {
    /// Convenience constructor, mostly for tests and examples
    pub fn named(file_name: &str) -> Self {
        Self {
            file_name: Some(file_name.to_string()),
        }
    }
}

/// Parse a case record from its JSON wire form
pub fn parse_record(json: &str) -> Result<CaseRecord> {
    Ok(serde_json::from_str(json)?)
}
