//! Render a case record to a downloadable PDF.
//!
//! Usage:
//!   cargo run --example render_case               # embedded sample record
//!   cargo run --example render_case record.json   # record fetched elsewhere

use anyhow::{Context, Result};
use layout::{parse_record, render_case, FontMetrics, LayoutConfig};

const SAMPLE_RECORD: &str = r#"{
    "caseTitle": "Smith v. Jones",
    "caseType": "Civil",
    "caseDescription": "Dispute over the property line between two adjacent parcels, including removal of a shared fence and damage to landscaping.",
    "plaintiff": {
        "plaintiffName": "A. Smith",
        "plaintiffEmail": "a.smith@example.com",
        "plaintiffHomeAddress": "12 Elm Street, Springfield",
        "plaintiffContactNo": "555-0101",
        "plaintiffDOB": "1980-04-02",
        "plaintiffNIC": "801230123V"
    },
    "defendant": {
        "defendantName": "B. Jones",
        "defendantHomeAddress": "14 Elm Street, Springfield"
    },
    "lawyer": {
        "LawyerFullName": "C. Counsel",
        "lawFirmName": "Counsel & Co",
        "contactInfo": {
            "officeAddress": "1 Court Plaza, Suite 400",
            "phoneNo": "555-0100",
            "email": "counsel@example.com"
        },
        "barRegistration": {
            "barAssociationID": "BAR-4411",
            "dateOfAdmission": "2005-09-12"
        }
    },
    "evidenceFiles": [
        { "fileName": "deed.pdf" },
        { "fileName": "fence_photo.jpg" }
    ]
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE_RECORD.to_string(),
    };

    let record = parse_record(&json).context("parsing case record")?;
    let rendered = render_case(&record, &LayoutConfig::default(), &FontMetrics::approximate())?;

    std::fs::write(&rendered.file_name, &rendered.bytes)
        .with_context(|| format!("writing {}", rendered.file_name))?;

    println!("Wrote {} ({} bytes)", rendered.file_name, rendered.bytes.len());
    Ok(())
}
