//! Document composition

use crate::{
    CaseRecord, Document, EvidenceFile, LayoutConfig, LayoutError, PageCursor, Party,
    Representative, Result, SectionRenderer,
};
use pdf_core::FontMetrics;

/// Explanatory line rendered when a record carries no evidence files
pub const NO_EVIDENCE_LINE: &str = "No evidence files uploaded.";

/// Composes a full case record into a paginated document
///
/// Sections render in a fixed order, each one after the first starting on
/// a fresh page regardless of remaining space. Composition never fails:
/// missing data degrades to placeholders field by field.
pub struct DocumentComposer<'a> {
    config: &'a LayoutConfig,
    metrics: &'a FontMetrics,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a FontMetrics) -> Self {
        Self { config, metrics }
    }

    /// Compose one record into a document
    ///
    /// The returned document has its final page count; footers are left
    /// to [`crate::FooterStamper`], which must run strictly afterwards.
    pub fn compose(&self, record: &CaseRecord) -> Document {
        let renderer = SectionRenderer::new(self.config, self.metrics);
        let mut doc = Document::new();
        let mut cursor = PageCursor::new(self.config);

        renderer.open_document(&mut doc);

        renderer.render_section(
            &mut doc,
            &mut cursor,
            "General Information",
            &general_fields(record),
        );

        renderer.break_page(&mut doc, &mut cursor);
        renderer.render_section(
            &mut doc,
            &mut cursor,
            "Plaintiff Information",
            &party_fields(record.plaintiff.as_ref()),
        );

        renderer.break_page(&mut doc, &mut cursor);
        renderer.render_section(
            &mut doc,
            &mut cursor,
            "Defendant Information",
            &party_fields(record.defendant.as_ref()),
        );

        renderer.break_page(&mut doc, &mut cursor);
        renderer.render_section(
            &mut doc,
            &mut cursor,
            "Representative Information",
            &representative_fields(record.representative.as_ref()),
        );

        renderer.break_page(&mut doc, &mut cursor);
        renderer.section_header(&mut doc, &mut cursor, "Evidence Files");
        if record.evidence_files.is_empty() {
            renderer.plain_line(&mut doc, &mut cursor, NO_EVIDENCE_LINE);
        } else {
            for file in &record.evidence_files {
                renderer.field(&mut doc, &mut cursor, "File", Some(&evidence_entry(file)));
            }
        }

        log::debug!(
            "composed {} page(s) for case {:?}",
            doc.page_count(),
            record.case_title.as_deref().unwrap_or("<untitled>")
        );

        doc
    }
}

fn general_fields(record: &CaseRecord) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Case Title", record.case_title.clone()),
        ("Case Type", record.case_type.clone()),
        ("Case Description", record.case_description.clone()),
    ]
}

/// Flatten a party sub-record; an absent party yields all-absent fields
fn party_fields(party: Option<&Party>) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Name", party.and_then(|p| p.name.clone())),
        ("Email", party.and_then(|p| p.email.clone())),
        ("Home Address", party.and_then(|p| p.home_address.clone())),
        (
            "Business Address",
            party.and_then(|p| p.business_address.clone()),
        ),
        ("Contact Number", party.and_then(|p| p.contact_no.clone())),
        ("Date of Birth", party.and_then(|p| p.date_of_birth.clone())),
        ("NIC", party.and_then(|p| p.nic.clone())),
        ("EIN", party.and_then(|p| p.ein.clone())),
        ("TIN", party.and_then(|p| p.tin.clone())),
    ]
}

/// Flatten the representative and its nested sub-records in one step
fn representative_fields(rep: Option<&Representative>) -> Vec<(&'static str, Option<String>)> {
    let contact = rep.and_then(|r| r.contact.as_ref());
    let bar = rep.and_then(|r| r.bar_registration.as_ref());

    vec![
        ("Full Name", rep.and_then(|r| r.full_name.clone())),
        ("Firm Name", rep.and_then(|r| r.firm_name.clone())),
        (
            "Office Address",
            contact.and_then(|c| c.office_address.clone()),
        ),
        ("Phone Number", contact.and_then(|c| c.phone_no.clone())),
        ("Email", contact.and_then(|c| c.email.clone())),
        (
            "Bar Association ID",
            bar.and_then(|b| b.bar_association_id.clone()),
        ),
        (
            "Date of Admission",
            bar.and_then(|b| b.date_of_admission.clone()),
        ),
    ]
}

/// Rendered value for one evidence entry: name plus upper-cased extension
///
/// Names without a usable extension (no dot, dot first, or dot last)
/// render "(no extension)" instead of treating the whole name as one.
fn evidence_entry(file: &EvidenceFile) -> String {
    let name = file.file_name.as_deref().unwrap_or("Unnamed File");
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{name} ({})", ext.to_uppercase())
        }
        _ => format!("{name} (no extension)"),
    }
}

/// Derive the base output filename from the case title
///
/// Whitespace runs collapse to single underscores; all other characters
/// pass through untouched. An empty or whitespace-only title cannot name
/// a file and is surfaced as an error rather than silently defaulted.
pub fn derive_filename(title: &str) -> Result<String> {
    let parts: Vec<&str> = title.split_whitespace().collect();
    if parts.is_empty() {
        return Err(LayoutError::InvalidTitleForFilename);
    }
    Ok(parts.join("_"))
}

/// Full output filename, with the `.pdf` extension appended
pub fn output_filename(title: &str) -> Result<String> {
    Ok(format!("{}.pdf", derive_filename(title)?))
}
