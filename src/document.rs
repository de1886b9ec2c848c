use time::Date;

use crate::record::{fields, ClientRecord};

/// The file name token used when the client did not give a company name.
pub const FALLBACK_COMPANY_NAME: &str = "Cliente";

pub const PDF_EXTENSION: &str = "pdf";

/// The two documents produced for every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    RegistrationSheet,
    SepaMandate,
}

impl DocumentKind {
    pub fn file_name_prefix(self) -> &'static str {
        match self {
            DocumentKind::RegistrationSheet => "ClientSheet",
            DocumentKind::SepaMandate => "SepaMandate",
        }
    }

    /// The file name of this document for the given client.
    pub fn file_name(self, record: &ClientRecord) -> String {
        format!(
            "{}_{}.{}",
            self.file_name_prefix(),
            sanitize_company_name(record.get(fields::COMPANY_NAME)),
            PDF_EXTENSION
        )
    }
}

/// A finished document, ready to be handed over for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The file name without its extension, it doubles as the identifier of the PDF.
pub(crate) fn file_stem(file_name: &str) -> &str {
    file_name
        .strip_suffix(PDF_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .unwrap_or(file_name)
}

/// Replaces every character which is not an ASCII letter or digit with an underscore.
pub fn sanitize_company_name(company_name: &str) -> String {
    if company_name.is_empty() {
        return FALLBACK_COMPANY_NAME.to_string();
    }
    company_name
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '_'
            }
        })
        .collect()
}

/// Formats the date the way it is written in Spain, without zero padding (`5/3/2026`).
pub fn format_date(date: Date) -> String {
    format!("{}/{}/{}", date.day(), u8::from(date.month()), date.year())
}
