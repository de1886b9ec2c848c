use std::path::{Path, PathBuf};

use time::Date;

use crate::{
    document::{DocumentKind, RenderedDocument},
    error::RenderError,
    mandate::render_sepa_mandate,
    record::ClientRecord,
    sheet::render_registration_sheet,
};

/// The address the signed documents have to be sent to.
pub const CONTACT_EMAIL: &str = "comercial@cvtools.es";
pub const FAILURE_MESSAGE: &str =
    "Hubo un error al generar los PDFs. Por favor, inténtelo de nuevo.";

/// The destination of the finished documents.
pub trait DocumentSink {
    fn deliver(&mut self, document: &RenderedDocument) -> Result<(), RenderError>;
}

/// Saves every document as a file named after it inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        DirectorySink {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DocumentSink for DirectorySink {
    fn deliver(&mut self, document: &RenderedDocument) -> Result<(), RenderError> {
        std::fs::create_dir_all(&self.directory).map_err(|error| {
            RenderError::with_error(
                format!("Failed to create the output directory {:?}", self.directory),
                &error,
            )
        })?;

        let file_path = self.directory.join(&document.file_name);
        std::fs::write(&file_path, &document.bytes).map_err(|error| {
            RenderError::with_error(format!("Failed to save the document {:?}", file_path), &error)
        })?;
        log::info!("Saved {:?} ({} bytes)", file_path, document.bytes.len());

        Ok(())
    }
}

/// Collects the documents in memory, in the order in which they were delivered.
impl DocumentSink for Vec<RenderedDocument> {
    fn deliver(&mut self, document: &RenderedDocument) -> Result<(), RenderError> {
        self.push(document.clone());
        Ok(())
    }
}

/// What the client is told once the submission has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success {
        sheet_file_name: String,
        mandate_file_name: String,
    },
    Failure,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Success {
                sheet_file_name,
                mandate_file_name,
            } => format!(
                "¡Documentos generados con éxito!\n\
                 Se han generado dos archivos:\n\
                 1. {sheet_file_name}\n\
                 2. {mandate_file_name}\n\
                 Por favor, firme el mandato SEPA y envíe ambos documentos a: {CONTACT_EMAIL}"
            ),
            SubmissionOutcome::Failure => FAILURE_MESSAGE.to_string(),
        }
    }
}

/// The documents of a submission, in the order in which they are rendered and delivered.
pub const DOCUMENT_KINDS: [DocumentKind; 2] =
    [DocumentKind::RegistrationSheet, DocumentKind::SepaMandate];

/// Renders one of the documents of the client.
pub fn render_document(
    kind: DocumentKind,
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<RenderedDocument, RenderError> {
    match kind {
        DocumentKind::RegistrationSheet => render_registration_sheet(record, current_date, logo),
        DocumentKind::SepaMandate => render_sepa_mandate(record, current_date, logo),
    }
}

/// Renders both documents, the registration sheet first.
pub fn generate_documents(
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<[RenderedDocument; 2], RenderError> {
    let [sheet_kind, mandate_kind] = DOCUMENT_KINDS;
    Ok([
        render_document(sheet_kind, record, current_date, logo)?,
        render_document(mandate_kind, record, current_date, logo)?,
    ])
}

/// Renders and delivers the documents one after the other, so a document already delivered
/// stays delivered even if a later one fails.
fn deliver_documents<S: DocumentSink>(
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
    sink: &mut S,
) -> Result<SubmissionOutcome, RenderError> {
    let mut file_names = Vec::with_capacity(DOCUMENT_KINDS.len());
    for kind in DOCUMENT_KINDS {
        let document = render_document(kind, record, current_date, logo)?;
        sink.deliver(&document)?;
        file_names.push(document.file_name);
    }

    let [sheet_file_name, mandate_file_name]: [String; 2] = file_names
        .try_into()
        .map_err(|_| RenderError::with_context("Failed to deliver every document"))?;
    Ok(SubmissionOutcome::Success {
        sheet_file_name,
        mandate_file_name,
    })
}

/// Generates and delivers the two documents of the client. Any failure along the way is logged
/// and reported as a single generic outcome.
pub fn submit<S: DocumentSink>(
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
    sink: &mut S,
) -> SubmissionOutcome {
    match deliver_documents(record, current_date, logo, sink) {
        Ok(outcome) => outcome,
        Err(error) => {
            log::error!("Failed to generate the documents: {}", error);
            SubmissionOutcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fields;
    use time::Month;

    fn current_date() -> Date {
        Date::from_calendar_date(2026, Month::October, 19).unwrap()
    }

    /// Accepts the first document and refuses every other one.
    struct FailingSink {
        delivered: Vec<String>,
    }

    impl DocumentSink for FailingSink {
        fn deliver(&mut self, document: &RenderedDocument) -> Result<(), RenderError> {
            if !self.delivered.is_empty() {
                return Err(RenderError::with_context("The disk is full"));
            }
            self.delivered.push(document.file_name.clone());
            Ok(())
        }
    }

    #[test]
    fn sheet_is_delivered_before_the_mandate() {
        let record = ClientRecord::from_iter([(fields::COMPANY_NAME, "Test SL")]);
        let mut delivered = Vec::new();
        let outcome = submit(&record, current_date(), None, &mut delivered);

        assert_eq!(
            outcome,
            SubmissionOutcome::Success {
                sheet_file_name: "ClientSheet_Test_SL.pdf".to_string(),
                mandate_file_name: "SepaMandate_Test_SL.pdf".to_string(),
            }
        );
        let kinds: Vec<DocumentKind> = delivered.iter().map(|document| document.kind).collect();
        assert_eq!(
            kinds,
            vec![DocumentKind::RegistrationSheet, DocumentKind::SepaMandate]
        );
    }

    #[test]
    fn delivered_documents_match_the_generated_ones() {
        let record = ClientRecord::from_iter([(fields::COMPANY_NAME, "Acme S.L.")]);
        let mut delivered = Vec::new();
        submit(&record, current_date(), None, &mut delivered);

        let generated = generate_documents(&record, current_date(), None).unwrap();
        assert_eq!(delivered, generated.to_vec());
        for (kind, document) in DOCUMENT_KINDS.into_iter().zip(&generated) {
            assert_eq!(document.kind, kind);
        }
    }

    #[test]
    fn delivery_failure_gives_the_generic_outcome() {
        let mut sink = FailingSink {
            delivered: Vec::new(),
        };
        let outcome = submit(&ClientRecord::default(), current_date(), None, &mut sink);

        assert_eq!(outcome, SubmissionOutcome::Failure);
        assert_eq!(outcome.message(), FAILURE_MESSAGE);
        assert_eq!(sink.delivered, vec!["ClientSheet_Cliente.pdf".to_string()]);
    }

    #[test]
    fn success_message_names_both_files() {
        let outcome = SubmissionOutcome::Success {
            sheet_file_name: "ClientSheet_Acme.pdf".to_string(),
            mandate_file_name: "SepaMandate_Acme.pdf".to_string(),
        };
        let message = outcome.message();

        assert!(outcome.is_success());
        assert!(message.contains("ClientSheet_Acme.pdf"));
        assert!(message.contains("SepaMandate_Acme.pdf"));
        assert!(message.contains("firme el mandato SEPA"));
        assert!(message.contains(CONTACT_EMAIL));
    }

    #[test]
    fn generated_documents_have_distinct_names() {
        let [sheet, mandate] =
            generate_documents(&ClientRecord::default(), current_date(), None).unwrap();

        assert_ne!(sheet.file_name, mandate.file_name);
        assert!(!sheet.bytes.is_empty() && !mandate.bytes.is_empty());
    }
}
