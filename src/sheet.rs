use time::Date;

use crate::{
    canvas::{place_logo, Canvas},
    cursor::LayoutCursor,
    document::{file_stem, format_date, DocumentKind, RenderedDocument},
    error::RenderError,
    fonts::StandardFont,
    pdf::PdfCanvas,
    record::{composite, fields, full_name, ClientRecord},
    table::{draw_table, TableRow},
};

pub const TITLE: &str = "FICHA DE ALTA DE CLIENTE";
/// Where the first section begins.
pub const FIRST_SECTION_OFFSET: f32 = 40.0;
/// The gap left between the end of a section and the start of the next one.
pub const SECTION_MARGIN: f32 = 10.0;

const LOGO_ORIGIN: [f32; 2] = [150.0, 10.0];
const LOGO_SIZE: [f32; 2] = [40.0, 10.0];

/// The sections of the registration sheet, in the order in which they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    FiscalData,
    DeliveryAddress,
    Contacts,
    Banking,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::FiscalData => "DATOS FISCALES",
            SectionKind::DeliveryAddress => "DIRECCIÓN DE ENTREGA",
            SectionKind::Contacts => "PERSONAS DE CONTACTO",
            SectionKind::Banking => "DATOS BANCARIOS",
        }
    }
}

/// A section of the sheet together with its rows, resolved from the record before any drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<TableRow>,
}

/// Builds the sections to be drawn. The delivery address is only included when the client
/// gave one, in which case it takes its place without leaving any gap.
pub fn sections(record: &ClientRecord) -> Vec<Section> {
    let mut sections = vec![Section {
        kind: SectionKind::FiscalData,
        rows: vec![
            ("Nombre Empresa", record.get(fields::COMPANY_NAME).to_string()),
            ("CIF / NIF", record.get(fields::TAX_ID).to_string()),
            ("Dirección Fiscal", record.get(fields::ADDRESS).to_string()),
            ("Código Postal", record.get(fields::POSTAL_CODE).to_string()),
            ("Población", record.get(fields::CITY).to_string()),
            ("Provincia", record.get(fields::PROVINCE).to_string()),
            ("País", record.get(fields::COUNTRY).to_string()),
            ("Teléfono", record.get(fields::PHONE).to_string()),
            ("Email Facturación", record.get(fields::BILLING_EMAIL).to_string()),
        ],
    }];

    if record.is_present(fields::DELIVERY_ADDRESS) {
        sections.push(Section {
            kind: SectionKind::DeliveryAddress,
            rows: vec![
                ("Dirección", record.get(fields::DELIVERY_ADDRESS).to_string()),
                (
                    "C.P. / Población",
                    composite(
                        record,
                        &[fields::DELIVERY_POSTAL_CODE, fields::DELIVERY_CITY],
                        " - ",
                    ),
                ),
                ("Provincia", record.get(fields::DELIVERY_PROVINCE).to_string()),
            ],
        });
    }

    sections.push(Section {
        kind: SectionKind::Contacts,
        rows: vec![
            (
                "Contabilidad (Nombre)",
                full_name(
                    record,
                    fields::ACCOUNTING_FIRST_NAME,
                    fields::ACCOUNTING_LAST_NAME,
                ),
            ),
            ("Contabilidad (Email)", record.get(fields::ACCOUNTING_EMAIL).to_string()),
            ("Contabilidad (Tel)", record.get(fields::ACCOUNTING_PHONE).to_string()),
            (
                "Compras (Nombre)",
                full_name(
                    record,
                    fields::PURCHASING_FIRST_NAME,
                    fields::PURCHASING_LAST_NAME,
                ),
            ),
            ("Compras (Email)", record.get(fields::PURCHASING_EMAIL).to_string()),
        ],
    });

    sections.push(Section {
        kind: SectionKind::Banking,
        rows: vec![
            ("IBAN", record.get(fields::IBAN).to_string()),
            ("SWIFT / BIC", record.get(fields::SWIFT).to_string()),
            ("Tipo de Pago", record.payment_type().label().to_string()),
        ],
    });

    sections
}

/// Lays the registration sheet out on the canvas: the header, then every section as a table
/// starting where the previous one ended.
pub fn draw_registration_sheet<C: Canvas>(
    canvas: &mut C,
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<(), RenderError> {
    place_logo(canvas, logo, LOGO_ORIGIN, LOGO_SIZE);

    canvas.text_in(StandardFont::HelveticaBold, 18.0, TITLE, [14.0, 20.0])?;
    canvas.text_in(
        StandardFont::Helvetica,
        10.0,
        &format!("Fecha de solicitud: {}", format_date(current_date)),
        [14.0, 28.0],
    )?;

    let mut cursor = LayoutCursor::new(FIRST_SECTION_OFFSET);
    for (index, section) in sections(record).iter().enumerate() {
        if index > 0 {
            cursor.advance(SECTION_MARGIN);
        }
        let section_end = draw_table(canvas, &mut cursor, section.kind.title(), &section.rows)?;
        cursor.advance_to(section_end);
    }

    Ok(())
}

/// Renders the registration sheet of the client into a PDF document.
pub fn render_registration_sheet(
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<RenderedDocument, RenderError> {
    let file_name = DocumentKind::RegistrationSheet.file_name(record);
    let mut canvas = PdfCanvas::new(file_stem(&file_name).to_string(), current_date);
    draw_registration_sheet(&mut canvas, record, current_date, logo)?;
    log::debug!(
        "Laid out {:?} over {} page(s)",
        file_name,
        canvas.page_count()
    );

    Ok(RenderedDocument {
        kind: DocumentKind::RegistrationSheet,
        bytes: canvas.finish()?,
        file_name,
    })
}
