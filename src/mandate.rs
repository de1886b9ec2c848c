use time::Date;

use crate::{
    canvas::{place_logo, Canvas, Paint, TextPlacement},
    cursor::LayoutCursor,
    document::{file_stem, format_date, DocumentKind, RenderedDocument},
    error::RenderError,
    field::{LabeledField, Span},
    fonts::{line_height, split_text_to_width, StandardFont},
    pdf::PdfCanvas,
    record::{composite, fields, ClientRecord, PaymentType},
};

/// The identity of the company collecting the payments, printed on every mandate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creditor {
    pub mandate_reference: &'static str,
    pub identifier: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub locality: &'static str,
    pub country: &'static str,
}

pub const CREDITOR: Creditor = Creditor {
    mandate_reference: "CVTOOLS. S.L.",
    identifier: "B96573613",
    name: "CV TOOLS, S.L.",
    address: "AVDA. CAMINO DE ALBAIDA s/n",
    locality: "46830 BENIGANIM VALENCIA",
    country: "ESPAÑA",
};

pub const TITLE: &str = "Orden de domiciliación de adeudo directo SEPA";
pub const SUBTITLE: &str = "SEPA Direct Debit Mandate";

pub const LEGAL_NOTICE: &str = "Mediante la firma de esta orden de domiciliación, el deudor autoriza (A) al acreedor a enviar instrucciones a la entidad del deudor para adeudar su cuenta y (B) a la entidad para efectuar los adeudos en su cuenta siguiendo las instrucciones del acreedor. Como parte de sus derechos, el deudor está legitimado al reembolso por su entidad en los términos y condiciones del contrato suscrito con la misma. La solicitud de reembolso deberá efectuarse dentro de las ocho semanas que siguen a la fecha de adeudo en cuenta. Puede obtener información adicional sobre sus derechos en su entidad financiera.";
pub const LEGAL_NOTICE_ENGLISH: &str = "By signing this mandate form, you authorise (A) the Creditor to send instructions to your bank to debit your account and (B) your bank to debit your account in accordance with the instructions from the Creditor. As part of your rights, you are entitled to a refund from your bank under the terms and conditions of your agreement with your bank. A refund must be claimed within eight weeks starting from the date on which your account was debited.";

pub const IBAN_CAPTION: &str = "En España el IBAN consta de 24 posiciones comenzando siempre por ES";
pub const FOOTER: [&str; 2] = [
    "TODOS LOS CAMPOS HAN DE SER CUMPLIMENTADOS OBLIGATORIAMENTE.",
    "UNA VEZ FIRMADA ESTA ORDEN DE DOMICILIACIÓN DEBE SER ENVIADA AL ACREEDOR PARA SU CUSTODIA.",
];
/// The text written in the selected payment type box.
pub const CHECK_MARK: &str = "X";

const LOGO_ORIGIN: [f32; 2] = [15.0, 10.0];
const LOGO_SIZE: [f32; 2] = [50.0, 15.0];

/// The outer frame, its origin and size.
pub const FRAME: ([f32; 2], [f32; 2]) = ([10.0, 35.0], [190.0, 233.0]);
const FRAME_LINE_WIDTH: f32 = 0.5;
/// Where the rules separating the creditor zone, the legal notice and the debtor zone lie.
pub const CREDITOR_ZONE_END: f32 = 105.0;
pub const DEBTOR_ZONE_START: f32 = 140.0;
const SIDE_RULE_X: f32 = 18.0;

const FIELD_X: f32 = 22.0;
const UNDERLINE_END: f32 = 195.0;
const LABEL_SIZE: f32 = 10.0;
const CAPTION_SIZE: f32 = 7.0;
const SMALL_TEXT_SIZE: f32 = 8.0;

const CREDITOR_FIRST_ROW: f32 = 42.0;
const INLINE_VALUE_X: f32 = 90.0;
const INLINE_ROW_STEP: f32 = 10.0;
const STACKED_VALUE_OFFSET: f32 = 4.0;
const STACKED_ROW_STEP: f32 = 12.0;

const LEGAL_NOTICE_ORIGIN: [f32; 2] = [15.0, 110.0];
const LEGAL_NOTICE_ENGLISH_ORIGIN: [f32; 2] = [15.0, 126.0];
const LEGAL_NOTICE_WIDTH: f32 = 180.0;

const DEBTOR_FIRST_ROW: f32 = 147.0;
const DEBTOR_VALUE_OFFSET: f32 = 5.0;
const DEBTOR_VALUE_SIZE: f32 = 11.0;
const DEBTOR_ROW_STEP: f32 = 15.0;

const IBAN_VALUE_OFFSET: f32 = 6.0;
const IBAN_FONT_SIZE: f32 = 12.0;
const IBAN_CAPTION_X: f32 = 60.0;
/// The distance from the IBAN baseline to the payment type selector.
const PAYMENT_SELECTOR_OFFSET: f32 = 14.0;

/// The left edges of the recurring and the one-off boxes.
pub const CHECKBOX_X: [f32; 2] = [80.0, 130.0];
const CHECKBOX_SIZE: f32 = 5.0;
const CHECKBOX_CAPTION_GAP: f32 = 7.0;
const CHECK_MARK_SIZE: f32 = 12.0;

const CLOSING_ROW_STEP: f32 = 10.0;
const DATE_VALUE_X: f32 = 60.0;
const SIGNATURE_LINE_START: f32 = 58.0;

pub const FOOTER_BASELINES: [f32; 2] = [274.0, 278.0];
const PAGE_CENTER: f32 = 105.0;

fn label(text: &str) -> Span<'_> {
    Span::new(text, StandardFont::HelveticaBoldOblique, LABEL_SIZE, FIELD_X)
}

fn caption(text: &str) -> Span<'_> {
    Span::new(text, StandardFont::Helvetica, CAPTION_SIZE, FIELD_X)
}

fn stacked_value(text: &str, font_size: f32) -> Span<'_> {
    Span::new(text, StandardFont::Helvetica, font_size, FIELD_X)
}

/// Writes the bilingual label running upwards along the left edge of a zone.
fn draw_side_label<C: Canvas>(canvas: &mut C, lines: [&str; 2], y: f32) -> Result<(), RenderError> {
    canvas.set_font(StandardFont::Helvetica, SMALL_TEXT_SIZE);
    canvas.text(lines[0], [13.0, y], TextPlacement::rotated(90.0))?;
    canvas.text(lines[1], [16.0, y], TextPlacement::rotated(90.0))
}

fn draw_header<C: Canvas>(canvas: &mut C, logo: Option<&[u8]>) -> Result<(), RenderError> {
    place_logo(canvas, logo, LOGO_ORIGIN, LOGO_SIZE);

    canvas.set_font(StandardFont::HelveticaBold, 14.0);
    canvas.text(TITLE, [PAGE_CENTER, 25.0], TextPlacement::CENTERED)?;
    canvas.set_font(StandardFont::HelveticaOblique, 10.0);
    canvas.text(SUBTITLE, [PAGE_CENTER, 30.0], TextPlacement::CENTERED)?;

    canvas.set_line_width(FRAME_LINE_WIDTH);
    canvas.rect(FRAME.0, FRAME.1, Paint::Stroke)
}

/// The creditor zone, filled in with the fixed identity of the creditor.
fn draw_creditor_zone<C: Canvas>(canvas: &mut C, creditor: &Creditor) -> Result<(), RenderError> {
    draw_side_label(
        canvas,
        [
            "A cumplimentar por el acreedor",
            "To be completed by the creditor",
        ],
        80.0,
    )?;
    canvas.line([SIDE_RULE_X, FRAME.0[1]], [SIDE_RULE_X, CREDITOR_ZONE_END])?;

    let mut cursor = LayoutCursor::new(CREDITOR_FIRST_ROW);
    let inline_rows = [
        (
            "Referencia de la orden de domiciliación:",
            creditor.mandate_reference,
            "Mandate reference",
        ),
        (
            "Identificador del acreedor:",
            creditor.identifier,
            "Creditor Identifier",
        ),
    ];
    for (label_text, value, caption_text) in inline_rows {
        LabeledField::inline(
            label(label_text),
            Span::new(value, StandardFont::Helvetica, LABEL_SIZE, INLINE_VALUE_X),
            UNDERLINE_END,
        )
        .with_caption(caption(caption_text), 4.0)
        .draw(canvas, cursor.offset())?;
        cursor.advance(INLINE_ROW_STEP);
    }

    let stacked_rows = [
        ("Nombre del acreedor / Creditor's name", creditor.name),
        ("Dirección / Address", creditor.address),
        (
            "Código postal - Población - Provincia / Postal Code - City - Town",
            creditor.locality,
        ),
        ("País / Country", creditor.country),
    ];
    for (label_text, value) in stacked_rows {
        LabeledField::stacked(
            label(label_text),
            stacked_value(value, LABEL_SIZE),
            STACKED_VALUE_OFFSET,
            UNDERLINE_END,
        )
        .draw(canvas, cursor.offset())?;
        cursor.advance(STACKED_ROW_STEP);
    }

    Ok(())
}

/// Writes the paragraph broken into lines, starting with the first baseline at the origin.
fn draw_paragraph<C: Canvas>(
    canvas: &mut C,
    text: &str,
    font: StandardFont,
    origin: [f32; 2],
) -> Result<f32, RenderError> {
    canvas.set_font(font, SMALL_TEXT_SIZE);
    let mut baseline = origin[1];
    for (index, line) in split_text_to_width(text, font, SMALL_TEXT_SIZE, LEGAL_NOTICE_WIDTH)
        .iter()
        .enumerate()
    {
        baseline = origin[1] + index as f32 * line_height(SMALL_TEXT_SIZE);
        canvas.text(line, [origin[0], baseline], TextPlacement::LEFT)?;
    }
    Ok(baseline)
}

fn draw_legal_notice<C: Canvas>(canvas: &mut C) -> Result<(), RenderError> {
    let [frame_left, _] = FRAME.0;
    let frame_right = frame_left + FRAME.1[0];

    canvas.line([frame_left, CREDITOR_ZONE_END], [frame_right, CREDITOR_ZONE_END])?;
    draw_paragraph(
        canvas,
        LEGAL_NOTICE,
        StandardFont::Helvetica,
        LEGAL_NOTICE_ORIGIN,
    )?;
    let last_baseline = draw_paragraph(
        canvas,
        LEGAL_NOTICE_ENGLISH,
        StandardFont::HelveticaOblique,
        LEGAL_NOTICE_ENGLISH_ORIGIN,
    )?;
    log::debug!("The legal notice ends at {:.2}", last_baseline);
    canvas.line([frame_left, DEBTOR_ZONE_START], [frame_right, DEBTOR_ZONE_START])
}

/// The debtor zone, filled in from the client record. Returns the baseline of the IBAN.
fn draw_debtor_zone<C: Canvas>(canvas: &mut C, record: &ClientRecord) -> Result<f32, RenderError> {
    let frame_bottom = FRAME.0[1] + FRAME.1[1];
    draw_side_label(
        canvas,
        ["A cumplimentar por el deudor", "To be completed by the debtor"],
        190.0,
    )?;
    canvas.line([SIDE_RULE_X, DEBTOR_ZONE_START], [SIDE_RULE_X, frame_bottom])?;

    let postal_address = composite(
        record,
        &[fields::POSTAL_CODE, fields::CITY, fields::PROVINCE],
        " - ",
    );
    let name_note = Span::new(
        "(titular/es de la cuenta de cargo)",
        StandardFont::Helvetica,
        SMALL_TEXT_SIZE,
        FIELD_X + 70.0,
    );
    let swift_note = Span::new(
        "Swift BIC (puede contener 8 u 11 posiciones)",
        StandardFont::Helvetica,
        LABEL_SIZE,
        FIELD_X + 20.0,
    );
    let rows = [
        (
            "Nombre del deudor/es / Debtor's name",
            record.get(fields::COMPANY_NAME),
            Some(name_note),
        ),
        (
            "Dirección del deudor / Address of the debtor",
            record.get(fields::ADDRESS),
            None,
        ),
        (
            "Código postal - Población - Provincia / Postal Code - City - Town",
            postal_address.as_str(),
            None,
        ),
        (
            "País del deudor / Country of the debtor",
            record.get(fields::COUNTRY),
            None,
        ),
        ("Swift BIC / ", record.get(fields::SWIFT), Some(swift_note)),
    ];

    let mut cursor = LayoutCursor::new(DEBTOR_FIRST_ROW);
    for (label_text, value, note) in rows {
        let mut field = LabeledField::stacked(
            label(label_text),
            stacked_value(value, DEBTOR_VALUE_SIZE),
            DEBTOR_VALUE_OFFSET,
            UNDERLINE_END,
        );
        if let Some(note) = note {
            field = field.with_note(note);
        }
        field.draw(canvas, cursor.offset())?;
        cursor.advance(DEBTOR_ROW_STEP);
    }

    let iban_baseline = LabeledField::stacked(
        label("Número de cuenta - IBAN / Account number - IBAN"),
        Span::new(
            record.get(fields::IBAN),
            StandardFont::CourierBold,
            IBAN_FONT_SIZE,
            FIELD_X,
        ),
        IBAN_VALUE_OFFSET,
        UNDERLINE_END,
    )
    .with_underline([FIELD_X, UNDERLINE_END], 2.0)
    .with_caption(
        Span::new(
            IBAN_CAPTION,
            StandardFont::Helvetica,
            CAPTION_SIZE,
            IBAN_CAPTION_X,
        ),
        IBAN_VALUE_OFFSET * 2.0,
    )
    .draw(canvas, cursor.offset())?;

    Ok(iban_baseline)
}

/// Draws both payment type boxes, marking only the selected one.
fn draw_payment_selector<C: Canvas>(
    canvas: &mut C,
    payment_type: PaymentType,
    y: f32,
) -> Result<(), RenderError> {
    label("Tipo de pago:").draw(canvas, y)?;
    Span::new(
        "Type of payment",
        StandardFont::HelveticaOblique,
        LABEL_SIZE,
        FIELD_X,
    )
    .draw(canvas, y + 4.0)?;

    let options = [
        (PaymentType::Recurring, "Pago recurrente", "Recurrent payment"),
        (PaymentType::OneOff, "Pago único", "One-off payment"),
    ];
    for (index, ((option, title, translation), box_x)) in
        options.into_iter().zip(CHECKBOX_X).enumerate()
    {
        if index > 0 {
            canvas.text_in(StandardFont::Helvetica, SMALL_TEXT_SIZE, "o", [125.0, y + 2.0])?;
        }
        canvas.rect(
            [box_x, y - 3.0],
            [CHECKBOX_SIZE, CHECKBOX_SIZE],
            Paint::Stroke,
        )?;
        if option == payment_type {
            // The mark keeps the font of whatever was written last, only enlarged
            let (font, _) = canvas.font();
            canvas.text_in(font, CHECK_MARK_SIZE, CHECK_MARK, [box_x + 1.0, y + 1.0])?;
        }
        let caption_x = box_x + CHECKBOX_CAPTION_GAP;
        Span::new(title, StandardFont::HelveticaBoldOblique, LABEL_SIZE, caption_x).draw(canvas, y)?;
        Span::new(translation, StandardFont::Helvetica, SMALL_TEXT_SIZE, caption_x)
            .draw(canvas, y + 4.0)?;
    }

    Ok(())
}

/// The place and date of signature followed by the signature line.
fn draw_closing_block<C: Canvas>(
    canvas: &mut C,
    record: &ClientRecord,
    current_date: Date,
    y: f32,
) -> Result<(), RenderError> {
    let place_and_date = format!(
        "{} - {}",
        format_date(current_date),
        record.get(fields::CITY)
    );
    LabeledField::inline(
        label("Fecha - Localidad:"),
        Span::new(
            &place_and_date,
            StandardFont::Helvetica,
            DEBTOR_VALUE_SIZE,
            DATE_VALUE_X,
        ),
        UNDERLINE_END,
    )
    .with_underline([SIGNATURE_LINE_START, UNDERLINE_END], 1.0)
    .with_caption(caption("Date - location in which you are signing"), 4.0)
    .draw(canvas, y)?;

    LabeledField {
        label: label("Firma del deudor:"),
        note: None,
        value: None,
        value_offset: 0.0,
        underline: [SIGNATURE_LINE_START, UNDERLINE_END],
        underline_gap: 1.0,
        caption: Some((caption("Signature of the debtor"), 4.0)),
    }
    .draw(canvas, y + CLOSING_ROW_STEP)?;

    Ok(())
}

fn draw_footer<C: Canvas>(canvas: &mut C) -> Result<(), RenderError> {
    canvas.set_font(StandardFont::Helvetica, SMALL_TEXT_SIZE);
    for (line, baseline) in FOOTER.iter().zip(FOOTER_BASELINES) {
        canvas.text(line, [PAGE_CENTER, baseline], TextPlacement::CENTERED)?;
    }
    Ok(())
}

/// Lays the SEPA direct debit mandate out on the canvas, from the header down to the footer.
pub fn draw_sepa_mandate<C: Canvas>(
    canvas: &mut C,
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<(), RenderError> {
    draw_header(canvas, logo)?;
    draw_creditor_zone(canvas, &CREDITOR)?;
    draw_legal_notice(canvas)?;

    let iban_baseline = draw_debtor_zone(canvas, record)?;
    let selector_y = iban_baseline + PAYMENT_SELECTOR_OFFSET;
    draw_payment_selector(canvas, record.payment_type(), selector_y)?;
    draw_closing_block(canvas, record, current_date, selector_y + CLOSING_ROW_STEP)?;

    draw_footer(canvas)
}

/// Renders the SEPA direct debit mandate of the client into a PDF document.
pub fn render_sepa_mandate(
    record: &ClientRecord,
    current_date: Date,
    logo: Option<&[u8]>,
) -> Result<RenderedDocument, RenderError> {
    let file_name = DocumentKind::SepaMandate.file_name(record);
    let mut canvas = PdfCanvas::new(file_stem(&file_name).to_string(), current_date);
    draw_sepa_mandate(&mut canvas, record, current_date, logo)?;

    Ok(RenderedDocument {
        kind: DocumentKind::SepaMandate,
        bytes: canvas.finish()?,
        file_name,
    })
}
