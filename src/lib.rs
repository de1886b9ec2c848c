//! Alta turns the data a new client submits when signing up into the two documents needed
//! to open their account: a registration sheet summarising the data and a SEPA direct debit
//! mandate ready to be signed.
//!
//! Both documents are fixed A4 layouts, drawn on a `Canvas` with positions in millimeters from
//! the top-left corner of the page. The `PdfCanvas` implementation writes them as PDF documents
//! relying only on the standard fonts, so nothing has to be embedded apart from the optional logo.
//! Rendering is deterministic: the same record, date and logo always produce the same bytes.

/// The client record, a flat mapping of form field names to their values.
///
/// Reading a field that was never submitted yields the empty string, so the layouts never have to
/// deal with missing values. The `fields` module lists every field name the documents use and
/// `REQUIRED_FIELDS` the ones a submission cannot do without.
pub mod record;

/// This module contains the `RenderError` type which is the error type used throughout this library.
///
/// It carries a context message and, if the failure was propagated from another library, the
/// message of the source error, so that it can be reported without exposing the many error types
/// of the underlying crates.
pub mod error;

/// The running vertical offset threaded through a layout.
pub mod cursor;

/// Metrics and encoding of the standard PDF fonts.
///
/// The widths of Helvetica and Helvetica-Bold are those of their Adobe font metrics, which are
/// needed to center and wrap text. Text is encoded with `WinAnsiEncoding`, which covers the
/// Spanish alphabet.
pub mod fonts;

/// The `Canvas` trait, the drawing surface both documents are laid out on.
pub mod canvas;

/// The `PdfCanvas`, which records the drawing operations as PDF content streams.
///
/// # Introduction
///
/// Each page holds one or more layers of content operations. When the canvas is finished,
/// `write_all` assembles the document information, the font resources, the images and the page
/// tree into the underlying `lopdf::Document`, which is then compressed and serialized. The
/// document identifier and the creation date are given at construction instead of being generated,
/// which keeps the output reproducible and testable.
pub mod pdf;

/// Bordered two-column tables with a colored title row.
pub mod table;

/// The label, value, underline and caption pattern found all over the mandate.
pub mod field;

/// Naming and packaging of the finished documents.
pub mod document;

/// The registration sheet: a header followed by one table per section of the client data.
pub mod sheet;

/// The SEPA direct debit mandate, a single page form split between the creditor and the debtor.
pub mod mandate;

/// Where the logo is found and where the documents are saved.
pub mod configuration;

/// Generation and delivery of both documents for a client, and the outcome reported back.
pub mod submission;
