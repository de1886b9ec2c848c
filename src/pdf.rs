use lopdf::{content::Operation, dictionary, Object, ObjectId, StringFormat};
use nalgebra_glm as glm;
use std::{io::BufWriter, mem};
use time::{Date, OffsetDateTime};

use crate::{
    canvas::{Canvas, Paint, TextAlignment, TextPlacement},
    error::RenderError,
    fonts::{encode_win_ansi, StandardFont},
};

/// The size of an A4 page in millimeters.
pub const A4_PAGE_SIZE: [f32; 2] = [210.0, 297.0];

/// Converts millimeters to points. This function is used in order to present the data
/// in the format required by the PDF specification, while the layouts are written in
/// millimeters which are easier to reason about.
pub(crate) fn millimeters_to_points(millimeters: f32) -> f32 {
    millimeters * 2.834646
}

/// Converts points back to millimeters, it is used when measuring text.
pub(crate) fn points_to_millimeters(points: f32) -> f32 {
    points / 2.834646
}

/// One layer of PDF data, usually one layer equals to one stream.
#[derive(Debug, Clone)]
struct PdfLayer {
    /// Name of the layer.
    name: String,
    /// The content operations in the order in which they were drawn.
    operations: Vec<Operation>,
}

impl PdfLayer {
    /// Encodes the operations into an uncompressed stream, isolated in its own graphics state.
    fn into_stream(self) -> Result<lopdf::Stream, RenderError> {
        let mut operations = Vec::with_capacity(self.operations.len() + 2);
        operations.push(Operation::new("q", vec![]));
        operations.extend(self.operations);
        operations.push(Operation::new("Q", vec![]));

        let stream_content = lopdf::content::Content { operations }
            .encode()
            .map_err(|error| {
                RenderError::with_error(
                    format!("Failed to encode the content of the layer {:?}", self.name),
                    &error,
                )
            })?;

        // Page contents should not be compressed
        Ok(lopdf::Stream::new(lopdf::Dictionary::new(), stream_content).with_compression(false))
    }
}

/// The low-level image representation for a PDF document.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// Bits per color component, always 8 for the decoded PNG images.
    pub bits_per_component: u16,
    /// Should the image be interpolated when scaled?
    pub interpolate: bool,
    /// The RGB samples of the image.
    pub image_data: Vec<u8>,
    /// The alpha channel as a grayscale soft mask, `None` when the image is fully opaque.
    pub soft_mask: Option<Vec<u8>>,
}

impl ImageXObject {
    /// Decodes a PNG image, splitting its alpha channel into a soft mask.
    pub fn from_png(png_bytes: &[u8]) -> Result<Self, RenderError> {
        let decoded_image =
            image::load_from_memory_with_format(png_bytes, image::ImageFormat::Png)
                .map_err(|error| RenderError::with_error("Failed to decode the PNG image", &error))?
                .to_rgba8();
        let (width, height) = decoded_image.dimensions();

        let mut image_data = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha_channel = Vec::with_capacity((width * height) as usize);
        for pixel in decoded_image.pixels() {
            let [red, green, blue, alpha] = pixel.0;
            image_data.extend_from_slice(&[red, green, blue]);
            alpha_channel.push(alpha);
        }
        let soft_mask = if alpha_channel.iter().all(|alpha| *alpha == u8::MAX) {
            None
        } else {
            Some(alpha_channel)
        };

        Ok(ImageXObject {
            width,
            height,
            bits_per_component: 8,
            interpolate: true,
            image_data,
            soft_mask,
        })
    }

    /// Inserts the image, and its soft mask if any, into the document and returns the reference to it.
    fn insert_into_document(&self, inner_document: &mut lopdf::Document) -> ObjectId {
        let mut image_dictionary = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(self.width),
            "Height" => i64::from(self.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => i64::from(self.bits_per_component),
            "Interpolate" => self.interpolate,
        };

        if let Some(soft_mask) = &self.soft_mask {
            let soft_mask_dictionary = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(self.width),
                "Height" => i64::from(self.height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => i64::from(self.bits_per_component),
            };
            let soft_mask_id = inner_document
                .add_object(lopdf::Stream::new(soft_mask_dictionary, soft_mask.clone()));
            image_dictionary.set("SMask", Object::Reference(soft_mask_id));
        }

        inner_document.add_object(lopdf::Stream::new(
            image_dictionary,
            self.image_data.clone(),
        ))
    }
}

/// Named reference to an image `XObject` in the resources of a page.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
struct XObjectReference(String);

impl XObjectReference {
    fn new(index: usize) -> Self {
        Self(format!("Im{index}"))
    }
}

/// The representation of a PDF page before it is written into the underlying document.
#[derive(Debug, Clone)]
struct PdfPage {
    /// Page width in points.
    width: f32,
    /// Page height in points.
    height: f32,
    /// Page layers.
    layers: Vec<PdfLayer>,
    /// The images drawn on this page.
    xobjects: Vec<(XObjectReference, ImageXObject)>,
}

impl PdfPage {
    fn new(page_size: [f32; 2]) -> Self {
        PdfPage {
            width: millimeters_to_points(page_size[0]),
            height: millimeters_to_points(page_size[1]),
            layers: vec![PdfLayer {
                name: "Layer0".into(),
                operations: Vec::new(),
            }],
            xobjects: Vec::new(),
        }
    }
}

/// The state which persists between drawing calls.
#[derive(Debug, Clone, Copy)]
struct GraphicsState {
    font: StandardFont,
    font_size: f32,
    text_color: [f32; 3],
    fill_color: [f32; 3],
    draw_color: [f32; 3],
    /// Line width in millimeters.
    line_width: f32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            font: StandardFont::Helvetica,
            font_size: 16.0,
            text_color: [0.0; 3],
            fill_color: [0.0; 3],
            draw_color: [0.0; 3],
            line_width: 0.2,
        }
    }
}

/// A `Canvas` which produces a PDF document. It is an interface to the underlying `lopdf::Document`
/// with the addition of the pages and the document identifier. Nothing in the output depends on
/// anything but what has been drawn and the values given at construction, so rendering twice the
/// same content yields the same bytes.
pub struct PdfCanvas {
    /// The underlying PDF document, only filled in when the canvas is finished.
    inner_document: lopdf::Document,
    /// The identifier of the document, it is used to in order to set the PDF `ID` tag.
    identifier: String,
    /// The title stored in the document information.
    title: String,
    /// The creation date stored in the document information.
    creation_date: OffsetDateTime,
    page_size: [f32; 2],
    pages: Vec<PdfPage>,
    state: GraphicsState,
}

impl PdfCanvas {
    /// Creates a canvas with a single empty A4 page.
    ///
    /// # Arguments
    ///
    /// * `identifier` - The identifier given to the PDF document, also used as its title.
    /// * `creation_date` - The date stored as the creation date of the document.
    pub fn new(identifier: String, creation_date: Date) -> Self {
        PdfCanvas {
            inner_document: lopdf::Document::with_version("1.5"),
            title: identifier.clone(),
            identifier,
            creation_date: creation_date.midnight().assume_utc(),
            page_size: A4_PAGE_SIZE,
            pages: vec![PdfPage::new(A4_PAGE_SIZE)],
            state: GraphicsState::default(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Writes the pages into the document, optimizes it and returns it serialized.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.write_all()?;
        self.optimize();
        self.save_to_bytes()
    }

    /// Write the pages so far drawn to the underlying PDF document and finalize it.
    fn write_all(&mut self) -> Result<(), RenderError> {
        use lopdf::Object::*;

        let timestamp = to_pdf_timestamp_format(&self.creation_date);
        let document_info = dictionary! {
            "Title" => Object::string_literal(self.title.clone()),
            "Creator" => Object::string_literal("alta"),
            "Producer" => Object::string_literal("alta"),
            "CreationDate" => Object::string_literal(timestamp.clone()),
            "ModDate" => Object::string_literal(timestamp),
            "Trapped" => "False",
        };
        let document_info_id = self.inner_document.add_object(document_info);

        // The standard fonts are referenced by name, they never need to be embedded
        let mut fonts_dictionary = lopdf::Dictionary::new();
        for font in StandardFont::ALL {
            let font_id = self.inner_document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts_dictionary.set(font.resource_name(), Reference(font_id));
        }
        let fonts_dictionary_id = self.inner_document.add_object(fonts_dictionary);

        let pages_id = self.inner_document.new_object_id();
        let mut page_ids = Vec::<Object>::new();

        for page in mem::take(&mut self.pages) {
            let mut xobjects_dictionary = lopdf::Dictionary::new();
            for (reference, image) in &page.xobjects {
                let image_id = image.insert_into_document(&mut self.inner_document);
                xobjects_dictionary.set(reference.0.clone(), Reference(image_id));
            }

            let mut resource_dictionary = dictionary! {
                "Font" => Reference(fonts_dictionary_id),
            };
            if !xobjects_dictionary.is_empty() {
                resource_dictionary.set("XObject", Dictionary(xobjects_dictionary));
            }
            let resources_id = self.inner_document.add_object(resource_dictionary);

            // Merge all streams of the individual layers into one unified stream
            let mut merged_layer_streams = Vec::<u8>::new();
            for layer in page.layers {
                let mut stream = layer.into_stream()?;
                merged_layer_streams.append(&mut stream.content);
            }
            let page_content_id = self.inner_document.add_object(
                lopdf::Stream::new(lopdf::Dictionary::new(), merged_layer_streams)
                    .with_compression(false),
            );

            let media_box: Vec<Object> = vec![
                0.into(),
                0.into(),
                page.width.into(),
                page.height.into(),
            ];
            let page_id = self.inner_document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Reference(pages_id),
                "MediaBox" => media_box.clone(),
                "CropBox" => media_box,
                "Rotate" => 0,
                "Resources" => Reference(resources_id),
                "Contents" => Reference(page_content_id),
            });
            page_ids.push(Reference(page_id));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => page_ids.len() as i64,
            "Kids" => page_ids,
        };
        self.inner_document
            .objects
            .insert(pages_id, Dictionary(pages));

        let catalog_id = self.inner_document.add_object(dictionary! {
            "Type" => "Catalog",
            "PageLayout" => "OneColumn",
            "PageMode" => "UseNone",
            "Pages" => Reference(pages_id),
        });

        self.inner_document
            .trailer
            .set("Root", Reference(catalog_id));
        self.inner_document
            .trailer
            .set("Info", Reference(document_info_id));
        self.inner_document.trailer.set(
            "ID",
            Array(vec![
                String(self.identifier.clone().into_bytes(), StringFormat::Literal),
                String(self.identifier.clone().into_bytes(), StringFormat::Literal),
            ]),
        );

        Ok(())
    }

    /// Compresses the streams which allow it, in practice only the images.
    fn optimize(&mut self) {
        self.inner_document.compress();
    }

    /// Save the document to bytes in order for it to be delivered.
    fn save_to_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let mut pdf_document_bytes = Vec::new();
        let mut writer = BufWriter::new(&mut pdf_document_bytes);
        self.inner_document.save_to(&mut writer).map_err(|error| {
            RenderError::with_error("Error while saving the PDF document to bytes", &error)
        })?;
        mem::drop(writer);

        Ok(pdf_document_bytes)
    }

    /// Converts a position measured from the top-left corner in millimeters into PDF user space.
    fn to_user_space(&self, position: [f32; 2]) -> Result<[f32; 2], RenderError> {
        let page = self.current_page()?;
        Ok([
            millimeters_to_points(position[0]),
            page.height - millimeters_to_points(position[1]),
        ])
    }

    fn current_page(&self) -> Result<&PdfPage, RenderError> {
        self.pages
            .last()
            .ok_or(RenderError::with_context("Failed to find the current page"))
    }

    fn current_page_mut(&mut self) -> Result<&mut PdfPage, RenderError> {
        self.pages
            .last_mut()
            .ok_or(RenderError::with_context("Failed to find the current page"))
    }

    /// Adds the given operations to the first layer of the current page.
    fn add_operations(&mut self, operations: Vec<Operation>) -> Result<(), RenderError> {
        let layer = self
            .current_page_mut()?
            .layers
            .first_mut()
            .ok_or(RenderError::with_context("Failed to find the layer of the page"))?;
        layer.operations.extend(operations);

        Ok(())
    }

    fn stroke_state_operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("w", vec![millimeters_to_points(self.state.line_width).into()]),
            Operation::new("RG", color_operands(self.state.draw_color)),
        ]
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> [f32; 2] {
        self.page_size
    }

    fn add_page(&mut self) -> Result<(), RenderError> {
        self.pages.push(PdfPage::new(self.page_size));
        log::debug!("Added page {} to {:?}", self.pages.len(), self.identifier);
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, font_size: f32) {
        self.state.font = font;
        self.state.font_size = font_size;
    }

    fn font(&self) -> (StandardFont, f32) {
        (self.state.font, self.state.font_size)
    }

    fn set_text_color(&mut self, color: [f32; 3]) {
        self.state.text_color = color;
    }

    fn set_fill_color(&mut self, color: [f32; 3]) {
        self.state.fill_color = color;
    }

    fn set_draw_color(&mut self, color: [f32; 3]) {
        self.state.draw_color = color;
    }

    fn set_line_width(&mut self, line_width: f32) {
        self.state.line_width = line_width;
    }

    fn text(
        &mut self,
        text: &str,
        position: [f32; 2],
        placement: TextPlacement,
    ) -> Result<(), RenderError> {
        let GraphicsState {
            font, font_size, ..
        } = self.state;
        let [mut x, y] = position;
        if placement.alignment == TextAlignment::Center {
            x -= font.text_width(text, font_size) / 2.0;
        }
        let [x, y] = self.to_user_space([x, y])?;

        // The text matrix places the baseline origin and rotates the text around it
        let text_matrix =
            glm::translation2d(&glm::vec2(x, y)) * glm::rotation2d(placement.angle.to_radians());

        self.add_operations(vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(font.resource_name().into_bytes()), font_size.into()],
            ),
            Operation::new("rg", color_operands(self.state.text_color)),
            Operation::new("Tm", matrix_operands(&text_matrix)),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ])
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2]) -> Result<(), RenderError> {
        let [from_x, from_y] = self.to_user_space(from)?;
        let [to_x, to_y] = self.to_user_space(to)?;

        let mut operations = self.stroke_state_operations();
        operations.extend([
            Operation::new("m", vec![from_x.into(), from_y.into()]),
            Operation::new("l", vec![to_x.into(), to_y.into()]),
            Operation::new("S", vec![]),
        ]);
        self.add_operations(operations)
    }

    fn rect(&mut self, origin: [f32; 2], size: [f32; 2], paint: Paint) -> Result<(), RenderError> {
        // In user space the rectangle grows upwards from its bottom-left corner
        let [x, bottom] = self.to_user_space([origin[0], origin[1] + size[1]])?;
        let [width, height] = size.map(millimeters_to_points);

        let mut operations = self.stroke_state_operations();
        operations.push(Operation::new("rg", color_operands(self.state.fill_color)));
        operations.push(Operation::new(
            "re",
            vec![x.into(), bottom.into(), width.into(), height.into()],
        ));
        operations.push(Operation::new(
            match paint {
                Paint::Stroke => "S",
                Paint::FillAndStroke => "B",
            },
            vec![],
        ));
        self.add_operations(operations)
    }

    fn image(
        &mut self,
        png_bytes: &[u8],
        origin: [f32; 2],
        size: [f32; 2],
    ) -> Result<(), RenderError> {
        let image = ImageXObject::from_png(png_bytes)?;
        let [x, bottom] = self.to_user_space([origin[0], origin[1] + size[1]])?;
        let [width, height] = size.map(millimeters_to_points);

        let page = self.current_page_mut()?;
        let reference = XObjectReference::new(page.xobjects.len());
        page.xobjects.push((reference.clone(), image));

        // The image occupies the unit square, which gets scaled to its size and moved in place
        let image_matrix =
            glm::translation2d(&glm::vec2(x, bottom)) * glm::scaling2d(&glm::vec2(width, height));
        self.add_operations(vec![
            Operation::new("q", vec![]),
            Operation::new("cm", matrix_operands(&image_matrix)),
            Operation::new("Do", vec![Object::Name(reference.0.into_bytes())]),
            Operation::new("Q", vec![]),
        ])
    }
}

fn color_operands(color: [f32; 3]) -> Vec<Object> {
    color.into_iter().map(Object::Real).collect()
}

/// The six operands `a b c d e f` of a PDF matrix from a 2D affine transformation.
fn matrix_operands(matrix: &glm::Mat3) -> Vec<Object> {
    [
        matrix[(0, 0)],
        matrix[(1, 0)],
        matrix[(0, 1)],
        matrix[(1, 1)],
        matrix[(0, 2)],
        matrix[(1, 2)],
    ]
    .into_iter()
    .map(|component| Object::Real((component * 10_000.0).round() / 10_000.0))
    .collect()
}

/// Formats the given time so that it matches what the PDF specification expects.
/// An example of it is the following: D:20170505150224+02'00'.
fn to_pdf_timestamp_format(date: &OffsetDateTime) -> String {
    let offset = date.offset();
    let offset_sign = if offset.is_negative() { '-' } else { '+' };
    format!(
        "D:{:04}{:02}{:02}{:02}{:02}{:02}{offset_sign}{:02}'{:02}'",
        date.year(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        offset.whole_hours().abs(),
        offset.minutes_past_hour().abs(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn test_date() -> Date {
        Date::from_calendar_date(2026, Month::October, 19).unwrap()
    }

    /// A 2x1 PNG with a transparent second pixel.
    fn transparent_png() -> Vec<u8> {
        let mut png_bytes = Vec::new();
        let image = image::RgbaImage::from_raw(2, 1, vec![183, 28, 28, 255, 0, 0, 0, 0]).unwrap();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut png_bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        png_bytes
    }

    fn page_operations(pdf_bytes: &[u8]) -> Vec<Operation> {
        let document = lopdf::Document::load_mem(pdf_bytes).unwrap();
        let page_id = *document.get_pages().values().next().unwrap();
        let content = document.get_page_content(page_id).unwrap();
        lopdf::content::Content::decode(&content).unwrap().operations
    }

    #[test]
    fn timestamp_uses_the_pdf_date_format() {
        let timestamp = to_pdf_timestamp_format(&test_date().midnight().assume_utc());
        assert_eq!(timestamp, "D:20261019000000+00'00'");
    }

    #[test]
    fn text_is_placed_from_the_top_left_corner() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        canvas.set_font(StandardFont::HelveticaBold, 18.0);
        canvas
            .text("FICHA DE ALTA DE CLIENTE", [14.0, 20.0], TextPlacement::LEFT)
            .unwrap();
        let operations = page_operations(&canvas.finish().unwrap());

        let text_matrix = operations
            .iter()
            .find(|operation| operation.operator == "Tm")
            .unwrap();
        let x = text_matrix.operands[4].as_float().unwrap();
        let y = text_matrix.operands[5].as_float().unwrap();
        assert!((x - 14.0 * 2.834646).abs() < 0.01);
        assert!((y - (297.0 - 20.0) * 2.834646).abs() < 0.01);

        let font = operations
            .iter()
            .find(|operation| operation.operator == "Tf")
            .unwrap();
        assert_eq!(font.operands[0].as_name().unwrap(), b"F2");
    }

    #[test]
    fn centered_text_is_shifted_by_half_its_width() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        canvas.set_font(StandardFont::HelveticaOblique, 10.0);
        canvas
            .text("SEPA Direct Debit Mandate", [105.0, 30.0], TextPlacement::CENTERED)
            .unwrap();
        let operations = page_operations(&canvas.finish().unwrap());

        let text_matrix = operations
            .iter()
            .find(|operation| operation.operator == "Tm")
            .unwrap();
        let x = text_matrix.operands[4].as_float().unwrap();
        let half_width = StandardFont::HelveticaOblique.text_width("SEPA Direct Debit Mandate", 10.0) / 2.0;
        assert!(half_width > 10.0);
        assert!((x - (105.0 - half_width) * 2.834646).abs() < 0.01);
    }

    #[test]
    fn rotated_text_turns_counterclockwise() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        canvas
            .text("To be completed by the creditor", [16.0, 80.0], TextPlacement::rotated(90.0))
            .unwrap();
        let operations = page_operations(&canvas.finish().unwrap());

        let text_matrix = operations
            .iter()
            .find(|operation| operation.operator == "Tm")
            .unwrap();
        let [a, b, c, d] = [0, 1, 2, 3].map(|index| text_matrix.operands[index].as_float().unwrap());
        assert!(a.abs() < 1e-6 && d.abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert!((c + 1.0).abs() < 1e-6);
    }

    #[test]
    fn standard_fonts_are_declared_on_every_page() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        canvas.add_page().unwrap();
        let document = lopdf::Document::load_mem(&canvas.finish().unwrap()).unwrap();

        assert_eq!(document.get_pages().len(), 2);
        for page_id in document.get_pages().values() {
            let fonts = document.get_page_fonts(*page_id);
            let base_fonts: Vec<&[u8]> = fonts
                .values()
                .map(|font| font.get(b"BaseFont").unwrap().as_name().unwrap())
                .collect();
            assert_eq!(fonts.len(), StandardFont::ALL.len());
            assert!(base_fonts.contains(&b"Courier-Bold".as_slice()));
        }
    }

    #[test]
    fn transparent_images_carry_a_soft_mask() {
        let image = ImageXObject::from_png(&transparent_png()).unwrap();

        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.image_data, vec![183, 28, 28, 0, 0, 0]);
        assert_eq!(image.soft_mask, Some(vec![255, 0]));
    }

    #[test]
    fn images_are_drawn_through_an_xobject() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        canvas
            .image(&transparent_png(), [150.0, 10.0], [40.0, 10.0])
            .unwrap();
        let operations = page_operations(&canvas.finish().unwrap());

        let draw = operations
            .iter()
            .find(|operation| operation.operator == "Do")
            .unwrap();
        assert_eq!(draw.operands[0].as_name().unwrap(), b"Im0");
    }

    #[test]
    fn invalid_images_are_an_error() {
        let mut canvas = PdfCanvas::new("Test".into(), test_date());
        let error = canvas
            .image(b"definitely not a png", [0.0, 0.0], [1.0, 1.0])
            .unwrap_err();

        assert!(error.to_string().starts_with("Failed to decode the PNG image"));
    }

    #[test]
    fn identical_drawings_give_identical_bytes() {
        let draw = || {
            let mut canvas = PdfCanvas::new("Test".into(), test_date());
            canvas.line([10.0, 105.0], [200.0, 105.0]).unwrap();
            canvas
                .rect([80.0, 239.0], [5.0, 5.0], Paint::Stroke)
                .unwrap();
            canvas.finish().unwrap()
        };

        assert_eq!(draw(), draw());
    }
}
