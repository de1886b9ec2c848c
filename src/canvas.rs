use crate::{error::RenderError, fonts::StandardFont};

/// The horizontal anchoring of a piece of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
}

/// How the text is anchored and rotated, the angle is in degrees counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextPlacement {
    pub alignment: TextAlignment,
    pub angle: f32,
}

impl TextPlacement {
    pub const LEFT: TextPlacement = TextPlacement {
        alignment: TextAlignment::Left,
        angle: 0.0,
    };
    pub const CENTERED: TextPlacement = TextPlacement {
        alignment: TextAlignment::Center,
        angle: 0.0,
    };

    pub fn rotated(angle: f32) -> Self {
        TextPlacement {
            alignment: TextAlignment::Left,
            angle,
        }
    }
}

/// Whether a rectangle is only outlined or also filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke,
    FillAndStroke,
}

/// The drawing surface the documents are laid out on. Positions and lengths are in millimeters
/// measured from the top-left corner of the current page, text is placed on its baseline and
/// font sizes are in points. Fonts, colors and the line width are state which persists until
/// changed again, as they do on a PDF page.
pub trait Canvas {
    /// The width and height of the pages.
    fn page_size(&self) -> [f32; 2];

    /// Starts a new page, all subsequent drawing happens on it.
    fn add_page(&mut self) -> Result<(), RenderError>;

    fn set_font(&mut self, font: StandardFont, font_size: f32);

    /// The current font and font size.
    fn font(&self) -> (StandardFont, f32);

    fn set_text_color(&mut self, color: [f32; 3]);

    fn set_fill_color(&mut self, color: [f32; 3]);

    fn set_draw_color(&mut self, color: [f32; 3]);

    fn set_line_width(&mut self, line_width: f32);

    fn text(
        &mut self,
        text: &str,
        position: [f32; 2],
        placement: TextPlacement,
    ) -> Result<(), RenderError>;

    fn line(&mut self, from: [f32; 2], to: [f32; 2]) -> Result<(), RenderError>;

    fn rect(&mut self, origin: [f32; 2], size: [f32; 2], paint: Paint) -> Result<(), RenderError>;

    /// Places a PNG image scaled to the given size.
    fn image(&mut self, png_bytes: &[u8], origin: [f32; 2], size: [f32; 2])
        -> Result<(), RenderError>;

    /// Shorthand for setting both the font and its size before writing left-aligned text.
    fn text_in(
        &mut self,
        font: StandardFont,
        font_size: f32,
        text: &str,
        position: [f32; 2],
    ) -> Result<(), RenderError> {
        self.set_font(font, font_size);
        self.text(text, position, TextPlacement::LEFT)
    }
}

/// Places the logo if one was provided, any failure to do so only gets logged.
pub fn place_logo<C: Canvas>(canvas: &mut C, logo: Option<&[u8]>, origin: [f32; 2], size: [f32; 2]) {
    let Some(png_bytes) = logo else {
        return;
    };
    if let Err(error) = canvas.image(png_bytes, origin, size) {
        log::warn!("Skipping the logo: {}", error);
    }
}

/// A canvas which keeps every drawing call in memory, used to check layouts without
/// going through the PDF serialization.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Mark {
        Text {
            text: String,
            position: [f32; 2],
            placement: TextPlacement,
            font: StandardFont,
            font_size: f32,
            page: usize,
        },
        Line {
            from: [f32; 2],
            to: [f32; 2],
        },
        Rect {
            origin: [f32; 2],
            size: [f32; 2],
            paint: Paint,
            fill_color: [f32; 3],
        },
        Image {
            origin: [f32; 2],
            size: [f32; 2],
        },
    }

    pub(crate) struct RecordingCanvas {
        pub(crate) marks: Vec<Mark>,
        pub(crate) pages: usize,
        pub(crate) fail_images: bool,
        font: (StandardFont, f32),
        fill_color: [f32; 3],
    }

    impl RecordingCanvas {
        pub(crate) fn new() -> Self {
            RecordingCanvas {
                marks: Vec::new(),
                pages: 1,
                fail_images: false,
                font: (StandardFont::Helvetica, 16.0),
                fill_color: [0.0; 3],
            }
        }

        pub(crate) fn texts(&self) -> Vec<&str> {
            self.marks
                .iter()
                .filter_map(|mark| match mark {
                    Mark::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// The first text mark with exactly the given content.
        pub(crate) fn find_text(&self, content: &str) -> Option<&Mark> {
            self.marks
                .iter()
                .find(|mark| matches!(mark, Mark::Text { text, .. } if text == content))
        }

        pub(crate) fn text_position(&self, content: &str) -> Option<[f32; 2]> {
            match self.find_text(content)? {
                Mark::Text { position, .. } => Some(*position),
                _ => None,
            }
        }
    }

    impl Canvas for RecordingCanvas {
        fn page_size(&self) -> [f32; 2] {
            [210.0, 297.0]
        }

        fn add_page(&mut self) -> Result<(), RenderError> {
            self.pages += 1;
            Ok(())
        }

        fn set_font(&mut self, font: StandardFont, font_size: f32) {
            self.font = (font, font_size);
        }

        fn font(&self) -> (StandardFont, f32) {
            self.font
        }

        fn set_text_color(&mut self, _color: [f32; 3]) {}

        fn set_fill_color(&mut self, color: [f32; 3]) {
            self.fill_color = color;
        }

        fn set_draw_color(&mut self, _color: [f32; 3]) {}

        fn set_line_width(&mut self, _line_width: f32) {}

        fn text(
            &mut self,
            text: &str,
            position: [f32; 2],
            placement: TextPlacement,
        ) -> Result<(), RenderError> {
            self.marks.push(Mark::Text {
                text: text.to_string(),
                position,
                placement,
                font: self.font.0,
                font_size: self.font.1,
                page: self.pages,
            });
            Ok(())
        }

        fn line(&mut self, from: [f32; 2], to: [f32; 2]) -> Result<(), RenderError> {
            self.marks.push(Mark::Line { from, to });
            Ok(())
        }

        fn rect(
            &mut self,
            origin: [f32; 2],
            size: [f32; 2],
            paint: Paint,
        ) -> Result<(), RenderError> {
            self.marks.push(Mark::Rect {
                origin,
                size,
                paint,
                fill_color: self.fill_color,
            });
            Ok(())
        }

        fn image(
            &mut self,
            _png_bytes: &[u8],
            origin: [f32; 2],
            size: [f32; 2],
        ) -> Result<(), RenderError> {
            if self.fail_images {
                return Err(RenderError::with_context("Unable to decode the image"));
            }
            self.marks.push(Mark::Image { origin, size });
            Ok(())
        }
    }
}
