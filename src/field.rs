use crate::{
    canvas::{Canvas, TextPlacement},
    error::RenderError,
    fonts::StandardFont,
};

/// A piece of single-line text with its own font, anchored at a fixed horizontal position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub font: StandardFont,
    pub font_size: f32,
    pub x: f32,
}

impl<'a> Span<'a> {
    pub fn new(text: &'a str, font: StandardFont, font_size: f32, x: f32) -> Self {
        Span {
            text,
            font,
            font_size,
            x,
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, y: f32) -> Result<(), RenderError> {
        canvas.set_font(self.font, self.font_size);
        canvas.text(self.text, [self.x, y], TextPlacement::LEFT)
    }
}

/// The recurring form pattern of a label, an optional note next to it, the value written on
/// the same line or below it, the line the value sits on and a caption under the label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledField<'a> {
    pub label: Span<'a>,
    pub note: Option<Span<'a>>,
    pub value: Option<Span<'a>>,
    /// How far below the label the value baseline lies, zero for inline values.
    pub value_offset: f32,
    /// The horizontal extent of the underline.
    pub underline: [f32; 2],
    /// How far below the value baseline the underline lies.
    pub underline_gap: f32,
    /// The caption and how far below the label baseline it lies.
    pub caption: Option<(Span<'a>, f32)>,
}

impl<'a> LabeledField<'a> {
    /// A field whose value follows the label on the same line.
    pub fn inline(label: Span<'a>, value: Span<'a>, underline_end: f32) -> Self {
        LabeledField {
            label,
            note: None,
            value: Some(value),
            value_offset: 0.0,
            underline: [value.x, underline_end],
            underline_gap: 1.0,
            caption: None,
        }
    }

    /// A field whose value sits on its own line under the label.
    pub fn stacked(label: Span<'a>, value: Span<'a>, value_offset: f32, underline_end: f32) -> Self {
        LabeledField {
            label,
            note: None,
            value: Some(value),
            value_offset,
            underline: [value.x, underline_end],
            underline_gap: 1.0,
            caption: None,
        }
    }

    pub fn with_note(mut self, note: Span<'a>) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_caption(mut self, caption: Span<'a>, offset: f32) -> Self {
        self.caption = Some((caption, offset));
        self
    }

    pub fn with_underline(mut self, underline: [f32; 2], gap: f32) -> Self {
        self.underline = underline;
        self.underline_gap = gap;
        self
    }

    /// Draws the field with the label baseline at `y` and returns the baseline of the value.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, y: f32) -> Result<f32, RenderError> {
        self.label.draw(canvas, y)?;
        if let Some(note) = &self.note {
            note.draw(canvas, y)?;
        }

        let value_y = y + self.value_offset;
        if let Some(value) = &self.value {
            value.draw(canvas, value_y)?;
        }
        let underline_y = value_y + self.underline_gap;
        canvas.line(
            [self.underline[0], underline_y],
            [self.underline[1], underline_y],
        )?;

        if let Some((caption, offset)) = &self.caption {
            caption.draw(canvas, y + offset)?;
        }

        Ok(value_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{Mark, RecordingCanvas};

    #[test]
    fn inline_field_underlines_the_value_only() {
        let mut canvas = RecordingCanvas::new();
        let field = LabeledField::inline(
            Span::new("Identificador del acreedor:", StandardFont::HelveticaBoldOblique, 10.0, 22.0),
            Span::new("B96573613", StandardFont::Helvetica, 10.0, 90.0),
            195.0,
        )
        .with_caption(Span::new("Creditor Identifier", StandardFont::Helvetica, 7.0, 22.0), 4.0);
        let value_y = field.draw(&mut canvas, 52.0).unwrap();

        assert_eq!(value_y, 52.0);
        assert_eq!(canvas.text_position("B96573613"), Some([90.0, 52.0]));
        assert_eq!(canvas.text_position("Creditor Identifier"), Some([22.0, 56.0]));
        assert!(canvas.marks.contains(&Mark::Line {
            from: [90.0, 53.0],
            to: [195.0, 53.0]
        }));
    }

    #[test]
    fn stacked_field_writes_the_value_below_the_label() {
        let mut canvas = RecordingCanvas::new();
        let field = LabeledField::stacked(
            Span::new("País / Country", StandardFont::HelveticaBoldOblique, 10.0, 22.0),
            Span::new("ESPAÑA", StandardFont::Helvetica, 10.0, 22.0),
            4.0,
            195.0,
        );
        let value_y = field.draw(&mut canvas, 98.0).unwrap();

        assert_eq!(value_y, 102.0);
        assert_eq!(canvas.text_position("ESPAÑA"), Some([22.0, 102.0]));
        assert!(canvas.marks.contains(&Mark::Line {
            from: [22.0, 103.0],
            to: [195.0, 103.0]
        }));
    }

    #[test]
    fn fonts_follow_each_span() {
        let mut canvas = RecordingCanvas::new();
        LabeledField::stacked(
            Span::new("Número de cuenta - IBAN", StandardFont::HelveticaBoldOblique, 10.0, 22.0),
            Span::new("ES0000000000000000000000", StandardFont::CourierBold, 12.0, 22.0),
            6.0,
            195.0,
        )
        .draw(&mut canvas, 222.0)
        .unwrap();

        match canvas.find_text("ES0000000000000000000000").unwrap() {
            Mark::Text {
                font, font_size, ..
            } => {
                assert_eq!(*font, StandardFont::CourierBold);
                assert_eq!(*font_size, 12.0);
            }
            _ => unreachable!(),
        }
    }
}
