/// The running vertical offset, in millimeters from the top of the page, at which the
/// next piece of content is placed. It only ever moves downwards until a new page begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    offset: f32,
}

impl LayoutCursor {
    pub fn new(offset: f32) -> Self {
        LayoutCursor { offset }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Moves the cursor down by the given increment, a negative increment is ignored.
    pub fn advance(&mut self, increment: f32) -> f32 {
        if increment > 0.0 {
            self.offset += increment;
        }
        self.offset
    }

    /// Moves the cursor down to the given offset if it lies below the current one.
    pub fn advance_to(&mut self, offset: f32) -> f32 {
        self.offset = self.offset.max(offset);
        self.offset
    }

    /// Places the cursor at the top of a freshly added page.
    pub fn reset(&mut self, top: f32) {
        self.offset = top;
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutCursor;

    #[test]
    fn cursor_never_moves_upwards() {
        let mut cursor = LayoutCursor::new(40.0);

        assert_eq!(cursor.advance(10.0), 50.0);
        assert_eq!(cursor.advance(-5.0), 50.0);
        assert_eq!(cursor.advance_to(30.0), 50.0);
        assert_eq!(cursor.advance_to(72.5), 72.5);
    }

    #[test]
    fn reset_starts_over_on_a_new_page() {
        let mut cursor = LayoutCursor::new(40.0);
        cursor.advance(250.0);
        cursor.reset(14.0);

        assert_eq!(cursor.offset(), 14.0);
    }
}
