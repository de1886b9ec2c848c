use crate::{
    canvas::{Canvas, Paint, TextPlacement},
    cursor::LayoutCursor,
    error::RenderError,
    fonts::{line_height, split_text_to_width, StandardFont},
    pdf::points_to_millimeters,
};

/// The distance of the table from the left and right edges of the page, and the
/// bottom margin which makes rows move on to the next page.
pub const TABLE_MARGIN: f32 = 14.0;
pub const LABEL_COLUMN_WIDTH: f32 = 50.0;
pub const CELL_PADDING: f32 = 2.0;
pub const TABLE_FONT_SIZE: f32 = 10.0;
pub const TITLE_FILL_COLOR: [f32; 3] = [183.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0];

const GRID_LINE_WIDTH: f32 = 0.1;
const GRID_COLOR: [f32; 3] = [10.0 / 255.0; 3];
const BODY_TEXT_COLOR: [f32; 3] = [80.0 / 255.0; 3];
const WHITE: [f32; 3] = [1.0; 3];
const BLACK: [f32; 3] = [0.0; 3];
/// The height of the capital letters of Helvetica relative to the font size.
const CAP_HEIGHT: f32 = 0.718;

/// A table row of a label and its value.
pub type TableRow = (&'static str, String);

/// One cell ready to be drawn, its text already broken into lines.
struct Cell {
    x: f32,
    width: f32,
    font: StandardFont,
    lines: Vec<String>,
}

/// Draws a bordered table whose title row spans both columns, followed by one row per label
/// and value, starting at the offset of the cursor. Cell text wraps inside its column so the
/// height of the table is only known once it has been drawn: the returned offset is where the
/// last row ends, which is also where the cursor is left.
pub fn draw_table<C: Canvas>(
    canvas: &mut C,
    cursor: &mut LayoutCursor,
    title: &str,
    rows: &[TableRow],
) -> Result<f32, RenderError> {
    let [page_width, _] = canvas.page_size();
    let table_width = page_width - 2.0 * TABLE_MARGIN;
    let value_column_width = table_width - LABEL_COLUMN_WIDTH;

    canvas.set_line_width(GRID_LINE_WIDTH);
    canvas.set_draw_color(GRID_COLOR);

    let title_cell = Cell {
        x: TABLE_MARGIN,
        width: table_width,
        font: StandardFont::HelveticaBold,
        lines: wrap(title, StandardFont::HelveticaBold, table_width),
    };
    draw_title_row(canvas, cursor, &title_cell)?;

    for (label, value) in rows {
        let cells = [
            Cell {
                x: TABLE_MARGIN,
                width: LABEL_COLUMN_WIDTH,
                font: StandardFont::HelveticaBold,
                lines: wrap(label, StandardFont::HelveticaBold, LABEL_COLUMN_WIDTH),
            },
            Cell {
                x: TABLE_MARGIN + LABEL_COLUMN_WIDTH,
                width: value_column_width,
                font: StandardFont::Helvetica,
                lines: wrap(value, StandardFont::Helvetica, value_column_width),
            },
        ];
        draw_body_row(canvas, cursor, &cells, &title_cell)?;
    }

    canvas.set_text_color(BLACK);
    log::debug!(
        "Table {:?} with {} rows ends at {:.2}",
        title,
        rows.len(),
        cursor.offset()
    );

    Ok(cursor.offset())
}

fn wrap(text: &str, font: StandardFont, column_width: f32) -> Vec<String> {
    split_text_to_width(text, font, TABLE_FONT_SIZE, column_width - 2.0 * CELL_PADDING)
}

/// How many lines fit between the cursor and the bottom margin.
fn fitting_line_count(cursor: &LayoutCursor, page_height: f32) -> usize {
    let available_height = page_height - TABLE_MARGIN - cursor.offset() - 2.0 * CELL_PADDING;
    (available_height / line_height(TABLE_FONT_SIZE)).floor().max(0.0) as usize
}

fn start_new_page<C: Canvas>(canvas: &mut C, cursor: &mut LayoutCursor) -> Result<(), RenderError> {
    canvas.add_page()?;
    cursor.reset(TABLE_MARGIN);
    Ok(())
}

/// Draws the title row spanning the whole table, moving it to the next page when it would
/// cross the bottom margin.
fn draw_title_row<C: Canvas>(
    canvas: &mut C,
    cursor: &mut LayoutCursor,
    title_cell: &Cell,
) -> Result<(), RenderError> {
    let [_, page_height] = canvas.page_size();
    let line_count = title_cell.lines.len().max(1);
    if line_count > fitting_line_count(cursor, page_height) && cursor.offset() > TABLE_MARGIN {
        start_new_page(canvas, cursor)?;
    }

    canvas.set_fill_color(TITLE_FILL_COLOR);
    canvas.set_text_color(WHITE);
    draw_cells(
        canvas,
        cursor,
        std::slice::from_ref(title_cell),
        0..line_count,
        Paint::FillAndStroke,
    )?;
    canvas.set_text_color(BODY_TEXT_COLOR);
    Ok(())
}

/// Draws the cells side by side as tall as the one with the most lines. A row which does not
/// fit in what is left of the page moves to the next one, and a row taller than a whole page
/// is split across pages. Every new page starts with the title row again.
fn draw_body_row<C: Canvas>(
    canvas: &mut C,
    cursor: &mut LayoutCursor,
    cells: &[Cell],
    title_cell: &Cell,
) -> Result<(), RenderError> {
    let [_, page_height] = canvas.page_size();
    let line_count = cells.iter().map(|cell| cell.lines.len()).max().unwrap_or(1).max(1);
    let lines_on_empty_page = fitting_line_count(&LayoutCursor::new(TABLE_MARGIN), page_height);

    let mut first_line = 0;
    while first_line < line_count {
        let remaining_lines = line_count - first_line;
        let fitting_lines = fitting_line_count(cursor, page_height);

        let fits_on_empty_page = remaining_lines <= lines_on_empty_page;
        if remaining_lines > fitting_lines
            && cursor.offset() > TABLE_MARGIN
            && (fits_on_empty_page || fitting_lines == 0)
        {
            start_new_page(canvas, cursor)?;
            draw_title_row(canvas, cursor, title_cell)?;
            continue;
        }

        // At least one line is drawn so that the row always makes progress
        let chunk_lines = remaining_lines.min(fitting_lines.max(1));
        draw_cells(
            canvas,
            cursor,
            cells,
            first_line..first_line + chunk_lines,
            Paint::Stroke,
        )?;
        first_line += chunk_lines;
    }

    Ok(())
}

/// Draws the given range of lines of every cell as one bordered row at the cursor.
fn draw_cells<C: Canvas>(
    canvas: &mut C,
    cursor: &mut LayoutCursor,
    cells: &[Cell],
    lines: std::ops::Range<usize>,
    paint: Paint,
) -> Result<(), RenderError> {
    let line_height = line_height(TABLE_FONT_SIZE);
    let row_height = lines.len() as f32 * line_height + 2.0 * CELL_PADDING;
    let top = cursor.offset();

    // The first baseline centers a single line of capital letters in its line box
    let cap_height = points_to_millimeters(TABLE_FONT_SIZE * CAP_HEIGHT);
    let first_baseline = top + CELL_PADDING + (line_height + cap_height) / 2.0;

    for cell in cells {
        canvas.rect([cell.x, top], [cell.width, row_height], paint)?;
        canvas.set_font(cell.font, TABLE_FONT_SIZE);
        let visible_lines = cell.lines.iter().skip(lines.start).take(lines.len());
        for (index, line) in visible_lines.enumerate() {
            canvas.text(
                line,
                [
                    cell.x + CELL_PADDING,
                    first_baseline + index as f32 * line_height,
                ],
                TextPlacement::LEFT,
            )?;
        }
    }

    cursor.advance(row_height);
    Ok(())
}
