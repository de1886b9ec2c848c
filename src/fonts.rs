use unicode_normalization::UnicodeNormalization as _;

use crate::pdf::points_to_millimeters;

/// The ratio between the distance of two consecutive baselines and the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Advance widths of the printable ASCII range (from the space up to the tilde) of Helvetica,
/// in thousandths of the font size. The oblique variant shares them.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths of the printable ASCII range of Helvetica-Bold, shared by the bold oblique variant.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 556;

/// The subset of the standard PDF fonts used by the documents. These are never embedded,
/// every PDF viewer is required to provide them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    CourierBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 5] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::CourierBold,
    ];

    /// The PostScript name by which the viewer looks the font up.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// The name of the font inside the resources dictionary of a page.
    pub fn resource_name(self) -> String {
        let index = Self::ALL
            .iter()
            .position(|font| *font == self)
            .unwrap_or_default();
        format!("F{}", index + 1)
    }

    fn character_width(self, character: char) -> u16 {
        if self == StandardFont::CourierBold {
            return COURIER_WIDTH;
        }
        let widths = match self {
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
            _ => &HELVETICA_WIDTHS,
        };
        // Accented letters are as wide as their base letter
        let base_character = std::iter::once(character)
            .nfd()
            .next()
            .unwrap_or(character);
        match base_character {
            ' '..='~' => widths[base_character as usize - 32],
            _ => FALLBACK_WIDTH,
        }
    }

    /// The width in millimeters of the text when set at the given size in points.
    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text
            .nfc()
            .map(|character| u32::from(self.character_width(character)))
            .sum();
        points_to_millimeters(units as f32 * font_size / 1000.0)
    }
}

/// The distance in millimeters between two consecutive baselines at the given font size.
pub fn line_height(font_size: f32) -> f32 {
    points_to_millimeters(font_size * LINE_HEIGHT_FACTOR)
}

/// Breaks the text into lines no wider than the given width, breaking at spaces and, when a
/// single word does not fit, inside the word. Explicit line breaks are kept, and a line which
/// already fits is kept as it is, spaces included.
pub fn split_text_to_width(
    text: &str,
    font: StandardFont,
    font_size: f32,
    maximum_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if font.text_width(paragraph, font_size) <= maximum_width {
            lines.push(paragraph.to_string());
            continue;
        }
        let mut current_line = String::new();
        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{current_line} {word}")
            };
            if font.text_width(&candidate, font_size) <= maximum_width {
                current_line = candidate;
                continue;
            }
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            // The word alone may still overflow, in which case it is cut character by character
            for character in word.chars() {
                current_line.push(character);
                if font.text_width(&current_line, font_size) > maximum_width
                    && current_line.chars().count() > 1
                {
                    current_line.pop();
                    lines.push(std::mem::take(&mut current_line));
                    current_line.push(character);
                }
            }
        }
        lines.push(current_line);
    }

    lines
}

/// Encodes the text with the `WinAnsiEncoding` expected by the standard fonts. Characters
/// outside of the encoding are replaced by a question mark.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.nfc()
        .map(|character| match character {
            ' '..='~' | '\u{a0}'..='\u{ff}' => character as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => {
                log::warn!(
                    "Unable to encode the character {:?} with the standard fonts",
                    character
                );
                b'?'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_the_font_metrics() {
        // 10 points of "Test" in Helvetica: (611 + 556 + 500 + 278) / 1000 * 10 = 19.45 points
        let width = StandardFont::Helvetica.text_width("Test", 10.0);
        assert!((width - 19.45 / 2.834646).abs() < 1e-3);

        let courier_width = StandardFont::CourierBold.text_width("ES00", 12.0);
        assert!((courier_width - 4.0 * 7.2 / 2.834646).abs() < 1e-3);
    }

    #[test]
    fn accented_letters_measure_like_their_base_letter() {
        assert_eq!(
            StandardFont::HelveticaBold.text_width("ÚNICO", 10.0),
            StandardFont::HelveticaBold.text_width("UNICO", 10.0)
        );
    }

    #[test]
    fn splitting_respects_the_maximum_width() {
        let text = "Mediante la firma de esta orden de domiciliación, el deudor autoriza al acreedor a enviar instrucciones";
        let lines = split_text_to_width(text, StandardFont::Helvetica, 8.0, 60.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(StandardFont::Helvetica.text_width(line, 8.0) <= 60.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn overlong_words_are_cut() {
        let lines = split_text_to_width("ES0000000000000000000000", StandardFont::CourierBold, 12.0, 20.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "ES0000000000000000000000");
    }

    #[test]
    fn fitting_text_keeps_its_spaces() {
        assert_eq!(
            split_text_to_width(" - Xàtiva", StandardFont::Helvetica, 10.0, 128.0),
            vec![" - Xàtiva".to_string()]
        );
        assert_eq!(
            split_text_to_width("46000 -  - Valencia", StandardFont::Helvetica, 10.0, 128.0),
            vec!["46000 -  - Valencia".to_string()]
        );
    }

    #[test]
    fn empty_text_is_a_single_empty_line() {
        assert_eq!(
            split_text_to_width("", StandardFont::Helvetica, 10.0, 100.0),
            vec![String::new()]
        );
    }

    #[test]
    fn spanish_text_is_encoded_in_win_ansi() {
        assert_eq!(encode_win_ansi("España"), b"Espa\xf1a".to_vec());
        assert_eq!(encode_win_ansi("DIRECCIÓN"), b"DIRECCI\xd3N".to_vec());
        // A decomposed accent is composed before encoding
        assert_eq!(encode_win_ansi("u\u{301}nico"), b"\xfanico".to_vec());
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
