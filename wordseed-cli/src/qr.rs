//! Terminal QR code rendering.

use qrcode::{Color, QrCode};

/// Modules of blank border around the code.
const QUIET_ZONE: usize = 2;

/// Render a QR code to the terminal using Unicode half-block characters.
///
/// Two module rows are packed into each text line so the code prints
/// roughly square.
pub fn render_to_terminal(data: &str) {
    match render(data) {
        Some(lines) => {
            println!();
            for line in lines {
                println!("      {line}");
            }
        }
        None => eprintln!("Failed to generate QR code: data too long"),
    }
}

/// Build the text lines for a QR code, or `None` if `data` cannot be encoded.
fn render(data: &str) -> Option<Vec<String>> {
    let code = QrCode::new(data).ok()?;
    let colors = code.to_colors();
    let width = code.width();
    let total = width + QUIET_ZONE * 2;

    let is_dark = |x: usize, y: usize| {
        x >= QUIET_ZONE
            && y >= QUIET_ZONE
            && x < QUIET_ZONE + width
            && y < QUIET_ZONE + width
            && colors[(y - QUIET_ZONE) * width + (x - QUIET_ZONE)] == Color::Dark
    };

    let lines = (0..total)
        .step_by(2)
        .map(|y| {
            (0..total)
                .map(|x| match (is_dark(x, y), is_dark(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect();

    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let lines = render("abandon ability able about").unwrap();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert_eq!(lines.len(), (width + 1) / 2);
    }

    #[test]
    fn test_render_quiet_zone_blank() {
        let lines = render("zoo").unwrap();
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines.last().unwrap().chars().all(|c| c == ' '));
    }

    #[test]
    fn test_render_24_word_phrase() {
        let phrase = ["abandon"; 23].join(" ") + " art";
        assert!(render(&phrase).is_some());
    }
}
