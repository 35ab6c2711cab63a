//! Cover artwork rendering
//!
//! All three cover renderings (list item, carousel card, playlist header)
//! go through `cover_lines`, so the Loading / Error / Loaded contract is the
//! same everywhere.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::model::{ArtPixels, CoverState};
use super::utils::{blend, initials};

const PLACEHOLDER_BG: Color = Color::Rgb(42, 42, 42);
const GRADIENT_TOP: (u8, u8, u8) = (68, 68, 68);
const GRADIENT_BOTTOM: (u8, u8, u8) = (17, 17, 17);

/// Render a cover as `rows` lines of `cols` cells.
pub fn cover_lines(state: &CoverState, title: &str, cols: u16, rows: u16) -> Vec<Line<'static>> {
    match state {
        CoverState::Loading => loading_lines(cols, rows),
        CoverState::Error => initials_lines(title, cols, rows),
        CoverState::Loaded(pixels) => pixel_lines(pixels, cols, rows),
    }
}

fn loading_lines(cols: u16, rows: u16) -> Vec<Line<'static>> {
    let style = Style::default().bg(PLACEHOLDER_BG);
    (0..rows)
        .map(|_| Line::from(Span::styled(" ".repeat(usize::from(cols)), style)))
        .collect()
}

fn initials_lines(title: &str, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let width = usize::from(cols);
    let label = initials(title, 2);
    let middle = rows / 2;

    (0..rows)
        .map(|row| {
            let t = if rows > 1 { row as f32 / (rows - 1) as f32 } else { 0.0 };
            let bg = blend(GRADIENT_BOTTOM, GRADIENT_TOP, t);
            let text = if row == middle {
                format!("{:^width$}", label, width = width)
            } else {
                " ".repeat(width)
            };
            Line::from(Span::styled(
                text,
                Style::default().bg(bg).fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

/// Half-block rendering, nearest-neighbour sampled to the target size.
fn pixel_lines(pixels: &ArtPixels, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let src_h = pixels.len();
    let src_w = pixels.first().map(|r| r.len()).unwrap_or(0);
    if src_h == 0 || src_w == 0 {
        return loading_lines(cols, rows);
    }

    let px_rows = usize::from(rows) * 2;
    let sample = |x: usize, y: usize| {
        let sy = y * src_h / px_rows;
        let sx = x * src_w / usize::from(cols).max(1);
        pixels[sy.min(src_h - 1)][sx.min(src_w - 1)]
    };

    (0..usize::from(rows))
        .map(|cy| {
            let spans: Vec<Span> = (0..usize::from(cols))
                .map(|cx| {
                    let (tr, tg, tb) = sample(cx, cy * 2);
                    let (br, bg, bb) = sample(cx, cy * 2 + 1);
                    Span::styled(
                        "▀",
                        Style::default().fg(Color::Rgb(tr, tg, tb)).bg(Color::Rgb(br, bg, bb)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn every_state_fills_the_requested_area() {
        let pixels: ArtPixels = vec![vec![(1, 2, 3); 4]; 4];
        for state in [CoverState::Loading, CoverState::Error, CoverState::Loaded(Arc::new(pixels))] {
            let lines = cover_lines(&state, "Deja Vu", 6, 3);
            assert_eq!(lines.len(), 3);
            assert!(lines.iter().all(|l| l.width() == 6));
        }
    }

    #[test]
    fn error_shows_initials() {
        let lines = cover_lines(&CoverState::Error, "RapCaviar", 8, 3);
        assert_eq!(text(&lines[1]).trim(), "Ra");
        assert_eq!(text(&lines[0]).trim(), "");
    }

    #[test]
    fn loading_is_blank() {
        let lines = cover_lines(&CoverState::Loading, "RapCaviar", 8, 2);
        assert!(lines.iter().all(|l| text(l).trim().is_empty()));
    }

    #[test]
    fn loaded_uses_half_blocks() {
        let pixels: ArtPixels = vec![vec![(255, 0, 0); 2], vec![(0, 0, 255); 2]];
        let lines = cover_lines(&CoverState::Loaded(Arc::new(pixels)), "x", 2, 1);
        let span = &lines[0].spans[0];
        assert_eq!(span.content, "▀");
        assert_eq!(span.style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(span.style.bg, Some(Color::Rgb(0, 0, 255)));
    }
}
