//! Theme tokens — neon accents on a dark terminal background.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Electric cyan — focus, highlights.
pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Steel blue — secondary text, hints.
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Cool purple — secondary info.
pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

/// Neon orange — stage badges, emphasis.
pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

/// Neon green — counts, confirmations.
pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Map a role's opaque accent token to a terminal color.
///
/// Unknown tokens fall back to secondary text rather than failing — the
/// token is presentational data, never validated.
pub fn role_accent(token: &str) -> Style {
    let color = match token {
        "purple" => Color::Rgb(186, 104, 255),
        "blue" => Color::Rgb(80, 160, 255),
        "green" => POSITIVE,
        "pink" => Color::Rgb(255, 121, 198),
        "yellow" => Color::Rgb(255, 220, 100),
        _ => TEXT_SECONDARY,
    };
    Style::default().fg(color)
}
