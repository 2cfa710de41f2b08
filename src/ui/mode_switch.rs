//! Dark-mode switch control
//!
//! Renders as: `Dark (●  ) Light` when dark, `Dark (  ●) Light` when light.
//! The switch counts as "checked" in light mode.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::theme::{ColorMode, Theme};

const LEFT_LABEL: &str = "Dark";
const RIGHT_LABEL: &str = "Light";
/// Track is `(` + 3 cells + `)`
const TRACK_WIDTH: u16 = 5;

/// Accessible label describing what activating the switch does
pub fn aria_label(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Light => "switch to dark mode",
        ColorMode::Dark => "switch to light mode",
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchLayout {
    /// Labels plus track; a click anywhere here flips the mode
    pub full_area: Rect,
}

/// Total width of the control
pub fn switch_width() -> u16 {
    (LEFT_LABEL.len() + 1) as u16 + TRACK_WIDTH + (RIGHT_LABEL.len() + 1) as u16
}

/// Render the switch centered in `area`
pub fn render_mode_switch(
    frame: &mut Frame,
    area: Rect,
    mode: ColorMode,
    theme: &Theme,
) -> SwitchLayout {
    let width = switch_width().min(area.width);
    if width == 0 || area.height == 0 {
        return SwitchLayout::default();
    }

    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    let buf = frame.buffer_mut();

    let label = Style::default().fg(theme.neutral).bg(theme.background);
    buf.set_stringn(x, y, LEFT_LABEL, width as usize, label);

    let track_x = x + LEFT_LABEL.len() as u16 + 1;
    let checked = mode == ColorMode::Light;
    let track_color = if checked { theme.track_on } else { theme.track_off };
    let track = Style::default().fg(theme.thumb).bg(track_color);
    let thumb = if checked { "(  ●)" } else { "(●  )" };
    let max_x = area.x + area.width;
    if track_x < max_x {
        let room = (max_x - track_x) as usize;
        buf.set_stringn(track_x, y, thumb, room, track.add_modifier(Modifier::BOLD));
    }

    let right_x = track_x + TRACK_WIDTH + 1;
    if right_x < max_x {
        buf.set_stringn(right_x, y, RIGHT_LABEL, (max_x - right_x) as usize, label);
    }

    SwitchLayout {
        full_area: Rect {
            x,
            y,
            width,
            height: 1,
        },
    }
}
