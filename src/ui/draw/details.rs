//! Details route drawing functions
//!
//! Navigator header with a back button, then the record's fields stacked
//! and centered. Nothing here mutates the record.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::draw_status_bar;
use crate::app::{App, DETAILS};
use crate::drama::DramaRecord;
use crate::ui::drama_card::{render_image_frame, truncate};
use crate::ui::mode_switch::aria_label;
use crate::ui::theme::Theme;

const BACK_LABEL: &str = " ← ";
/// Image frame size on the details screen
const IMAGE_SIZE: (u16, u16) = (28, 8);

pub(crate) fn draw_details(f: &mut Frame, app: &mut App, item: &DramaRecord, theme: &Theme) {
    let header_height = if app.route().header_shown() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Navigator header
            Constraint::Min(1),    // Fields
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    if let Some(back) = draw_nav_header(f, chunks[0], theme) {
        app.hits_mut().back = Some(back);
    }
    draw_fields(f, item, chunks[1], theme);

    let status = format!(
        " Esc: back | t: {} | q: quit",
        aria_label(app.theme_provider().mode())
    );
    draw_status_bar(f, status, chunks[2], theme);
}

/// Header with back button and route title; returns the back button area
fn draw_nav_header(f: &mut Frame, area: Rect, theme: &Theme) -> Option<Rect> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let style = Style::default().fg(theme.header_fg).bg(theme.header_bg);
    let buf = f.buffer_mut();
    buf.set_style(area, style);

    let y = area.y + area.height / 2;
    let width = area.width as usize;
    buf.set_stringn(area.x, y, BACK_LABEL, width, style.add_modifier(Modifier::BOLD));

    let back = Rect {
        x: area.x,
        y,
        width: (BACK_LABEL.width() as u16).min(area.width),
        height: 1,
    };

    let title_x = area.x + back.width + 1;
    if title_x < area.x + area.width {
        let room = (area.x + area.width - title_x) as usize;
        buf.set_stringn(title_x, y, DETAILS, room, style.add_modifier(Modifier::BOLD));
    }

    Some(back)
}

/// Image, heading, then one line per field, centered with a blank line between rows
fn draw_fields(f: &mut Frame, item: &DramaRecord, area: Rect, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let heading = Style::default()
        .fg(theme.heading)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(theme.body).bg(theme.background);

    let lines = [
        (item.title.clone(), heading),
        (format!("Status: {}", item.status), body),
        (format!("Rating: {}", item.rating_text()), body),
        (format!("Release: {}", item.release), body),
        (format!("Views: {}", item.views), body),
    ];

    let (image_w, image_h) = IMAGE_SIZE;
    let image_w = image_w.min(area.width);
    // Drop the image before any text when space is short
    let text_rows = lines.len() as u16 * 2 - 1;
    let show_image = area.height >= text_rows + image_h + 1;
    let total = if show_image { image_h + 1 + text_rows } else { text_rows };

    let mut y = area.y + area.height.saturating_sub(total) / 2;
    let bottom = area.y + area.height;

    if show_image {
        let image_area = Rect {
            x: area.x + (area.width - image_w) / 2,
            y,
            width: image_w,
            height: image_h,
        };
        render_image_frame(item, theme, image_area, f.buffer_mut());
        y += image_h + 1;
    }

    let buf = f.buffer_mut();
    for (text, style) in lines {
        if y >= bottom {
            break;
        }
        let text = truncate(&text, area.width as usize);
        let w = (text.width() as u16).min(area.width);
        let x = area.x + (area.width - w) / 2;
        buf.set_string(x, y, text, style);
        y += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drama::builtin_catalog;
    use crate::ui::theme::{ColorMode, Palette};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_fields(width: u16, height: u16, item: &DramaRecord) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::resolve(&Palette::default(), ColorMode::Light);
        terminal
            .draw(|f| {
                let area = f.area();
                draw_fields(f, item, area, &theme);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fields_with_image() {
        let catalog = builtin_catalog();
        let item = &catalog[1];
        let text = render_fields(60, 24, item);
        assert!(text.contains("When the Phone Rings"));
        assert!(text.contains("Status: Ongoing"));
        assert!(text.contains("Rating: 9.5"));
        assert!(text.contains("Release: 4 jam yang lalu"));
        assert!(text.contains("Views: 1.358.581"));
        assert!(text.contains("i.pinimg.com"));
    }

    #[test]
    fn test_fields_without_room_for_image() {
        let catalog = builtin_catalog();
        let item = &catalog[0];
        let text = render_fields(60, 9, item);
        assert!(text.contains("Views: 4.279.128"));
        assert!(!text.contains("i.pinimg.com"));
    }
}
