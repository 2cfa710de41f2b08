//! Home route drawing functions
//!
//! This module handles rendering the list screen:
//! - Header bar (menu glyph, heading, search glyph)
//! - Scrollable card list
//! - Dark-mode switch
//! - Status bar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::draw_status_bar;
use crate::app::App;
use crate::ui::drama_card::{truncate, DramaCard};
use crate::ui::layout::CardLayout;
use crate::ui::mode_switch::{aria_label, render_mode_switch};
use crate::ui::theme::Theme;

const HEADING: &str = "Drakor Favorit";
const MENU_GLYPH: &str = "☰";
const SEARCH_GLYPH: &str = "⌕";
/// Horizontal padding inside the header bar
const HEADER_PADDING: u16 = 2;

pub(crate) fn draw_home(f: &mut Frame, app: &mut App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Card list
            Constraint::Length(3), // Dark-mode switch
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_header(f.buffer_mut(), chunks[0], theme);
    draw_card_list(f, app, chunks[1], theme);

    let mode = app.theme_provider().mode();
    let switch = render_mode_switch(f, chunks[2], mode, theme);
    if switch.full_area.width > 0 {
        app.hits_mut().mode_switch = Some(switch.full_area);
    }

    let home = app.home();
    let status = format!(
        " {}/{} | j/k: nav | Enter: open | Space: ♥ | t: {} | q: quit",
        home.selected_index() + 1,
        home.favorites().len(),
        aria_label(mode)
    );
    draw_status_bar(f, status, chunks[3], theme);
}

/// Header bar: menu glyph left, heading centered, search glyph right
fn draw_header(buf: &mut Buffer, area: Rect, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = Style::default().fg(theme.header_fg).bg(theme.header_bg);
    buf.set_style(area, style);

    let y = area.y + area.height / 2;
    let right = area.x + area.width;

    put(buf, area.x + HEADER_PADDING, y, right, MENU_GLYPH, style);

    let heading_width = (HEADING.width() as u16).min(area.width);
    let heading_x = area.x + (area.width - heading_width) / 2;
    put(buf, heading_x, y, right, HEADING, style.add_modifier(Modifier::BOLD));

    let search_x = right
        .saturating_sub(HEADER_PADDING + SEARCH_GLYPH.width() as u16)
        .max(area.x);
    put(buf, search_x, y, right, SEARCH_GLYPH, style);
}

/// Write `text` at (x, y), clipped at column `right`
fn put(buf: &mut Buffer, x: u16, y: u16, right: u16, text: &str, style: Style) {
    if x >= right {
        return;
    }
    buf.set_stringn(x, y, text, (right - x) as usize, style);
}

/// Draw the cards that fit, starting at the scroll offset
fn draw_card_list(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = *app.list_layout();
    let visible = layout.visible_count(area.height);
    app.home_mut().set_visible(&layout, visible);

    let marker = app.config().appearance.selected_marker.clone();
    let home = app.home();
    let total = home.favorites().len();
    let range = layout.visible_range(home.offset(), visible, total);
    let bottom = area.y + area.height;

    let mut drawn = Vec::new();
    for (slot, index) in range.clone().enumerate() {
        let card_area = layout.card_area(area, slot);
        if card_area.y + card_area.height > bottom || card_area.width == 0 {
            continue;
        }

        let item = &home.favorites()[index];
        let card = DramaCard::new(item, theme)
            .selected(index == home.selected_index())
            .marker(&marker);
        f.render_widget(card, card_area);
        drawn.push(CardLayout::compute(index, card_area));
    }

    if total > range.len() && area.width > 0 {
        let mut state = ScrollbarState::new(total.saturating_sub(visible) + 1).position(home.offset());
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(theme.neutral));
        f.render_stateful_widget(scrollbar, area, &mut state);
    }

    if drawn.is_empty() && total > 0 {
        // Not even one card fits; show the selected title so the screen is not blank
        if let Some(item) = home.selected_item() {
            let style = Style::default().fg(theme.title).bg(theme.background);
            let text = truncate(&item.title, area.width as usize);
            f.buffer_mut().set_string(area.x, area.y, text, style);
        }
    }

    app.hits_mut().cards = drawn;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        let theme = Theme::resolve(&Default::default(), Default::default());
        draw_header(&mut buf, area, &theme);

        assert_eq!(buf[(2, 1)].symbol(), MENU_GLYPH);
        assert_eq!(buf[(37, 1)].symbol(), SEARCH_GLYPH);
        let row: String = (0..40).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(HEADING));
        assert_eq!(buf[(0, 0)].bg, theme.header_bg);
    }

    #[test]
    fn test_header_narrow() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::resolve(&Default::default(), Default::default());
        draw_header(&mut buf, area, &theme);
    }
}
