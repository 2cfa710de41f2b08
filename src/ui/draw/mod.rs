//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by route:
//! - `home` - Header, card list, dark-mode switch, status
//! - `details` - Navigator header and the read-only record view

mod details;
mod home;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Route};
use crate::ui::theme::Theme;

use details::draw_details;
use home::draw_home;

/// Main draw function. Also records clickable regions on `app`.
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme_provider().theme();
    app.hits_mut().clear();

    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, f.area());

    let route = app.route().clone();
    match route {
        Route::Home => draw_home(f, app, &theme),
        Route::Details { ref item } => draw_details(f, app, item, &theme),
    }
}

/// One-line hint bar at the bottom of a screen
fn draw_status_bar(f: &mut Frame, text: String, area: Rect, theme: &Theme) {
    let status_bar =
        Paragraph::new(text).style(Style::default().fg(theme.neutral).bg(theme.background));
    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::drama::builtin_catalog;
    use crate::input::Command;
    use crate::ui::drama_card::{HEART_FILLED, HEART_OUTLINED};
    use crate::ui::theme::ColorMode;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App {
        App::new(builtin_catalog(), Config::default(), None)
    }

    #[test]
    fn test_home_renders_four_cards_in_order() {
        let mut app = new_app();
        let buf = render(&mut app, 80, 48);
        let text = screen_text(&buf);

        let titles = [
            "Jeongnyeon: The Star is Born",
            "When the Phone Rings",
            "Family by Choice",
            "Brewing Love",
        ];
        let positions: Vec<usize> = titles
            .iter()
            .map(|t| text.find(t).unwrap_or_else(|| panic!("{} not drawn", t)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let mut app = new_app();
        render(&mut app, 80, 48);
        assert_eq!(app.hits_mut().cards.len(), 4);
        assert!(text.contains("Drakor Favorit"));
        assert!(text.contains("Dark (●  ) Light"));
    }

    #[test]
    fn test_heart_click_flips_glyph() {
        let mut app = new_app();
        render(&mut app, 80, 48);

        let heart = app.hits_mut().cards[0].heart_area;
        let pos = (heart.x + heart.width / 2, heart.y);

        app.apply(Command::Click { x: heart.x, y: heart.y });
        let buf = render(&mut app, 80, 48);
        assert_eq!(buf[pos].symbol(), HEART_OUTLINED);
        let theme = app.theme_provider().theme();
        assert_eq!(buf[pos].fg, theme.neutral);

        app.apply(Command::Click { x: heart.x, y: heart.y });
        let buf = render(&mut app, 80, 48);
        assert_eq!(buf[pos].symbol(), HEART_FILLED);
        assert_eq!(buf[pos].fg, theme.accent);
    }

    #[test]
    fn test_title_click_opens_details() {
        let mut app = new_app();
        render(&mut app, 80, 48);

        let title = app.hits_mut().cards[3].title_area;
        app.apply(Command::Click { x: title.x, y: title.y });

        let text = screen_text(&render(&mut app, 80, 30));
        assert!(text.contains("Details"));
        assert!(text.contains("Brewing Love"));
        assert!(text.contains("Rating: 9"));
        assert!(text.contains("Status: Ongoing"));
        assert!(text.contains("Release: 2 jam yang lalu"));
        assert!(text.contains("Views: 1.312.112"));
    }

    #[test]
    fn test_details_back_button() {
        let mut app = new_app();
        app.open_details_by_id("1").unwrap();
        render(&mut app, 80, 30);

        let back = app.hits_mut().back.expect("back button drawn");
        app.apply(Command::Click { x: back.x, y: back.y });
        assert_eq!(app.route(), &Route::Home);
    }

    #[test]
    fn test_switch_click_changes_background() {
        let mut app = new_app();
        let dark_bg = app.theme_provider().theme().background;
        render(&mut app, 80, 48);

        let switch = app.hits_mut().mode_switch.expect("switch drawn");
        app.apply(Command::Click { x: switch.x, y: switch.y });
        assert_eq!(app.theme_provider().mode(), ColorMode::Light);

        let buf = render(&mut app, 80, 48);
        let light_bg = app.theme_provider().theme().background;
        assert_ne!(dark_bg, light_bg);
        let last = buf.area.height - 1;
        assert_eq!(buf[(buf.area.width - 1, last)].bg, light_bg);
        assert!(screen_text(&buf).contains("switch to dark mode"));
    }

    #[test]
    fn test_switch_labels_and_track_are_clickable() {
        let mut app = new_app();
        render(&mut app, 80, 48);
        let switch = app.hits_mut().mode_switch.expect("switch drawn");

        // "Light" label, then the middle of the track
        let clicks = [switch.x + switch.width - 1, switch.x + switch.width / 2];
        for (n, x) in clicks.into_iter().enumerate() {
            app.apply(Command::Click { x, y: switch.y });
            let expected = if n % 2 == 0 { ColorMode::Light } else { ColorMode::Dark };
            assert_eq!(app.theme_provider().mode(), expected);
            render(&mut app, 80, 48);
        }
    }

    #[test]
    fn test_short_terminal_scrolls_to_selection() {
        let mut app = new_app();
        render(&mut app, 80, 20);
        app.apply(Command::Last);

        let text = screen_text(&render(&mut app, 80, 20));
        assert!(text.contains("Brewing Love"));
        assert!(!text.contains("Jeongnyeon: The Star is Born"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for (w, h) in [(1, 1), (10, 3), (20, 8), (30, 12)] {
            let mut app = new_app();
            render(&mut app, w, h);
            app.open_details_by_id("2").unwrap();
            render(&mut app, w, h);
        }
    }
}
