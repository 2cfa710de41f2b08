//! Drama card widget
//!
//! Renders each record as a card with:
//! - Image frame (alt text + image host)
//! - Title (bold), status, rating, release, views
//! - Favorite heart, filled/accent or outlined/neutral

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::layout::{CardLayout, CARD_PADDING, IMAGE_WIDTH};
use super::theme::Theme;
use crate::drama::DramaRecord;

pub const HEART_FILLED: &str = "♥";
pub const HEART_OUTLINED: &str = "♡";

/// Heart glyph for a favorite flag
pub fn heart_glyph(is_favorite: bool) -> &'static str {
    if is_favorite {
        HEART_FILLED
    } else {
        HEART_OUTLINED
    }
}

/// Drama card widget
pub struct DramaCard<'a> {
    item: &'a DramaRecord,
    theme: &'a Theme,
    selected: bool,
    marker: &'a str,
}

impl<'a> DramaCard<'a> {
    pub fn new(item: &'a DramaRecord, theme: &'a Theme) -> Self {
        Self {
            item,
            theme,
            selected: false,
            marker: "",
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Prefix drawn before the title when selected
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.marker = marker;
        self
    }
}

impl<'a> Widget for DramaCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = self.theme.card_bg;
        buf.set_style(area, Style::default().bg(bg));

        let regions = CardLayout::compute(0, area);
        let inner_x = area.x + CARD_PADDING;
        let inner_y = area.y + CARD_PADDING;
        let max_y = area.y + area.height;

        // Image frame
        let image_area = Rect {
            x: inner_x,
            y: inner_y,
            width: IMAGE_WIDTH.min(regions.title_area.x.saturating_sub(inner_x)),
            height: area.height.saturating_sub(CARD_PADDING * 2),
        };
        render_image_frame(self.item, self.theme, image_area, buf);

        // Text column
        let text_x = regions.title_area.x;
        let text_width = regions.title_area.width as usize;
        if text_width > 0 && inner_y < max_y {
            let mut y = inner_y;

            let title_style = Style::default()
                .fg(self.theme.title)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            let title = if self.selected {
                format!("{}{}", self.marker, self.item.title)
            } else {
                self.item.title.clone()
            };
            let title_style = if self.selected {
                title_style.add_modifier(Modifier::UNDERLINED)
            } else {
                title_style
            };
            buf.set_string(text_x, y, truncate(&title, text_width), title_style);
            y += 1;

            let secondary = Style::default().fg(self.theme.secondary).bg(bg);
            let accent = Style::default().fg(self.theme.accent).bg(bg);
            let rows = [
                (self.item.status.label().to_string(), secondary),
                (format!("Rating: {}", self.item.rating_text()), accent),
                (self.item.release.clone(), secondary),
                (format!("{} views", self.item.views), accent),
            ];
            for (text, style) in rows {
                if y >= max_y {
                    break;
                }
                buf.set_string(text_x, y, truncate(&text, text_width), style);
                y += 1;
            }
        }

        // Favorite heart
        let heart = regions.heart_area;
        if heart.width > 0 && heart.y < max_y {
            let color = if self.item.is_favorite {
                self.theme.accent
            } else {
                self.theme.neutral
            };
            let style = Style::default()
                .fg(color)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            buf.set_string(heart.x + heart.width / 2, heart.y, heart_glyph(self.item.is_favorite), style);
        }
    }
}

/// Stand-in for the remote image: a framed box with the alt text and host.
/// Loading the URI itself is out of scope.
pub fn render_image_frame(item: &DramaRecord, theme: &Theme, area: Rect, buf: &mut Buffer) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.neutral));
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width as usize;
    let alt = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::ITALIC);
    let host = Style::default().fg(theme.neutral);

    let mut y = inner.y;
    let max_y = inner.y + inner.height;
    for line in wrap(&item.title, width) {
        // Keep the last inner row for the host
        if y >= max_y || (inner.height > 1 && y + 1 >= max_y) {
            break;
        }
        buf.set_string(inner.x, y, line, alt);
        y += 1;
    }
    if inner.height > 1 {
        buf.set_string(inner.x, max_y - 1, truncate(item.image_host(), width), host);
    }
}

/// Greedy word wrap to `width` columns; overlong words are truncated
fn wrap(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if candidate.width() <= width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = truncate(word, width);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".repeat(max_width)
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}
