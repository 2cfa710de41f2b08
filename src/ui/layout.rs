//! Card list layout
//!
//! Provides:
//! - Vertical card stacking with a gap between cards
//! - Scroll offset that keeps the selection visible
//! - Navigation helpers (up/down/page/home/end)
//! - Hit-test records produced by the last draw

use ratatui::layout::Rect;
use std::ops::Range;

/// Lines of text inside a card (title, status, rating, release, views)
pub const CARD_CONTENT_LINES: u16 = 5;
/// Padding around card content, in cells
pub const CARD_PADDING: u16 = 1;
/// Width of the image frame on the left of a card
pub const IMAGE_WIDTH: u16 = 16;
/// Width of the favorite button column on the right of a card
pub const HEART_WIDTH: u16 = 3;

/// Vertical list layout configuration
#[derive(Debug, Clone, Copy)]
pub struct ListLayout {
    /// Height of one card including padding
    pub card_height: u16,
    /// Blank rows between cards
    pub gap: u16,
    /// Horizontal margin on each side of a card
    pub margin: u16,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            card_height: CARD_CONTENT_LINES + CARD_PADDING * 2,
            gap: 1,
            margin: 2,
        }
    }
}

impl ListLayout {
    /// Number of whole cards that fit in `height` rows (at least one)
    pub fn visible_count(&self, height: u16) -> usize {
        let stride = (self.card_height + self.gap) as usize;
        ((height as usize + self.gap as usize) / stride).max(1)
    }

    /// Adjust `offset` so `selected` is inside the visible window
    pub fn scroll_to(&self, selected: usize, offset: usize, visible: usize) -> usize {
        let visible = visible.max(1);
        if selected < offset {
            selected
        } else if selected >= offset + visible {
            selected + 1 - visible
        } else {
            offset
        }
    }

    /// Range of card indices drawn for a given offset
    pub fn visible_range(&self, offset: usize, visible: usize, total: usize) -> Range<usize> {
        let start = offset.min(total);
        let end = (start + visible).min(total);
        start..end
    }

    /// Area of the `slot`-th visible card inside `area`
    pub fn card_area(&self, area: Rect, slot: usize) -> Rect {
        let y = area.y + slot as u16 * (self.card_height + self.gap);
        Rect {
            x: area.x + self.margin,
            y,
            width: area.width.saturating_sub(self.margin * 2),
            height: self.card_height,
        }
    }

    /// Calculate new selection after moving up
    pub fn move_up(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Calculate new selection after moving down
    pub fn move_down(&self, current: usize, total: usize) -> usize {
        if current + 1 < total {
            current + 1
        } else {
            current
        }
    }

    /// Calculate new selection after page up
    pub fn page_up(&self, current: usize, visible: usize) -> usize {
        current.saturating_sub(visible.max(1))
    }

    /// Calculate new selection after page down
    pub fn page_down(&self, current: usize, visible: usize, total: usize) -> usize {
        (current + visible.max(1)).min(total.saturating_sub(1))
    }

    /// Move to last card
    pub fn move_end(&self, total: usize) -> usize {
        total.saturating_sub(1)
    }
}

/// Clickable regions of one drawn card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    /// Index of the card in the list
    pub index: usize,
    pub area: Rect,
    /// Title row; clicking opens details
    pub title_area: Rect,
    /// Favorite button; clicking toggles
    pub heart_area: Rect,
}

impl CardLayout {
    /// Split a card area into its clickable regions
    pub fn compute(index: usize, area: Rect) -> Self {
        let inner_y = area.y + CARD_PADDING;
        let inner_x = area.x + CARD_PADDING;
        let inner_width = area.width.saturating_sub(CARD_PADDING * 2);

        let heart_width = HEART_WIDTH.min(inner_width);
        let heart_area = Rect {
            x: inner_x + inner_width - heart_width,
            y: area.y + area.height / 2,
            width: heart_width,
            height: 1.min(area.height),
        };

        let text_x = (inner_x + IMAGE_WIDTH + 1).min(heart_area.x);
        let title_area = Rect {
            x: text_x,
            y: inner_y,
            width: heart_area.x.saturating_sub(text_x),
            height: 1.min(area.height.saturating_sub(CARD_PADDING)),
        };

        Self {
            index,
            area,
            title_area,
            heart_area,
        }
    }
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Title of the card at this list index
    Title(usize),
    /// Favorite button of the card at this list index
    Heart(usize),
    /// Anywhere else on the card at this list index
    Card(usize),
    /// Dark-mode switch
    ModeSwitch,
    /// Back button in the details header
    Back,
}

/// Clickable regions recorded by the last draw
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub cards: Vec<CardLayout>,
    pub mode_switch: Option<Rect>,
    pub back: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.mode_switch = None;
        self.back = None;
    }

    /// Resolve a click position to a target
    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        if self.back.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::Back);
        }
        if self.mode_switch.is_some_and(|r| contains(r, x, y)) {
            return Some(HitTarget::ModeSwitch);
        }
        self.cards.iter().find_map(|card| {
            if contains(card.heart_area, x, y) {
                Some(HitTarget::Heart(card.index))
            } else if contains(card.title_area, x, y) {
                Some(HitTarget::Title(card.index))
            } else if contains(card.area, x, y) {
                Some(HitTarget::Card(card.index))
            } else {
                None
            }
        })
    }
}

/// Check if a point is within a rect
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count() {
        let layout = ListLayout::default();
        // 7-row cards with a 1-row gap: stride 8
        assert_eq!(layout.visible_count(7), 1);
        assert_eq!(layout.visible_count(15), 2);
        assert_eq!(layout.visible_count(31), 4);
        assert_eq!(layout.visible_count(3), 1);
    }

    #[test]
    fn test_scroll_to() {
        let layout = ListLayout::default();
        assert_eq!(layout.scroll_to(0, 0, 2), 0);
        assert_eq!(layout.scroll_to(2, 0, 2), 1);
        assert_eq!(layout.scroll_to(3, 1, 2), 2);
        assert_eq!(layout.scroll_to(0, 2, 2), 0);
    }

    #[test]
    fn test_visible_range() {
        let layout = ListLayout::default();
        assert_eq!(layout.visible_range(0, 2, 4), 0..2);
        assert_eq!(layout.visible_range(3, 2, 4), 3..4);
        assert_eq!(layout.visible_range(9, 2, 4), 4..4);
    }

    #[test]
    fn test_navigation() {
        let layout = ListLayout::default();
        let total = 4;

        assert_eq!(layout.move_up(2), 1);
        assert_eq!(layout.move_up(0), 0);
        assert_eq!(layout.move_down(2, total), 3);
        assert_eq!(layout.move_down(3, total), 3);
        assert_eq!(layout.page_up(3, 2), 1);
        assert_eq!(layout.page_down(1, 2, total), 3);
        assert_eq!(layout.page_down(3, 2, total), 3);
        assert_eq!(layout.move_end(total), 3);
        assert_eq!(layout.move_end(0), 0);
    }

    #[test]
    fn test_card_layout_regions() {
        let area = Rect::new(2, 3, 60, 7);
        let card = CardLayout::compute(1, area);

        assert_eq!(card.heart_area, Rect::new(58, 6, 3, 1));
        assert_eq!(card.title_area.y, 4);
        assert_eq!(card.title_area.x, 2 + 1 + IMAGE_WIDTH + 1);
        assert!(card.title_area.x + card.title_area.width <= card.heart_area.x);
    }

    #[test]
    fn test_hit_map() {
        let mut map = HitMap::default();
        map.cards.push(CardLayout::compute(0, Rect::new(0, 0, 60, 7)));
        map.cards.push(CardLayout::compute(1, Rect::new(0, 8, 60, 7)));
        map.mode_switch = Some(Rect::new(10, 20, 6, 1));

        let second = &map.cards[1];
        assert_eq!(
            map.hit(second.heart_area.x, second.heart_area.y),
            Some(HitTarget::Heart(1))
        );
        assert_eq!(
            map.hit(second.title_area.x, second.title_area.y),
            Some(HitTarget::Title(1))
        );
        assert_eq!(map.hit(0, 0), Some(HitTarget::Card(0)));
        assert_eq!(map.hit(12, 20), Some(HitTarget::ModeSwitch));
        assert_eq!(map.hit(0, 7), None);

        map.clear();
        assert_eq!(map.hit(0, 0), None);
    }
}
