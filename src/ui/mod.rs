//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Per-route draw functions
//! - `theme.rs` - Palette, color mode and role colors
//! - `layout.rs` - Card list layout and hit testing
//! - `drama_card.rs` - Drama card widget
//! - `mode_switch.rs` - Dark-mode switch control

mod draw;
pub mod drama_card;
pub mod layout;
pub mod mode_switch;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
