use thiserror::Error;

use crate::config::Config;
use crate::drama::{self, DramaRecord};
use crate::input::Command;
use crate::ui::layout::{HitMap, HitTarget, ListLayout};
use crate::ui::theme::{ColorMode, ThemeProvider};

/// Route names as registered with the navigator
pub const HOME: &str = "Home";
pub const DETAILS: &str = "Details";

static HOME_ROUTE: Route = Route::Home;

/// A screen plus its parameters. Details owns the record it shows, so a
/// details screen without a payload cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Details { item: DramaRecord },
}

/// Untyped parameters passed with a named navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    pub item: Option<DramaRecord>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    #[error("unknown route {0:?}")]
    UnknownRoute(String),
    #[error("route {0:?} requires an item parameter")]
    MissingParams(&'static str),
    #[error("no drama with id {0:?}")]
    UnknownRecord(String),
}

impl Route {
    /// Resolve a named navigation into a typed route
    pub fn resolve(name: &str, params: RouteParams) -> Result<Self, NavigationError> {
        match name {
            HOME => Ok(Route::Home),
            DETAILS => params
                .item
                .map(|item| Route::Details { item })
                .ok_or(NavigationError::MissingParams(DETAILS)),
            other => Err(NavigationError::UnknownRoute(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => HOME,
            Route::Details { .. } => DETAILS,
        }
    }

    /// Whether the navigator draws a header bar for this route
    pub fn header_shown(&self) -> bool {
        !matches!(self, Route::Home)
    }
}

/// Local state of the list screen
#[derive(Debug, Clone)]
pub struct HomeState {
    favorites: Vec<DramaRecord>,
    /// Index of the keyboard-selected card
    selected: usize,
    /// First card drawn
    offset: usize,
    /// Cards that fit on screen at the last draw
    visible: usize,
}

impl HomeState {
    pub fn new(favorites: Vec<DramaRecord>) -> Self {
        Self {
            favorites,
            selected: 0,
            offset: 0,
            visible: 1,
        }
    }

    pub fn favorites(&self) -> &[DramaRecord] {
        &self.favorites
    }

    /// Flip the favorite flag of the record with `id`; unknown ids are a no-op
    pub fn toggle_favorite(&mut self, id: &str) {
        if drama::find(&self.favorites, id).is_none() {
            tracing::debug!("toggle_favorite: no drama with id {}", id);
        }
        self.favorites = drama::toggled(&self.favorites, id);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&DramaRecord> {
        self.favorites.get(self.selected)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Record how many cards fit and scroll so the selection stays visible
    pub fn set_visible(&mut self, layout: &ListLayout, visible: usize) {
        self.visible = visible.max(1);
        self.offset = layout.scroll_to(self.selected, self.offset, self.visible);
    }

    fn select(&mut self, layout: &ListLayout, index: usize) {
        self.selected = index;
        self.offset = layout.scroll_to(self.selected, self.offset, self.visible);
    }
}

/// Application state
pub struct App {
    /// Navigation stack; never empty, bottom is always Home
    stack: Vec<Route>,
    home: HomeState,
    theme: ThemeProvider,
    layout: ListLayout,
    /// Clickable regions from the last draw
    hits: HitMap,
    config: Config,
    should_quit: bool,
}

impl App {
    pub fn new(favorites: Vec<DramaRecord>, config: Config, mode_override: Option<ColorMode>) -> Self {
        let theme = config.theme_provider(mode_override);
        tracing::info!(
            "Starting with {} dramas in {:?} mode",
            favorites.len(),
            theme.mode()
        );
        Self {
            stack: vec![Route::Home],
            home: HomeState::new(favorites),
            theme,
            layout: ListLayout::default(),
            hits: HitMap::default(),
            config,
            should_quit: false,
        }
    }

    /// Current route
    pub fn route(&self) -> &Route {
        self.stack.last().unwrap_or(&HOME_ROUTE)
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeState {
        &mut self.home
    }

    pub fn theme_provider(&self) -> &ThemeProvider {
        &self.theme
    }

    pub fn list_layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn hits_mut(&mut self) -> &mut HitMap {
        &mut self.hits
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Push a route
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigate to {}", route.name());
        self.stack.push(route);
    }

    /// Navigate by route name with untyped params
    pub fn navigate_named(&mut self, name: &str, params: RouteParams) -> Result<(), NavigationError> {
        let route = Route::resolve(name, params)?;
        self.navigate(route);
        Ok(())
    }

    /// Open the details screen for the record with `id`
    pub fn open_details_by_id(&mut self, id: &str) -> Result<(), NavigationError> {
        let item = drama::find(self.home.favorites(), id)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownRecord(id.to_string()))?;
        self.navigate(Route::Details { item });
        Ok(())
    }

    /// Pop the current route; Home is never popped
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn toggle_color_mode(&mut self) -> ColorMode {
        self.theme.toggle_mode()
    }

    /// Open details for the card at `index`; an empty slot is reported, not fatal
    fn open_details_at(&mut self, index: usize) {
        let params = RouteParams {
            item: self.home.favorites().get(index).cloned(),
        };
        if let Err(e) = self.navigate_named(DETAILS, params) {
            tracing::warn!("Cannot open details: {}", e);
        }
    }

    fn toggle_favorite_at(&mut self, index: usize) {
        if let Some(id) = self.home.favorites().get(index).map(|d| d.id.clone()) {
            self.home.toggle_favorite(&id);
        }
    }

    /// Apply one user command
    pub fn apply(&mut self, command: Command) {
        let layout = self.layout;
        let total = self.home.favorites().len();
        let on_home = matches!(self.route(), Route::Home);

        match command {
            Command::Quit => self.should_quit = true,
            Command::Back => {
                if !self.go_back() {
                    self.should_quit = true;
                }
            }
            Command::Pop => {
                self.go_back();
            }
            Command::ToggleColorMode => {
                self.toggle_color_mode();
            }
            Command::Up if on_home => {
                let next = layout.move_up(self.home.selected);
                self.home.select(&layout, next);
            }
            Command::Down if on_home => {
                let next = layout.move_down(self.home.selected, total);
                self.home.select(&layout, next);
            }
            Command::PageUp if on_home => {
                let next = layout.page_up(self.home.selected, self.home.visible);
                self.home.select(&layout, next);
            }
            Command::PageDown if on_home => {
                let next = layout.page_down(self.home.selected, self.home.visible, total);
                self.home.select(&layout, next);
            }
            Command::First if on_home => self.home.select(&layout, 0),
            Command::Last if on_home => self.home.select(&layout, layout.move_end(total)),
            Command::OpenSelected if on_home => self.open_details_at(self.home.selected),
            Command::ToggleSelected if on_home => self.toggle_favorite_at(self.home.selected),
            Command::Click { x, y } => self.click(x, y),
            _ => {}
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        let Some(target) = self.hits.hit(x, y) else {
            return;
        };
        tracing::debug!("Click at ({}, {}) hit {:?}", x, y, target);

        let layout = self.layout;
        match target {
            HitTarget::Back => {
                self.go_back();
            }
            HitTarget::ModeSwitch => {
                self.toggle_color_mode();
            }
            HitTarget::Title(index) => {
                self.home.select(&layout, index);
                let id = self.home.favorites().get(index).map(|d| d.id.clone());
                if let Some(id) = id {
                    if let Err(e) = self.open_details_by_id(&id) {
                        tracing::warn!("Cannot open details: {}", e);
                    }
                }
            }
            HitTarget::Heart(index) => {
                self.home.select(&layout, index);
                self.toggle_favorite_at(index);
            }
            HitTarget::Card(index) => self.home.select(&layout, index),
        }
    }
}
