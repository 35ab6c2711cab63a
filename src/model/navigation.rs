//! Screen routing with back-stack and tab semantics

use std::collections::HashMap;

/// A navigation destination. Only whole-variant transitions are exposed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Search,
    Library,
    Playlist(String),
}

impl Route {
    pub const TABS: [Route; 3] = [Route::Home, Route::Search, Route::Library];

    /// Home, Search and Library are tab destinations.
    pub fn is_primary(&self) -> bool {
        !matches!(self, Route::Playlist(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::Library => "Library",
            Route::Playlist(_) => "Playlist",
        }
    }
}

/// Per-screen UI state kept across navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub selected: usize,
    pub scroll_offset: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub route: Route,
    pub state: ScreenState,
}

impl NavEntry {
    fn new(route: Route) -> Self {
        Self { route, state: ScreenState::default() }
    }
}

/// Back-stack router. The bottom entry is always the Home start destination.
#[derive(Clone, Debug)]
pub struct Router {
    stack: Vec<NavEntry>,
    saved_tabs: HashMap<Route, ScreenState>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![NavEntry::new(Route::Home)],
            saved_tabs: HashMap::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    pub fn current_entry(&self) -> &NavEntry {
        // The stack never drops below the start destination.
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_state_mut(&mut self) -> &mut ScreenState {
        let last = self.stack.len() - 1;
        &mut self.stack[last].state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[NavEntry] {
        &self.stack
    }

    pub fn is_tab_bar_visible(&self) -> bool {
        self.current().is_primary()
    }

    /// Navigate to a primary destination: pop to the start destination
    /// saving tab state, then make `destination` the single top entry with
    /// its saved state restored. Returns false for non-tab routes.
    pub fn select_tab(&mut self, destination: Route) -> bool {
        if !destination.is_primary() {
            tracing::warn!(route = ?destination, "Ignoring tab selection of a non-tab route");
            return false;
        }
        if *self.current() == destination {
            tracing::trace!(route = ?destination, "Tab already active");
            return true;
        }

        self.pop_to_root();
        if destination != Route::Home {
            let state = self.saved_tabs.get(&destination).copied().unwrap_or_default();
            self.stack.push(NavEntry { route: destination.clone(), state });
        }
        tracing::debug!(route = ?destination, depth = self.depth(), "Tab selected");
        true
    }

    pub fn open_playlist(&mut self, id: &str) {
        self.stack.push(NavEntry::new(Route::Playlist(id.to_string())));
        tracing::debug!(playlist_id = id, depth = self.depth(), "Playlist opened");
    }

    /// Pop one entry. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.stack.pop() {
            self.save_tab_state(&entry);
            tracing::debug!(from = ?entry.route, to = ?self.current(), "Navigated back");
        }
        true
    }

    /// Return straight to Home, keeping Home's own state.
    pub fn go_home(&mut self) {
        self.pop_to_root();
        tracing::debug!("Navigated home");
    }

    fn pop_to_root(&mut self) {
        while self.stack.len() > 1 {
            if let Some(entry) = self.stack.pop() {
                self.save_tab_state(&entry);
            }
        }
    }

    fn save_tab_state(&mut self, entry: &NavEntry) {
        if entry.route.is_primary() {
            self.saved_tabs.insert(entry.route.clone(), entry.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(router: &Router) -> Vec<Route> {
        router.entries().iter().map(|e| e.route.clone()).collect()
    }

    #[test]
    fn starts_at_home_with_tab_bar() {
        let router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.depth(), 1);
        assert!(router.is_tab_bar_visible());
    }

    #[test]
    fn reselecting_active_tab_does_not_stack() {
        let mut router = Router::new();
        router.select_tab(Route::Search);
        router.select_tab(Route::Search);
        router.select_tab(Route::Search);
        assert_eq!(routes(&router), [Route::Home, Route::Search]);

        router.select_tab(Route::Home);
        router.select_tab(Route::Home);
        assert_eq!(routes(&router), [Route::Home]);
    }

    #[test]
    fn switching_tabs_collapses_history() {
        let mut router = Router::new();
        router.select_tab(Route::Search);
        router.select_tab(Route::Library);
        assert_eq!(routes(&router), [Route::Home, Route::Library]);
        assert!(router.is_tab_bar_visible());

        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn tab_state_is_restored() {
        let mut router = Router::new();
        router.select_tab(Route::Search);
        router.current_state_mut().selected = 3;

        router.select_tab(Route::Library);
        assert_eq!(router.current_entry().state, ScreenState::default());

        router.select_tab(Route::Search);
        assert_eq!(router.current_entry().state.selected, 3);
    }

    #[test]
    fn playlist_hides_tab_bar_and_back_restores_it() {
        let mut router = Router::new();
        router.open_playlist("rapcaviar");
        assert_eq!(router.current(), &Route::Playlist("rapcaviar".to_string()));
        assert!(!router.is_tab_bar_visible());

        assert!(router.back());
        assert!(router.is_tab_bar_visible());
    }

    #[test]
    fn go_home_from_playlist_keeps_home_state() {
        let mut router = Router::new();
        router.current_state_mut().selected = 2;
        router.open_playlist("viva_latino");
        router.open_playlist("rapcaviar");

        router.go_home();
        assert_eq!(routes(&router), [Route::Home]);
        assert_eq!(router.current_entry().state.selected, 2);
        assert!(router.is_tab_bar_visible());
    }

    #[test]
    fn playlist_is_not_a_tab_target() {
        let mut router = Router::new();
        assert!(!router.select_tab(Route::Playlist("deja_vu_playlist".to_string())));
        assert_eq!(routes(&router), [Route::Home]);
    }
}
