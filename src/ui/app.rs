use crate::config::Config;
use crate::provider::{Gif, GiphyClient};
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::events::{AppEvent, EventSender};
use crate::ui::mvi::Reducer;
use crate::ui::search::{
    run_search, RequestSequence, SearchIntent, SearchOutcome, SearchReducer, SearchState,
};
use crate::ui::selectors::cart_contains;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Number of cards per row in the result grid.
pub const GRID_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Results,
    Cart,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Cart,
            Focus::Cart => Focus::Search,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Cart,
            Focus::Results => Focus::Search,
            Focus::Cart => Focus::Results,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application context: owns both state slices and everything needed to
/// start searches. Built once by the runtime and passed to handlers by
/// reference.
pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    /// Search results slice (MVI pattern).
    search: SearchState,
    /// Cart slice (MVI pattern).
    cart: CartState,
    query_input: String,
    result_selection: usize,
    cart_selection: usize,
    tick: u64,
    requests: RequestSequence,
    client: Arc<GiphyClient>,
    runtime: Handle,
    events: EventSender,
    /// Task for the latest search, aborted when a newer one starts.
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: Config, client: Arc<GiphyClient>, runtime: Handle, events: EventSender) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Search,
            config,
            search: SearchState::default(),
            cart: CartState::default(),
            query_input: String::new(),
            result_selection: 0,
            cart_selection: 0,
            tick: 0,
            requests: RequestSequence::new(),
            client,
            runtime,
            events,
            in_flight: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    // -- Query editing --------------------------------------------------------

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query_input.push(ch);
    }

    pub fn pop_query_char(&mut self) {
        self.query_input.pop();
    }

    pub fn clear_query(&mut self) {
        self.query_input.clear();
    }

    // -- Search ---------------------------------------------------------------

    /// Replace the query input and submit it.
    pub fn search_for(&mut self, query: &str) -> Option<u64> {
        self.query_input = query.to_string();
        self.submit_search()
    }

    /// Start a search for the current query input.
    ///
    /// Returns the request id, or `None` when the query is blank. Any search
    /// still in flight is aborted; if its completion was already queued, the
    /// reducer drops it because its id is no longer the latest.
    pub fn submit_search(&mut self) -> Option<u64> {
        let query = self.query_input.trim().to_string();
        if query.is_empty() {
            return None;
        }

        let request_id = self.requests.next_id();
        dispatch_mvi!(
            self,
            search,
            SearchReducer,
            SearchIntent::Started {
                query: query.clone(),
                request_id,
            }
        );

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        debug!(request_id, query = %query, "Dispatching search");
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        let limit = Some(self.config.provider.limit);
        self.in_flight = Some(self.runtime.spawn(async move {
            let outcome = run_search(&client, &query, limit).await;
            let _ = events.send(AppEvent::SearchCompleted {
                request_id,
                outcome,
            });
        }));

        Some(request_id)
    }

    pub fn on_search_completed(&mut self, request_id: u64, outcome: SearchOutcome) {
        if request_id == self.search.latest_request {
            self.in_flight = None;
        } else {
            debug!(request_id, latest = self.search.latest_request, "Dropping stale search result");
        }
        dispatch_mvi!(
            self,
            search,
            SearchReducer,
            SearchIntent::Completed {
                request_id,
                outcome,
            }
        );
        self.result_selection = clamp_selection(self.result_selection, self.search.gifs.len());
    }

    /// Abort the search task, if any. Called when the event loop exits.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }

    // -- Result grid ----------------------------------------------------------

    pub fn result_selection(&self) -> usize {
        self.result_selection
    }

    pub fn selected_gif(&self) -> Option<&Gif> {
        self.search.gifs.get(self.result_selection)
    }

    /// Move the grid selection by `delta` cells, staying within the results.
    pub fn move_result_selection(&mut self, delta: isize) {
        self.result_selection = offset_selection(self.result_selection, delta, self.search.gifs.len());
    }

    pub fn move_result_row(&mut self, rows: isize) {
        self.move_result_selection(rows * GRID_COLUMNS as isize);
    }

    // -- Cart -----------------------------------------------------------------

    pub fn cart_selection(&self) -> usize {
        self.cart_selection
    }

    pub fn move_cart_selection(&mut self, delta: isize) {
        self.cart_selection = offset_selection(self.cart_selection, delta, self.cart.items.len());
    }

    /// Add one unit of `gif` at the configured promotional price.
    pub fn add_to_cart(&mut self, gif: Gif) {
        let price = self.config.shop.promotion_price;
        debug!(
            id = %gif.id,
            existing = cart_contains(&self.cart, &gif.id),
            "Adding to cart"
        );
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Add { gif, price });
    }

    pub fn add_selected_to_cart(&mut self) -> bool {
        let Some(gif) = self.selected_gif().cloned() else {
            return false;
        };
        self.add_to_cart(gif);
        true
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        dispatch_mvi!(
            self,
            cart,
            CartReducer,
            CartIntent::Remove { id: id.to_string() }
        );
        self.cart_selection = clamp_selection(self.cart_selection, self.cart.items.len());
    }

    pub fn remove_selected_from_cart(&mut self) -> bool {
        let Some(id) = self
            .cart
            .items
            .get(self.cart_selection)
            .map(|item| item.gif.id.clone())
        else {
            return false;
        };
        self.remove_from_cart(&id);
        true
    }
}

fn clamp_selection(selection: usize, len: usize) -> usize {
    selection.min(len.saturating_sub(1))
}

fn offset_selection(selection: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = selection.saturating_add_signed(delta);
    moved.min(len - 1)
}
