use std::collections::HashMap;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::catalog::model::filter_for;
use crate::catalog::{
    CategoryFilter, FetchCommand, FetchOutcome, FetchSender, FetchTicket, Product, Resource,
    TicketCounter,
};
use crate::config::DisplayConfig;
use crate::images::ImageSlot;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::detail::{detail_layout, DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::grid::{GridLayout, ProductAdapter, RowAction};
use crate::ui::layout::{body_sections, contains, layout_regions};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notices;
use crate::ui::picker::{picker_hit, picker_rect};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    columns: u16,
    images_enabled: bool,
    /// Category list, listing and cursor (MVI pattern).
    catalog: CatalogState,
    /// Detail overlay (MVI pattern).
    detail: DetailDialogState,
    /// Highlighted picker row while the category picker is open.
    picker: Option<usize>,
    /// Pictures for the displayed list, keyed by URL.
    images: HashMap<String, ImageSlot>,
    notices: Notices,
    tickets: TicketCounter,
    fetch_sender: Option<FetchSender>,
    animation_tick: u8,
}

impl App {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            columns: display.columns.max(1),
            images_enabled: display.images,
            catalog: CatalogState::default(),
            detail: DetailDialogState::default(),
            picker: None,
            images: HashMap::new(),
            notices: Notices::default(),
            tickets: TicketCounter::default(),
            fetch_sender: None,
            animation_tick: 0,
        }
    }

    pub fn set_fetch_sender(&mut self, sender: FetchSender) {
        self.fetch_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn picker_highlight(&self) -> Option<usize> {
        self.picker
    }

    pub fn picker_is_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Slot for `url`, or `None` when pictures are disabled.
    pub fn image_slot(&self, url: &str) -> Option<&ImageSlot> {
        if !self.images_enabled {
            return None;
        }
        self.images.get(url)
    }

    /// First load: categories, then all products once they arrive.
    pub fn start(&mut self) {
        self.load_categories();
    }

    // ========================================================================
    // Listing requests
    // ========================================================================

    pub fn load_categories(&mut self) {
        let ticket = self.tickets.issue();
        dispatch_mvi!(
            self,
            catalog,
            CatalogReducer,
            CatalogIntent::CategoriesRequested { ticket }
        );
        self.send_listing(ticket, FetchCommand::Categories { ticket }, Resource::Categories);
    }

    pub fn load_products(&mut self, filter: CategoryFilter) {
        let ticket = self.tickets.issue();
        dispatch_mvi!(
            self,
            catalog,
            CatalogReducer,
            CatalogIntent::ProductsRequested { ticket }
        );
        tracing::debug!(ticket = ticket.0, filter = filter.label(), "Loading products");
        self.send_listing(
            ticket,
            FetchCommand::Products { ticket, filter },
            Resource::Products,
        );
    }

    /// Picker changed to `index`. Re-selecting the current entry fetches again.
    pub fn select_category(&mut self, index: usize) -> bool {
        if index >= self.catalog.categories.len() {
            return false;
        }
        let Some(filter) = filter_for(&self.catalog.categories, index) else {
            return false;
        };
        dispatch_mvi!(
            self,
            catalog,
            CatalogReducer,
            CatalogIntent::CategorySelected { index }
        );
        self.load_products(filter);
        true
    }

    /// Moves the category selection by `delta`, wrapping at both ends.
    pub fn cycle_category(&mut self, delta: isize) {
        let len = self.catalog.categories.len();
        if len == 0 {
            return;
        }
        let next = (self.catalog.selected as isize + delta).rem_euclid(len as isize) as usize;
        self.select_category(next);
    }

    /// Fetches the current selection again, or the categories when none loaded.
    pub fn reload(&mut self) {
        if self.catalog.categories.is_empty() {
            self.load_categories();
        } else {
            self.select_category(self.catalog.selected);
        }
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Categories { ticket, result } => {
                if self.catalog.pending_categories != Some(ticket) {
                    tracing::debug!(ticket = ticket.0, "Dropping stale categories response");
                    return;
                }
                match result {
                    Ok(categories) => {
                        tracing::info!(count = categories.len(), "Categories loaded");
                        dispatch_mvi!(
                            self,
                            catalog,
                            CatalogReducer,
                            CatalogIntent::CategoriesLoaded { ticket, categories }
                        );
                        self.load_products(CategoryFilter::All);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Category request failed");
                        self.fail(ticket, err.user_message(Resource::Categories));
                    }
                }
            }
            FetchOutcome::Products {
                ticket,
                filter,
                result,
            } => {
                if self.catalog.pending_products != Some(ticket) {
                    tracing::debug!(
                        ticket = ticket.0,
                        filter = filter.label(),
                        "Dropping stale products response"
                    );
                    return;
                }
                match result {
                    Ok(products) => {
                        tracing::info!(
                            count = products.len(),
                            filter = filter.label(),
                            "Products loaded"
                        );
                        self.replace_images(&products);
                        dispatch_mvi!(
                            self,
                            catalog,
                            CatalogReducer,
                            CatalogIntent::ProductsLoaded { ticket, products }
                        );
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, filter = filter.label(), "Product request failed");
                        self.fail(ticket, err.user_message(Resource::Products));
                    }
                }
            }
            FetchOutcome::Image { url, result } => {
                // Pictures of a replaced list have no slot left.
                let Some(slot) = self.images.get_mut(&url) else {
                    return;
                };
                *slot = match result {
                    Ok(thumbnail) => ImageSlot::Ready(thumbnail),
                    Err(err) => {
                        tracing::debug!(url = %url, error = %err, "Image load failed");
                        ImageSlot::Failed
                    }
                };
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        dispatch_mvi!(self, catalog, CatalogReducer, CatalogIntent::DismissError);
    }

    // ========================================================================
    // Grid
    // ========================================================================

    pub fn move_cursor(&mut self, delta: isize) {
        dispatch_mvi!(
            self,
            catalog,
            CatalogReducer,
            CatalogIntent::MoveCursor { delta }
        );
    }

    pub fn move_cursor_row(&mut self, rows: isize) {
        self.move_cursor(rows * self.columns as isize);
    }

    /// Row select callback: opens the detail overlay.
    pub fn on_select(&mut self, product: Product) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open { product });
    }

    /// Row add callback.
    pub fn on_add(&mut self, product: &Product) {
        self.notices.post_info(format!("{} added to cart!", product.title));
    }

    pub fn select_highlighted(&mut self) {
        if let Some(product) = self.catalog.selected_product().cloned() {
            self.on_select(product);
        }
    }

    pub fn add_highlighted(&mut self) {
        if let Some(product) = self.catalog.selected_product().cloned() {
            self.on_add(&product);
        }
    }

    // ========================================================================
    // Detail overlay
    // ========================================================================

    pub fn close_detail(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
    }

    /// Add control inside the overlay: notice first, then dismiss.
    pub fn add_from_detail(&mut self) {
        let Some(product) = self.detail.product().cloned() else {
            return;
        };
        self.on_add(&product);
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::AddToCart);
    }

    // ========================================================================
    // Category picker
    // ========================================================================

    pub fn open_picker(&mut self) {
        if self.catalog.categories.is_empty() {
            self.notices.post_info("Categories are not loaded yet");
            return;
        }
        self.picker = Some(self.catalog.selected);
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    pub fn move_picker(&mut self, delta: isize) {
        let len = self.catalog.categories.len();
        if let Some(current) = self.picker.as_mut() {
            if len == 0 {
                return;
            }
            *current = (*current as isize + delta).rem_euclid(len as isize) as usize;
        }
    }

    pub fn confirm_picker(&mut self) {
        if let Some(index) = self.picker.take() {
            self.select_category(index);
        }
    }

    /// Picks the entry shown with `digit` (1-based).
    pub fn pick_digit(&mut self, digit: usize) {
        if digit == 0 || digit > self.catalog.categories.len() {
            return;
        }
        self.picker = None;
        self.select_category(digit - 1);
    }

    // ========================================================================
    // Frame events
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.notices.on_tick();
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        let (column, row) = (mouse.column, mouse.row);

        if let Some(product) = self.detail.product() {
            let layout = detail_layout(body, product);
            if contains(layout.close, column, row) || !contains(layout.outer, column, row) {
                self.close_detail();
            } else if contains(layout.add, column, row) {
                self.add_from_detail();
            }
            return;
        }

        if self.picker.is_some() {
            let area = picker_rect(body, &self.catalog.categories);
            match picker_hit(area, &self.catalog.categories, column, row) {
                Some(index) => {
                    self.picker = None;
                    self.select_category(index);
                }
                None if !contains(area, column, row) => self.close_picker(),
                None => {}
            }
            return;
        }

        let (_, grid) = body_sections(body);
        let products = self.catalog.products();
        let layout = GridLayout::compute(grid, self.columns, products.len(), self.catalog.cursor);
        let Some(hit) = layout.hit(column, row) else {
            return;
        };
        let action = ProductAdapter::new(products).route(hit);
        let delta = hit.index as isize - self.catalog.cursor as isize;
        self.move_cursor(delta);
        match action {
            Some(RowAction::Select(product)) => self.on_select(product),
            Some(RowAction::Add(product)) => self.on_add(&product),
            None => {}
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Discards pictures of the previous list and requests the new ones.
    fn replace_images(&mut self, products: &[Product]) {
        self.images.clear();
        if !self.images_enabled {
            return;
        }
        for product in products {
            if product.image.is_empty() || self.images.contains_key(&product.image) {
                continue;
            }
            let slot = if self.send(FetchCommand::Image {
                url: product.image.clone(),
            }) {
                ImageSlot::Pending
            } else {
                ImageSlot::Failed
            };
            self.images.insert(product.image.clone(), slot);
        }
    }

    fn send_listing(&mut self, ticket: FetchTicket, command: FetchCommand, resource: Resource) {
        if self.send(command) {
            return;
        }
        let message = match resource {
            Resource::Categories => "Failed to load categories",
            Resource::Products => "Failed to load products",
        };
        self.fail(ticket, message.to_string());
    }

    fn fail(&mut self, ticket: FetchTicket, message: String) {
        self.notices.post_error(message.clone());
        dispatch_mvi!(
            self,
            catalog,
            CatalogReducer,
            CatalogIntent::RequestFailed { ticket, message }
        );
    }

    fn send(&self, command: FetchCommand) -> bool {
        let Some(sender) = &self.fetch_sender else {
            tracing::warn!("No fetch worker attached");
            return false;
        };
        match sender.send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Fetch command send failed");
                false
            }
        }
    }
}
