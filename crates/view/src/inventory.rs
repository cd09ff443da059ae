//! The inventory view: working set, filtering, ordering, and the
//! mutation coordinator.

use std::sync::Arc;

use stockmgr_client::ProductApi;
use stockmgr_core::{
    FilterCriteria, Product, ProductId, SortDirection, SortKey, StatusFilter, order,
};

use crate::stock_out::StockOutSession;

/// Parse a drafted quantity: whole number, strictly positive.
fn parse_quantity(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|q| *q > 0)
}

/// State machine behind the products screen.
///
/// The working set is a snapshot from the last successful list call and is
/// never patched in place: every successful mutation triggers a full
/// reload, so the view cannot diverge from server truth. While any
/// network-touching operation is outstanding the busy flag makes every
/// other operation a no-op; that guard also serializes refreshes, so a
/// stale response can never overwrite a newer one.
pub struct InventoryView {
    api: Arc<dyn ProductApi>,

    filter: FilterCriteria,
    items: Vec<Product>,

    sort_by: SortKey,
    sort_direction: SortDirection,

    stock_out: StockOutSession,

    // Create-form drafts, kept as entered text until validated.
    draft_description: String,
    draft_quantity: String,

    busy: bool,
    message: Option<String>,
}

impl InventoryView {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            filter: FilterCriteria::default(),
            items: Vec::new(),
            sort_by: SortKey::default(),
            sort_direction: SortDirection::default(),
            stock_out: StockOutSession::Closed,
            draft_description: String::new(),
            draft_quantity: String::new(),
            busy: false,
            message: None,
        }
    }

    // ── Read accessors ─────────────────────────────────────────

    /// The raw working set, in server order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The working set under the current sort settings.
    pub fn ordered_items(&self) -> Vec<Product> {
        order(&self.items, self.sort_by, self.sort_direction)
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn stock_out(&self) -> &StockOutSession {
        &self.stock_out
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    pub fn draft_quantity(&self) -> &str {
        &self.draft_quantity
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Current user-visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // ── Query engine ───────────────────────────────────────────

    /// Edit the free-text query. Takes effect on the next refresh.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
    }

    /// Change the status filter and reload immediately.
    pub async fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.refresh().await;
    }

    /// Reload the working set with the current filter criteria.
    ///
    /// On failure the previous working set is left untouched and the
    /// server message is surfaced.
    pub async fn refresh(&mut self) {
        if self.busy {
            return;
        }
        self.message = None;
        self.busy = true;
        self.reload().await;
        self.busy = false;
    }

    /// The fetch itself, shared by refresh and the mutation success paths.
    /// Callers own the busy flag.
    async fn reload(&mut self) {
        match self.api.list(&self.filter.query, self.filter.status).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), status = %self.filter.status, "working set replaced");
                self.items = items;

                // The target may have been deleted behind our back; a
                // session on a deleted product must not survive.
                if let Some(id) = self.stock_out.target() {
                    if self.items.iter().any(|p| p.id == id && p.deleted) {
                        self.stock_out.close();
                    }
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    // ── Ordering settings ──────────────────────────────────────

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
    }

    // ── Create form ────────────────────────────────────────────

    pub fn set_draft_description(&mut self, text: impl Into<String>) {
        self.draft_description = text.into();
    }

    pub fn set_draft_quantity(&mut self, text: impl Into<String>) {
        self.draft_quantity = text.into();
    }

    /// Create a product from the drafted description and quantity.
    pub async fn create(&mut self) {
        if self.busy {
            return;
        }
        self.message = None;

        let description = self.draft_description.trim().to_string();
        if description.is_empty() {
            self.message = Some("description is required".to_string());
            return;
        }
        let Some(quantity) = parse_quantity(&self.draft_quantity) else {
            self.message = Some("quantity must be a whole number greater than 0".to_string());
            return;
        };

        self.busy = true;
        match self.api.create(&description, quantity).await {
            Ok(_) => {
                self.draft_description.clear();
                self.draft_quantity.clear();
                self.reload().await;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.busy = false;
    }

    // ── Soft delete / restore ──────────────────────────────────

    pub async fn soft_delete(&mut self, id: ProductId) {
        if self.busy {
            return;
        }
        self.message = None;
        self.busy = true;
        match self.api.soft_delete(id).await {
            Ok(()) => {
                // An open edit session on the deleted product must close
                // whether or not the reload below succeeds.
                if self.stock_out.is_open_for(id) {
                    self.stock_out.close();
                }
                self.reload().await;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.busy = false;
    }

    pub async fn restore(&mut self, id: ProductId) {
        if self.busy {
            return;
        }
        self.message = None;
        self.busy = true;
        match self.api.restore(id).await {
            Ok(()) => self.reload().await,
            Err(err) => self.message = Some(err.to_string()),
        }
        self.busy = false;
    }

    // ── Stock-out session ──────────────────────────────────────

    /// Begin inline stock-out editing for an active, loaded product.
    ///
    /// Ignored while another product's session is open: the only legal
    /// path to a new session runs through `Closed` (cancel first).
    pub fn open_stock_out(&mut self, id: ProductId) {
        if self.busy {
            return;
        }
        if self.stock_out.is_open() && !self.stock_out.is_open_for(id) {
            return;
        }
        let Some(product) = self.items.iter().find(|p| p.id == id) else {
            return;
        };
        if product.deleted {
            return;
        }
        self.message = None;
        self.stock_out = StockOutSession::open(id);
    }

    pub fn edit_stock_out_draft(&mut self, text: impl Into<String>) {
        self.stock_out.edit_draft(text);
    }

    pub fn cancel_stock_out(&mut self) {
        self.stock_out.close();
    }

    /// Validate the drafted quantity against the last-loaded snapshot and
    /// send the stock-out. The server stays authoritative: it may still
    /// reject (e.g. concurrent modification), which surfaces like any
    /// other failure with the session left open.
    pub async fn confirm_stock_out(&mut self) {
        if self.busy {
            return;
        }
        self.message = None;

        let Some(id) = self.stock_out.target() else {
            return;
        };
        let draft = self.stock_out.draft().unwrap_or_default().to_string();

        let Some(quantity) = parse_quantity(&draft) else {
            self.message = Some("stock-out quantity must be greater than 0".to_string());
            return;
        };
        let Some(snapshot) = self.items.iter().find(|p| p.id == id) else {
            // Target vanished from the working set; nothing to confirm.
            self.stock_out.close();
            return;
        };
        if quantity > snapshot.quantity {
            self.message = Some("stock-out quantity exceeds current stock".to_string());
            return;
        }

        self.busy = true;
        match self.api.stock_out(id, quantity).await {
            Ok(()) => {
                self.stock_out.close();
                self.reload().await;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.busy = false;
    }

    // ── Stock-in ───────────────────────────────────────────────

    /// Increase stock on a product. No inline session: callers pass the
    /// quantity directly.
    pub async fn stock_in(&mut self, id: ProductId, quantity: i64) {
        if self.busy {
            return;
        }
        self.message = None;
        if quantity <= 0 {
            self.message = Some("stock-in quantity must be greater than 0".to_string());
            return;
        }
        self.busy = true;
        match self.api.stock_in(id, quantity).await {
            Ok(()) => self.reload().await,
            Err(err) => self.message = Some(err.to_string()),
        }
        self.busy = false;
    }
}
