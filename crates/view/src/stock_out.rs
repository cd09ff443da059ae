//! Inline "enter quantity to remove" edit session.

use stockmgr_core::ProductId;

/// At most one product is ever in stock-out edit mode; the tagged variant
/// makes that structurally impossible to violate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StockOutSession {
    #[default]
    Closed,
    Open { product_id: ProductId, draft: String },
}

impl StockOutSession {
    /// Begin editing for `product_id` with an empty draft.
    pub fn open(product_id: ProductId) -> Self {
        StockOutSession::Open {
            product_id,
            draft: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, StockOutSession::Open { .. })
    }

    pub fn is_open_for(&self, id: ProductId) -> bool {
        matches!(self, StockOutSession::Open { product_id, .. } if *product_id == id)
    }

    pub fn target(&self) -> Option<ProductId> {
        match self {
            StockOutSession::Closed => None,
            StockOutSession::Open { product_id, .. } => Some(*product_id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            StockOutSession::Closed => None,
            StockOutSession::Open { draft, .. } => Some(draft),
        }
    }

    /// Replace the draft quantity; no-op while closed.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        if let StockOutSession::Open { draft, .. } = self {
            *draft = text.into();
        }
    }

    /// Return to `Closed`, discarding any draft.
    pub fn close(&mut self) {
        *self = StockOutSession::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_empty_draft() {
        let session = StockOutSession::open(ProductId::new(3));
        assert!(session.is_open_for(ProductId::new(3)));
        assert!(!session.is_open_for(ProductId::new(4)));
        assert_eq!(session.draft(), Some(""));
    }

    #[test]
    fn draft_edits_keep_the_session_open() {
        let mut session = StockOutSession::open(ProductId::new(3));
        session.edit_draft("12");
        assert_eq!(session.draft(), Some("12"));
        assert_eq!(session.target(), Some(ProductId::new(3)));
    }

    #[test]
    fn edit_is_a_noop_while_closed() {
        let mut session = StockOutSession::Closed;
        session.edit_draft("12");
        assert_eq!(session, StockOutSession::Closed);
    }

    #[test]
    fn close_discards_the_draft() {
        let mut session = StockOutSession::open(ProductId::new(3));
        session.edit_draft("12");
        session.close();
        assert!(!session.is_open());
        assert_eq!(session.draft(), None);
    }
}
