//! `stockmgr-view` — the inventory view state machine.
//!
//! Holds the working set of products, applies client-side ordering,
//! tracks the transient stock-out inline-edit session, and sequences
//! mutating operations against the remote product service. All state is
//! scoped to one authenticated user's view; a busy flag serializes every
//! network-touching operation.

pub mod inventory;
pub mod stock_out;

pub use inventory::InventoryView;
pub use stock_out::StockOutSession;
