//! Shared data types: upstream records and the board payload

mod board;
mod menu_group;
mod order;

pub use board::{OrderBoard, ProgressOrder, ReadyOrder};
pub use menu_group::MenuGroup;
pub use order::{
    Check, ItemGroup, Order, Selection, APPROVAL_READY_FOR_PICKUP, FULFILLMENT_READY,
    FULFILLMENT_VOIDED,
};
