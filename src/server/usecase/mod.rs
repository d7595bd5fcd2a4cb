pub(crate) mod create_order;
pub(crate) mod list_orders;
