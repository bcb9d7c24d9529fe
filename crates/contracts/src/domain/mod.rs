pub mod a001_menu_catalog;
pub mod a002_order;
pub mod a003_order_queue;
