//! Pizzeria order management: catalog administration, order queue,
//! snapshot persistence, and sales reporting over one owned `AppState`.

pub mod dashboards;
pub mod domain;
pub mod shared;
