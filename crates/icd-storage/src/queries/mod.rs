//! One module per logical store operation. Each function takes a borrowed
//! connection and performs a single round trip (or a single transaction).

pub mod candidate_search;
pub mod category_ops;
pub mod code_lookup;
pub mod code_upsert;
pub mod graph_stats;

mod code_row;
