//! Graph entities and the records passed between the store, the search engine and callers.

pub mod code;
pub mod graph;
pub mod grounded_answer;
pub mod query;
pub mod view;

pub use code::{CodeDetails, CodeEntry, CodeRecord, IcdCode};
pub use graph::{EdgeKind, GraphCounts};
pub use grounded_answer::{AnswerSource, GroundedAnswer};
pub use query::CandidateQuery;
pub use view::CodeView;
