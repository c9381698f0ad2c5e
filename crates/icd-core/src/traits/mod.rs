pub mod generator;
pub mod storage;

pub use generator::IExplanationGenerator;
pub use storage::ICodeStore;
