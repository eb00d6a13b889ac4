pub mod formula;
pub mod score_request;
pub mod score_result;
pub mod text_counts;

pub use formula::FormulaId;
pub use score_request::ScoreRequest;
pub use score_result::ScoreResult;
pub use text_counts::TextCounts;
