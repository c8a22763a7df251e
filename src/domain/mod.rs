pub mod model;
pub mod ports;

pub use model::{AnalysisResponse, FeedResponse, Filing, TrackResponse};
pub use ports::ConfigProvider;
