pub mod ascii;
pub mod error;
pub mod feeder;
pub mod lines;
pub mod pacing;
pub mod send_stats;
pub mod settings;
pub mod sink;

pub use error::FeedError;
pub use feeder::{feed_file, Feeder};
pub use settings::{FeedSettings, Parsed};
