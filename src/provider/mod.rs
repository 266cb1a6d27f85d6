mod client;
mod normalize;
mod session;

pub use client::AnalyticsClient;
pub use session::Session;
