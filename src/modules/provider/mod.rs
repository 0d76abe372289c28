mod client;
mod dto;
pub mod traits;

pub use client::KinoboxClient;
pub use dto::SourceRecord;
pub use traits::SourceProvider;

#[cfg(test)]
pub use traits::MockSourceProvider;
