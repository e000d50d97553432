mod cache;
mod client;
mod error;
mod response;
mod source;

pub use client::{LookupClient, MISSING_PAGE, NO_CONTENT};
pub use error::LookupError;
pub use response::{Page, Query, QueryResponse, Thumbnail};
pub use source::{PageSource, WikipediaSource};
