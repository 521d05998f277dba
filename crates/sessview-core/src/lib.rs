pub mod config;
pub mod logging;

pub mod allow_list;
pub mod assets;
pub mod batch;
pub mod cache;
pub mod classify;
pub mod liveness;
pub mod oembed;
pub mod record;
pub mod resolver;
pub mod source;
pub mod title;
