pub mod attributes;
pub mod impacts;
pub mod timeline;
pub mod transaction;
