//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BucketPaths;
pub use settings::Settings;
