pub mod fingerprint_pipeline;
pub mod logger;
