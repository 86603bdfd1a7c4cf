pub mod composite;
pub mod fingerprint;
pub mod output;
pub mod pipeline;
