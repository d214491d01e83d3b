pub mod activation;
pub mod scanner;
pub mod version;

pub use activation::ActivationScope;
pub use scanner::VersionScanner;
pub use version::NodeVersion;
