mod source;
mod store;
mod validate;

pub use source::{ConfigSource, FileConfigSource, MemoryConfigSource};
pub use store::{from_yaml, to_yaml, ConfigStore};
pub use validate::Validate;
