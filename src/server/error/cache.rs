use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Page cache lock was poisoned by a panicking request")]
    Poisoned,
}
