// src/error.rs
use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("no ratings found for user {user_id} (wrong id, or the profile is private?)")]
    NoRatings { user_id: String },
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
