// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectorError {
    #[error("failed to serialize manifest: {0}")]
    SerializationError(#[from] serde_norway::Error),
    #[error("failed to decode configuration: {0}")]
    DecodeError(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("unknown resource kind: {0}")]
    UnknownKindError(String),
}

pub type Result<T> = result::Result<T, ProjectorError>;
