/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::error;

/// Number of random hex characters prepended to a temp file name
const RANDOM_PREFIX_LEN: usize = 6;

/// Create a file in the current working directory containing `content` repeated `size` times.
///
/// See [`create_temp_file_in`].
pub async fn create_temp_file(
    size: usize,
    name_suffix: &str,
    content: impl Display,
) -> Result<PathBuf, error::Error> {
    create_temp_file_in(".", size, name_suffix, content).await
}

/// Create a file in `dir` containing `content` repeated `size` times.
///
/// The file name is a short random hex prefix followed by `name_suffix`, e.g. `3f9a1cfirstfile.txt`.
/// The file is not removed by this library.
pub async fn create_temp_file_in(
    dir: impl AsRef<Path>,
    size: usize,
    name_suffix: &str,
    content: impl Display,
) -> Result<PathBuf, error::Error> {
    let token = uuid::Uuid::new_v4().simple().to_string();
    let file_name = format!("{}{name_suffix}", &token[..RANDOM_PREFIX_LEN]);
    let path = dir.as_ref().join(file_name);

    let data = content.to_string().repeat(size);
    tokio::fs::write(&path, data.as_bytes()).await?;
    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());

    Ok(path)
}
