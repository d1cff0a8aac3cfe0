/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Local files used as upload sources
mod temp_file;

// re-exports
pub use self::temp_file::create_temp_file;
pub use self::temp_file::create_temp_file_in;
