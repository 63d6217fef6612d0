//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

pub mod fields;
pub mod grid;
pub mod source;
pub mod splitter;
pub mod writer;

pub use crate::grid::write_grid;
pub use crate::source::GdalSource;
pub use crate::splitter::{split_dataset, split_path, SplitStats};

/// GDAL library version, e.g. "3.4.1"
pub fn gdal_version() -> String {
    gdal::version::version_info("RELEASE_NAME")
}

#[cfg(test)]
mod splitter_test;
