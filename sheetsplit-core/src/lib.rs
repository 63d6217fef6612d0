//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod geom;

pub use crate::error::Error;
pub use crate::geom::GeomKind;
