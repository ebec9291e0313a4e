#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod data;
pub use data::*;

pub mod de;
pub use de::{parse, Options, Parser, UnknownDirectives};

pub mod error;
pub use error::Error;

pub mod ser;
pub use ser::{serialize, write_to, Document};
