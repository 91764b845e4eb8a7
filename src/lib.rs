#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ja_query as query;
pub use ja_resource as resource;
pub use ja_utils as utils;
