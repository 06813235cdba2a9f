pub mod config;
pub mod core;
pub mod domain;
pub mod parser;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use core::{etl::EtlEngine, pipeline::MenuPipeline};
pub use domain::model::{MenuCategory, MenuDocument, MenuItem, MenuSource};
pub use parser::{parse_stylish_price_list, StylishPriceListParser};
pub use utils::error::{EtlError, Result};
