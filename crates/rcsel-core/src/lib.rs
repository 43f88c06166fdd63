pub mod catalog;
pub mod commit;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod paths;
pub mod preview;
pub mod registry;
pub mod resolver;
