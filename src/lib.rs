// Library exports for searchup
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod search;
#[cfg(test)]
mod test_utils;
