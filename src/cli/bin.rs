#[cfg(feature = "cli")]
use csvtool::cli::logging;
#[cfg(feature = "cli")]
use csvtool::{start_main_loop, CsvToolResult};

#[cfg(feature = "cli")]
pub fn main() -> CsvToolResult<()> {
    logging::init();
    start_main_loop()
}

// Placeholder for binary
#[cfg(not(feature = "cli"))]
pub fn main() {}
