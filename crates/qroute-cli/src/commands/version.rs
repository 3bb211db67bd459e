//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - grid placement and SWAP routing for qasmf circuits",
        style("qroute").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qroute-ir       Instruction-level circuit representation");
    println!("  qroute-qasmf    qasmf parser and emitter");
    println!("  qroute-compile  Placement and routing");
    println!("  qroute-cli      Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
