//! Strategies command implementation.

use console::style;

use qroute_compile::PlacementStrategy;

/// Execute the strategies command.
pub fn execute() {
    println!("{}", style("Placement strategies:").bold());
    println!();

    for strategy in PlacementStrategy::ALL {
        let marker = if strategy.is_implemented() {
            style("●").green()
        } else {
            style("○").red()
        };
        let default = if strategy == PlacementStrategy::default() {
            " (default)"
        } else {
            ""
        };

        println!(
            "  {} {:<14} {}{}",
            marker,
            style(strategy.name()).cyan(),
            strategy.description(),
            style(default).dim()
        );
    }
}
