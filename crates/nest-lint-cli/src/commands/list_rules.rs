//! Lists the available rules.

use nest_lint_rules::default_rules;

/// Prints the registered rule table.
pub fn run() {
    let rules = default_rules();

    println!("Available rules:\n");
    for rule in &rules {
        println!("  {} {}", rule.code(), rule.name());
        if !rule.description().is_empty() {
            println!("      {}", rule.description());
        }
    }
    println!("\n{} rule(s) registered", rules.len());
}
