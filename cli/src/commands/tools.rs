//! Tools listing command

use anyhow::Result;
use frederick_core::tools::ToolRegistry;

/// List registered tools with their descriptions. Needs no credentials.
pub fn tools_command() -> Result<()> {
    let registry = ToolRegistry::default();

    let mut names = registry.list_tools();
    names.sort_unstable();

    println!("Available tools:");
    for name in names {
        if let Some((_, description)) = registry.get_tool_info(name) {
            println!("  {:<20} {}", name, description);
        }
    }

    Ok(())
}
