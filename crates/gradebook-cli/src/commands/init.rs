//! The `gradebook init` command.

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG).context("failed to write gradebook.toml")?;
    println!("Created gradebook.toml");

    println!("\nNext steps:");
    println!("  1. Edit the course list in gradebook.toml");
    println!("  2. Run: gradebook courses");
    println!("  3. Run: gradebook shell");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Courses offered for enrollment, in display order.
# GRADEBOOK_COURSES="Math,Art" overrides this list.
courses = ["Math", "Science", "History"]
"#;
