//! The `gradebook courses` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::load_config_from;

use crate::shell::render::course_list;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = config.catalog()?;
    println!("{}", course_list(catalog.list_courses()));
    Ok(())
}
