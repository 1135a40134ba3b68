//! The `gradebook shell` command.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use gradebook_core::{load_config_from, Gradebook};

use crate::shell::{self, Session};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = config.catalog()?;
    let mut session = Session::new(Gradebook::new(catalog));

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Student Management System. Type `help` for commands.");
    }

    let mut stdout = io::stdout().lock();
    shell::run(&mut session, stdin.lock(), &mut stdout, interactive)?;

    info!(
        students = session.gradebook().list_students().len(),
        "shell closed"
    );
    Ok(())
}
