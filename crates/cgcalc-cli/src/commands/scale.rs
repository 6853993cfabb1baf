//! The `cgcalc scale` command.

use anyhow::Result;

use crate::output::scale_table;

pub fn execute() -> Result<()> {
    println!("{}", scale_table());
    Ok(())
}
