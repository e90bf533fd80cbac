use std::path::Path;

use crate::shared::read_lines;

pub fn run(file: &Path) -> Result<(), i32> {
    let lines = read_lines(file)?;
    print!("{}", lines.numbered());
    Ok(())
}
