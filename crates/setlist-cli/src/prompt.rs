//! Operator confirmation for the irreversible replacement phase

use std::io::{BufRead, Write};

use crate::error::Result;

/// Ask the operator to confirm the replacement and read one line of input.
///
/// Only an exact `y` or `Y` (after trimming) confirms; anything else,
/// including empty input or EOF, declines. Declining is the default.
pub fn confirm_replacement(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    writeln!(output, "Proceed with replacement? [y/N]")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim();
    Ok(answer == "y" || answer == "Y")
}
