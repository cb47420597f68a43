use crate::utils::error::{EolError, Result};
use crate::utils::validation::is_valid_year;
use std::io::{BufRead, Write};

pub const YEAR_PROMPT: &str = "Enter the EOL year to search for (e.g., 2026): ";
pub const YEAR_HINT: &str = "Please enter a valid 4-digit year (e.g., 2026).";

/// Ask for a target year until a 4-digit answer arrives.
///
/// Invalid answers are never returned; the prompt is repeated instead.
/// Returns `InputClosed` if the input ends first.
pub fn prompt_year<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(output, "{}", YEAR_PROMPT).map_err(EolError::Console)?;
        output.flush().map_err(EolError::Console)?;

        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(EolError::Console)?;
        if read == 0 {
            return Err(EolError::InputClosed);
        }

        // Undecodable bytes are just another wrong answer.
        match String::from_utf8(buf) {
            Ok(line) if is_valid_year(line.trim()) => {
                let year = line.trim().to_string();
                tracing::debug!("Target year: {}", year);
                return Ok(year);
            }
            Ok(line) => tracing::debug!("Rejected year input: {:?}", line.trim()),
            Err(e) => tracing::debug!("Rejected non UTF-8 year input: {:?}", e.as_bytes()),
        }

        writeln!(output, "{}", YEAR_HINT).map_err(EolError::Console)?;
    }
}
