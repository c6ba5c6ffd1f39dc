use std::io::{self, BufRead, Write};

pub mod companies;
pub mod dashboard;
pub mod participations;
pub mod shareholders;

/// Asks the user to confirm a destructive action on stdin. Anything other
/// than `y`/`yes` declines.
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
