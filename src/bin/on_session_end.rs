use anyhow::Result;
use std::io;

use session_log_hooks::hooks::session_end;
use session_log_hooks::input::read_input;
use session_log_hooks::notify::Notifier;

fn main() -> Result<()> {
    session_log_hooks::init_tracing();

    let input = read_input(io::stdin().lock())?;
    session_end::run(&input, &Notifier::local(), chrono::Utc::now());

    Ok(())
}
