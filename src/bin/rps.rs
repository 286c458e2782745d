//! Rock Paper Scissors Binary
//!
//! Interactive loop against a uniformly random opponent with a running
//! score. The tally resets with the process.

use deskmate::rps::Session;

fn main() -> anyhow::Result<()> {
    deskmate::log();
    Session::attach().run()
}
