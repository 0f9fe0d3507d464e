//! tutorledger main entrypoint.

use tutorledger::run;
use tutorledger::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
