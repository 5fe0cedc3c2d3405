//! fichador main entrypoint.

use fichador::run;
use fichador::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
