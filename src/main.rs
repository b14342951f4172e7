use std::io;
use std::process;

use caffeinated::{cli, logging};

fn main() {
    logging::init_tracing();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());
    process::exit(status);
}
