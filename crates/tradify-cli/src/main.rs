use clap::Parser;
use tradify::{Cli, run};

fn main() {
    // `tradify products | head` must exit quietly instead of panicking
    #[cfg(unix)]
    restore_default_sigpipe();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn restore_default_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
