use std::process::ExitCode;

fn main() -> ExitCode {
    puppyparent_cli::run()
}
