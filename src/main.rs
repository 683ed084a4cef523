use structopt::StructOpt;

use pinbump::{print_error, Command};

fn main() {
    let cmd = Command::from_args();
    let result = pinbump::run(cmd);
    if let Err(error) = result {
        print_error(&error.to_string());
        std::process::exit(1)
    };
}
