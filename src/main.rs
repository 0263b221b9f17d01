//! forge's application entry point.
//! Parses arguments, sets up logging and dispatches the requested command.

use forge::{
    cli::{dispatch, get_args},
    error::default_error_handler,
    logger::init_logger,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = dispatch(args.command) {
        default_error_handler(err);
    }
}
