use std::io;
use std::path::PathBuf;

use forge::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::NotFound { name: "sample".to_string() };
    assert_eq!(err.to_string(), "generator 'sample' not found");

    let err =
        Error::ParseError { path: PathBuf::from(".forge/a.yaml"), message: "bad".to_string() };
    assert_eq!(err.to_string(), "failed to parse definition '.forge/a.yaml': bad");

    let err = Error::TemplateLoadError {
        input: "t.tmpl".to_string(),
        message: "missing".to_string(),
    };
    assert_eq!(err.to_string(), "failed to load template 't.tmpl': missing");

    let err = Error::ArgumentError("unknown flag: --x".to_string());
    assert_eq!(err.to_string(), "unknown flag: --x");
}
