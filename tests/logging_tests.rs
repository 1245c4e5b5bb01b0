use log::LevelFilter;
use tictactoe::{init_logging, parse_level};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("nonsense")), LevelFilter::Info);
    assert_eq!(parse_level(None), LevelFilter::Info);
}

#[test]
fn test_init_logging_twice() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
