//! Installing the `log` bridge as the process-wide logger.
//!
//! Kept in its own test binary: `log` accepts exactly one global logger per
//! process.

use standout_log::{bridge, Column, LevelDisplay, LoggerBuilder, MemorySink};

#[test]
fn install_routes_facade_and_rejects_second_logger() {
    let sink = MemorySink::new();
    let mut builder = LoggerBuilder::new();
    builder
        .add_level("WARNING", LevelDisplay::new(|| "WARNING".into()))
        .add_column(Column::level())
        .add_column(Column::message());

    bridge::install(builder.build_with_sink(sink.clone())).unwrap();
    log::warn!("disk almost full");
    log::info!("not registered");
    assert_eq!(sink.lines(), vec!["WARNING | disk almost full"]);

    let second = LoggerBuilder::with_defaults().build_with_sink(MemorySink::new());
    assert!(bridge::install(second).is_err());

    log::warn!("still first");
    assert_eq!(sink.last().as_deref(), Some("WARNING | still first"));
}
