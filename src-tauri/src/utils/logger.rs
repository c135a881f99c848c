use flexi_logger::{DeferredNow, Logger, LoggerHandle};
#[cfg(not(debug_assertions))]
use flexi_logger::{Cleanup, Criterion, FileSpec, Naming};
use log::Record;
use std::path::Path;

fn format_line(
    writer: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        writer,
        "[{}][{}][{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.line().unwrap_or(0),
        &record.args()
    )
}

/// The returned handle must live until exit so buffered lines get flushed.
pub fn init_logger(log_level: &str, log_dir: &Path) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    let logger = {
        let _ = log_dir;
        Logger::try_with_str(log_level)?.log_to_stdout()
    };
    #[cfg(not(debug_assertions))]
    let logger = Logger::try_with_str(log_level)?
        .log_to_file(FileSpec::default().directory(log_dir).basename("notes-overlay"))
        .rotate(
            Criterion::Size(3_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(15),
        );

    let handle = logger.format(format_line).start()?;
    Ok(handle)
}
