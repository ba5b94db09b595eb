use agb::mgba::{DebugLevel, Mgba};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Sends `log` records to the mGBA debug console. Silent on hardware.
struct MgbaLogger;

impl Log for MgbaLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => DebugLevel::Error,
            Level::Warn => DebugLevel::Warning,
            Level::Info => DebugLevel::Info,
            Level::Debug | Level::Trace => DebugLevel::Debug,
        };
        if let Some(mut mgba) = Mgba::new() {
            let _ = mgba.print(format_args!("[{}] {}", record.target(), record.args()), level);
        }
    }

    fn flush(&self) {}
}

static LOGGER: MgbaLogger = MgbaLogger;

pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Safety: runs once at the top of main, before any interrupt handler can log.
    unsafe {
        let _ = log::set_logger_racy(&LOGGER);
        log::set_max_level_racy(level);
    }
}
