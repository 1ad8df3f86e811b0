use chrono::Utc;
use log::LevelFilter;

/// Installs the stdout dispatcher. Returns `false` if a logger is already
/// set, which is expected when the embedding host owns logging.
pub fn init_logger(level: LevelFilter) -> bool {
    let dispatcher_res = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();
    if let Err(e) = dispatcher_res {
        eprintln!("[init_logger] Unable to set logger: {:?}", e);
        return false;
    }
    true
}

pub fn level_from_env(var_name: &str) -> LevelFilter {
    match std::env::var(var_name) {
        Ok(level_str) => level_str.trim().parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    }
}
