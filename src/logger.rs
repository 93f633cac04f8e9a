/// Initializes the global logger: `Info` by default, `Debug` when verbose.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(level(verbose))
        .init();
}

fn level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(level(true), log::LevelFilter::Debug);
        assert_eq!(level(false), log::LevelFilter::Info);
    }
}
