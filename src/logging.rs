use env_logger::Builder;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;
use std::io::Write;

/// The library crate and the binary crate
const APP_MODULES: [&str; 2] = ["wsusscn2_cli", "wsusscn2cli"];

/// Where `--debug` request and response dumps are logged
const NETWORK_MODULE: &str = "wsusscn2_cli::adapters::outbound::network";

#[derive(Clone, Debug, Default, clap::Args)]
pub struct Logging {
    /// Be quiet. Conflicts with 'verbose'.
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,

    /// Be more verbose. May be repeated multiple times to increase verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Provide a RUST_LOG filter, takes precedence over --verbose and --quiet
    #[arg(long, global = true, env("RUST_LOG"), hide_env_values = true)]
    pub log: Option<String>,
}

impl Logging {
    /// Installs the global logger. `debug` raises this crate to debug level.
    ///
    /// With `progress` (and not `quiet`) the logger is routed through the
    /// returned [`MultiProgress`], so log lines print above the spinner.
    pub fn init(self, debug: bool, progress: bool) -> Option<MultiProgress> {
        let mut builder = Builder::new();
        self.configure(&mut builder, debug);

        if self.quiet || !progress {
            // a second init (tests) keeps the first logger
            let _ = builder.try_init();
            return None;
        }

        let logger = builder.build();
        let max_level = logger.filter();
        let multi = MultiProgress::new();
        let wrapper = LogWrapper::new(multi.clone(), logger);
        if log::set_boxed_logger(Box::new(wrapper)).is_ok() {
            log::set_max_level(max_level);
        }
        Some(multi)
    }

    fn configure(&self, builder: &mut Builder, debug: bool) {
        if let Some(filters) = &self.log {
            builder.parse_filters(filters);
        } else {
            self.configure_levels(builder, debug);
        }

        // -d dumps are written whatever the other filters say
        if debug {
            builder.filter_module(NETWORK_MODULE, LevelFilter::Debug);
        }
    }

    fn configure_levels(&self, builder: &mut Builder, debug: bool) {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));

        match (self.quiet, self.level(debug)) {
            (true, _) => {
                builder.filter_level(LevelFilter::Off);
            }
            (_, None) => {
                builder.filter_level(LevelFilter::Warn);
            }
            (_, Some(level)) => {
                builder.filter_level(LevelFilter::Warn);
                for module in APP_MODULES {
                    builder.filter_module(module, level);
                }
            }
        }
    }

    /// Level for this crate's own modules, `None` when only warnings show
    fn level(&self, debug: bool) -> Option<LevelFilter> {
        match (debug, self.verbose) {
            (_, 3..) => Some(LevelFilter::Trace),
            (true, _) | (_, 2) => Some(LevelFilter::Debug),
            (_, 1) => Some(LevelFilter::Info),
            _ => None,
        }
    }
}
