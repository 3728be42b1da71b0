// crates/logging/src/flags.rs
#![allow(missing_docs)]

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum DebugFlag {
    Io,
    Map,
    Hash,
    Time,
}

impl DebugFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            DebugFlag::Io => "io",
            DebugFlag::Map => "map",
            DebugFlag::Hash => "hash",
            DebugFlag::Time => "time",
        }
    }

    pub const fn target(self) -> &'static str {
        match self {
            DebugFlag::Io => "debug::io",
            DebugFlag::Map => "debug::map",
            DebugFlag::Hash => "debug::hash",
            DebugFlag::Time => "debug::time",
        }
    }
}

impl From<&DebugFlag> for DebugFlag {
    fn from(flag: &DebugFlag) -> Self {
        *flag
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriberConfig {
    pub format: LogFormat,
    pub verbose: u8,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub timestamps: bool,
}

#[derive(Default)]
pub struct SubscriberConfigBuilder {
    cfg: SubscriberConfig,
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }
}

impl SubscriberConfigBuilder {
    pub fn format(mut self, format: LogFormat) -> Self {
        self.cfg.format = format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        self.cfg.debug = debug.into_iter().map(Into::into).collect();
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.cfg.timestamps = timestamps;
        self
    }

    pub fn build(self) -> SubscriberConfig {
        self.cfg
    }
}
