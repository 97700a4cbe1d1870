//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::remote::JsonlCollection;
use crate::Error;
use std::time::Duration;

impl Logger {
    /// Builds and starts a logger from config.
    ///
    /// # Errors
    /// [`Error::Spawn`] if the flush thread cannot be started.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::builder_from_config(config).build()
    }

    /// The configured builder, for callers that still want to swap the clock
    /// or console before building.
    ///
    /// Also applies `general.verbosity` to daqlog's own diagnostics.
    #[must_use]
    pub fn builder_from_config(config: &Config) -> LoggerBuilder {
        internal::set_verbosity(config.parse_verbosity());
        internal::debug(
            "LOGGER",
            &format!(
                "host={}, layout={:?}, retention={}d, flush={}s",
                config.general.host,
                config.file.layout,
                config.file.retention_days,
                config.file.flush_period_secs
            ),
        );

        let mut builder = LoggerBuilder::new()
            .host(&config.general.host)
            .threshold(config.remote.threshold)
            .file()
            .base_dir(config.base_dir())
            .layout(config.file.layout)
            .retention_days(config.file.retention_days)
            .flush_period(Duration::from_secs(config.file.flush_period_secs))
            .done();

        if let Some(ref id) = config.general.build_id {
            builder = builder.build_id(id);
        }

        if config.remote.enabled {
            let path = config.remote_path();
            internal::debug(
                "LOGGER",
                &format!(
                    "Remote collection {} (threshold {})",
                    path.display(),
                    config.remote.threshold
                ),
            );
            builder = builder.remote(JsonlCollection::new(path));
        } else {
            internal::debug("LOGGER", "Remote persistence disabled");
        }

        builder
    }
}
