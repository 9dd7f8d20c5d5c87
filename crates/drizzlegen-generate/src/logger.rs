use std::fmt::Display;
use std::time::{Duration, Instant};

use drizzlegen_core::GENERATOR_NAME;
use tracing::info;

use crate::context::GeneratorContext;

/// Progress logger that stays silent unless `verbose` is set.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(context: &GeneratorContext<'_>) -> Self {
        Self {
            verbose: context.is_verbose(),
        }
    }

    /// Emit a prefixed line; returns whether anything was logged.
    pub fn log(&self, message: impl Display) -> bool {
        if !self.verbose {
            return false;
        }

        info!("{GENERATOR_NAME}: {message}");
        true
    }

    /// Start timing a unit of work.
    pub fn create_task(&self) -> Task {
        Task {
            logger: *self,
            started: self.verbose.then(Instant::now),
        }
    }
}

/// Timed unit of work started by [`Logger::create_task`].
#[derive(Debug)]
pub struct Task {
    logger: Logger,
    started: Option<Instant>,
}

impl Task {
    /// Log `<message> in <n>ms` and return the elapsed time.
    ///
    /// Returns `None` when logging is disabled.
    pub fn end(self, message: impl Display) -> Option<Duration> {
        let elapsed = self.started?.elapsed();
        self.logger
            .log(format_args!("{message} in {}ms", elapsed.as_millis()));
        Some(elapsed)
    }
}
