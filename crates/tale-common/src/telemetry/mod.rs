//! Structured logging for every tale binary and test harness

mod subscriber;

pub use subscriber::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
