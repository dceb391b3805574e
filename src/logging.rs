use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// install a compact stderr logger; `RUST_LOG` overrides the default filter
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "bill_split_rs=debug,billsplit=debug,info"
    } else {
        "bill_split_rs=warn,billsplit=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
