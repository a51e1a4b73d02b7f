use clap::Parser;
use clinic_desk::cli::{Cli, Commands};
use clinic_desk::core::Config;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior so piping listings into `head` exits quietly.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    let config = Config::load();

    let filter = EnvFilter::try_new(config.log_filter(global.verbose))
        .unwrap_or_else(|_| EnvFilter::new("clinic_desk=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => clinic_desk::cli::commands::run::run(&global, &config),
        Commands::Completions(args) => clinic_desk::cli::commands::completions::run(args),
        Commands::Config(cmd) => clinic_desk::cli::commands::config::run(cmd, &config),
    }
}
