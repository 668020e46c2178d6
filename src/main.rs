use std::path::Path;

use clap::Parser;

#[derive(Parser)]
#[command(name = "btop-theme")]
#[command(about = "Set the btop color theme and reload running btop instances")]
#[command(version)]
struct Args {
    /// Theme name to write into btop.conf
    #[arg(default_value = "hyde")]
    theme: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = btop_theme::paths::config_path();
    let result = btop_theme::run(config.as_deref(), &args.theme, Path::new("/proc"));

    if result.sent == 0 {
        // Same exit status pkill gives when nothing was signalled
        std::process::exit(1);
    }
    log::info!("signalled {} btop process(es)", result.sent);
}
