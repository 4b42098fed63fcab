use clap::Parser;

/// Serve progress tracker images over HTTP
#[derive(Parser)]
#[command(name = "timedots", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: String,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();
    timedots::server::run(&args.listen)
}
