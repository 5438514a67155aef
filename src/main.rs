use clap::Parser;

#[derive(Parser)]
#[command(
    name = "recicla",
    about = concat!("recicla v", env!("CARGO_PKG_VERSION"), " - recycling donations in your terminal"),
    version
)]
struct Cli {}

fn main() {
    Cli::parse();

    if let Err(e) = recicla::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
