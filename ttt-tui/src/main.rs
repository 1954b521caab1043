use clap::Parser;

use app::App;

pub mod app;
pub mod board;
pub mod moves;

#[derive(Parser)]
#[command(about = "Tic-tac-toe with move history and time travel")]
struct Args {
    /// Start with the move list sorted newest-first
    #[arg(long)]
    descending: bool,
}

fn main() {
    let args = Args::parse();
    let terminal = ratatui::init();
    let _ = App::new(args.descending).run(terminal);
    ratatui::restore();
}
