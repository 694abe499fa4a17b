use std::str::FromStr;
use std::sync::Arc;

use quotequiz::app::Terminal;
use quotequiz::config::Settings;
use quotequiz::error::AppError;
use quotequiz::game::{GameController, SharedGame};
use quotequiz::scene::ReplaySource;
use tracing::Level;

fn init_logging(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let settings = Settings::load()?;
    init_logging(&settings.log_level);

    let source = ReplaySource::from_path(&settings.replay_path).await?;
    let titles = source.titles();

    let controller = GameController::new(settings, Arc::new(source));
    Terminal::new(SharedGame::new(controller), titles).run().await
}
