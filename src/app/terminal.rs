use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use super::command::{Command, HELP};
use crate::error::AppError;
use crate::game::controller::SharedGame;
use crate::game::round::Round;
use crate::matching::suggest_titles;

const SUGGESTION_LIMIT: usize = 5;

/// Line-oriented front end standing in for the browser page.
pub struct Terminal {
    game: SharedGame,
    titles: Vec<String>,
}

impl Terminal {
    pub fn new(game: SharedGame, titles: Vec<String>) -> Self {
        Self { game, titles }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        println!("{HELP}");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            debug!("Command: {:?}", command);

            if command == Command::Quit {
                break;
            }
            self.dispatch(command).await;
        }

        let session = self.game.session().await;
        println!(
            "Thanks for playing: {} points over {} rounds.",
            session.total_points, session.rounds_played
        );
        Ok(())
    }

    async fn dispatch(&self, command: Command) {
        match command {
            Command::NewRound => self.start_round(),
            Command::Hint(kind) => match self.game.reveal_hint(kind).await {
                Ok(Some(text)) => println!("Hint ({kind}): {text}"),
                Ok(None) => println!("No {kind} hint available right now."),
                Err(e) => println!("{e}"),
            },
            Command::Guess {
                title,
                season,
                episode_number,
            } => self.guess(&title, season, episode_number).await,
            Command::Range { min, max } => {
                let range = self.game.set_season_range(min, max).await;
                println!("New rounds will use {range}.");
            }
            Command::Suggest(text) => {
                let suggestions = suggest_titles(&text, &self.titles, SUGGESTION_LIMIT);
                if suggestions.is_empty() {
                    println!("No matching titles.");
                }
                for title in suggestions {
                    println!("  {title}");
                }
            }
            Command::Stats => self.print_stats().await,
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    // Acquisition runs in the background. Hints and guesses are refused until it lands.
    fn start_round(&self) {
        if self.game.is_loading() {
            println!("Still loading the previous quote...");
            return;
        }
        println!("Loading a quote...");

        let game = self.game.clone();
        tokio::spawn(async move {
            match game.start_new_round().await {
                Ok(round) => print_round(&round),
                Err(AppError::AcquisitionInProgress) => {
                    println!("Still loading the previous quote...")
                }
                Err(e) => {
                    error!("Failed to start round: {}", e);
                    println!("{e}");
                }
            }
        });
    }

    async fn guess(&self, title: &str, season: Option<u32>, episode_number: Option<u32>) {
        let result = match self.game.submit_guess(title, season, episode_number).await {
            Ok(Some(result)) => result,
            Ok(None) => {
                println!("Nothing to guess. Start a new round with 'new'.");
                return;
            }
            Err(e) => {
                println!("{e}");
                return;
            }
        };

        let round = self.game.round().await;
        let answer = round
            .as_ref()
            .map(|round| {
                let scene = round.scene();
                format!("{} ({})", scene.title, scene.episode_key)
            })
            .unwrap_or_default();

        if result.is_correct {
            println!("Correct! It was {answer}.");
        } else {
            println!("Not quite. It was {answer}.");
        }
        if let Some(taken) = round.as_ref().and_then(Round::time_taken) {
            println!("Answered in {}s", taken.num_seconds());
        }
        println!("Similarity: {:.0}%", result.similarity_score * 100.0);
        for note in &result.bonus_notes {
            println!("  {note}");
        }
        println!("Round points: {}", result.final_round_points);
        self.print_stats().await;
    }

    async fn print_stats(&self) {
        let session = self.game.session().await;
        match (session.average(), session.win_rate()) {
            (Some(average), Some(win_rate)) => println!(
                "Session: {} points, {} rounds, {:.1} average, {:.0}% won",
                session.total_points,
                session.rounds_played,
                average,
                win_rate * 100.0
            ),
            _ => println!("Session: no rounds played yet."),
        }
    }
}

fn print_round(round: &Round) {
    let scene = round.scene();
    println!();
    println!("\"{}\"", scene.quote_text);
    println!(
        "  at {} | {} points available",
        scene.timestamp_label(),
        round.points_remaining()
    );
}
