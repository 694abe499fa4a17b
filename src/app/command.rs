use thiserror::Error;

use crate::game::hint::HintKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewRound,
    Hint(HintKind),
    Guess {
        title: String,
        season: Option<u32>,
        episode_number: Option<u32>,
    },
    Range { min: u32, max: u32 },
    Suggest(String),
    Stats,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Unknown hint '{0}', expected image, season or episode")]
    UnknownHint(String),
    #[error("Expected a number, got '{0}'")]
    NotANumber(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
Commands:
  new                                   fetch a new quote
  hint image|season|episode             buy a hint
  guess <title> [--season N] [--episode N]
  range <min> <max>                     limit seasons for new rounds
  suggest <text>                        list matching episode titles
  stats                                 session totals
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "new" | "n" => Ok(Command::NewRound),
            "hint" | "h" => parse_hint(rest).map(Command::Hint),
            "guess" | "g" => parse_guess(rest),
            "range" | "r" => {
                let mut args = rest.split_whitespace();
                let min = parse_number(args.next().ok_or(CommandError::MissingArgument("min"))?)?;
                let max = parse_number(args.next().ok_or(CommandError::MissingArgument("max"))?)?;
                Ok(Command::Range { min, max })
            }
            "suggest" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("text"));
                }
                Ok(Command::Suggest(rest.to_string()))
            }
            "stats" => Ok(Command::Stats),
            "help" | "?" | "" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_hint(arg: &str) -> Result<HintKind, CommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "image" | "img" | "i" => Ok(HintKind::Image),
        "season" | "s" => Ok(HintKind::Season),
        "episode" | "ep" | "e" => Ok(HintKind::EpisodeNumber),
        "" => Err(CommandError::MissingArgument("hint kind")),
        other => Err(CommandError::UnknownHint(other.to_string())),
    }
}

fn parse_guess(args: &str) -> Result<Command, CommandError> {
    let mut title_words = Vec::new();
    let mut season = None;
    let mut episode_number = None;

    let mut tokens = args.split_whitespace();
    while let Some(token) = tokens.next() {
        match token {
            "--season" => {
                let value = tokens.next().ok_or(CommandError::MissingArgument("season"))?;
                season = Some(parse_number(value)?);
            }
            "--episode" => {
                let value = tokens.next().ok_or(CommandError::MissingArgument("episode"))?;
                episode_number = Some(parse_number(value)?);
            }
            word => title_words.push(word),
        }
    }

    if title_words.is_empty() {
        return Err(CommandError::MissingArgument("title"));
    }

    Ok(Command::Guess {
        title: title_words.join(" "),
        season,
        episode_number,
    })
}

fn parse_number(value: &str) -> Result<u32, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::NotANumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("new"), Ok(Command::NewRound));
        assert_eq!(Command::parse("  STATS "), Ok(Command::Stats));
        assert_eq!(Command::parse(""), Ok(Command::Help));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_parse_hint() {
        assert_eq!(Command::parse("hint image"), Ok(Command::Hint(HintKind::Image)));
        assert_eq!(
            Command::parse("h episode"),
            Ok(Command::Hint(HintKind::EpisodeNumber))
        );
        assert_eq!(
            Command::parse("hint"),
            Err(CommandError::MissingArgument("hint kind"))
        );
        assert_eq!(
            Command::parse("hint title"),
            Err(CommandError::UnknownHint("title".to_string()))
        );
    }

    #[test]
    fn test_parse_guess_with_structured_parts() {
        assert_eq!(
            Command::parse("guess The Crepes  of Wrath --season 1 --episode 11"),
            Ok(Command::Guess {
                title: "The Crepes of Wrath".to_string(),
                season: Some(1),
                episode_number: Some(11),
            })
        );
        assert_eq!(
            Command::parse("g --episode 3 Moaning Lisa"),
            Ok(Command::Guess {
                title: "Moaning Lisa".to_string(),
                season: None,
                episode_number: Some(3),
            })
        );
        assert_eq!(
            Command::parse("guess Lisa --season x"),
            Err(CommandError::NotANumber("x".to_string()))
        );
        assert_eq!(
            Command::parse("guess --season 2"),
            Err(CommandError::MissingArgument("title"))
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(Command::parse("range 2 8"), Ok(Command::Range { min: 2, max: 8 }));
        assert_eq!(
            Command::parse("range 2"),
            Err(CommandError::MissingArgument("max"))
        );
    }
}
