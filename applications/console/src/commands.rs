/// Line commands accepted by the console
use std::str::FromStr;
use thiserror::Error;
use tunecloud_core::TrackId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    /// Select a track by identifier
    Track(TrackId),
    /// Seek to a fraction of the track (0.0-1.0)
    Seek(f64),
    /// Click on the seek bar: pointer offset and bar width in pixels
    Click { offset: f64, width: f64 },
    /// Linear volume (0.0-1.0)
    Volume(f32),
    /// Volume slider position (0-100)
    Slider(u8),
    /// Wheel delta; negative raises the volume
    Scroll(f64),
    Mute,
    /// Advance the simulated clock
    Tick(u64),
    Search(String),
    Albums,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} needs an argument ({expected})")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid argument for {command}: {value}")]
    InvalidArgument { command: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "play" => Self::Play,
            "pause" => Self::Pause,
            "toggle" | "space" => Self::Toggle,
            "next" | "n" => Self::Next,
            "prev" | "previous" | "p" => Self::Previous,
            "track" => Self::Track(TrackId::new(required("track", "<id>", rest)?)),
            "seek" => Self::Seek(parse("seek", "<fraction>", rest)?),
            "click" => {
                let args = required("click", "<offset> <width>", rest)?;
                let (offset, width) = args.split_once(char::is_whitespace).ok_or(
                    CommandError::MissingArgument {
                        command: "click",
                        expected: "<offset> <width>",
                    },
                )?;
                Self::Click {
                    offset: parse("click", "<offset>", offset.trim())?,
                    width: parse("click", "<width>", width.trim())?,
                }
            }
            "volume" | "vol" => Self::Volume(parse("volume", "<0.0-1.0>", rest)?),
            "slider" => Self::Slider(parse("slider", "<0-100>", rest)?),
            "scroll" => Self::Scroll(parse("scroll", "<delta>", rest)?),
            "mute" => Self::Mute,
            "tick" => Self::Tick(parse("tick", "<millis>", rest)?),
            "search" => Self::Search(rest.to_string()),
            "albums" => Self::Albums,
            "status" | "s" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required<'a>(
    command: &'static str,
    expected: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value)
    }
}

fn parse<T: FromStr>(
    command: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, CommandError> {
    required(command, expected, value)?
        .parse()
        .map_err(|_| CommandError::InvalidArgument {
            command,
            value: value.to_string(),
        })
}

pub const HELP: &str = "\
commands:
  play | pause | toggle        transport
  next | prev                  catalog navigation
  track <id>                   play a track by id
  seek <0.0-1.0>               seek to a fraction of the track
  click <offset> <width>       click the seek bar at a pixel offset
  volume <0.0-1.0>             set volume
  slider <0-100>               set volume from slider
  scroll <delta>               wheel tick (negative = louder)
  mute                         toggle mute
  tick <ms>                    advance the simulated clock
  search <term>                find tracks and albums
  albums                       list albums
  status                       show the player line
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!("play".parse(), Ok(Command::Play));
        assert_eq!("  PAUSE ".parse(), Ok(Command::Pause));
        assert_eq!("prev".parse(), Ok(Command::Previous));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn parses_arguments() {
        assert_eq!(
            "track song-2".parse(),
            Ok(Command::Track(TrackId::new("song-2")))
        );
        assert_eq!("seek 0.5".parse(), Ok(Command::Seek(0.5)));
        assert_eq!(
            "click 125 500".parse(),
            Ok(Command::Click {
                offset: 125.0,
                width: 500.0
            })
        );
        assert_eq!("slider 42".parse(), Ok(Command::Slider(42)));
        assert_eq!("scroll -120".parse(), Ok(Command::Scroll(-120.0)));
        assert_eq!("tick 1000".parse(), Ok(Command::Tick(1000)));
        assert_eq!(
            "search night drive".parse(),
            Ok(Command::Search("night drive".to_string()))
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "rewind".parse::<Command>(),
            Err(CommandError::Unknown("rewind".to_string()))
        );
        assert!(matches!(
            "track".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "track", .. })
        ));
        assert!(matches!(
            "slider 300".parse::<Command>(),
            Err(CommandError::InvalidArgument { command: "slider", .. })
        ));
        assert!(matches!(
            "click 40".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "click", .. })
        ));
        assert!(matches!(
            "volume loud".parse::<Command>(),
            Err(CommandError::InvalidArgument { .. })
        ));
    }
}
