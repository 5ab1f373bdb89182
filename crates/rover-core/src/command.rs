//! Drive commands and command-string parsing.

use crate::error::CommandError;
use smallvec::SmallVec;
use std::fmt;

/// A single atomic drive instruction.
///
/// # Examples
///
/// ```
/// use rover_core::{parse_commands, Command};
///
/// let cmds = parse_commands("ALR").unwrap();
/// assert_eq!(cmds.as_slice(), &[Command::Advance, Command::TurnLeft, Command::TurnRight]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell forward along the current heading (`A`).
    Advance,
    /// Rotate 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
}

impl Command {
    /// Single-letter code for this command.
    pub fn code(self) -> char {
        match self {
            Self::Advance => 'A',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }

    /// Decode a single-letter code. Case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Advance),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An ordered, validated command sequence.
///
/// Inline capacity covers typical hand-written routes without allocating.
pub type CommandSequence = SmallVec<[Command; 32]>;

/// Parse a raw command string into a [`CommandSequence`].
///
/// Every character must decode to a [`Command`]. The first character that
/// does not aborts parsing with [`CommandError::InvalidCommand`]; an empty
/// string yields [`CommandError::EmptyInput`].
pub fn parse_commands(raw: &str) -> Result<CommandSequence, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    raw.chars()
        .enumerate()
        .map(|(position, token)| {
            Command::from_code(token).ok_or(CommandError::InvalidCommand { token, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_known_codes() {
        assert_eq!(Command::from_code('A'), Some(Command::Advance));
        assert_eq!(Command::from_code('L'), Some(Command::TurnLeft));
        assert_eq!(Command::from_code('R'), Some(Command::TurnRight));
    }

    #[test]
    fn rejects_unknown_codes() {
        for c in ['B', '1', ' ', 'a', 'l', '\n'] {
            assert_eq!(Command::from_code(c), None, "{c:?} should be rejected");
        }
    }

    // ── parse_commands ──────────────────────────────────────────

    #[test]
    fn parses_valid_commands_in_order() {
        let cmds = parse_commands("ALAARA").unwrap();
        assert_eq!(
            cmds.as_slice(),
            &[
                Command::Advance,
                Command::TurnLeft,
                Command::Advance,
                Command::Advance,
                Command::TurnRight,
                Command::Advance,
            ]
        );
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(parse_commands(""), Err(CommandError::EmptyInput));
    }

    #[test]
    fn wrong_letter_is_rejected() {
        assert_eq!(
            parse_commands("ALXARA"),
            Err(CommandError::InvalidCommand {
                token: 'X',
                position: 2
            })
        );
    }

    #[test]
    fn number_is_rejected() {
        assert_eq!(
            parse_commands("ALA1RA"),
            Err(CommandError::InvalidCommand {
                token: '1',
                position: 3
            })
        );
    }

    #[test]
    fn space_is_rejected() {
        assert_eq!(
            parse_commands("ALA RA"),
            Err(CommandError::InvalidCommand {
                token: ' ',
                position: 3
            })
        );
    }

    #[test]
    fn reports_first_offender_only() {
        let err = parse_commands("AXYZ").unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidCommand {
                token: 'X',
                position: 1
            }
        );
    }

    #[test]
    fn long_routes_spill_to_heap() {
        let raw = "AL".repeat(100);
        let cmds = parse_commands(&raw).unwrap();
        assert_eq!(cmds.len(), 200);
        assert!(cmds.spilled());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn valid_strings_map_one_to_one(raw in "[ALR]{1,64}") {
            let cmds = parse_commands(&raw).unwrap();
            prop_assert_eq!(cmds.len(), raw.chars().count());
            for (cmd, ch) in cmds.iter().zip(raw.chars()) {
                prop_assert_eq!(cmd.code(), ch);
            }
        }

        #[test]
        fn any_foreign_character_fails(
            prefix in "[ALR]{0,16}",
            bad in "[^ALR]",
            suffix in "[ALR]{0,16}",
        ) {
            let raw = format!("{prefix}{bad}{suffix}");
            let err = parse_commands(&raw).unwrap_err();
            let expected_position = prefix.chars().count();
            prop_assert!(
                matches!(err, CommandError::InvalidCommand { position, .. } if position == expected_position),
                "unexpected error {:?} for {:?}", err, raw,
            );
        }
    }
}
