/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Demo,
    Help,
    Stop,
    /// Anything that is not a recognized keyword. Holds the raw line for logging.
    Invalid(String),
}

const KEYWORDS: [(&str, Command); 3] = [
    ("demo", Command::Demo),
    ("help", Command::Help),
    ("stop", Command::Stop),
];

impl Command {
    /// Matches a line against the keyword table, ignoring case. The caller strips
    /// the line terminator; any other whitespace makes the line invalid.
    pub fn parse(line: &str) -> Command {
        let lowered = line.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == lowered)
            .map(|(_, command)| command.clone())
            .unwrap_or_else(|| Command::Invalid(line.to_string()))
    }

    pub fn keyword(&self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, command)| command == self)
            .map(|(keyword, _)| *keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Stopped,
}

impl MenuState {
    pub fn after(self, command: &Command) -> MenuState {
        match (self, command) {
            (MenuState::Stopped, _) | (_, Command::Stop) => MenuState::Stopped,
            _ => MenuState::Running,
        }
    }
}

/// What the loop does when standard input ends before `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum EofPolicy {
    /// Abort the session with an error.
    #[default]
    Fail,
    /// Behave as if `stop` had been entered.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    StopCommand,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands_handled: usize,
    pub ended_by: SessionEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        for input in ["demo", "Demo", "DEMO", "dEmO"] {
            assert_eq!(Command::parse(input), Command::Demo);
        }
        for input in ["help", "HELP", "Help"] {
            assert_eq!(Command::parse(input), Command::Help);
        }
        for input in ["stop", "STOP", "sToP"] {
            assert_eq!(Command::parse(input), Command::Stop);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_padded_input() {
        assert_eq!(Command::parse("xyz"), Command::Invalid("xyz".to_string()));
        assert_eq!(Command::parse(""), Command::Invalid(String::new()));
        assert_eq!(Command::parse("STOP "), Command::Invalid("STOP ".to_string()));
        assert_eq!(Command::parse(" demo"), Command::Invalid(" demo".to_string()));
        assert_eq!(Command::parse("demos"), Command::Invalid("demos".to_string()));
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Command::Demo.keyword(), Some("demo"));
        assert_eq!(Command::Help.keyword(), Some("help"));
        assert_eq!(Command::Stop.keyword(), Some("stop"));
        assert_eq!(Command::Invalid("demo".to_string()).keyword(), None);
    }

    #[test]
    fn test_state_transitions() {
        assert_eq!(MenuState::Running.after(&Command::Demo), MenuState::Running);
        assert_eq!(MenuState::Running.after(&Command::Help), MenuState::Running);
        assert_eq!(
            MenuState::Running.after(&Command::Invalid("x".to_string())),
            MenuState::Running
        );
        assert_eq!(MenuState::Running.after(&Command::Stop), MenuState::Stopped);
        assert_eq!(MenuState::Stopped.after(&Command::Demo), MenuState::Stopped);
    }

    #[test]
    fn test_default_eof_policy_is_fail() {
        assert_eq!(EofPolicy::default(), EofPolicy::Fail);
    }
}
