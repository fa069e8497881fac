use serde::{Deserialize, Serialize};

/// Body for the RCON execution endpoint: a command key plus its ordered
/// argument list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommandRequest {
    pub command: String,
    pub arguments: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Free text.
    Text,
    /// A single player username.
    Player,
}

#[derive(Clone, Copy, Debug)]
pub struct ArgSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
    /// Non-empty means the argument must be one of these values.
    pub options: &'static [&'static str],
    pub kind: ArgKind,
}

impl ArgSpec {
    const fn text(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            options: &[],
            kind: ArgKind::Text,
        }
    }

    const fn player(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            options: &[],
            kind: ArgKind::Player,
        }
    }

    const fn choice(
        name: &'static str,
        placeholder: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            placeholder,
            options,
            kind: ArgKind::Text,
        }
    }
}

/// One admin-console command as presented to the user and submitted to
/// the RCON endpoint.
#[derive(Clone, Copy, Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub key: &'static str,
    pub args: &'static [ArgSpec],
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "Kick",
        description: "Kick a player from the server using their username.",
        key: "KICK",
        args: &[ArgSpec::player("username", "username to be kicked")],
    },
    CommandSpec {
        name: "Ban",
        description: "Ban a player from the server using their username.",
        key: "BAN",
        args: &[ArgSpec::player("username", "username to be banned")],
    },
    CommandSpec {
        name: "Pardon",
        description: "Unban a player from the server using their username.",
        key: "PARDON",
        args: &[ArgSpec::player("username", "username to be pardoned")],
    },
    CommandSpec {
        name: "Teleport",
        description: "Teleports a player to another player.",
        key: "TELEPORT",
        args: &[
            ArgSpec::player("player1", "Source player"),
            ArgSpec::player("player2", "Destination player"),
        ],
    },
    CommandSpec {
        name: "Say",
        description: "Broadcast a message to all players on the server.",
        key: "SAY",
        args: &[ArgSpec::text("message", "Message to broadcast")],
    },
    CommandSpec {
        name: "Time Set",
        description: "Sets the in-game time to a specific value.",
        key: "TIME_SET",
        args: &[ArgSpec::choice(
            "time",
            "Choose a time",
            &["day", "noon", "night", "midnight"],
        )],
    },
    CommandSpec {
        name: "Weather Set",
        description: "Changes the weather.",
        key: "WEATHER_SET",
        args: &[ArgSpec::choice(
            "weather_type",
            "Weather type",
            &["clear", "rain", "thunder"],
        )],
    },
    CommandSpec {
        name: "Gamemode",
        description: "Change the gamemode of a player",
        key: "GAMEMODE",
        args: &[
            ArgSpec::choice("mode", "The target mode", &["creative", "survival"]),
            ArgSpec::player("player", "player username"),
        ],
    },
    CommandSpec {
        name: "Custom...",
        description: "Enter a full custom command.",
        key: "CUSTOM",
        args: &[ArgSpec::text("command", "full command")],
    },
];

pub fn command_by_key(key: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.key == key)
}

impl CommandSpec {
    /// Validate an ordered argument list against this command's arg specs.
    /// Catches bad arguments client-side before any network call; the
    /// server still answers 400 for anything that slips through.
    pub fn validate(&self, values: &[String]) -> Result<(), String> {
        if values.len() != self.args.len() {
            return Err(format!(
                "{} expects {} argument(s), got {}",
                self.name,
                self.args.len(),
                values.len()
            ));
        }

        for (spec, value) in self.args.iter().zip(values) {
            if value.trim().is_empty() {
                return Err(format!("missing value for '{}'", spec.name));
            }
            if !spec.options.is_empty() && !spec.options.contains(&value.as_str()) {
                return Err(format!("'{}' is not a valid {}", value, spec.name));
            }
            if spec.kind == ArgKind::Player && !is_strict_username(value) {
                return Err(format!("'{}' is not a valid username", value));
            }
        }

        Ok(())
    }

    pub fn request(&self, values: Vec<String>) -> CommandRequest {
        CommandRequest {
            command: self.key.to_string(),
            arguments: values,
        }
    }
}

/// Reject anything that could be a coordinate rather than a username:
/// the `~` relative-coordinate placeholder, bare numbers, and anything
/// containing whitespace.
pub fn is_strict_username(value: &str) -> bool {
    if value == "~" {
        return false;
    }
    if value.parse::<i64>().is_ok() {
        return false;
    }
    value.split(' ').count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_keys_are_unique() {
        for (index, spec) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS[index + 1..].iter().all(|other| other.key != spec.key),
                "duplicate command key {}",
                spec.key
            );
        }
    }

    #[test]
    fn strict_username_rejects_coordinates() {
        assert!(!is_strict_username("~"));
        assert!(!is_strict_username("128"));
        assert!(!is_strict_username("-64"));
        assert!(!is_strict_username("two words"));
        assert!(is_strict_username("Karma0o7"));
    }

    #[test]
    fn validate_checks_arity() {
        let kick = command_by_key("KICK").unwrap();
        assert!(kick.validate(&[]).is_err());
        assert!(kick
            .validate(&["a".to_string(), "b".to_string()])
            .is_err());
        assert!(kick.validate(&["Karma0o7".to_string()]).is_ok());
    }

    #[test]
    fn validate_enforces_fixed_options() {
        let time_set = command_by_key("TIME_SET").unwrap();
        assert!(time_set.validate(&["noon".to_string()]).is_ok());
        assert!(time_set.validate(&["dawn".to_string()]).is_err());
    }

    #[test]
    fn validate_rejects_coordinate_usernames() {
        let teleport = command_by_key("TELEPORT").unwrap();
        assert!(teleport
            .validate(&["Karma0o7".to_string(), "~".to_string()])
            .is_err());
        assert!(teleport
            .validate(&["Karma0o7".to_string(), "ligmahbulls".to_string()])
            .is_ok());
    }

    #[test]
    fn request_carries_key_and_ordered_arguments() {
        let gamemode = command_by_key("GAMEMODE").unwrap();
        let request =
            gamemode.request(vec!["creative".to_string(), "Karma0o7".to_string()]);
        assert_eq!(request.command, "GAMEMODE");
        assert_eq!(request.arguments[0], "creative");
        assert_eq!(request.arguments[1], "Karma0o7");
    }
}
