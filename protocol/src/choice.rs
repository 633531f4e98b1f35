use crate::ParseError;

/// Special mechanic requested alongside a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveModifier {
    Mega,
    ZMove,
    Dynamax,
    Terastallize,
}

impl MoveModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveModifier::Mega => "mega",
            MoveModifier::ZMove => "zmove",
            MoveModifier::Dynamax => "dynamax",
            MoveModifier::Terastallize => "terastallize",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mega" => Some(MoveModifier::Mega),
            "zmove" => Some(MoveModifier::ZMove),
            "dynamax" | "max" => Some(MoveModifier::Dynamax),
            "terastallize" | "tera" => Some(MoveModifier::Terastallize),
            _ => None,
        }
    }
}

/// Decisions a side can hand to the simulator
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// move SLOT [TARGET] [MODIFIER], slot is 1-based
    Move {
        slot: u8,
        target: Option<i8>,
        modifier: Option<MoveModifier>,
    },

    /// switch SLOT, slot is the 1-based team position
    Switch(u8),

    /// team ORDER, used during team preview
    Team(Vec<u8>),

    /// default, lets the simulator pick
    Default,
}

impl Choice {
    /// Plain move with no target or modifier
    pub fn move_slot(slot: u8) -> Self {
        Choice::Move {
            slot,
            target: None,
            modifier: None,
        }
    }

    /// Serialize the choice to the simulator's command format
    pub fn to_command(&self) -> String {
        match self {
            Self::Move {
                slot,
                target,
                modifier,
            } => {
                let mut command = format!("move {}", slot);
                if let Some(target) = target {
                    if *target > 0 {
                        command.push_str(&format!(" +{}", target));
                    } else {
                        command.push_str(&format!(" {}", target));
                    }
                }
                if let Some(modifier) = modifier {
                    command.push(' ');
                    command.push_str(modifier.as_str());
                }
                command
            }
            Self::Switch(slot) => format!("switch {}", slot),
            Self::Team(order) => {
                let order: String = order.iter().map(|slot| slot.to_string()).collect();
                format!("team {}", order)
            }
            Self::Default => "default".to_string(),
        }
    }

    /// Parse a command string back into a choice
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(ParseError::EmptyMessage)?;

        match verb {
            "default" => Ok(Choice::Default),
            "switch" => {
                let slot = words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .ok_or_else(|| ParseError::MissingField("switch slot".to_string()))?;
                Ok(Choice::Switch(slot))
            }
            "team" => {
                let order = words
                    .next()
                    .ok_or_else(|| ParseError::MissingField("team order".to_string()))?;
                let order = order
                    .chars()
                    .map(|c| c.to_digit(10).map(|d| d as u8))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?;
                Ok(Choice::Team(order))
            }
            "move" => {
                let slot = words
                    .next()
                    .and_then(|w| w.parse().ok())
                    .ok_or_else(|| ParseError::MissingField("move slot".to_string()))?;
                let mut target = None;
                let mut modifier = None;
                for word in words {
                    if let Some(m) = MoveModifier::parse(word) {
                        modifier = Some(m);
                    } else if let Ok(t) = word.trim_start_matches('+').parse::<i8>() {
                        target = Some(t);
                    } else {
                        return Err(ParseError::InvalidFormat(s.to_string()));
                    }
                }
                Ok(Choice::Move {
                    slot,
                    target,
                    modifier,
                })
            }
            _ => Err(ParseError::InvalidFormat(s.to_string())),
        }
    }
}
