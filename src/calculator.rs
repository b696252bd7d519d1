//! Keypad state machine used to type an amount before a transaction is
//! recorded.

use crate::core::error::ValidationError;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Unknown key: {0:?}")]
    InvalidKey(char),

    #[error("Amount is too large")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies `lhs OP rhs`. Division by zero yields zero.
    fn apply(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide if rhs.is_zero() => Some(Decimal::ZERO),
            Operator::Divide => lhs.checked_div(rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Operator::Add => "+",
                Operator::Subtract => "-",
                Operator::Multiply => "×",
                Operator::Divide => "÷",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Delete,
}

impl TryFrom<char> for Key {
    type Error = EntryError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Ok(Key::Digit(c)),
            '.' | ',' => Ok(Key::Point),
            '+' => Ok(Key::Operator(Operator::Add)),
            '-' => Ok(Key::Operator(Operator::Subtract)),
            '*' | 'x' | '×' => Ok(Key::Operator(Operator::Multiply)),
            '/' | '÷' => Ok(Key::Operator(Operator::Divide)),
            '=' => Ok(Key::Equals),
            '<' | '⌫' => Ok(Key::Delete),
            _ => Err(EntryError::InvalidKey(c)),
        }
    }
}

/// Amount entry state. `current` is the text on the display.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Entering {
        current: String,
    },
    PendingOperator {
        previous: Decimal,
        operator: Operator,
        current: String,
    },
}

impl Default for Entry {
    fn default() -> Self {
        Entry::Entering {
            current: "0".to_string(),
        }
    }
}

fn parse_operand(text: &str) -> Option<Decimal> {
    let text = text.strip_suffix('.').unwrap_or(text);
    Decimal::from_str(text).ok()
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        match self {
            Entry::Entering { current } | Entry::PendingOperator { current, .. } => current,
        }
    }

    fn current_mut(&mut self) -> &mut String {
        match self {
            Entry::Entering { current } | Entry::PendingOperator { current, .. } => current,
        }
    }

    /// Feeds a sequence of keys, e.g. `"12.5+3="`. Whitespace is ignored.
    pub fn feed(&mut self, keys: &str) -> Result<(), EntryError> {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            self.press(Key::try_from(c)?)?;
        }
        Ok(())
    }

    /// Applies one key press. On error the state is left unchanged.
    pub fn press(&mut self, key: Key) -> Result<(), EntryError> {
        match key {
            Key::Digit(d) => {
                let current = self.display();
                let next = if current == "0" {
                    d.to_string()
                } else {
                    format!("{current}{d}")
                };
                if parse_operand(&next).is_none() {
                    return Err(EntryError::Overflow);
                }
                *self.current_mut() = next;
            }
            Key::Point => {
                let current = self.current_mut();
                if !current.contains('.') {
                    current.push('.');
                }
            }
            Key::Delete => {
                let current = self.current_mut();
                current.pop();
                if current.is_empty() || current.as_str() == "-" {
                    *current = "0".to_string();
                }
            }
            Key::Equals => {
                if let Some(result) = self.resolve()? {
                    *self = result;
                }
            }
            Key::Operator(operator) => {
                if let Some(result) = self.resolve()? {
                    *self = result;
                }
                let previous = parse_operand(self.display()).ok_or(EntryError::Overflow)?;
                *self = Entry::PendingOperator {
                    previous,
                    operator,
                    current: "0".to_string(),
                };
            }
        }
        Ok(())
    }

    /// The state after resolving a pending operation, or `None` if nothing is pending.
    fn resolve(&self) -> Result<Option<Entry>, EntryError> {
        let Entry::PendingOperator {
            previous,
            operator,
            current,
        } = self
        else {
            return Ok(None);
        };
        let rhs = parse_operand(current).ok_or(EntryError::Overflow)?;
        let result = operator
            .apply(*previous, rhs)
            .ok_or(EntryError::Overflow)?
            .normalize();
        debug!("{} {} {} = {}", previous, operator, rhs, result);

        Ok(Some(Entry::Entering {
            current: result.to_string(),
        }))
    }

    /// The amount to record: any pending operation is resolved, and the
    /// result must be strictly positive.
    pub fn amount(&self) -> Result<Decimal, ValidationError> {
        let resolved = self
            .resolve()
            .map_err(|_| ValidationError::NotANumber(self.display().to_string()))?;
        let text = resolved.as_ref().unwrap_or(self).display();
        let amount =
            parse_operand(text).ok_or_else(|| ValidationError::NotANumber(text.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(amount)
    }
}
