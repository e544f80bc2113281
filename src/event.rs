//! Discrete key identifiers delivered by the input layer.

use serde::{Deserialize, Serialize};

/// A physical key, reported once per press.
///
/// Serde traits are derived so key bindings can live in exported
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl KeyCode {
    /// Map a typed character to a key code, for terminal-driven input.
    pub fn from_char(c: char) -> Option<Self> {
        let code = match c.to_ascii_uppercase() {
            '0' => KeyCode::Key0,
            '1' => KeyCode::Key1,
            '2' => KeyCode::Key2,
            '3' => KeyCode::Key3,
            '4' => KeyCode::Key4,
            '5' => KeyCode::Key5,
            '6' => KeyCode::Key6,
            '7' => KeyCode::Key7,
            '8' => KeyCode::Key8,
            '9' => KeyCode::Key9,
            'A' => KeyCode::A,
            'B' => KeyCode::B,
            'C' => KeyCode::C,
            'D' => KeyCode::D,
            'E' => KeyCode::E,
            'F' => KeyCode::F,
            'G' => KeyCode::G,
            'H' => KeyCode::H,
            'I' => KeyCode::I,
            'J' => KeyCode::J,
            'K' => KeyCode::K,
            'L' => KeyCode::L,
            'M' => KeyCode::M,
            'N' => KeyCode::N,
            'O' => KeyCode::O,
            'P' => KeyCode::P,
            'Q' => KeyCode::Q,
            'R' => KeyCode::R,
            'S' => KeyCode::S,
            'T' => KeyCode::T,
            'U' => KeyCode::U,
            'V' => KeyCode::V,
            'W' => KeyCode::W,
            'X' => KeyCode::X,
            'Y' => KeyCode::Y,
            'Z' => KeyCode::Z,
            _ => return None,
        };
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(KeyCode::from_char('f'), Some(KeyCode::F));
        assert_eq!(KeyCode::from_char('F'), Some(KeyCode::F));
        assert_eq!(KeyCode::from_char('3'), Some(KeyCode::Key3));
    }

    #[test]
    fn test_from_char_rejects_unbound_characters() {
        assert_eq!(KeyCode::from_char(' '), None);
        assert_eq!(KeyCode::from_char('!'), None);
    }
}
