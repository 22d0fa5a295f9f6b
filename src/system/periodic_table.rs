//! Periodic table utilities

pub fn atomic_number(symbol: &str) -> Option<usize> {
    match symbol {
        "H" => Some(1),
        "He" => Some(2),
        "Li" => Some(3),
        "Be" => Some(4),
        "B" => Some(5),
        "C" => Some(6),
        "N" => Some(7),
        "O" => Some(8),
        "F" => Some(9),
        "Ne" => Some(10),
        // se puede extender sin tocar Atom
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_elements() {
        assert_eq!(atomic_number("H"), Some(1));
        assert_eq!(atomic_number("He"), Some(2));
        assert_eq!(atomic_number("O"), Some(8));
        assert_eq!(atomic_number("F"), Some(9));
    }

    #[test]
    fn unknown_element() {
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number("h"), None);
    }
}
