use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_directed(&self) -> bool {
        matches!(self, Direction::Directed)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn direction_serde() {
        let json = serde_json::to_string(&Direction::Undirected).unwrap();

        assert_eq!(json, "\"Undirected\"");
        assert_eq!(
            serde_json::from_str::<Direction>(&json).unwrap(),
            Direction::Undirected
        );
        assert!(Direction::default().is_directed());
    }
}
