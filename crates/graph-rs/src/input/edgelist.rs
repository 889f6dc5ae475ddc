use std::{error::Error, slice::Iter, vec::IntoIter};

/// Ordered list of `(from, to)` label pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList<L> {
    edges: Vec<(L, L)>,
}

impl<L> EdgeList<L> {
    pub fn new(edges: Vec<(L, L)>) -> Self {
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> Iter<'_, (L, L)> {
        self.edges.iter()
    }
}

impl<L> IntoIterator for EdgeList<L> {
    type Item = (L, L);
    type IntoIter = IntoIter<(L, L)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<L> FromIterator<(L, L)> for EdgeList<L> {
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parses one `from to` pair per line. Blank lines are skipped and any
/// tokens after the second one are ignored.
impl TryFrom<&str> for EdgeList<String> {
    type Error = Box<dyn Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result: Vec<(String, String)> = vec![];

        value
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .try_for_each(|(n, line)| -> Result<(), Box<dyn Error>> {
                let mut tokens = line.split_whitespace();

                let source = tokens
                    .next()
                    .ok_or_else(|| format!("line {}: no source found!", n + 1))?;
                let target = tokens
                    .next()
                    .ok_or_else(|| format!("line {}: no target found!", n + 1))?;

                result.push((source.to_owned(), target.to_owned()));

                Ok(())
            })?;

        Ok(EdgeList::new(result))
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeList;

    #[test]
    fn edgelist_from_string() {
        let string = "A B\n\
            B  C\n\
            \n\
            C\tD extra";

        let edge_list = EdgeList::try_from(string).unwrap();

        assert_eq!(edge_list.len(), 3);
        assert_eq!(
            edge_list.edges().cloned().collect::<Vec<_>>(),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
                ("C".to_string(), "D".to_string()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "line 2: no target found!")]
    fn edge_list_from_string_panic() {
        let string = "A B\n\
            C\n\
            D E";

        EdgeList::try_from(string).unwrap();
    }
}
