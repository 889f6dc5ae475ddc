use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use graph_rs::{UnweightedGraph, graph::MatrixGraph};

use crate::{Error, query::CaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One `Case i: ...` line per query.
    #[default]
    Text,
    /// A JSON array of case results.
    Json,
}

impl Display for CaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Case {}: {} ports not reachable from port {} with MNP = {}.",
            self.case, self.unreachable, self.port, self.max_hops
        )
    }
}

/// Adjacency matrix of the port graph with a one-line header, for the log.
pub fn matrix_dump(graph: &MatrixGraph<String>) -> String {
    format!(
        "Adjacency matrix ({} ports, capacity {}):\n{}",
        graph.vertex_count(),
        graph.capacity(),
        graph
    )
}

pub fn write_report<W: Write>(
    writer: &mut W,
    results: &[CaseResult],
    format: ReportFormat,
) -> Result<(), Error> {
    match format {
        ReportFormat::Text => {
            for result in results {
                writeln!(writer, "{}", result)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, results)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use graph_rs::types::Direction;

    use super::*;

    fn results() -> Vec<CaseResult> {
        vec![
            CaseResult {
                case: 1,
                port: "10".into(),
                max_hops: 2,
                unreachable: 3,
            },
            CaseResult {
                case: 2,
                port: "35".into(),
                max_hops: 0,
                unreachable: 0,
            },
        ]
    }

    #[test]
    fn text_report() {
        let mut out = Vec::new();
        write_report(&mut out, &results(), ReportFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Case 1: 3 ports not reachable from port 10 with MNP = 2.\n\
             Case 2: 0 ports not reachable from port 35 with MNP = 0.\n"
        );
    }

    #[test]
    fn json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &results(), ReportFormat::Json).unwrap();

        let parsed: Vec<CaseResult> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, results());
    }

    #[test]
    fn matrix_dump_lists_ports() {
        let mut graph = MatrixGraph::new(3, Direction::Undirected).unwrap();
        graph.add_edge("10".to_string(), "15".to_string()).unwrap();

        assert_eq!(
            matrix_dump(&graph),
            "Adjacency matrix (2 ports, capacity 3):\n10\t1\t1\t\n15\t1\t1\t\n\n"
        );
    }

    #[test]
    fn empty_text_report() {
        let mut out = Vec::new();
        write_report(&mut out, &[], ReportFormat::Text).unwrap();

        assert!(out.is_empty());
    }
}
