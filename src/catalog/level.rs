//! Catalog levels ready for checking.

use log::{debug, warn};

use super::ast::{EdgeDef, HintDef, LevelDef, TripletDef};
use crate::error::{EulerlineError, Result};
use crate::generator::Template;
use crate::graph::{
    check_first_edge, check_hint, check_hint_steps, derive_hint, validate, Classification, Edge,
    Graph, Hint, HintStep, Issue, NodeId, Validation,
};
use crate::report::LevelReport;

/// A level whose graph has been assembled from its definition.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: u32,
    pub name: String,
    /// The level's graph (laid out from the template when there is one)
    pub graph: Graph,
    /// Set for levels described by `.cycle`/`.triplet`/`.chord`
    pub template: Option<Template>,
    /// Declared hints, if any
    pub hint: Option<Hint>,
    /// Source line of the `.level` directive
    pub line: usize,
}

impl Level {
    /// Build a level from a parsed definition.
    ///
    /// Fails only on definitions that cannot describe a graph at all: self-loop
    /// edges, or a base cycle shorter than three nodes.
    pub fn from_def(def: LevelDef) -> Result<Self> {
        let (graph, template) = match &def.template {
            Some(template_def) => {
                let mut template = Template::cycle(template_def.cycle)
                    .map_err(|e| EulerlineError::parse(template_def.line, e.to_string()))?;
                for triplet in &template_def.triplets {
                    check_triplet(triplet)?;
                    template = template.with_triplet(triplet.nodes);
                }
                if let Some(chord) = &template_def.chord {
                    edge_from_def(chord)?;
                    template = template.with_chord(chord.a, chord.b);
                }
                let graph = template
                    .build()
                    .map_err(|e| EulerlineError::parse(template_def.line, e.to_string()))?;
                (graph, Some(template))
            }
            None => {
                let edges = def
                    .edges
                    .iter()
                    .map(edge_from_def)
                    .collect::<Result<Vec<_>>>()?;
                let graph = Graph::new(def.nodes.iter().copied().map(NodeId), edges);
                (graph, None)
            }
        };

        let hint = if def.hint.is_declared() {
            Some(hint_from_def(&def.hint)?)
        } else {
            None
        };

        Ok(Self {
            id: def.id,
            name: def.name,
            graph,
            template,
            hint,
            line: def.line,
        })
    }

    /// Run every check that applies to this level.
    pub fn check(&self) -> LevelReport {
        let mut validation = match &self.template {
            Some(template) => self.generate(template),
            None => validate(&self.graph),
        };

        let valid_starts = derive_hint(
            validation.classification,
            &validation.odd_nodes,
            self.graph.nodes(),
        )
        .unwrap_or_default();

        if let Some(hint) = &self.hint {
            // Start nodes only mean something for a playable graph.
            let hint_issues = if validation.classification.is_valid() {
                check_hint(&self.graph, &validation, hint)
            } else {
                check_first_edge(&self.graph, hint).into_iter().collect()
            };
            validation.issues.extend(hint_issues);
            validation.issues.extend(check_hint_steps(&hint.steps));
        }

        if validation.issues.is_empty() {
            debug!("level {} ({}) passed", self.id, self.name);
        } else {
            warn!(
                "level {} ({}) at line {} has {} issue(s)",
                self.id,
                self.name,
                self.line,
                validation.issues.len()
            );
        }

        LevelReport {
            id: self.id,
            name: self.name.clone(),
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            classification: validation.classification,
            odd_nodes: validation.odd_nodes,
            valid_starts,
            issues: validation.issues,
        }
    }

    /// Generate a template level; a rejected template is reported, not raised.
    fn generate(&self, template: &Template) -> Validation {
        let err = match template.generate() {
            Ok(generated) => return generated.validation,
            Err(err) => err,
        };

        let mut validation = validate(&self.graph);
        let message = match &err {
            EulerlineError::TemplateRejected { issues } => format!(
                "base cycle of {} nodes with {} triplet(s) produced {} defect(s)",
                template.node_count(),
                template.triplets().len(),
                issues.len()
            ),
            other => other.to_string(),
        };
        validation
            .issues
            .insert(0, Issue::TemplateRejected { message });
        validation.classification = Classification::Invalid;
        validation
    }
}

fn edge_from_def(def: &EdgeDef) -> Result<Edge> {
    Edge::between(def.a, def.b).map_err(|e| EulerlineError::parse(def.line, e.to_string()))
}

/// Reject a triplet that repeats a node; its edges would be self-loops.
fn check_triplet(def: &TripletDef) -> Result<()> {
    let [x, y, z] = def.nodes;
    for (a, b) in [(x, y), (y, z), (z, x)] {
        Edge::between(a, b).map_err(|e| EulerlineError::parse(def.line, e.to_string()))?;
    }
    Ok(())
}

fn hint_from_def(def: &HintDef) -> Result<Hint> {
    let first_edge = def.first_edge.as_ref().map(edge_from_def).transpose()?;
    Ok(Hint {
        valid_starts: def
            .starts
            .iter()
            .flatten()
            .copied()
            .map(NodeId)
            .collect(),
        first_edge,
        steps: def
            .steps
            .iter()
            .map(|step| HintStep {
                text: step.text.clone(),
                show_valid_starts: step.show_starts,
                show_first_edge: step.show_edge,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;
    use crate::graph::IssueKind;

    fn level(input: &str) -> Level {
        let mut ast = parse(input).unwrap();
        Level::from_def(ast.levels.remove(0)).unwrap()
    }

    #[test]
    fn test_explicit_level_passes() {
        let report = level(
            ".level 4 \"The Bow Tie\"
.nodes 0 1 2 3 4
.edges (0 1) (0 2) (1 2) (2 3) (2 4) (3 4)
.starts 0 1 2 3 4
.first 0 1
.step \"Two triangles share a center.\"
.step \"Start top-left and go down first.\" starts edge
",
        )
        .check();
        assert!(report.passed(), "{:?}", report.issues);
        assert_eq!(report.classification, Classification::Circuit);
        assert_eq!(report.valid_starts.len(), 5);
    }

    #[test]
    fn test_hint_mismatch_reported() {
        let report = level(
            ".level 30 \"Hint drift\"
.nodes 0 1 2 3
.edges (0 1) (1 2) (2 3) (3 0) (0 2)
.starts 1 3
",
        )
        .check();
        assert_eq!(report.classification, Classification::Path);
        assert_eq!(report.valid_starts, vec![NodeId(0), NodeId(2)]);
        let kinds: Vec<IssueKind> = report.issues.iter().map(Issue::kind).collect();
        assert_eq!(kinds, vec![IssueKind::HintMismatch]);
    }

    #[test]
    fn test_template_level_generates() {
        let level = level(
            ".level 47 \"The Tempest\"
.cycle 13
.triplet 0 4 8
.triplet 1 5 9
.triplet 3 7 11
.chord 2 10
.starts 2 10
",
        );
        assert!(level.template.is_some());
        let report = level.check();
        assert!(report.passed(), "{:?}", report.issues);
        assert_eq!(report.edge_count, 23);
        assert_eq!(report.odd_nodes, vec![NodeId(2), NodeId(10)]);
    }

    #[test]
    fn test_rejected_template_is_reported() {
        let report = level(".level 9 \"Crowded\"\n.cycle 6\n.triplet 0 1 3\n").check();
        assert_eq!(report.classification, Classification::Invalid);
        let kinds: Vec<IssueKind> = report.issues.iter().map(Issue::kind).collect();
        assert_eq!(kinds, vec![IssueKind::Generation, IssueKind::DuplicateEdge]);
    }

    #[test]
    fn test_self_loop_is_parse_error() {
        let mut ast = parse(".level 1 \"Loop\"\n.nodes 0 1\n.edges (0 1) (1 1)\n").unwrap();
        let err = Level::from_def(ast.levels.remove(0)).unwrap_err();
        assert!(matches!(err, EulerlineError::ParseError { line: 3, .. }));

        let mut ast = parse(".level 1 \"Tiny\"\n.cycle 2\n").unwrap();
        let err = Level::from_def(ast.levels.remove(0)).unwrap_err();
        assert!(matches!(err, EulerlineError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_self_loop_template_names_its_line() {
        let input = ".level 5 \"Knot\"\n.cycle 9\n.triplet 1 4 7\n.triplet 0 0 3\n";
        let mut ast = parse(input).unwrap();
        let err = Level::from_def(ast.levels.remove(0)).unwrap_err();
        assert!(matches!(err, EulerlineError::ParseError { line: 4, .. }), "{err}");

        let input = ".level 5 \"Knot\"\n.cycle 9\n.triplet 1 4 7\n\n.chord 2 2\n";
        let mut ast = parse(input).unwrap();
        let err = Level::from_def(ast.levels.remove(0)).unwrap_err();
        assert!(matches!(err, EulerlineError::ParseError { line: 5, .. }), "{err}");
    }

    #[test]
    fn test_invalid_level_still_checks_first_edge() {
        let report = level(
            ".level 8 \"Doubled\"
.nodes 0 1 2
.edges (0 1) (1 2) (2 0) (0 1)
.first 7 8
",
        )
        .check();
        assert_eq!(report.classification, Classification::Invalid);
        assert!(report.valid_starts.is_empty());
        assert_eq!(
            report.issues,
            vec![
                Issue::DuplicateEdge {
                    edge: Edge::between(0, 1).unwrap()
                },
                Issue::FirstEdgeMissing {
                    edge: Edge::between(7, 8).unwrap()
                },
            ]
        );
    }
}
