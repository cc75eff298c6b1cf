//! Abstract Syntax Tree types for the level catalog language.

/// Complete AST representation of a parsed catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogAst {
    /// Levels in file order
    pub levels: Vec<LevelDef>,
}

/// One `.level` block.
#[derive(Debug, Clone)]
pub struct LevelDef {
    /// Level number
    pub id: u32,
    /// Display name
    pub name: String,
    /// Explicit node ids (`.nodes`)
    pub nodes: Vec<u32>,
    /// Explicit edges (`.edges`)
    pub edges: Vec<EdgeDef>,
    /// Constructive template (`.cycle`, `.triplet`, `.chord`)
    pub template: Option<TemplateDef>,
    /// Declared hints
    pub hint: HintDef,
    /// Source line of the `.level` directive
    pub line: usize,
}

impl LevelDef {
    /// Create an empty level definition.
    pub fn new(id: u32, name: String, line: usize) -> Self {
        Self {
            id,
            name,
            nodes: Vec::new(),
            edges: Vec::new(),
            template: None,
            hint: HintDef::default(),
            line,
        }
    }

    /// Check whether the level lists nodes or edges explicitly.
    pub fn is_explicit(&self) -> bool {
        !self.nodes.is_empty() || !self.edges.is_empty()
    }
}

/// A node pair as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDef {
    pub a: u32,
    pub b: u32,
    /// Source line number for error reporting
    pub line: usize,
}

/// Template parameters as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDef {
    /// Base cycle length
    pub cycle: u32,
    /// Chord triplets
    pub triplets: Vec<TripletDef>,
    /// Extra chord
    pub chord: Option<EdgeDef>,
    /// Source line of the `.cycle` directive
    pub line: usize,
}

/// A `.triplet` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripletDef {
    pub nodes: [u32; 3],
    /// Source line number for error reporting
    pub line: usize,
}

/// Hint declarations as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintDef {
    /// `.starts`
    pub starts: Option<Vec<u32>>,
    /// `.first`
    pub first_edge: Option<EdgeDef>,
    /// `.step` lines
    pub steps: Vec<StepDef>,
}

impl HintDef {
    /// Check whether any hint directive was given.
    pub fn is_declared(&self) -> bool {
        self.starts.is_some() || self.first_edge.is_some() || !self.steps.is_empty()
    }
}

/// A `.step` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
    pub text: String,
    pub show_starts: bool,
    pub show_edge: bool,
}
