//! Parser for the level catalog language.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{EulerlineError, Result};

/// Parser for catalog text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire catalog.
    pub fn parse(&mut self) -> Result<CatalogAst> {
        let mut ast = CatalogAst::default();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            match self.current.kind {
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                _ => {
                    return Err(EulerlineError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.end_of_line()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(EulerlineError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(EulerlineError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    fn number(&mut self) -> Result<u32> {
        let tok = self.expect(TokenKind::Number)?;
        tok.text
            .parse::<u32>()
            .map_err(|_| EulerlineError::parse(tok.line, format!("number out of range: {}", tok.text)))
    }

    /// Read numbers until the end of the line.
    fn number_list(&mut self) -> Result<Vec<u32>> {
        let mut values = Vec::new();
        while self.current.kind == TokenKind::Number {
            values.push(self.number()?);
        }
        Ok(values)
    }

    fn pair(&mut self, line: usize) -> Result<EdgeDef> {
        let a = self.number()?;
        let b = self.number()?;
        Ok(EdgeDef { a, b, line })
    }

    fn parse_directive(&mut self, ast: &mut CatalogAst) -> Result<()> {
        let directive = self.current.text.to_lowercase();
        let line = self.current.line;
        self.advance()?;

        if directive == ".level" {
            let id = self.number()?;
            let name = self.expect(TokenKind::String)?.text;
            ast.levels.push(LevelDef::new(id, name, line));
            return Ok(());
        }

        let Some(level) = ast.levels.last_mut() else {
            return Err(EulerlineError::parse(
                line,
                format!("{} appears before any .level", directive),
            ));
        };

        match directive.as_str() {
            ".nodes" => {
                Self::forbid_template(level, &directive, line)?;
                let nodes = self.number_list()?;
                if nodes.is_empty() {
                    return Err(EulerlineError::parse(line, ".nodes needs at least one node id"));
                }
                level.nodes.extend(nodes);
            }
            ".edges" => {
                Self::forbid_template(level, &directive, line)?;
                let mut count = 0;
                while self.current.kind == TokenKind::OpenParen {
                    self.advance()?;
                    level.edges.push(self.pair(line)?);
                    self.expect(TokenKind::CloseParen)?;
                    count += 1;
                }
                if count == 0 {
                    return Err(EulerlineError::parse(line, ".edges needs at least one (a b) pair"));
                }
            }
            ".cycle" => {
                if level.is_explicit() || level.template.is_some() {
                    return Err(EulerlineError::parse(
                        line,
                        ".cycle cannot be combined with .nodes, .edges or another .cycle",
                    ));
                }
                let cycle = self.number()?;
                level.template = Some(TemplateDef {
                    cycle,
                    triplets: Vec::new(),
                    chord: None,
                    line,
                });
            }
            ".triplet" => {
                let template = Self::require_template(level, &directive, line)?;
                let x = self.number()?;
                let y = self.number()?;
                let z = self.number()?;
                template.triplets.push(TripletDef {
                    nodes: [x, y, z],
                    line,
                });
            }
            ".chord" => {
                let template = Self::require_template(level, &directive, line)?;
                if template.chord.is_some() {
                    return Err(EulerlineError::parse(line, "only one .chord is allowed per level"));
                }
                let chord = self.pair(line)?;
                template.chord = Some(chord);
            }
            ".starts" => {
                if level.hint.starts.is_some() {
                    return Err(EulerlineError::parse(line, "duplicate .starts"));
                }
                level.hint.starts = Some(self.number_list()?);
            }
            ".first" => {
                if level.hint.first_edge.is_some() {
                    return Err(EulerlineError::parse(line, "duplicate .first"));
                }
                level.hint.first_edge = Some(self.pair(line)?);
            }
            ".step" => {
                let text = self.expect(TokenKind::String)?.text;
                let mut step = StepDef {
                    text,
                    show_starts: false,
                    show_edge: false,
                };
                while self.current.kind == TokenKind::Identifier {
                    match self.current.text.to_lowercase().as_str() {
                        "starts" => step.show_starts = true,
                        "edge" => step.show_edge = true,
                        other => {
                            return Err(EulerlineError::parse(
                                line,
                                format!("unknown step flag '{}' (expected 'starts' or 'edge')", other),
                            ));
                        }
                    }
                    self.advance()?;
                }
                level.hint.steps.push(step);
            }
            _ => {
                return Err(EulerlineError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn forbid_template(level: &LevelDef, directive: &str, line: usize) -> Result<()> {
        if level.template.is_some() {
            return Err(EulerlineError::parse(
                line,
                format!("{} cannot be combined with .cycle", directive),
            ));
        }
        Ok(())
    }

    fn require_template<'l>(
        level: &'l mut LevelDef,
        directive: &str,
        line: usize,
    ) -> Result<&'l mut TemplateDef> {
        level.template.as_mut().ok_or_else(|| {
            EulerlineError::parse(line, format!("{} requires a preceding .cycle", directive))
        })
    }
}
