//! Rendering of the generated coordinate module
//!
//! The emitter is a deliberately dumb concatenator: each function body is
//! the literal join of its record's term texts. The module header (the
//! generated-file preamble and the numeric-support shims) is emitted once
//! and shared by the generate and reset renderings, so both artifacts stay
//! structurally identical.

use crate::assembling::{expression_text, Term};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Names of the two coordinate callables, in emission order.
pub const COORDINATE_NAMES: [&str; 2] = ["fx", "fy"];

/// Fixed header of every generated module: the generated-file preamble and
/// the numeric-support shims the assembled bodies call into.
const MODULE_HEADER: &str = "\
//! Parametric coordinate functions generated by curveml.
//!
//! Do not edit by hand: regenerate with `curveml --read <file>` or reset
//! with `curveml --clear`.

#![allow(dead_code, unused_variables)]

#[inline]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[inline]
fn cos(x: f64) -> f64 {
    x.cos()
}
";

/// One coordinate function: a name and the terms of its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub terms: Vec<Term>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    /// The function body: term texts concatenated in declaration order.
    pub fn body(&self) -> String {
        expression_text(&self.terms)
    }
}

/// Render the generated module for an ordered list of records.
pub fn render_module(funcs: &[FunctionDef]) -> String {
    let mut out = String::from(MODULE_HEADER);
    for func in funcs {
        out.push('\n');
        out.push_str(&format!(
            "pub fn {}(t: f64) -> f64 {{\n    {}\n}}\n",
            func.name,
            func.body()
        ));
    }
    out
}

/// Render the neutral baseline: both coordinates constant zero.
///
/// Independent of any parsed input; used to return the generated module to
/// a known-good state.
pub fn reset_module() -> String {
    let zeros: Vec<FunctionDef> = COORDINATE_NAMES
        .iter()
        .map(|name| FunctionDef::new(*name, vec![Term::number("0.0")]))
        .collect();
    render_module(&zeros)
}

/// Write the module, truncating any previous artifact, in a single call.
pub fn write_module(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}
