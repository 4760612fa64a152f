//! The closed set of recognized tag kinds
//!
//! Classification accepts both the start and the end form of a tag
//! (`<mi>` and `</mi>` classify alike). Anything outside the closed set
//! classifies as `None` and is structurally transparent to the tree
//! builder: no element is created for it and enclosed content attaches to
//! whichever recognized element is currently open.

use std::fmt;

/// Tag kinds of the curve dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `semantics`: the wrapper; appears exactly once, as the tree root.
    Semantics,
    /// `mtable`: groups the two coordinate rows.
    Mtable,
    /// `mtr`: one coordinate definition row.
    Mtr,
    /// `mtd`: a table cell.
    Mtd,
    /// `mrow`: a horizontal grouping.
    Mrow,
    /// `mi`: identifier leaf (a variable name or a trig function name).
    Mi,
    /// `mo`: operator leaf.
    Mo,
    /// `mn`: number leaf.
    Mn,
    /// `mfrac`: fraction; its first two children are numerator and
    /// denominator.
    Mfrac,
}

impl TagKind {
    /// Classify a complete tag token (`<name>` or `</name>`).
    ///
    /// Returns `None` for anything outside the closed set, including tags
    /// that carry attributes; those are treated as undefined.
    pub fn classify(tag: &str) -> Option<TagKind> {
        let name = tag.strip_prefix('<')?.strip_suffix('>')?;
        let name = name.strip_prefix('/').unwrap_or(name);
        match name {
            "semantics" => Some(TagKind::Semantics),
            "mtable" => Some(TagKind::Mtable),
            "mtr" => Some(TagKind::Mtr),
            "mtd" => Some(TagKind::Mtd),
            "mrow" => Some(TagKind::Mrow),
            "mi" => Some(TagKind::Mi),
            "mo" => Some(TagKind::Mo),
            "mn" => Some(TagKind::Mn),
            "mfrac" => Some(TagKind::Mfrac),
            _ => None,
        }
    }

    /// The tag name as it appears in the markup, without angle brackets.
    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Semantics => "semantics",
            TagKind::Mtable => "mtable",
            TagKind::Mtr => "mtr",
            TagKind::Mtd => "mtd",
            TagKind::Mrow => "mrow",
            TagKind::Mi => "mi",
            TagKind::Mo => "mo",
            TagKind::Mn => "mn",
            TagKind::Mfrac => "mfrac",
        }
    }

    /// Whether this kind is the tree root wrapper.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TagKind::Semantics)
    }

    /// Whether text under this kind carries a leaf payload.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TagKind::Mi | TagKind::Mo | TagKind::Mn)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
