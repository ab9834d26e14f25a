//! Per-table render state
//!
//! Collects footnotes and enum-typed attributes while the rows of one
//! namespace table are written. A new context is created for every table.

use crate::format::footnote;
use semdoc_core::{Attribute, EnumAttributeType};

/// An enum-typed attribute queued for the appendix
#[derive(Debug, Clone, Copy)]
pub struct EnumEntry<'a> {
    pub attribute: &'a Attribute,
    pub enum_type: &'a EnumAttributeType,
}

/// Footnotes and enums queued for the current table
#[derive(Debug, Default)]
pub struct RenderContext<'a> {
    notes: Vec<&'a str>,
    enums: Vec<EnumEntry<'a>>,
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a note and return its 1-based footnote number
    pub fn add_note(&mut self, note: &'a str) -> usize {
        self.notes.push(note);
        self.notes.len()
    }

    /// Queue an enum attribute for the appendix
    pub fn add_enum(&mut self, attribute: &'a Attribute, enum_type: &'a EnumAttributeType) {
        self.enums.push(EnumEntry { attribute, enum_type });
    }

    pub fn notes(&self) -> &[&'a str] {
        &self.notes
    }

    pub fn enums(&self) -> &[EnumEntry<'a>] {
        &self.enums
    }

    /// Write queued notes as a numbered footnote list
    pub fn render_notes(&self, output: &mut String) {
        for (i, note) in self.notes.iter().enumerate() {
            output.push('\n');
            output.push_str(&footnote(i + 1, note));
            output.push('\n');
        }
    }
}
