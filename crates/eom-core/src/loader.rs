//! Energy description loading: placeholder substitution, section
//! extraction, expression construction.
//!
//! The input is UTF-8 text with three labeled sections in fixed order:
//!
//! ```text
//! Potential Energy:
//! <expression>
//!
//! Translational Kinetic Energy:
//! <expression>
//!
//! Rotational Kinetic Energy:
//! <expression>
//! ```
//!
//! The potential and translational blocks run up to the next blank
//! line; the rotational block runs to the end of the text. Bodies are
//! trimmed of surrounding whitespace.

use crate::context::{Placeholder, SymbolContext};
use crate::engine::{self, Expr};
use crate::error::{LoadError, Section};

/// A declared placeholder token that never occurred in the input.
///
/// Non-fatal: not every energy term needs to reference every
/// coordinate. The caller decides how loudly to report it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderWarning {
    pub token: String,
    pub symbol: String,
}

/// The three parsed energy expressions plus substitution diagnostics.
/// Expressions reference only declared symbols.
#[derive(Clone, Debug)]
pub struct LoadedEnergies {
    pub potential: Expr,
    pub translational: Expr,
    pub rotational: Expr,
    pub warnings: Vec<PlaceholderWarning>,
}

impl LoadedEnergies {
    /// `L = (T_trans + T_rot) - U`, simplified once. Shared read-only
    /// by every coordinate derivation.
    pub fn lagrangian(&self) -> Expr {
        let total = self.translational.clone() + self.rotational.clone();
        engine::simplify(&(total - self.potential.clone()))
    }
}

/// Substitute placeholder tokens, split out the three sections, and
/// parse each body into an expression.
pub fn load_energies(source: &str, ctx: &SymbolContext) -> Result<LoadedEnergies, LoadError> {
    let (substituted, warnings) = substitute_placeholders(source, &ctx.placeholders);

    let potential = section_body(&substituted, Section::Potential)?;
    let translational = section_body(&substituted, Section::Translational)?;
    let rotational = section_body(&substituted, Section::Rotational)?;

    Ok(LoadedEnergies {
        potential: parse_section(potential, Section::Potential)?,
        translational: parse_section(translational, Section::Translational)?,
        rotational: parse_section(rotational, Section::Rotational)?,
        warnings,
    })
}

/// Replace every declared token with its symbol's canonical name,
/// over the raw text and before any parsing. A token absent from the
/// text is reported, not rejected.
fn substitute_placeholders(
    source: &str,
    table: &[Placeholder],
) -> (String, Vec<PlaceholderWarning>) {
    let mut text = source.to_string();
    let mut warnings = Vec::new();
    for entry in table {
        if text.contains(&entry.token) {
            text = text.replace(&entry.token, entry.symbol.as_str());
        } else {
            warnings.push(PlaceholderWarning {
                token: entry.token.clone(),
                symbol: entry.symbol.as_str().to_string(),
            });
        }
    }
    (text, warnings)
}

/// Extract one section body, or fail if its header is absent.
fn section_body(text: &str, section: Section) -> Result<&str, LoadError> {
    let (_, rest) = text
        .split_once(section.header())
        .ok_or(LoadError::MissingSection(section))?;
    let body = match section {
        // Last section: everything after the header.
        Section::Rotational => rest,
        _ => rest.split("\n\n").next().unwrap_or(rest),
    };
    Ok(body.trim())
}

fn parse_section(body: &str, section: Section) -> Result<Expr, LoadError> {
    engine::parse_expression(body).map_err(|message| LoadError::Parse { section, message })
}
