use std::fmt;

/// The three labeled sections of an energy description, in input
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Potential,
    Translational,
    Rotational,
}

impl Section {
    /// Exact header line the input must carry for this section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Potential => "Potential Energy:",
            Section::Translational => "Translational Kinetic Energy:",
            Section::Rotational => "Rotational Kinetic Energy:",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Potential => "potential energy",
            Section::Translational => "translational kinetic energy",
            Section::Rotational => "rotational kinetic energy",
        };
        f.write_str(name)
    }
}

/// Fatal failures while turning an energy description into
/// expressions. Either one aborts the run before any derivation
/// starts.
#[derive(Debug)]
pub enum LoadError {
    /// A required section header is absent from the input.
    MissingSection(Section),
    /// A section body did not parse as an algebraic expression.
    Parse { section: Section, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::MissingSection(section) => {
                write!(f, "missing `{}` section header", section.header())
            }
            LoadError::Parse { section, message } => {
                write!(f, "cannot parse the {section} expression: {message}")
            }
        }
    }
}

impl std::error::Error for LoadError {}
