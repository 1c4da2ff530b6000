//! Render classification lists into the Arduino keywords.txt layout.
//!
//! Fixed five-section banner template; each list becomes `NAME\tTAG` lines.
//! Identifiers are substituted verbatim, no escaping. The same lists always
//! produce the same bytes.

/// Highlight category tags understood by the Arduino IDE.
const TAG_DATATYPE: &str = "KEYWORD1";
const TAG_INSTANCE: &str = "KEYWORD2";
const TAG_METHOD: &str = "KEYWORD2";
const TAG_LITERAL: &str = "LITERAL1";

const TEMPLATE: &str = "\
#######################################
# Syntax Coloring for ${project_name}
#######################################

#######################################
# Datatypes (KEYWORD1)
#######################################
${datatypes}
#######################################
# Instances (KEYWORD2)
#######################################
${instances}
#######################################
# Methods and Functions (KEYWORD2)
#######################################
${methods}
#######################################
# Constants (LITERAL1)
#######################################
${literals}
";

/// The four classification lists, in template order.
///
/// Datatypes and instances are supplied literally by configuration; methods
/// and literals come out of the extractors. Ordering is preserved as given
/// and duplicates are kept.
#[derive(Debug, Default)]
pub struct Classification {
    pub datatypes: Vec<String>,
    pub instances: Vec<String>,
    pub methods: Vec<String>,
    pub literals: Vec<String>,
}

/// Render the keywords.txt document for a project.
///
/// An empty list leaves an empty body between its banner and the next one.
pub fn render(project_name: &str, lists: &Classification) -> String {
    TEMPLATE
        .replace("${project_name}", project_name)
        .replace("${datatypes}", &keyword_lines(&lists.datatypes, TAG_DATATYPE))
        .replace("${instances}", &keyword_lines(&lists.instances, TAG_INSTANCE))
        .replace("${methods}", &keyword_lines(&lists.methods, TAG_METHOD))
        .replace("${literals}", &keyword_lines(&lists.literals, TAG_LITERAL))
}

/// `["begin", "send"]` with KEYWORD2 → `"begin\tKEYWORD2\nsend\tKEYWORD2"`.
fn keyword_lines(names: &[String], tag: &str) -> String {
    names
        .iter()
        .map(|name| format!("{}\t{}", name, tag))
        .collect::<Vec<_>>()
        .join("\n")
}
