//! Human page blueprints and MediaWiki template inspection.
//!
//! Categories with human pages start from a fixed blueprint. The templates a
//! blueprint calls are mandatory on every page of that category, and each
//! known template has an accepted argument count range.

use tracing::warn;

use crate::category::DataCategory;

const DEFAULT_BLUEPRINT: &str = "\
{{Infobox}}

__NOEDITSECTION__
{{Recipe cargo|{{PAGENAME}}}}";

const INSTRUCTION_BLUEPRINT: &str = "\
{{Instruction_Top}}

__NOEDITSECTION__
{{Instruction_Bottom}}
";

const TECH_BLUEPRINT: &str = "\
{{Infobox}}

__NOEDITSECTION__
{{TechTemplates|{{SUBPAGENAME}}}}

{{TechnologyNav}}

[[Category:Tech]]
";

/// Argument count range of a template call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub arg_count: usize,
    pub max_arg_count: usize,
}

impl TemplateInfo {
    pub const fn new(arg_count: usize, max_arg_count: usize) -> Self {
        Self {
            arg_count,
            max_arg_count,
        }
    }

    /// Whether a call with `other`'s argument count fits this range.
    pub fn accepts(&self, other: &TemplateInfo) -> bool {
        other.arg_count >= self.arg_count && other.arg_count <= self.max_arg_count
    }
}

const TEMPLATES_INFO: &[(&str, TemplateInfo)] = &[
    ("Infobox", TemplateInfo::new(0, 0)),
    ("Recipe cargo", TemplateInfo::new(1, 1)),
    ("Instruction_Top", TemplateInfo::new(0, 0)),
    ("Instruction_Bottom", TemplateInfo::new(0, 0)),
    ("TechTemplates", TemplateInfo::new(1, 1)),
    ("TechnologyNav", TemplateInfo::new(0, 0)),
];

/// Blueprint of new human pages in `category`.
pub fn page_blueprint(category: DataCategory) -> Option<&'static str> {
    match category {
        DataCategory::Entity | DataCategory::Component | DataCategory::Item => Some(DEFAULT_BLUEPRINT),
        DataCategory::Instruction => Some(INSTRUCTION_BLUEPRINT),
        DataCategory::Tech => Some(TECH_BLUEPRINT),
        _ => None,
    }
}

/// Known argument range of a template.
pub fn template_info(name: &str) -> Option<TemplateInfo> {
    TEMPLATES_INFO.iter().find(|(n, _)| *n == name).map(|(_, info)| *info)
}

/// Name and argument count of the inside of one `{{...}}` call.
///
/// Pipes inside nested calls do not count as arguments.
pub fn extract_template_info(content: &str) -> Option<(String, TemplateInfo)> {
    let name = content.split('|').next().unwrap_or_default();
    let name = name.split('#').next().unwrap_or_default().trim();
    if name.is_empty() {
        warn!(content, "unexpected empty template");
        return None;
    }

    let arg_count = top_level_pipes(content);
    Some((name.to_string(), TemplateInfo::new(arg_count, arg_count)))
}

fn top_level_pipes(content: &str) -> usize {
    let bytes = content.as_bytes();
    let (mut depth, mut pipes, mut i) = (0usize, 0, 0);
    while i < bytes.len() {
        match &bytes[i..] {
            [b'{', b'{', ..] => {
                depth += 1;
                i += 2;
            }
            [b'}', b'}', ..] => {
                depth = depth.saturating_sub(1);
                i += 2;
            }
            [b'|', ..] if depth == 0 => {
                pipes += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    pipes
}

/// Byte offset of the `}}` closing the call opened at `start`.
fn closing_braces(content: &str, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let (mut depth, mut i) = (0usize, start);
    while i + 1 < bytes.len() {
        match &bytes[i..i + 2] {
            b"{{" => {
                depth += 1;
                i += 2;
            }
            b"}}" => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    None
}

/// Every template called in `content`, nested calls first.
pub fn extract_templates_info(content: &str) -> Vec<(String, TemplateInfo)> {
    let mut out = Vec::new();
    let mut cursor = 0;

    while let Some(start) = content[cursor..].find("{{").map(|i| cursor + i) {
        let Some(end) = closing_braces(content, start) else {
            break;
        };

        let inner = content[start + 2..end].trim();
        out.extend(extract_templates_info(inner));
        out.extend(extract_template_info(inner));

        cursor = end + 2;
    }

    out
}

/// MediaWiki magic words such as `PAGENAME` use template syntax.
fn is_magic_word(name: &str) -> bool {
    name.bytes().all(|b| b.is_ascii_uppercase())
}

/// Names of every template called in `content`.
pub fn extract_templates(content: &str) -> Vec<String> {
    extract_templates_info(content).into_iter().map(|(name, _)| name).collect()
}

/// Templates every human page of `category` must call.
pub fn mandatory_templates(category: DataCategory) -> Vec<String> {
    page_blueprint(category)
        .map(extract_templates)
        .unwrap_or_default()
        .into_iter()
        .filter(|name| !is_magic_word(name))
        .collect()
}

/// Mandatory templates missing from a page's content.
pub fn missing_templates(category: DataCategory, content: &str) -> Vec<String> {
    let present = extract_templates(content);
    mandatory_templates(category)
        .into_iter()
        .filter(|t| !present.contains(t))
        .collect()
}

/// Calls in `content` to known templates with an unexpected argument count.
pub fn invalid_template_calls(content: &str) -> Vec<(String, TemplateInfo)> {
    extract_templates_info(content)
        .into_iter()
        .filter(|(name, call)| template_info(name).is_some_and(|known| !known.accepts(call)))
        .collect()
}

/// Problems found on one human page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    pub missing: Vec<String>,
    pub invalid: Vec<(String, TemplateInfo)>,
}

impl PageReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }
}

/// Check a human page of `category` against its blueprint.
pub fn lint_page(category: DataCategory, content: &str) -> PageReport {
    PageReport {
        missing: missing_templates(category, content),
        invalid: invalid_template_calls(content),
    }
}
