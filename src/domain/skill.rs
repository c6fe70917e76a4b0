//! Skill units and their declared metadata.
//!
//! A skill is a subdirectory of the source root carrying a `SKILL.md`
//! declaration file. The file may open with a YAML frontmatter block
//! delimited by `---` lines; only `name` and `description` are consumed.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File that marks a directory as a skill
pub const DECLARATION_FILE: &str = "SKILL.md";

/// Frontmatter boundary marker
const MARKER: &str = "---";

/// Error for a delimited header block whose content is not valid YAML
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("malformed skill header: {0}")]
    Malformed(#[from] serde_yaml::Error),
}

/// Metadata declared in a SKILL.md frontmatter block
///
/// Both fields are optional in source; resolution fallbacks live on
/// [`Skill`]. Unknown frontmatter keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillHeader {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl SkillHeader {
    /// Extract the frontmatter block from declaration file text.
    ///
    /// The opening marker must sit at the very start of the file. A file
    /// with no opening marker, or with an unterminated block, has no
    /// header and yields the empty default rather than an error. Invalid
    /// YAML inside a properly delimited block is fatal.
    pub fn extract(content: &str) -> Result<Self, HeaderError> {
        let Some(rest) = content.strip_prefix(MARKER) else {
            return Ok(Self::default());
        };

        // The rest of the opening line must be blank, otherwise the file
        // merely starts with dashes (e.g. a horizontal rule)
        let Some(line_end) = rest.find('\n') else {
            return Ok(Self::default());
        };
        if !rest[..line_end].trim().is_empty() {
            return Ok(Self::default());
        }

        let body = &rest[line_end + 1..];
        let Some(block_end) = body.find("\n---") else {
            return Ok(Self::default());
        };

        let block = &body[..block_end];
        if block.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(block)?)
    }
}

/// A discovered skill with resolved identity
#[derive(Debug, Clone)]
pub struct Skill {
    /// Published name (header `name`, or the directory name)
    pub name: String,

    /// Declared description; `None` when absent or blank
    pub description: Option<String>,

    /// Location of the source bundle
    pub source_dir: PathBuf,
}

impl Skill {
    /// Resolve a skill from its source directory and extracted header
    pub fn resolve(source_dir: &Path, header: SkillHeader) -> Self {
        let dir_name = source_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let description = header
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            name: header.name.unwrap_or(dir_name),
            description,
            source_dir: source_dir.to_path_buf(),
        }
    }

    /// Description, or the synthesized placeholder when none was declared
    pub fn description_or_placeholder(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Agent skill: {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_header() {
        let content = "---\nname: foo-skill\ndescription: Does X\n---\n# Foo\n";
        let header = SkillHeader::extract(content).unwrap();

        assert_eq!(header.name.as_deref(), Some("foo-skill"));
        assert_eq!(header.description.as_deref(), Some("Does X"));
    }

    #[test]
    fn test_extract_without_marker() {
        let header = SkillHeader::extract("# Just a title\n\nSome body text.\n").unwrap();
        assert_eq!(header, SkillHeader::default());
    }

    #[test]
    fn test_extract_marker_not_at_start() {
        let header = SkillHeader::extract("\n---\nname: foo\n---\n").unwrap();
        assert_eq!(header, SkillHeader::default());
    }

    #[test]
    fn test_extract_unterminated_block() {
        let header = SkillHeader::extract("---\nname: foo\n").unwrap();
        assert_eq!(header, SkillHeader::default());
    }

    #[test]
    fn test_extract_horizontal_rule_lookalike() {
        let header = SkillHeader::extract("--- not a header\ntext\n").unwrap();
        assert_eq!(header, SkillHeader::default());
    }

    #[test]
    fn test_extract_empty_block() {
        let header = SkillHeader::extract("---\n\n---\nbody\n").unwrap();
        assert_eq!(header, SkillHeader::default());
    }

    #[test]
    fn test_extract_ignores_unknown_keys() {
        let content = "---\nname: foo\nlicense: MIT\ntags: [a, b]\n---\n";
        let header = SkillHeader::extract(content).unwrap();

        assert_eq!(header.name.as_deref(), Some("foo"));
        assert_eq!(header.description, None);
    }

    #[test]
    fn test_extract_malformed_yaml_is_fatal() {
        let content = "---\nname: [unclosed\n---\n";
        assert!(SkillHeader::extract(content).is_err());
    }

    #[test]
    fn test_extract_non_mapping_block_is_fatal() {
        let content = "---\n- just\n- a\n- list\n---\n";
        assert!(SkillHeader::extract(content).is_err());
    }

    #[test]
    fn test_resolve_name_falls_back_to_directory() {
        let skill = Skill::resolve(Path::new("skills/my-skill"), SkillHeader::default());
        assert_eq!(skill.name, "my-skill");
    }

    #[test]
    fn test_resolve_header_name_wins() {
        let header = SkillHeader {
            name: Some("published-name".to_string()),
            description: None,
        };
        let skill = Skill::resolve(Path::new("skills/dir-name"), header);
        assert_eq!(skill.name, "published-name");
    }

    #[test]
    fn test_blank_description_gets_placeholder() {
        let header = SkillHeader {
            name: None,
            description: Some("   ".to_string()),
        };
        let skill = Skill::resolve(Path::new("skills/foo"), header);

        assert_eq!(skill.description, None);
        assert_eq!(skill.description_or_placeholder(), "Agent skill: foo");
    }

    #[test]
    fn test_description_is_trimmed() {
        let header = SkillHeader {
            name: None,
            description: Some("  Does X  \n".to_string()),
        };
        let skill = Skill::resolve(Path::new("skills/foo"), header);
        assert_eq!(skill.description.as_deref(), Some("Does X"));
    }
}
