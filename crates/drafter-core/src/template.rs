//! # Config Template
//!
//! The generated config extends the repository-wide release-drafter config
//! and scopes names, tags, and change detection to one policy.
//! `$RESOLVED_VERSION` is expanded by release-drafter itself and must reach
//! the output untouched.

use crate::policy::PolicyName;

/// Render the release-drafter config for `policy`.
pub fn render(policy: &PolicyName) -> String {
    let name = policy.as_str();
    format!(
        r#"_extends: policies:.github/release-drafter.yml
name-template: "{name}/v$RESOLVED_VERSION"
tag-template: "{name}/v$RESOLVED_VERSION"
tag-prefix: {name}/v
include-paths:
  - "policies/{name}/"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEMPLATE: &str = r#"_extends: policies:.github/release-drafter.yml
name-template: "<policyName>/v$RESOLVED_VERSION"
tag-template: "<policyName>/v$RESOLVED_VERSION"
tag-prefix: <policyName>/v
include-paths:
  - "policies/<policyName>/"
"#;

    fn policy(s: &str) -> PolicyName {
        PolicyName::new(s).unwrap()
    }

    #[test]
    fn render_widget_exact() {
        let expected = "_extends: policies:.github/release-drafter.yml\n\
                        name-template: \"widget/v$RESOLVED_VERSION\"\n\
                        tag-template: \"widget/v$RESOLVED_VERSION\"\n\
                        tag-prefix: widget/v\n\
                        include-paths:\n  - \"policies/widget/\"\n";
        assert_eq!(render(&policy("widget")), expected);
    }

    #[test]
    fn resolved_version_placeholder_is_literal() {
        let out = render(&policy("widget"));
        assert_eq!(out.matches("$RESOLVED_VERSION").count(), 2);
    }

    #[test]
    fn ends_with_single_newline() {
        let out = render(&policy("widget"));
        assert!(out.ends_with("/\"\n"));
        assert!(!out.ends_with("\n\n"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn render_parses_as_expected_yaml() {
        let out = render(&policy("widget"));
        let doc: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(
            doc["_extends"].as_str(),
            Some("policies:.github/release-drafter.yml")
        );
        assert_eq!(
            doc["name-template"].as_str(),
            Some("widget/v$RESOLVED_VERSION")
        );
        assert_eq!(
            doc["tag-template"].as_str(),
            Some("widget/v$RESOLVED_VERSION")
        );
        assert_eq!(doc["tag-prefix"].as_str(), Some("widget/v"));
        assert_eq!(doc["include-paths"][0].as_str(), Some("policies/widget/"));
    }

    #[test]
    fn render_is_deterministic() {
        let p = policy("pod-security");
        assert_eq!(render(&p), render(&p));
    }

    proptest! {
        /// Every substitution site gets the name and nothing else changes.
        #[test]
        fn render_matches_template_substitution(name in "\\PC{1,32}") {
            let rendered = render(&policy(&name));
            prop_assert_eq!(rendered, TEMPLATE.replace("<policyName>", &name));
        }
    }
}
