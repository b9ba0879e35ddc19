use tagwarden_types::Environment;

/// One required-tag rule, in policy-spec order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRule {
    pub name: String,
    pub required: bool,
    /// When present, the requirement applies only to these environments; the
    /// `required` flag is waived everywhere else.
    pub required_when: Option<Vec<Environment>>,
}

impl TagRule {
    pub fn required_for(&self, env: Environment) -> bool {
        match &self.required_when {
            Some(envs) => self.required && envs.contains(&env),
            None => self.required,
        }
    }
}

/// The rules the engine enforces, resolved from the policy spec and config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveRules {
    pub required_tags: Vec<TagRule>,

    /// `"<product>-"` head used for name-based environment inference and for
    /// building the expected naming prefix.
    pub product_prefix: String,

    /// Raw configured naming pattern; `None` disables the naming check.
    pub naming_pattern: Option<String>,

    /// `lifecycle_policies.dev_resources.auto_cleanup`.
    pub dev_auto_cleanup: bool,
}

impl EffectiveRules {
    /// Expected resource-name prefix for a detected environment:
    /// `"<product>-<env>-"`.
    pub fn expected_name_prefix(&self, env: Environment) -> String {
        format!("{}{}-", self.product_prefix, env.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_rule_applies_everywhere() {
        let rule = TagRule {
            name: "Owner".to_string(),
            required: true,
            required_when: None,
        };
        assert!(rule.required_for(Environment::Prod));
        assert!(rule.required_for(Environment::Untagged));
    }

    #[test]
    fn conditional_rule_waived_outside_its_environments() {
        let rule = TagRule {
            name: "ExpiresAt".to_string(),
            required: true,
            required_when: Some(vec![Environment::Dev]),
        };
        assert!(rule.required_for(Environment::Dev));
        assert!(!rule.required_for(Environment::Prod));
    }

    #[test]
    fn conditional_rule_still_needs_the_required_flag() {
        let rule = TagRule {
            name: "CostCenter".to_string(),
            required: false,
            required_when: Some(vec![Environment::Prod]),
        };
        assert!(!rule.required_for(Environment::Prod));
    }

    #[test]
    fn expected_prefix_interpolates_environment() {
        let rules = EffectiveRules {
            product_prefix: "flowlogic-".to_string(),
            ..EffectiveRules::default()
        };
        assert_eq!(
            rules.expected_name_prefix(Environment::Staging),
            "flowlogic-staging-"
        );
    }
}
