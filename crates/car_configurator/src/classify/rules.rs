//! Data-driven name rules
//!
//! Node names are matched case-insensitively by substring against an ordered
//! rule table. Evaluation reports every rule that fired as [`NameMatch`] flags;
//! the classifier decides precedence from the flags, so block-list entries win
//! over positive body patterns regardless of their position in the table.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize};

use super::Category;

/// Substrings that keep a node out of the body category
pub const BODY_BLOCK_LIST: &[&str] = &[
    "glass", "window", "mirror", "wheel", "tire", "rim", "tyre", "headlight",
    "taillight", "light", "lamp", "chrome", "plastic", "rubber", "interior",
    "seat", "dashboard", "steering", "console", "trim", "grill", "bumper",
];

/// Substrings identifying painted body panels
pub const BODY_PATTERNS: &[&str] = &[
    "body", "exterior", "paint", "car_body", "vehicle_body", "main_body",
    "chassis", "shell", "outer", "surface", "metal", "steel", "aluminum",
];

/// Substrings identifying wheels
pub const WHEEL_PATTERNS: &[&str] = &["wheel", "tire", "rim", "tyre"];

/// Substrings identifying cabin parts
pub const INTERIOR_PATTERNS: &[&str] = &["interior", "seat", "dashboard", "steering", "console"];

bitflags! {
    /// Rules that fired for one node name
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NameMatch: u8 {
        /// A block-list entry matched
        const BLOCK_BODY = 1 << 0;
        /// A body pattern matched
        const BODY = 1 << 1;
        /// A wheel pattern matched
        const WHEEL = 1 << 2;
        /// An interior pattern matched
        const INTERIOR = 1 << 3;
        /// An exclusion rule matched; no category applies
        const EXCLUDE = 1 << 4;
    }
}

impl NameMatch {
    /// Category decided by name alone, in body → wheel → interior order
    pub fn category(self) -> Option<Category> {
        if self.contains(Self::EXCLUDE) {
            None
        } else if self.contains(Self::BODY) && !self.contains(Self::BLOCK_BODY) {
            Some(Category::Body)
        } else if self.contains(Self::WHEEL) {
            Some(Category::Wheel)
        } else if self.contains(Self::INTERIOR) {
            Some(Category::Interior)
        } else {
            None
        }
    }

    /// No rule recognized the name; geometry decides
    pub fn is_anonymous(self) -> bool {
        self.is_empty()
    }

    fn for_category(category: Category) -> Self {
        match category {
            Category::Body => Self::BODY,
            Category::Wheel => Self::WHEEL,
            Category::Interior => Self::INTERIOR,
            Category::Excluded => Self::EXCLUDE,
        }
    }
}

/// What a matching rule contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleEffect {
    /// Node can never be body
    BlockBody,
    /// Node is a candidate for the category; `Include(Excluded)` removes the
    /// node from every category
    Include(Category),
}

/// One pattern → effect entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    #[serde(deserialize_with = "lowercase")]
    pattern: String,
    /// Effect when the pattern matches
    pub effect: RuleEffect,
}

impl NameRule {
    /// Rule keeping matching nodes out of the body category
    pub fn block_body(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            effect: RuleEffect::BlockBody,
        }
    }

    /// Rule marking matching nodes as candidates for `category`
    pub fn include(pattern: impl Into<String>, category: Category) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            effect: RuleEffect::Include(category),
        }
    }

    /// Lowercased substring to look for
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the rule fires for an already lowercased name
    pub fn matches(&self, lowercase_name: &str) -> bool {
        !self.pattern.is_empty() && lowercase_name.contains(self.pattern.as_str())
    }

    fn flag(&self) -> NameMatch {
        match self.effect {
            RuleEffect::BlockBody => NameMatch::BLOCK_BODY,
            RuleEffect::Include(category) => NameMatch::for_category(category),
        }
    }
}

fn lowercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|pattern| pattern.to_lowercase())
}

/// Ordered list of name rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRuleTable {
    rules: Vec<NameRule>,
}

impl NameRuleTable {
    /// Create a table from explicit rules
    pub fn new(rules: Vec<NameRule>) -> Self {
        Self { rules }
    }

    /// Table with no rules; every node is anonymous
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append a rule
    pub fn push(&mut self, rule: NameRule) {
        self.rules.push(rule);
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[NameRule] {
        &self.rules
    }

    /// Evaluate every rule against `name`
    pub fn evaluate(&self, name: &str) -> NameMatch {
        let lowercase = name.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowercase))
            .fold(NameMatch::empty(), |acc, rule| acc | rule.flag())
    }
}

impl Default for NameRuleTable {
    /// Block-list first, then body, wheel and interior patterns
    fn default() -> Self {
        let block = BODY_BLOCK_LIST.iter().map(|p| NameRule::block_body(*p));
        let body = BODY_PATTERNS.iter().map(|p| NameRule::include(*p, Category::Body));
        let wheel = WHEEL_PATTERNS.iter().map(|p| NameRule::include(*p, Category::Wheel));
        let interior = INTERIOR_PATTERNS
            .iter()
            .map(|p| NameRule::include(*p, Category::Interior));

        Self::new(block.chain(body).chain(wheel).chain(interior).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_list_beats_body_pattern() {
        let table = NameRuleTable::default();
        let result = table.evaluate("body_bumper_trim");

        assert!(result.contains(NameMatch::BODY));
        assert!(result.contains(NameMatch::BLOCK_BODY));
        assert_ne!(result.category(), Some(Category::Body));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = NameRuleTable::default();
        assert_eq!(table.evaluate("Car_BODY_01").category(), Some(Category::Body));
        assert_eq!(table.evaluate("WHEEL_FL").category(), Some(Category::Wheel));
        assert_eq!(table.evaluate("Seat_Driver").category(), Some(Category::Interior));
    }

    #[test]
    fn test_wheel_precedes_interior() {
        let table = NameRuleTable::default();
        assert_eq!(table.evaluate("steering_wheel").category(), Some(Category::Wheel));
    }

    #[test]
    fn test_blocked_without_category() {
        let table = NameRuleTable::default();
        let result = table.evaluate("front_bumper");
        assert_eq!(result, NameMatch::BLOCK_BODY);
        assert_eq!(result.category(), None);
        assert!(!result.is_anonymous());
    }

    #[test]
    fn test_unrecognized_name_is_anonymous() {
        let table = NameRuleTable::default();
        assert!(table.evaluate("Object_42").is_anonymous());
        assert!(table.evaluate("").is_anonymous());
    }

    #[test]
    fn test_custom_rule_order_does_not_change_precedence() {
        let table = NameRuleTable::new(vec![
            NameRule::include("panel", Category::Body),
            NameRule::block_body("PANEL_DOOR"),
        ]);
        assert_eq!(table.evaluate("side_panel").category(), Some(Category::Body));
        assert_eq!(table.evaluate("Panel_Door_L").category(), None);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let table = NameRuleTable::new(vec![NameRule::include("", Category::Body)]);
        assert!(table.evaluate("anything").is_anonymous());
    }

    #[test]
    fn test_table_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            rules: NameRuleTable,
        }

        let text = toml::to_string(&Wrapper { rules: NameRuleTable::default() }).unwrap();
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(back.rules, NameRuleTable::default());
    }

    #[test]
    fn test_exclusion_rule_overrides_positive_matches() {
        let mut table = NameRuleTable::default();
        table.push(NameRule::include("spare", Category::Excluded));

        let result = table.evaluate("spare_wheel");
        assert!(result.contains(NameMatch::WHEEL));
        assert_eq!(result.category(), None);
        assert!(!result.is_anonymous());
    }

    #[test]
    fn test_deserialized_patterns_are_lowercased() {
        #[derive(Deserialize)]
        struct Wrapper {
            rules: NameRuleTable,
        }

        let text = r#"
            [[rules]]
            pattern = "CarPaint"
            effect = { Include = "Body" }
        "#;
        let wrapper: Wrapper = toml::from_str(text).unwrap();
        assert_eq!(wrapper.rules.rules()[0].pattern(), "carpaint");
        assert_eq!(wrapper.rules.evaluate("Mesh_CARPAINT_01").category(), Some(Category::Body));
    }
}
