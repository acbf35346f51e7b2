//! Engine that applies filter rules to inspected diffs.
//!
//! A rule suppresses an attribute only when the entity name, the attribute
//! path, the before value and the after value all match. Rules are independent
//! of each other, so an attribute is dropped when any rule matches it.
//! Entities left without attributes are removed from their collection.
//!
//! Every before and after glob of a pair is evaluated, and every rule is
//! visited, so a malformed pattern fails the filter with the entity and value
//! it was matched against. [`FilterEngine::apply`] then compiles whatever the
//! diff never reached, so a malformed pattern is fatal even when no entity
//! exercises it.

use tracing::debug;

use super::pattern::PatternMatcher;
use super::rules::{FilterRule, InspectFilter};
use crate::diff::{CollectionKind, DiffCollection, EntityDiff, InspectionDiff};
use crate::error::{ErrorContext, PlanError, Result};

/// Counts gathered while applying a filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Attribute diffs removed by a rule
    pub suppressed_attributes: usize,
    /// Entities removed because every attribute was suppressed
    pub pruned_entities: usize,
}

impl FilterStats {
    fn merge(&mut self, other: Self) {
        self.suppressed_attributes += other.suppressed_attributes;
        self.pruned_entities += other.pruned_entities;
    }
}

/// Applies an [`InspectFilter`] to inspection diffs.
pub struct FilterEngine<'a> {
    filter: &'a InspectFilter,
    matcher: PatternMatcher,
}

impl<'a> FilterEngine<'a> {
    /// Create an engine for the given filter
    pub fn new(filter: &'a InspectFilter) -> Self {
        Self {
            filter,
            matcher: PatternMatcher::new(),
        }
    }

    /// Filter every collection of `diff` with its matching rule list.
    pub fn apply(&mut self, diff: &mut InspectionDiff) -> Result<FilterStats> {
        let mut stats = FilterStats::default();
        let filter = self.filter;

        for kind in CollectionKind::ALL {
            let rules = filter.rules_for(kind);
            if rules.is_empty() {
                continue;
            }

            let collection_stats = self
                .filter_collection(diff.collection_mut(kind), rules)
                .and_then(|stats| self.check_rules(rules).map(|()| stats))
                .with_context(|| kind.to_string())?;

            debug!(
                collection = %kind,
                rules = rules.len(),
                suppressed = collection_stats.suppressed_attributes,
                pruned = collection_stats.pruned_entities,
                "Applied filter rules"
            );
            stats.merge(collection_stats);
        }

        Ok(stats)
    }

    /// Compile every glob of `rules` without matching anything.
    pub fn check_rules(&mut self, rules: &[FilterRule]) -> Result<()> {
        for rule in rules {
            let name = &rule.name_pattern;
            let globs = rule.diff_patterns.iter().flat_map(|(path_glob, pairs)| {
                std::iter::once(path_glob.as_str()).chain(
                    pairs
                        .iter()
                        .flat_map(|pair| [pair.before.as_str(), pair.after.as_str()]),
                )
            });
            for glob in std::iter::once(name.as_str()).chain(globs) {
                self.matcher.check(glob).map_err(|e| {
                    PlanError::filter(format!("invalid pattern {glob} in rule {name}"), e)
                })?;
            }
        }
        Ok(())
    }

    /// Filter each entity of a collection, removing those left empty.
    pub fn filter_collection(
        &mut self,
        collection: &mut DiffCollection,
        rules: &[FilterRule],
    ) -> Result<FilterStats> {
        let mut stats = FilterStats::default();
        let mut emptied = Vec::new();

        for (address, diff) in collection.iter_mut() {
            stats.suppressed_attributes += self.filter_entity(address, diff, rules)?;
            if diff.is_empty() {
                emptied.push(address.clone());
            }
        }

        for address in emptied {
            collection.remove(&address);
            stats.pruned_entities += 1;
        }

        Ok(stats)
    }

    /// Remove the attribute diffs of one entity that any rule suppresses.
    ///
    /// Returns the number of attributes removed.
    pub fn filter_entity(
        &mut self,
        address: &str,
        diff: &mut EntityDiff,
        rules: &[FilterRule],
    ) -> Result<usize> {
        let mut removed = 0;

        for rule in rules {
            let name_matches = self
                .matcher
                .matches(&rule.name_pattern, address)
                .map_err(|e| {
                    PlanError::filter(
                        format!(
                            "unable to match {address} with pattern {}",
                            rule.name_pattern
                        ),
                        e,
                    )
                })?;
            if !name_matches {
                continue;
            }

            let paths: Vec<String> = diff.keys().cloned().collect();
            for path in paths {
                if self.rule_suppresses(rule, address, &path, diff)? {
                    diff.remove(&path);
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }

    fn rule_suppresses(
        &mut self,
        rule: &FilterRule,
        address: &str,
        path: &str,
        diff: &EntityDiff,
    ) -> Result<bool> {
        let Some(attribute) = diff.get(path) else {
            return Ok(false);
        };

        let mut suppressed = false;
        for (path_glob, pairs) in &rule.diff_patterns {
            let path_matches = self.matcher.matches(path_glob, path).map_err(|e| {
                PlanError::filter(
                    format!("unable to match {address}.{path} with pattern {path_glob}"),
                    e,
                )
            })?;
            if !path_matches {
                continue;
            }

            for pair in pairs {
                let before = self.value_matches(address, path, &attribute.before, &pair.before)?;
                let after = self.value_matches(address, path, &attribute.after, &pair.after)?;
                suppressed |= before && after;
            }
        }

        Ok(suppressed)
    }

    fn value_matches(
        &mut self,
        address: &str,
        path: &str,
        value: &str,
        pattern: &str,
    ) -> Result<bool> {
        self.matcher.matches(pattern, value).map_err(|e| {
            PlanError::filter(
                format!("unable to match {address}.{path} value '{value}' with pattern {pattern}"),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::AttributeDiff;
    use crate::error::PatternError;
    use crate::matching::DiffPattern;

    fn instance_diff() -> EntityDiff {
        EntityDiff::from([
            (
                ".ami".to_string(),
                AttributeDiff::new("ami-0397850", "ami-12345678"),
            ),
            (
                ".instance_type".to_string(),
                AttributeDiff::new("t2.medium", "t2.micro"),
            ),
        ])
    }

    fn ami_rule(before: &str, after: &str) -> FilterRule {
        FilterRule::new("aws_instance.*").with_pattern(".ami", DiffPattern::new(before, after))
    }

    #[test]
    fn test_filter_removes_only_matching_attribute() {
        let filter = InspectFilter::default();
        let mut engine = FilterEngine::new(&filter);
        let mut diff = instance_diff();

        let removed = engine
            .filter_entity("aws_instance.example", &mut diff, &[ami_rule("ami-0397850", "ami-*")])
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains_key(".instance_type"));
    }

    #[test]
    fn test_filter_requires_every_pattern_to_match() {
        let filter = InspectFilter::default();
        let rules = [
            ami_rule("ami-0000000", "ami-*"),
            ami_rule("ami-0397850", "ami-9*"),
            FilterRule::new("aws_s3_bucket.*")
                .with_pattern(".ami", DiffPattern::new("ami-0397850", "ami-*")),
            FilterRule::new("aws_instance.*")
                .with_pattern(".image", DiffPattern::new("ami-0397850", "ami-*")),
        ];

        for rule in rules {
            let mut engine = FilterEngine::new(&filter);
            let mut diff = instance_diff();
            engine
                .filter_entity("aws_instance.example", &mut diff, &[rule])
                .unwrap();
            assert_eq!(diff, instance_diff());
        }
    }

    #[test]
    fn test_filter_rules_are_disjunctive() {
        let filter = InspectFilter::default();
        let mut engine = FilterEngine::new(&filter);
        let mut diff = instance_diff();

        let rules = [
            ami_rule("*", "*"),
            FilterRule::new("*").with_pattern(".instance_*", DiffPattern::new("t2.*", "t2.*")),
        ];
        assert_eq!(
            engine
                .filter_entity("aws_instance.example", &mut diff, &rules)
                .unwrap(),
            2
        );
        assert!(diff.is_empty());
    }

    #[test]
    fn test_filter_collection_prunes_empty_entities() {
        let filter = InspectFilter::default();
        let mut engine = FilterEngine::new(&filter);
        let mut collection = DiffCollection::from([
            ("aws_instance.example".to_string(), instance_diff()),
            (
                "aws_s3_bucket.logs".to_string(),
                EntityDiff::from([(".acl".to_string(), AttributeDiff::new("private", "public"))]),
            ),
        ]);

        let rules = [FilterRule::new("aws_instance.*")
            .with_pattern("*", DiffPattern::new("*", "*"))];
        let stats = engine.filter_collection(&mut collection, &rules).unwrap();

        assert_eq!(stats.suppressed_attributes, 2);
        assert_eq!(stats.pruned_entities, 1);
        assert!(!collection.contains_key("aws_instance.example"));
        assert!(collection.contains_key("aws_s3_bucket.logs"));
    }

    #[test]
    fn test_apply_uses_rules_per_collection() {
        let filter = InspectFilter {
            output_changes: vec![FilterRule::new("*").with_pattern("*", DiffPattern::new("*", "*"))],
            ..InspectFilter::default()
        };
        let mut diff = InspectionDiff::default();
        diff.outputs.insert(
            "endpoint".to_string(),
            EntityDiff::from([(".".to_string(), AttributeDiff::new("a", "b"))]),
        );
        diff.resources
            .insert("aws_instance.example".to_string(), instance_diff());

        let stats = FilterEngine::new(&filter).apply(&mut diff).unwrap();

        assert_eq!(stats.pruned_entities, 1);
        assert!(diff.outputs.is_empty());
        assert_eq!(diff.resources.len(), 1);
    }

    #[test]
    fn test_malformed_pattern_reports_location() {
        let filter = InspectFilter {
            resource_changes: vec![
                FilterRule::new("aws_instance.*").with_pattern(".ami", DiffPattern::new("ami-\\", "*"))
            ],
            ..InspectFilter::default()
        };
        let mut diff = InspectionDiff::default();
        diff.resources
            .insert("aws_instance.example".to_string(), instance_diff());

        let err = FilterEngine::new(&filter).apply(&mut diff).unwrap_err();
        match err {
            PlanError::Filter { context, source } => {
                assert!(context.starts_with("resource changes: "), "{context}");
                assert!(context.contains("aws_instance.example..ami"), "{context}");
                assert!(context.contains("ami-0397850"), "{context}");
                assert!(matches!(source, PatternError::TrailingEscape { .. }));
            }
            other => panic!("Expected Filter error, got {other:?}"),
        }
    }

    #[test]
    fn test_after_glob_checked_when_before_misses() {
        let filter = InspectFilter::default();
        let mut engine = FilterEngine::new(&filter);
        let mut diff = instance_diff();

        let rules = [FilterRule::new("*").with_pattern(".ami", DiffPattern::new("nomatch", "bad\\"))];
        let err = engine
            .filter_entity("aws_instance.example", &mut diff, &rules)
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::Filter {
                source: PatternError::TrailingEscape { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_later_rules_checked_after_entity_is_emptied() {
        let filter = InspectFilter::default();
        let mut engine = FilterEngine::new(&filter);
        let mut diff = instance_diff();

        let rules = [
            FilterRule::new("*").with_pattern("*", DiffPattern::new("*", "*")),
            FilterRule::new("bad\\"),
        ];
        let err = engine
            .filter_entity("aws_instance.example", &mut diff, &rules)
            .unwrap_err();
        match err {
            PlanError::Filter { context, .. } => {
                assert!(context.contains("aws_instance.example"), "{context}");
            }
            other => panic!("Expected Filter error, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_rejects_pattern_no_entity_reaches() {
        let filter = InspectFilter {
            drift_changes: vec![FilterRule::new("google_*")
                .with_pattern(".ami", DiffPattern::new("bad\\", "*"))],
            ..InspectFilter::default()
        };
        let mut diff = InspectionDiff::default();
        diff.resource_drifts
            .insert("aws_instance.example".to_string(), instance_diff());

        let err = FilterEngine::new(&filter).apply(&mut diff).unwrap_err();
        match err {
            PlanError::Filter { context, source } => {
                assert!(context.starts_with("resource drift: "), "{context}");
                assert!(context.contains("in rule google_*"), "{context}");
                assert!(matches!(source, PatternError::TrailingEscape { .. }));
            }
            other => panic!("Expected Filter error, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_checks_rules_of_empty_collections() {
        let filter = InspectFilter {
            output_changes: vec![FilterRule::new("endpoint?\\")],
            ..InspectFilter::default()
        };
        let mut diff = InspectionDiff::default();
        assert!(FilterEngine::new(&filter).apply(&mut diff).is_err());
    }
}
