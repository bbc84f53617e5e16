mod apollo;
mod one_mg;
mod truemeds;

use super::profile::VariantProfile;
use crate::core::types::Site;

pub fn profile_for(site: Site) -> &'static VariantProfile {
    match site {
        Site::OneMg => &one_mg::PROFILE,
        Site::Apollo => &apollo::PROFILE,
        Site::Truemeds => &truemeds::PROFILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::profile::Stage;

    #[test]
    fn every_rule_targets_a_declared_field() {
        for site in Site::ALL {
            let profile = profile_for(site);
            assert_eq!(profile.site, site);
            for stage in profile.stages {
                let targets: Vec<&str> = match stage {
                    Stage::Classify(rules) => rules.iter().map(|r| r.field).collect(),
                    Stage::Headings(spec) => spec.rules.iter().map(|r| r.field).collect(),
                    Stage::Safety(spec) => vec![spec.field],
                    Stage::Fallback(spec) => spec.affinity.iter().map(|(f, _)| *f).collect(),
                    _ => Vec::new(),
                };
                for field in targets {
                    assert!(
                        profile.fields.contains(&field),
                        "{}: {} is not a field",
                        site,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn stage_order_per_site() {
        let order = |site| {
            profile_for(site)
                .stages
                .iter()
                .map(Stage::name)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            order(Site::OneMg),
            ["classify", "substitutes", "fact_box", "faqs", "headings", "classify"]
        );
        assert_eq!(
            order(Site::Apollo),
            ["classify", "safety", "faqs", "substitutes", "fallback"]
        );
        assert_eq!(
            order(Site::Truemeds),
            ["headings", "classify", "fact_box", "faqs", "fallback"]
        );
    }
}
