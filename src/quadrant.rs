//! Impact/effort matrix bucketing on raw ratings.

use serde::{Deserialize, Serialize};

use crate::entity::Feature;

/// Raw impact at or above this counts as high impact.
pub const HIGH_IMPACT_RATING: u8 = 6;

/// Raw effort at or below this counts as low effort.
pub const LOW_EFFORT_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    QuickWins,
    MajorProjects,
    FillIns,
    Questionable,
}

impl Quadrant {
    /// Display order, most attractive first.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWins,
        Quadrant::MajorProjects,
        Quadrant::FillIns,
        Quadrant::Questionable,
    ];

    pub fn classify(feature: &Feature) -> Self {
        let high_impact = feature.impact >= HIGH_IMPACT_RATING;
        let low_effort = feature.effort <= LOW_EFFORT_RATING;
        match (high_impact, low_effort) {
            (true, true) => Quadrant::QuickWins,
            (true, false) => Quadrant::MajorProjects,
            (false, true) => Quadrant::FillIns,
            (false, false) => Quadrant::Questionable,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::QuickWins => "Quick Wins",
            Quadrant::MajorProjects => "Major Projects",
            Quadrant::FillIns => "Fill-ins",
            Quadrant::Questionable => "Questionable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::QuickWins => "High Impact, Low Effort",
            Quadrant::MajorProjects => "High Impact, High Effort",
            Quadrant::FillIns => "Low Impact, Low Effort",
            Quadrant::Questionable => "Low Impact, High Effort",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quadrant::QuickWins => write!(f, "quick-wins"),
            Quadrant::MajorProjects => write!(f, "major-projects"),
            Quadrant::FillIns => write!(f, "fill-ins"),
            Quadrant::Questionable => write!(f, "questionable"),
        }
    }
}

impl std::str::FromStr for Quadrant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "quick-wins" | "quick-win" => Ok(Quadrant::QuickWins),
            "major-projects" | "major-project" => Ok(Quadrant::MajorProjects),
            "fill-ins" | "fill-in" => Ok(Quadrant::FillIns),
            "questionable" => Ok(Quadrant::Questionable),
            _ => Err(format!("Invalid quadrant: {}", s)),
        }
    }
}

/// Features grouped by quadrant, in [`Quadrant::ALL`] order.
///
/// Every quadrant is present, possibly empty. Input order is kept within a group.
pub fn group_by_quadrant(features: &[Feature]) -> Vec<(Quadrant, Vec<&Feature>)> {
    Quadrant::ALL
        .iter()
        .map(|&quadrant| {
            let members = features
                .iter()
                .filter(|feature| Quadrant::classify(feature) == quadrant)
                .collect();
            (quadrant, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(title: &str, impact: u8, effort: u8) -> Feature {
        Feature::new(title.to_string(), impact, effort)
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Quadrant::classify(&feature("a", 6, 5)), Quadrant::QuickWins);
        assert_eq!(Quadrant::classify(&feature("b", 6, 6)), Quadrant::MajorProjects);
        assert_eq!(Quadrant::classify(&feature("c", 5, 5)), Quadrant::FillIns);
        assert_eq!(Quadrant::classify(&feature("d", 5, 6)), Quadrant::Questionable);
    }

    #[test]
    fn test_group_by_quadrant_covers_all() {
        let features = vec![
            feature("quick", 9, 1),
            feature("questionable", 1, 9),
            feature("quick-too", 7, 3),
        ];
        let groups = group_by_quadrant(&features);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, Quadrant::QuickWins);
        let titles: Vec<&str> = groups[0].1.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["quick", "quick-too"]);
        assert!(groups[1].1.is_empty());
        assert!(groups[2].1.is_empty());
        assert_eq!(groups[3].1.len(), 1);
    }

    #[test]
    fn test_parse_and_display() {
        for q in Quadrant::ALL {
            assert_eq!(q.to_string().parse::<Quadrant>().unwrap(), q);
        }
        assert_eq!("quick_wins".parse::<Quadrant>().unwrap(), Quadrant::QuickWins);
        assert!("sideways".parse::<Quadrant>().is_err());
    }

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&Quadrant::FillIns).unwrap();
        assert_eq!(json, "\"fill-ins\"");
    }
}
