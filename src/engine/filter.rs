use crate::model::court::{Court, SportType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SportType),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(SportType::Badminton),
        CategoryFilter::Only(SportType::Pickleball),
        CategoryFilter::Only(SportType::Basketball),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(sport) => sport.label(),
        }
    }

    pub fn matches(&self, court: &Court) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(sport) => court.sport == *sport,
        }
    }
}

/// Courts whose category passes `category` and whose name or location
/// contains `query`, ignoring case. Catalog order is preserved.
pub fn filter_courts<'a>(
    catalog: &'a [Court],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Court> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|court| category.matches(court))
        .filter(|court| {
            court.name.to_lowercase().contains(&needle)
                || court.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::COURTS;

    fn ids(courts: &[&Court]) -> Vec<&'static str> {
        courts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn badminton_with_empty_query() {
        let out = filter_courts(COURTS, CategoryFilter::Only(SportType::Badminton), "");
        assert_eq!(ids(&out), vec!["c1", "c4"]);
    }

    #[test]
    fn pickle_matches_only_the_loft() {
        let out = filter_courts(COURTS, CategoryFilter::All, "pickle");
        assert_eq!(ids(&out), vec!["c2"]);
    }

    #[test]
    fn query_is_case_insensitive_and_hits_location() {
        let out = filter_courts(COURTS, CategoryFilter::All, "MIDTOWN");
        assert_eq!(ids(&out), vec!["c3"]);

        let out = filter_courts(COURTS, CategoryFilter::All, "paddle");
        assert_eq!(ids(&out), vec!["c5"]);
    }

    #[test]
    fn empty_query_and_all_returns_everything() {
        let out = filter_courts(COURTS, CategoryFilter::All, "");
        assert_eq!(ids(&out), vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn category_and_query_must_both_hold() {
        let out = filter_courts(COURTS, CategoryFilter::Only(SportType::Basketball), "badminton");
        assert!(out.is_empty());
    }

    #[test]
    fn results_are_exact_ordered_subsequence_for_every_input() {
        let queries = ["", "a", "badminton", "WAY", "st", "zzz", " ", "&"];

        for category in CategoryFilter::CHOICES {
            for query in queries {
                let out = filter_courts(COURTS, category, query);
                let q = query.to_lowercase();

                let expected: Vec<&Court> = COURTS
                    .iter()
                    .filter(|c| {
                        category.matches(c)
                            && (c.name.to_lowercase().contains(&q)
                                || c.location.to_lowercase().contains(&q))
                    })
                    .collect();
                assert_eq!(ids(&out), ids(&expected), "{category:?} / {query:?}");

                // order preserved
                let positions: Vec<usize> = out
                    .iter()
                    .map(|c| COURTS.iter().position(|x| x.id == c.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        for category in CategoryFilter::CHOICES {
            for query in ["", "ba", "lane", "DINK"] {
                let once: Vec<Court> = filter_courts(COURTS, category, query)
                    .into_iter()
                    .copied()
                    .collect();
                let twice = filter_courts(&once, category, query);
                assert_eq!(ids(&twice), once.iter().map(|c| c.id).collect::<Vec<_>>());
            }
        }
    }
}
