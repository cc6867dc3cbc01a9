use crate::domain::Version;

/// Picks the newest version out of a set of candidates.
///
/// Invalid candidates are always ignored. Unstable candidates (those with a
/// special suffix such as `-beta1`) are ignored unless `include_unstable` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateChecker {
    pub include_unstable: bool,
}

impl UpdateChecker {
    pub fn new(include_unstable: bool) -> Self {
        UpdateChecker { include_unstable }
    }

    /// Whether a candidate takes part in update checks
    pub fn accepts(&self, candidate: &Version) -> bool {
        candidate.is_valid()
            && !candidate.is_empty()
            && (self.include_unstable || !candidate.is_unstable())
    }

    /// The greatest accepted candidate
    pub fn newest<'a, I>(&self, candidates: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        self.newest_by(candidates, |candidate| candidate)
    }

    /// The greatest accepted candidate that is strictly newer than `current`
    pub fn find_update<'a, I>(&self, current: &Version, candidates: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        self.find_update_by(current, candidates, |candidate| candidate)
    }

    /// Like [`newest`](UpdateChecker::newest) for items that carry a version.
    pub fn newest_by<'a, T, I, F>(&self, items: I, version_of: F) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> &Version,
    {
        items
            .into_iter()
            .filter(|item| {
                let version = version_of(*item);
                let accepted = self.accepts(version);
                if !accepted {
                    tracing::debug!(version = version.raw_text(), "ignoring candidate version");
                }
                accepted
            })
            .max_by(|lhs, rhs| version_of(*lhs).compare(version_of(*rhs)))
    }

    /// Like [`find_update`](UpdateChecker::find_update) for items that carry a version.
    pub fn find_update_by<'a, T, I, F>(
        &self,
        current: &Version,
        items: I,
        version_of: F,
    ) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> &Version,
    {
        let newest = self.newest_by(items, &version_of)?;
        version_of(newest).greater_than(current).then_some(newest)
    }
}

/// Sort versions in ascending order
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(Version::compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(texts: &[&str]) -> Vec<Version> {
        texts.iter().map(|text| Version::parse(text)).collect()
    }

    #[test]
    fn test_newest_skips_unstable_by_default() {
        let candidates = versions(&["1.0", "1.2-beta", "1.1", "junk"]);
        let newest = UpdateChecker::default().newest(&candidates).unwrap();
        assert_eq!(newest.to_string(), "1.1");
    }

    #[test]
    fn test_newest_includes_unstable_when_asked() {
        let candidates = versions(&["1.0", "1.2-beta", "1.1"]);
        let newest = UpdateChecker::new(true).newest(&candidates).unwrap();
        assert_eq!(newest.to_string(), "1.2-beta");
    }

    #[test]
    fn test_newest_of_nothing() {
        let candidates = versions(&["junk", "", "2.0alpha"]);
        assert!(UpdateChecker::default().newest(&candidates).is_none());
    }

    #[test]
    fn test_find_update() {
        let candidates = versions(&["1.0.0", "1.0.1", "0.9"]);
        let current = Version::parse("1.0");
        let update = UpdateChecker::default()
            .find_update(&current, &candidates)
            .unwrap();
        assert_eq!(update.to_string(), "1.0.1");
    }

    #[test]
    fn test_find_update_when_up_to_date() {
        let candidates = versions(&["1.0.0", "0.9"]);
        let current = Version::parse("1.0");
        assert!(UpdateChecker::default()
            .find_update(&current, &candidates)
            .is_none());
    }

    #[test]
    fn test_find_update_from_prerelease() {
        let candidates = versions(&["1.0.0"]);
        let current = Version::parse("1.0.0-rc2");
        assert!(UpdateChecker::default()
            .find_update(&current, &candidates)
            .is_some());
    }

    #[test]
    fn test_find_update_from_invalid_current() {
        let candidates = versions(&["0.1"]);
        let current = Version::parse("unknown");
        assert!(UpdateChecker::default()
            .find_update(&current, &candidates)
            .is_some());
    }

    #[test]
    fn test_find_update_by_tagged_items() {
        let tags: Vec<(&str, Version)> = ["v1.0", "v1.3", "v1.4-beta"]
            .iter()
            .map(|tag| (*tag, Version::parse(&tag[1..])))
            .collect();
        let checker = UpdateChecker::default();

        let update = checker
            .find_update_by(&Version::parse("1.2"), &tags, |item| &item.1)
            .unwrap();
        assert_eq!(update.0, "v1.3");

        assert!(checker
            .find_update_by(&Version::parse("1.3.0"), &tags, |item| &item.1)
            .is_none());
    }

    #[test]
    fn test_sort_versions() {
        let mut list = versions(&["1.10", "1.2", "1.2rc1", "bad", "1.9.1"]);
        sort_versions(&mut list);
        let sorted: Vec<String> = list.iter().map(Version::to_string).collect();
        assert_eq!(sorted, ["bad", "1.2rc1", "1.2", "1.9.1", "1.10"]);
    }
}
