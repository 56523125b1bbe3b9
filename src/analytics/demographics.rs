//! Demographic aggregates: birth months and first names

use super::results::{BirthMonthInfo, FirstNameInfo, UserInfo};
use crate::snapshot::SnapshotStore;
use tracing::debug;

/// Birth-month distribution.
///
/// The most popular month is the smallest-numbered month among those with the
/// highest count; the least popular is the smallest-numbered month among
/// those with the lowest nonzero count. Users born in each are listed by
/// ascending id.
pub fn birth_month_info(store: &SnapshotStore) -> BirthMonthInfo {
    let mut users_with_month = 0;
    let mut most: Option<(u8, usize)> = None;
    let mut least: Option<(u8, usize)> = None;

    // Groups arrive in ascending month order and are never empty
    for (month, ids) in store.birth_month_groups() {
        let count = ids.len();
        users_with_month += count;
        if most.map_or(true, |(_, best)| count > best) {
            most = Some((month, count));
        }
        if least.map_or(true, |(_, best)| count < best) {
            least = Some((month, count));
        }
    }

    let most_popular_month = most.map(|(month, _)| month);
    let least_popular_month = least.map(|(month, _)| month);
    let users_in = |month: Option<u8>| match month {
        Some(m) => UserInfo::lookup_all(store, store.users_born_in_month(m)),
        None => Vec::new(),
    };

    debug!(
        "birth_month_info: {} users, most popular {:?}, least popular {:?}",
        users_with_month, most_popular_month, least_popular_month
    );

    BirthMonthInfo {
        users_with_month,
        most_popular_month,
        least_popular_month,
        most_popular_month_users: users_in(most_popular_month),
        least_popular_month_users: users_in(least_popular_month),
    }
}

/// Longest, shortest and most common first names.
///
/// Lengths are counted in characters. Every list is distinct and ascending;
/// all names tied for the most holders are returned.
pub fn name_info(store: &SnapshotStore) -> FirstNameInfo {
    let groups: Vec<(&str, usize, usize)> = store
        .first_name_groups()
        .map(|(name, ids)| (name, name.chars().count(), ids.len()))
        .collect();

    let Some(max_len) = groups.iter().map(|&(_, len, _)| len).max() else {
        return FirstNameInfo::default();
    };
    let min_len = groups.iter().map(|&(_, len, _)| len).min().unwrap_or(max_len);
    let most_common_count = groups.iter().map(|&(_, _, holders)| holders).max().unwrap_or(0);

    // Groups are already distinct and in ascending name order
    let names_where = |keep: &dyn Fn(usize, usize) -> bool| -> Vec<String> {
        groups
            .iter()
            .filter(|&&(_, len, holders)| keep(len, holders))
            .map(|&(name, _, _)| name.to_string())
            .collect()
    };

    let info = FirstNameInfo {
        longest_names: names_where(&|len, _| len == max_len),
        shortest_names: names_where(&|len, _| len == min_len),
        most_common_names: names_where(&|_, holders| holders == most_common_count),
        most_common_count,
    };
    debug!(
        "name_info: {} distinct names, most common held by {}",
        groups.len(),
        info.most_common_count
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::snapshot::{User, UserId};

    fn store(users: Vec<User>) -> SnapshotStore {
        SnapshotStore::build(Dataset { users, ..Dataset::default() }).unwrap()
    }

    #[test]
    fn test_birth_month_ties_pick_smallest_month() {
        // March and May tie for most (2), January and July tie for least (1)
        let store = store(vec![
            User::new(6u64, "F", "F").born_in_month(5),
            User::new(1u64, "A", "A").born_in_month(3),
            User::new(2u64, "B", "B").born_in_month(3),
            User::new(3u64, "C", "C").born_in_month(7),
            User::new(4u64, "D", "D").born_in_month(1),
            User::new(5u64, "E", "E").born_in_month(5),
            User::new(7u64, "G", "G"),
        ]);

        let info = birth_month_info(&store);
        assert_eq!(info.users_with_month, 6);
        assert_eq!(info.most_popular_month, Some(3));
        assert_eq!(info.least_popular_month, Some(1));

        let most: Vec<UserId> = info.most_popular_month_users.iter().map(|u| u.id).collect();
        assert_eq!(most, vec![UserId::new(1), UserId::new(2)]);
        let least: Vec<UserId> = info.least_popular_month_users.iter().map(|u| u.id).collect();
        assert_eq!(least, vec![UserId::new(4)]);
    }

    #[test]
    fn test_birth_month_without_data() {
        let store = store(vec![User::new(1u64, "A", "A")]);
        let info = birth_month_info(&store);

        assert_eq!(info.users_with_month, 0);
        assert_eq!(info.most_popular_month, None);
        assert_eq!(info.least_popular_month, None);
        assert!(info.most_popular_month_users.is_empty());
    }

    #[test]
    fn test_single_month_is_both_extremes() {
        let store = store(vec![
            User::new(2u64, "B", "B").born_in_month(9),
            User::new(1u64, "A", "A").born_in_month(9),
        ]);
        let info = birth_month_info(&store);
        assert_eq!(info.most_popular_month, Some(9));
        assert_eq!(info.least_popular_month, Some(9));
        assert_eq!(info.least_popular_month_users.len(), 2);
    }

    #[test]
    fn test_name_info() {
        let store = store(vec![
            User::new(1u64, "Bo", "X"),
            User::new(2u64, "Al", "X"),
            User::new(3u64, "Al", "Y"),
            User::new(4u64, "Zachary", "X"),
            User::new(5u64, "Abigail", "X"),
            User::new(6u64, "Bo", "Z"),
            User::new(7u64, "Chris", "X"),
        ]);

        let info = name_info(&store);
        assert_eq!(info.longest_names, vec!["Abigail", "Zachary"]);
        assert_eq!(info.shortest_names, vec!["Al", "Bo"]);
        assert_eq!(info.most_common_names, vec!["Al", "Bo"]);
        assert_eq!(info.most_common_count, 2);
    }

    #[test]
    fn test_name_length_counts_characters() {
        // "Zoë" is 3 characters but 4 bytes
        let store = store(vec![User::new(1u64, "Zoë", "X"), User::new(2u64, "Anna", "Y")]);
        let info = name_info(&store);
        assert_eq!(info.shortest_names, vec!["Zoë"]);
        assert_eq!(info.longest_names, vec!["Anna"]);
    }

    #[test]
    fn test_name_info_empty() {
        let info = name_info(&store(Vec::new()));
        assert_eq!(info, FirstNameInfo::default());
    }
}
