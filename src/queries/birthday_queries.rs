use std::cmp::Ordering;

use crate::model::MonthDay;

/// How far ahead a birthday falls relative to some date, in the coarse
/// "month first, then day" sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayDistance {
    /// Whole calendar months ahead, `0..=12`. 12 means the birthday already
    /// passed earlier this month.
    pub months: i32,
    /// Signed day difference, `birthday.day - as_of.day`.
    pub days: i32,
}

impl BirthdayDistance {
    pub fn between(as_of: MonthDay, birthday: MonthDay) -> Self {
        let mut months = (birthday.month() as i32 - as_of.month() as i32).rem_euclid(12);
        let days = birthday.day() as i32 - as_of.day() as i32;
        if months == 0 && days < 0 {
            months = 12;
        }
        Self { months, days }
    }
}

impl Ord for BirthdayDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.months
            .cmp(&other.months)
            .then(self.days.cmp(&other.days))
    }
}

impl PartialOrd for BirthdayDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds the item whose birthday comes soonest on or after `as_of`.
/// On equal distance the first item yielded wins.
pub fn next_birthday<'a, K, I>(birthdays: I, as_of: MonthDay) -> Option<(K, MonthDay)>
where
    I: IntoIterator<Item = (K, &'a MonthDay)>,
{
    let mut best: Option<(K, MonthDay, BirthdayDistance)> = None;

    for (key, birthday) in birthdays {
        let distance = BirthdayDistance::between(as_of, *birthday);
        let closer = match &best {
            Some((_, _, best_distance)) => distance < *best_distance,
            None => true,
        };
        if closer {
            best = Some((key, *birthday, distance));
        }
    }

    best.map(|(key, birthday, _)| (key, birthday))
}

/// All items ordered by how soon their birthday comes after `as_of`.
/// The sort is stable, so equal distances keep their input order.
pub fn upcoming_birthdays<'a, K, I>(birthdays: I, as_of: MonthDay) -> Vec<(K, MonthDay)>
where
    I: IntoIterator<Item = (K, &'a MonthDay)>,
{
    let mut results: Vec<(K, MonthDay, BirthdayDistance)> = birthdays
        .into_iter()
        .map(|(key, birthday)| (key, *birthday, BirthdayDistance::between(as_of, *birthday)))
        .collect();

    results.sort_by(|a, b| a.2.cmp(&b.2));

    results
        .into_iter()
        .map(|(key, birthday, _)| (key, birthday))
        .collect()
}
