use std::collections::BTreeMap;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{DirectoryError, DirectoryResult};
use crate::model::{Entry, MonthDay};
use crate::name::{normalize, prettify};
use crate::queries::birthday_queries;
use crate::validation;

/// In-memory contact directory keyed by case-insensitive name.
///
/// Every operation that takes a name looks it up by its normalized (lowercase)
/// form, so "Bob", "bob" and "BOB" all refer to the same entry. Names handed
/// back to the caller are in display form (see [`prettify`]).
///
/// Entries are kept in key order, which also fixes the tie-break of
/// [`Directory::get_next_birthday`]: equal distances go to the
/// alphabetically first key.
#[derive(Debug)]
pub struct Directory<C = SystemClock> {
    entries: BTreeMap<String, Entry>,
    clock: C,
}

impl Directory<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Directory<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Directory<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: BTreeMap::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an empty entry for `name`. Does nothing if the entry already exists.
    pub fn add_entry(&mut self, name: &str) -> DirectoryResult<()> {
        let name = validation::valid_name(name)?;
        let key = normalize(name);
        if self.entries.contains_key(&key) {
            debug!(key = %key, "entry already present");
            return Ok(());
        }
        debug!(key = %key, "adding entry");
        self.entries.insert(key, Entry::create());
        Ok(())
    }

    /// Removes the entry for `name`, if there is one.
    pub fn remove_entry(&mut self, name: &str) {
        let key = normalize(name);
        if self.entries.remove(&key).is_some() {
            debug!(key = %key, "removed entry");
        }
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize(name))
    }

    /// Display names of all entries, sorted alphabetically.
    pub fn get_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().map(|k| prettify(k)).collect();
        names.sort();
        names
    }

    /// Display names with their entries, sorted by display name.
    pub fn list_entries(&self) -> Vec<(String, &Entry)> {
        let mut listed: Vec<(String, &Entry)> =
            self.entries.iter().map(|(k, e)| (prettify(k), e)).collect();
        listed.sort_by(|a, b| a.0.cmp(&b.0));
        listed
    }

    pub fn set_phone_number(&mut self, name: &str, number: u64) -> DirectoryResult<()> {
        let entry = self.entry_mut(name)?;
        entry.phone_number = Some(number);
        debug!(key = %normalize(name), "phone number set");
        Ok(())
    }

    /// Fails with `PhoneNotSet` if the entry exists but has no number yet.
    pub fn get_phone_number(&self, name: &str) -> DirectoryResult<u64> {
        self.entry(name)?
            .phone_number
            .ok_or_else(|| DirectoryError::PhoneNotSet {
                name: prettify(&normalize(name)),
            })
    }

    /// Sets the birthday for `name`. The date is checked before the entry is
    /// looked up, and nothing changes on failure.
    pub fn set_birthday(&mut self, name: &str, month: u32, day: u32) -> DirectoryResult<()> {
        let birthday = MonthDay::new(month, day)?;
        let entry = self.entry_mut(name)?;
        entry.birthday = Some(birthday);
        debug!(key = %normalize(name), birthday = %birthday, "birthday set");
        Ok(())
    }

    /// Fails with `BirthdayNotSet` if the entry exists but has no birthday yet.
    pub fn get_birthday(&self, name: &str) -> DirectoryResult<MonthDay> {
        self.entry(name)?
            .birthday
            .ok_or_else(|| DirectoryError::BirthdayNotSet {
                name: prettify(&normalize(name)),
            })
    }

    /// Display name of the entry whose birthday comes soonest, counting today.
    pub fn get_next_birthday(&self) -> DirectoryResult<String> {
        self.next_birthday_entry().map(|(name, _)| name)
    }

    /// Display name and birthday of the entry whose birthday comes soonest.
    pub fn next_birthday_entry(&self) -> DirectoryResult<(String, MonthDay)> {
        self.next_birthday_as_of(self.clock.today())
    }

    /// Like [`Directory::next_birthday_entry`], relative to an explicit date.
    /// Entries without a birthday are skipped.
    pub fn next_birthday_as_of(&self, today: MonthDay) -> DirectoryResult<(String, MonthDay)> {
        let (key, birthday) = birthday_queries::next_birthday(self.birthdays(), today)
            .ok_or(DirectoryError::NoBirthdays)?;
        debug!(key = %key, birthday = %birthday, today = %today, "next birthday");
        Ok((prettify(key), birthday))
    }

    /// Display names and birthdays of every entry with a birthday, soonest first.
    pub fn get_upcoming_birthdays(&self) -> Vec<(String, MonthDay)> {
        birthday_queries::upcoming_birthdays(self.birthdays(), self.clock.today())
            .into_iter()
            .map(|(key, birthday)| (prettify(key), birthday))
            .collect()
    }

    fn birthdays(&self) -> impl Iterator<Item = (&str, &MonthDay)> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| entry.birthday.as_ref().map(|b| (key.as_str(), b)))
    }

    fn entry(&self, name: &str) -> DirectoryResult<&Entry> {
        self.entries
            .get(&normalize(name))
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })
    }

    fn entry_mut(&mut self, name: &str) -> DirectoryResult<&mut Entry> {
        self.entries
            .get_mut(&normalize(name))
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })
    }
}
