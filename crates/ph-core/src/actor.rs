use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rank::Rank;

/// Serial identifier of an actor on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surname, first name and optional patronymic. The triple is unique per roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName {
    /// Family name.
    pub last: String,
    /// Given name.
    pub first: String,
    /// Patronymic, if the actor has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
}

impl FullName {
    /// Build a name without a patronymic.
    pub fn new(last: impl Into<String>, first: impl Into<String>) -> Self {
        Self {
            last: last.into(),
            first: first.into(),
            patronymic: None,
        }
    }

    /// Set the patronymic.
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.last, self.first)?;
        if let Some(p) = &self.patronymic {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

/// Editable attributes of an actor, used to hire or update one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// Identity of the actor.
    pub name: FullName,
    /// Seniority tier.
    pub rank: Rank,
    /// Years of credited work.
    pub experience: u32,
    /// Awards received so far.
    pub awards_count: u32,
}

impl ActorProfile {
    /// A fresh beginner with no experience and no awards.
    pub fn new(name: FullName) -> Self {
        Self {
            name,
            rank: Rank::Beginner,
            experience: 0,
            awards_count: 0,
        }
    }

    /// Set the rank.
    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    /// Set the years of experience.
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Set the number of awards.
    pub fn with_awards(mut self, awards_count: u32) -> Self {
        self.awards_count = awards_count;
        self
    }
}

/// A member of the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Roster identifier.
    pub id: ActorId,
    /// Identity of the actor.
    pub name: FullName,
    /// Seniority tier.
    pub rank: Rank,
    /// Years of credited work.
    pub experience: u32,
    /// Awards received so far.
    pub awards_count: u32,
}

impl Actor {
    /// Combine an identifier with a profile.
    pub fn from_profile(id: ActorId, profile: ActorProfile) -> Self {
        Self {
            id,
            name: profile.name,
            rank: profile.rank,
            experience: profile.experience,
            awards_count: profile.awards_count,
        }
    }

    /// The editable part of this actor.
    pub fn profile(&self) -> ActorProfile {
        ActorProfile {
            name: self.name.clone(),
            rank: self.rank,
            experience: self.experience,
            awards_count: self.awards_count,
        }
    }

    /// Award one point; returns the new total.
    pub fn award(&mut self) -> u32 {
        self.awards_count += 1;
        self.awards_count
    }

    /// Move up one rank. Returns the new rank, or `None` if already at the top.
    pub fn promote(&mut self) -> Option<Rank> {
        let next = self.rank.next()?;
        self.rank = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_display() {
        let name = FullName::new("Ivanov", "Ivan").with_patronymic("Ivanovich");
        assert_eq!(name.to_string(), "Ivanov Ivan Ivanovich");
        assert_eq!(FullName::new("Smith", "Anna").to_string(), "Smith Anna");
    }

    #[test]
    fn profile_builder() {
        let p = ActorProfile::new(FullName::new("Petrov", "Petr"))
            .with_rank(Rank::Lead)
            .with_experience(5)
            .with_awards(2);
        assert_eq!(p.rank, Rank::Lead);
        assert_eq!(p.experience, 5);
        assert_eq!(p.awards_count, 2);
    }

    #[test]
    fn promote_stops_at_top() {
        let profile = ActorProfile::new(FullName::new("A", "B")).with_rank(Rank::Honored);
        let mut actor = Actor::from_profile(ActorId(1), profile);
        assert_eq!(actor.promote(), Some(Rank::Peoples));
        assert_eq!(actor.promote(), None);
        assert_eq!(actor.rank, Rank::Peoples);
    }

    #[test]
    fn award_increments() {
        let mut actor = Actor::from_profile(ActorId(1), ActorProfile::new(FullName::new("A", "B")));
        assert_eq!(actor.award(), 1);
        assert_eq!(actor.award(), 2);
    }
}
