//! Photo model and vote ledger

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// A single voter's choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Like,
    Dislike,
}

/// What a vote call did to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOutcome {
    /// First vote by this voter
    Cast,
    /// Same choice repeated, the vote was withdrawn
    Retracted,
    /// Voter switched sides
    Changed,
}

impl std::fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cast => write!(f, "cast"),
            Self::Retracted => write!(f, "retracted"),
            Self::Changed => write!(f, "changed"),
        }
    }
}

/// Per-photo record of who voted what.
///
/// Counters are only changed together with the entry map, so `likes` and
/// `dislikes` always equal the number of entries holding that choice.
#[derive(Debug, Clone, Default)]
pub struct VoteLedger {
    votes: HashMap<Uuid, VoteChoice>,
    likes: u32,
    dislikes: u32,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    pub fn dislikes(&self) -> u32 {
        self.dislikes
    }

    /// Current choice of a voter, if any
    pub fn vote_of(&self, voter_id: &Uuid) -> Option<VoteChoice> {
        self.votes.get(voter_id).copied()
    }

    /// Number of voters with a standing vote
    pub fn voter_count(&self) -> usize {
        self.votes.len()
    }

    /// Toggle a vote.
    ///
    /// Repeating the standing choice withdraws it, a different choice
    /// replaces it, and a first vote is recorded as-is.
    pub fn apply(&mut self, voter_id: Uuid, choice: VoteChoice) -> VoteOutcome {
        match self.votes.get(&voter_id).copied() {
            None => {
                self.votes.insert(voter_id, choice);
                *self.counter_mut(choice) += 1;
                VoteOutcome::Cast
            }
            Some(previous) if previous == choice => {
                self.votes.remove(&voter_id);
                *self.counter_mut(choice) -= 1;
                VoteOutcome::Retracted
            }
            Some(previous) => {
                self.votes.insert(voter_id, choice);
                *self.counter_mut(choice) += 1;
                *self.counter_mut(previous) -= 1;
                VoteOutcome::Changed
            }
        }
    }

    fn counter_mut(&mut self, choice: VoteChoice) -> &mut u32 {
        match choice {
            VoteChoice::Like => &mut self.likes,
            VoteChoice::Dislike => &mut self.dislikes,
        }
    }
}

/// Uploaded photo
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub user_profile_picture: String,
    pub category_id: Uuid,
    pub image_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub is_archived: bool,
    votes: VoteLedger,
}

impl Photo {
    /// Create a fresh upload with no votes
    pub fn new(owner: &User, category_id: Uuid, image_url: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: owner.id,
            username: owner.username.clone(),
            user_profile_picture: owner.profile_picture.clone(),
            category_id,
            image_url: image_url.to_string(),
            uploaded_at: Utc::now(),
            is_archived: false,
            votes: VoteLedger::new(),
        }
    }

    pub fn likes(&self) -> u32 {
        self.votes.likes()
    }

    pub fn dislikes(&self) -> u32 {
        self.votes.dislikes()
    }

    /// Likes minus dislikes
    pub fn score(&self) -> i64 {
        i64::from(self.likes()) - i64::from(self.dislikes())
    }

    pub fn votes(&self) -> &VoteLedger {
        &self.votes
    }

    /// Toggle `voter_id`'s vote on this photo
    pub fn apply_vote(&mut self, voter_id: Uuid, choice: VoteChoice) -> VoteOutcome {
        self.votes.apply(voter_id, choice)
    }

    /// Likes gained per hour since upload, counting at least one hour
    pub fn likes_per_hour(&self, now: DateTime<Utc>) -> f64 {
        let hours = (now - self.uploaded_at).num_milliseconds() as f64 / 3_600_000.0;
        f64::from(self.likes()) / hours.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_retract_dislike_scenario() {
        let voter = Uuid::new_v4();
        let mut ledger = VoteLedger::new();

        assert_eq!(ledger.apply(voter, VoteChoice::Like), VoteOutcome::Cast);
        assert_eq!((ledger.likes(), ledger.dislikes()), (1, 0));

        assert_eq!(ledger.apply(voter, VoteChoice::Like), VoteOutcome::Retracted);
        assert_eq!((ledger.likes(), ledger.dislikes()), (0, 0));
        assert_eq!(ledger.vote_of(&voter), None);

        assert_eq!(ledger.apply(voter, VoteChoice::Dislike), VoteOutcome::Cast);
        assert_eq!((ledger.likes(), ledger.dislikes()), (0, 1));
    }

    #[test]
    fn test_changing_side_moves_both_counters() {
        let voter = Uuid::new_v4();
        let mut ledger = VoteLedger::new();
        ledger.apply(voter, VoteChoice::Dislike);

        assert_eq!(ledger.apply(voter, VoteChoice::Like), VoteOutcome::Changed);
        assert_eq!((ledger.likes(), ledger.dislikes()), (1, 0));
        assert_eq!(ledger.vote_of(&voter), Some(VoteChoice::Like));
        assert_eq!(ledger.voter_count(), 1);
    }

    #[test]
    fn test_repeated_vote_undoes_the_first() {
        let voter = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut ledger = VoteLedger::new();
        ledger.apply(other, VoteChoice::Like);

        for choice in [VoteChoice::Like, VoteChoice::Dislike] {
            let before = (ledger.likes(), ledger.dislikes());
            ledger.apply(voter, choice);
            ledger.apply(voter, choice);
            assert_eq!((ledger.likes(), ledger.dislikes()), before);
        }
    }

    #[test]
    fn test_counts_match_entries_over_vote_sequences() {
        let voters: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let sequence = [
            VoteChoice::Like,
            VoteChoice::Dislike,
            VoteChoice::Like,
            VoteChoice::Like,
            VoteChoice::Dislike,
            VoteChoice::Dislike,
        ];
        let mut ledger = VoteLedger::new();

        for (step, choice) in sequence.iter().cycle().take(40).enumerate() {
            ledger.apply(voters[step % voters.len()], *choice);

            let likes = voters
                .iter()
                .filter(|v| ledger.vote_of(v) == Some(VoteChoice::Like))
                .count();
            let dislikes = voters
                .iter()
                .filter(|v| ledger.vote_of(v) == Some(VoteChoice::Dislike))
                .count();
            assert_eq!(ledger.likes() as usize, likes);
            assert_eq!(ledger.dislikes() as usize, dislikes);
            assert!(likes + dislikes <= voters.len());
        }
    }

    #[test]
    fn test_likes_per_hour_floors_age_at_one_hour() {
        let owner = User {
            id: Uuid::new_v4(),
            username: "alex_photo".to_string(),
            email: "alex@example.com".to_string(),
            password_hash: String::new(),
            profile_picture: String::new(),
            role: crate::constants::roles::MEMBER.to_string(),
            badges: Vec::new(),
            selected_badges: Vec::new(),
            created_at: Utc::now(),
        };
        let mut photo = Photo::new(&owner, Uuid::new_v4(), "https://img.example/p.jpg");
        for _ in 0..6 {
            photo.apply_vote(Uuid::new_v4(), VoteChoice::Like);
        }

        let fresh = photo.uploaded_at + chrono::Duration::minutes(10);
        assert_eq!(photo.likes_per_hour(fresh), 6.0);

        let later = photo.uploaded_at + chrono::Duration::hours(3);
        assert_eq!(photo.likes_per_hour(later), 2.0);
    }
}
