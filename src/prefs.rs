use anyhow::{Result, bail};

use crate::models::UserProfile;
use crate::store::PrefStore;

pub const LIKED_JOBS_KEY: &str = "liked_jobs";
pub const USER_PROFILE_KEY: &str = "user_profile";

/// Saved job ids in the order they were liked. Only ids are persisted; the
/// full records are refetched from the provider when the list is viewed.
pub fn liked_jobs(store: &PrefStore) -> Vec<String> {
    store.read(LIKED_JOBS_KEY, Vec::new())
}

pub fn is_liked(store: &PrefStore, job_id: &str) -> bool {
    liked_jobs(store).iter().any(|id| id == job_id)
}

/// Append `job_id` if absent. Returns false when it was already liked, so
/// liking twice leaves the list unchanged.
pub fn like(store: &PrefStore, job_id: &str) -> bool {
    let mut ids = liked_jobs(store);
    if ids.iter().any(|id| id == job_id) {
        return false;
    }
    ids.push(job_id.to_string());
    store.write(LIKED_JOBS_KEY, &ids);
    true
}

/// Remove `job_id`. Returns false when it was not in the list.
pub fn unlike(store: &PrefStore, job_id: &str) -> bool {
    let mut ids = liked_jobs(store);
    let before = ids.len();
    ids.retain(|id| id != job_id);
    if ids.len() == before {
        return false;
    }
    store.write(LIKED_JOBS_KEY, &ids);
    true
}

pub fn clear_liked(store: &PrefStore) {
    store.write(LIKED_JOBS_KEY, &Vec::<String>::new());
}

pub fn profile(store: &PrefStore) -> Option<UserProfile> {
    store.read(USER_PROFILE_KEY, None)
}

/// Validate, trim, and persist the profile as a whole-record replacement.
/// Nothing is written when the name or desired position is empty after
/// trimming.
pub fn save_profile(
    store: &PrefStore,
    name: &str,
    desired_position: &str,
    about_me: &str,
) -> Result<UserProfile> {
    let name = name.trim();
    let desired_position = desired_position.trim();

    if name.is_empty() {
        bail!("Profile name must not be empty");
    }
    if desired_position.is_empty() {
        bail!("Desired position must not be empty");
    }

    let profile = UserProfile {
        name: name.to_string(),
        desired_position: desired_position.to_string(),
        about_me: about_me.trim().to_string(),
    };
    store.write(USER_PROFILE_KEY, &profile);
    Ok(profile)
}

pub fn clear_profile(store: &PrefStore) {
    store.remove(USER_PROFILE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PrefStore {
        PrefStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_liked_jobs_default_empty() {
        let store = store();
        assert!(liked_jobs(&store).is_empty());
    }

    #[test]
    fn test_like_appends_in_order() {
        let store = store();
        assert!(like(&store, "3"));
        assert!(like(&store, "1"));
        assert_eq!(liked_jobs(&store), vec!["3", "1"]);
    }

    #[test]
    fn test_like_is_idempotent() {
        let store = store();
        assert!(like(&store, "2"));
        assert!(!like(&store, "2"));
        assert_eq!(liked_jobs(&store), vec!["2"]);
    }

    #[test]
    fn test_unlike_removes_id() {
        let store = store();
        like(&store, "2");
        assert_eq!(liked_jobs(&store), vec!["2"]);
        assert!(unlike(&store, "2"));
        assert!(liked_jobs(&store).is_empty());
    }

    #[test]
    fn test_unlike_absent_id_reports_false() {
        let store = store();
        like(&store, "1");
        assert!(!unlike(&store, "999"));
        assert_eq!(liked_jobs(&store), vec!["1"]);
    }

    #[test]
    fn test_is_liked() {
        let store = store();
        like(&store, "1");
        assert!(is_liked(&store, "1"));
        assert!(!is_liked(&store, "2"));
    }

    #[test]
    fn test_clear_liked_empties_list() {
        let store = store();
        like(&store, "1");
        like(&store, "2");
        clear_liked(&store);
        assert!(liked_jobs(&store).is_empty());
    }

    #[test]
    fn test_profile_default_absent() {
        let store = store();
        assert!(profile(&store).is_none());
    }

    #[test]
    fn test_save_profile_round_trips() {
        let store = store();
        let saved = save_profile(&store, "Ada Lovelace", "Software Engineer", "First programmer.")
            .unwrap();
        assert_eq!(profile(&store), Some(saved));
    }

    #[test]
    fn test_save_profile_trims_fields() {
        let store = store();
        save_profile(&store, "  Ada  ", " Engineer ", "  about  ").unwrap();
        let saved = profile(&store).unwrap();
        assert_eq!(saved.name, "Ada");
        assert_eq!(saved.desired_position, "Engineer");
        assert_eq!(saved.about_me, "about");
    }

    #[test]
    fn test_save_profile_rejects_blank_name() {
        let store = store();
        assert!(save_profile(&store, "   ", "Engineer", "").is_err());
        assert!(profile(&store).is_none());
    }

    #[test]
    fn test_save_profile_rejects_blank_position() {
        let store = store();
        assert!(save_profile(&store, "Ada", "", "").is_err());
        assert!(profile(&store).is_none());
    }

    #[test]
    fn test_save_profile_allows_empty_about() {
        let store = store();
        let saved = save_profile(&store, "Ada", "Engineer", "").unwrap();
        assert_eq!(saved.about_me, "");
    }

    #[test]
    fn test_save_profile_replaces_wholesale() {
        let store = store();
        save_profile(&store, "Ada", "Engineer", "old about").unwrap();
        save_profile(&store, "Grace", "Admiral", "").unwrap();
        let saved = profile(&store).unwrap();
        assert_eq!(saved.name, "Grace");
        assert_eq!(saved.about_me, "");
    }

    #[test]
    fn test_clear_profile_removes_record() {
        let store = store();
        save_profile(&store, "Ada", "Engineer", "").unwrap();
        clear_profile(&store);
        assert!(profile(&store).is_none());
    }
}
