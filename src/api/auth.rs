use log::{info, warn};

use crate::config::Config;
use crate::error::{Rejection, Result};
use crate::model::{Registration, Session, Voter};
use crate::store::{Coll, Slot, Store, ADMIN_AUTH};

/// Register a new voter account.
///
/// The account starts unverified and cannot vote until an administrator
/// verifies it. Does not log the voter in; sessions are only created by
/// [`login`].
pub fn register(store: &dyn Store, registration: Registration) -> Result<Voter> {
    registration.validate()?;

    let voters = Coll::<Voter>::from_store(store);
    let mut all = voters.load()?;

    // Email and student ID must be unique across registered voters.
    if all
        .iter()
        .any(|voter| voter.email.eq_ignore_ascii_case(&registration.email))
    {
        return Err(Rejection::DuplicateEmail.into());
    }
    if all
        .iter()
        .any(|voter| voter.student_id == registration.student_id)
    {
        return Err(Rejection::DuplicateStudentId.into());
    }

    let voter = registration.into_voter();
    info!("Registered voter {} ({})", voter.id, voter.email);
    all.push(voter.clone());
    voters.save(&all)?;
    Ok(voter)
}

/// Authenticate a voter by email and password.
///
/// On success the voter's public profile is written to the `currentUser`
/// slot and returned. A missing account and a wrong password are
/// indistinguishable to the caller. The configured delay simulates the
/// latency of a real authentication service.
pub fn login(store: &dyn Store, config: &Config, email: &str, password: &str) -> Result<Session> {
    let delay = config.auth_delay();
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }

    let voters = Coll::<Voter>::from_store(store).load()?;
    let voter = match voters
        .iter()
        .find(|voter| voter.email.eq_ignore_ascii_case(email))
    {
        Some(voter) if voter.check_password(password) => voter,
        _ => {
            warn!("Failed login attempt for {email}");
            return Err(Rejection::BadCredentials.into());
        }
    };

    let session = voter.profile();
    Slot::<Session>::from_store(store).save(&session)?;
    info!("Voter {} logged in", session.id);
    Ok(session)
}

/// End the current voter session, if any.
pub fn logout(store: &dyn Store) {
    Slot::<Session>::from_store(store).clear();
}

/// The currently authenticated voter's profile, if logged in.
pub fn current_session(store: &dyn Store) -> Result<Option<Session>> {
    Slot::<Session>::from_store(store).load()
}

/// Authenticate an administrator against the configured credentials.
/// On success the `adminAuth` flag is set.
pub fn admin_login(store: &dyn Store, config: &Config, username: &str, password: &str) -> Result<()> {
    if !config.verify_admin(username, password) {
        warn!("Failed admin login attempt for {username}");
        return Err(Rejection::BadCredentials.into());
    }
    store.write(ADMIN_AUTH, "true".to_string());
    info!("Administrator {username} logged in");
    Ok(())
}

/// End the administrator session, if any.
pub fn admin_logout(store: &dyn Store) {
    store.remove(ADMIN_AUTH);
}

/// Whether an administrator is currently logged in.
pub fn is_admin(store: &dyn Store) -> bool {
    store.read(ADMIN_AUTH).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use crate::store::MemoryStore;

    use super::*;

    fn test_config() -> Config {
        Config::from_json(r#"{"auth_delay_ms": 0}"#).unwrap()
    }

    #[test]
    fn register_then_login() {
        let store = MemoryStore::new();
        let config = test_config();

        let voter = register(&store, Registration::example()).unwrap();
        assert!(!voter.verified);
        // Registration alone does not create a session.
        assert_eq!(current_session(&store).unwrap(), None);

        let session = login(&store, &config, "alex.morgan@university.edu", "correct horse").unwrap();
        assert_eq!(session.id, voter.id);
        assert_eq!(current_session(&store).unwrap(), Some(session));

        logout(&store);
        assert_eq!(current_session(&store).unwrap(), None);
    }

    #[test]
    fn duplicate_email_is_rejected_without_appending() {
        let store = MemoryStore::new();
        register(&store, Registration::example()).unwrap();

        let mut duplicate = Registration::example();
        duplicate.student_id = "S99999".to_string();
        duplicate.email = "ALEX.MORGAN@university.edu".to_string();
        let err = register(&store, duplicate).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Rejected(Rejection::DuplicateEmail)
        ));

        let voters = Coll::<Voter>::from_store(&store).load().unwrap();
        assert_eq!(voters.len(), 1);
    }

    #[test]
    fn duplicate_student_id_is_rejected() {
        let store = MemoryStore::new();
        register(&store, Registration::example()).unwrap();

        let mut duplicate = Registration::example2();
        duplicate.student_id = Registration::example().student_id;
        let err = register(&store, duplicate).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Rejected(Rejection::DuplicateStudentId)
        ));
    }

    #[test]
    fn invalid_registration_reports_fields() {
        let store = MemoryStore::new();
        let registration = Registration {
            password: "short".to_string(),
            ..Registration::example()
        };
        let err = register(&store, registration).unwrap_err();
        match err {
            crate::error::Error::Validation(errors) => {
                assert!(errors.field("password").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_password_and_unknown_email_are_indistinguishable() {
        let store = MemoryStore::new();
        let config = test_config();
        register(&store, Registration::example()).unwrap();

        let wrong_password =
            login(&store, &config, "alex.morgan@university.edu", "wrong").unwrap_err();
        let unknown_email = login(&store, &config, "nobody@university.edu", "wrong").unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(current_session(&store).unwrap(), None);
    }

    #[test]
    fn session_is_the_public_profile() {
        let store = MemoryStore::new();
        let config = test_config();
        register(&store, Registration::example()).unwrap();

        let session = login(&store, &config, "alex.morgan@university.edu", "correct horse").unwrap();
        assert_eq!(session.student_id, "S12345");
        assert!(session.id.as_str().starts_with("voter-"));
    }

    #[test]
    fn admin_flag_lifecycle() {
        let store = MemoryStore::new();
        let config = test_config();
        assert!(!is_admin(&store));

        let err = admin_login(&store, &config, "admin", "wrong").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Rejected(Rejection::BadCredentials)
        ));
        assert!(!is_admin(&store));

        admin_login(&store, &config, "admin", "admin").unwrap();
        assert!(is_admin(&store));
        // Stored exactly as the browser flag was: the string "true".
        assert_eq!(store.read(ADMIN_AUTH).as_deref(), Some("true"));

        admin_logout(&store);
        assert!(!is_admin(&store));
    }
}
