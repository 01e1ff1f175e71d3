// ============================================================================
// SESSION STATE - who is logged in, persisted in localStorage
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::error::{AppError, Result};

pub const AUTH_KEY: &str = "isAuthenticated";
pub const USER_ID_KEY: &str = "userId";

/// Key/value store holding raw strings
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::Storage("localStorage indisponível".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("falha ao ler {}", key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("falha ao gravar {}", key)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("falha ao remover {}", key)))
    }
}

/// In-memory storage used by tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_id: Option<i64>,
}

impl Session {
    pub fn logged_in(user_id: i64) -> Self {
        Self { is_authenticated: true, user_id: Some(user_id) }
    }

    /// Reads both keys. Anything other than `"true"` counts as logged out, and a
    /// user id that does not parse is dropped.
    pub fn load(storage: &impl SessionStorage) -> Self {
        let is_authenticated = match storage.get(AUTH_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("⚠️ Não foi possível ler a sessão: {}", e);
                false
            }
        };
        if !is_authenticated {
            return Self::default();
        }
        let user_id = storage
            .get(USER_ID_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        Self { is_authenticated, user_id }
    }

    pub fn save(&self, storage: &impl SessionStorage) -> Result<()> {
        if !self.is_authenticated {
            return Self::clear(storage);
        }
        storage.set(AUTH_KEY, "true")?;
        match self.user_id {
            Some(id) => storage.set(USER_ID_KEY, &id.to_string()),
            None => storage.remove(USER_ID_KEY),
        }
    }

    /// Removes both keys
    pub fn clear(storage: &impl SessionStorage) -> Result<()> {
        storage.remove(AUTH_KEY)?;
        storage.remove(USER_ID_KEY)
    }

    /// Id of the logged-in user, if any
    pub fn current_user(&self) -> Option<i64> {
        if self.is_authenticated {
            self.user_id
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        Session::logged_in(42).save(&storage).unwrap();

        assert_eq!(storage.get(AUTH_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get(USER_ID_KEY).unwrap().as_deref(), Some("42"));
        assert_eq!(Session::load(&storage), Session::logged_in(42));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        Session::logged_in(7).save(&storage).unwrap();
        storage.set("other", "x").unwrap();

        Session::clear(&storage).unwrap();
        assert_eq!(storage.get(AUTH_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_ID_KEY).unwrap(), None);
        assert_eq!(storage.len(), 1);
        assert_eq!(Session::load(&storage), Session::default());
    }

    #[test]
    fn test_load_ignores_garbage() {
        let storage = MemoryStorage::new();
        storage.set(AUTH_KEY, "yes").unwrap();
        storage.set(USER_ID_KEY, "12").unwrap();
        assert!(!Session::load(&storage).is_authenticated);

        storage.set(AUTH_KEY, "true").unwrap();
        storage.set(USER_ID_KEY, "abc").unwrap();
        let session = Session::load(&storage);
        assert!(session.is_authenticated);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_saving_logged_out_clears() {
        let storage = MemoryStorage::new();
        Session::logged_in(3).save(&storage).unwrap();
        Session::default().save(&storage).unwrap();
        assert!(storage.is_empty());
    }
}
