//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use contactkeeper_core::domain::result::{Error, Result};
use contactkeeper_core::ports::{ContactRepository, FileSystem};
use contactkeeper_core::services::ContactService;
use contactkeeper_core::{Contact, ContactInfo};

// ============================================================================
// In-memory repository
// ============================================================================

/// Repository that keeps the collection in memory and records every call
#[derive(Default)]
pub struct FakeRepository {
    stored: Mutex<Vec<Contact>>,
    saves: Mutex<Vec<Vec<Contact>>>,
    loads: AtomicUsize,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Arc<Self> {
        let repo = Self::default();
        *repo.stored.lock().unwrap() = contacts;
        Arc::new(repo)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_save(&self) -> Option<Vec<Contact>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContactRepository for FakeRepository {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Error::Io(io::Error::new(io::ErrorKind::Other, "load failed")));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save_contacts(&self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(Error::AccessDenied {
                path: PathBuf::from("contacts.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.saves.lock().unwrap().push(contacts.to_vec());
        *self.stored.lock().unwrap() = contacts.to_vec();
        Ok(())
    }
}

// ============================================================================
// In-memory file system
// ============================================================================

/// FileSystem double keeping files in a map
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<HashSet<PathBuf>>,
    deny_reads: AtomicBool,
    deny_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryFileSystem {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.as_bytes().to_vec());
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn deny_reads(&self, deny: bool) {
        self.deny_reads.store(deny, Ordering::SeqCst);
    }

    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.store(deny, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "access denied")
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    async fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.deny_reads.load(Ordering::SeqCst) {
            return Err(permission_denied());
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.deny_writes.load(Ordering::SeqCst) {
            return Err(permission_denied());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn contact_info(first: &str, last: &str, email: &str, phone: &str) -> ContactInfo {
    ContactInfo::new()
        .with_first_name(first)
        .with_last_name(last)
        .with_email(email)
        .with_phone(phone)
}

pub fn contact(first: &str, last: &str) -> Contact {
    Contact::new(
        first,
        last,
        format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "0151 1234567",
    )
}

/// Ten contacts with distinct full names
pub fn ten_contacts() -> Vec<Contact> {
    (0..10).map(|i| contact(&format!("Person{i}"), "Tester")).collect()
}

pub fn ids(contacts: &[Contact]) -> HashSet<Uuid> {
    contacts.iter().map(Contact::id).collect()
}

pub fn service_over(repo: &Arc<FakeRepository>) -> Arc<ContactService> {
    Arc::new(ContactService::new(repo.clone()))
}
