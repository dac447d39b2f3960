//! Encrypted file-backed secure store.
//!
//! Layout: `<root>/<service>/<key>.bin`, each file holding
//! `nonce || ciphertext+tag` as produced by the configured encryptor. The
//! encryption context is `<service>/<key>`, so a file copied under another
//! key or service does not decrypt.

use crate::error::{StorageError, StorageResult};
use crate::store::{validate_key, SecureStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storekeep_crypto::DataEncryptor;
use tracing::debug;

/// Service namespace used when none is configured.
pub const DEFAULT_SERVICE: &str = "StorePersistence";

const FILE_EXTENSION: &str = "bin";

/// Configuration for [`EncryptedFileStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Directory holding one subdirectory per service.
    pub root: PathBuf,
    /// Service namespace; becomes a directory name.
    pub service: String,
}

impl FileStoreConfig {
    /// Config for `root` with the default service namespace.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            service: DEFAULT_SERVICE.to_string(),
        }
    }

    /// Overrides the service namespace.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }
}

/// [`SecureStore`] writing encrypted files to disk.
pub struct EncryptedFileStore {
    dir: PathBuf,
    service: String,
    encryptor: Arc<dyn DataEncryptor>,
}

impl EncryptedFileStore {
    /// Opens the store described by `config`.
    ///
    /// The service directory is created lazily on first write.
    pub fn open(config: FileStoreConfig, encryptor: Arc<dyn DataEncryptor>) -> StorageResult<Self> {
        validate_key(&config.service)?;
        Ok(Self {
            dir: config.root.join(&config.service),
            service: config.service,
            encryptor,
        })
    }

    /// Directory holding this service's files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Service namespace of this store.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    fn context(&self, key: &str) -> String {
        format!("{}/{}", self.service, key)
    }
}

impl SecureStore for EncryptedFileStore {
    fn get_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        let blob = match fs::read(&path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let plaintext = self
            .encryptor
            .decrypt_bytes(&self.context(key), &blob)
            .map_err(|e| StorageError::Encryption(e.to_string()))?;
        Ok(Some(plaintext))
    }

    fn set_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let blob = self
            .encryptor
            .encrypt_bytes(&self.context(key), bytes)
            .map_err(|e| StorageError::Encryption(e.to_string()))?;

        fs::create_dir_all(&self.dir)?;
        let tmp_path = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        write_private(&tmp_path, &blob)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(
            "Stored {} encrypted bytes at {:?}",
            blob.len(),
            path.file_name().unwrap_or_default()
        );
        Ok(())
    }

    fn remove_bytes(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {:?}", path.file_name().unwrap_or_default());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes `data` to `path`, readable by the owner only on unix.
fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}
