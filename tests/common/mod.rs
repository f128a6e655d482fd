#![allow(dead_code)]

use bytes::Bytes;
use gitdump::areas::remote::{FetchOutcome, ObjectFetcher};
use gitdump::areas::repository::RemoteRepository;
use gitdump::artifacts::locator::RepositoryLocator;
use sha1::{Digest, Sha1};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// In-memory object store speaking the loose-object wire format
///
/// Objects are stored exactly as a real server would expose them: zlib
/// compressed, content addressed, under `objects/xx/yyyy...`.
#[derive(Debug, Default)]
pub struct FakeObjectStore {
    paths: HashMap<String, Bytes>,
}

impl FakeObjectStore {
    pub fn put_raw(&mut self, relative_path: &str, raw: impl Into<Vec<u8>>) {
        self.paths.insert(relative_path.to_string(), raw.into().into());
    }

    /// Store a loose object, returning its (real) hash
    pub fn put_object(&mut self, object_type: &str, payload: &[u8]) -> String {
        let content = wire_content(object_type, payload);
        let oid = sha1_hex(&content);
        self.paths.insert(object_path(&oid), compress(&content));
        oid
    }

    /// Store an object under a hash it does not match, to fake corruption
    pub fn put_object_at(&mut self, oid: &str, object_type: &str, payload: &[u8]) {
        let content = wire_content(object_type, payload);
        self.paths.insert(object_path(oid), compress(&content));
    }

    /// Store arbitrary bytes under an object hash (e.g. invalid zlib data)
    pub fn put_raw_object_at(&mut self, oid: &str, raw: &[u8]) {
        self.paths.insert(object_path(oid), Bytes::from(raw.to_vec()));
    }

    pub fn put_blob(&mut self, content: &[u8]) -> String {
        self.put_object("blob", content)
    }

    /// Store a tree built from `(mode, name, child oid)` triples, wire order
    pub fn put_tree(&mut self, entries: &[(&str, &str, &str)]) -> String {
        let mut payload = Vec::new();
        for (mode, name, oid) in entries {
            payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
            payload.extend_from_slice(&hex_to_bytes(oid));
        }
        self.put_object("tree", &payload)
    }

    pub fn put_commit(&mut self, tree_oid: &str) -> String {
        let payload = format!(
            "tree {tree_oid}\nauthor A U Thor <a@example.com> 1700000000 +0000\n\
             committer A U Thor <a@example.com> 1700000000 +0000\n\nscraped\n"
        );
        self.put_object("commit", payload.as_bytes())
    }

    /// Point a symbolic HEAD at `refs/heads/main` holding `commit_oid`
    pub fn set_head(&mut self, commit_oid: &str) {
        self.put_raw("HEAD", "ref: refs/heads/main\n");
        self.put_raw("refs/heads/main", format!("{commit_oid}\n"));
    }
}

impl ObjectFetcher for FakeObjectStore {
    fn fetch_bytes(&self, relative_path: &str) -> FetchOutcome {
        match self.paths.get(relative_path) {
            Some(raw) => FetchOutcome::Found(raw.clone()),
            None => FetchOutcome::Missing,
        }
    }
}

/// Writer that can be cloned into the repository and read back afterwards
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Repository over a fake store, discarding output
pub fn repository_over(store: FakeObjectStore) -> RemoteRepository {
    repository_with_writer(store, Box::new(std::io::sink()))
}

pub fn repository_with_writer(
    store: FakeObjectStore,
    writer: Box<dyn std::io::Write>,
) -> RemoteRepository {
    let locator = RepositoryLocator::try_parse("https://example.com/exposed").unwrap();
    RemoteRepository::with_fetcher(locator, Arc::new(store), writer)
}

fn wire_content(object_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut content = format!("{} {}\0", object_type, payload.len()).into_bytes();
    content.extend_from_slice(payload);
    content
}

fn object_path(oid: &str) -> String {
    format!("objects/{}/{}", &oid[..2], &oid[2..])
}

fn sha1_hex(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

fn compress(data: &[u8]) -> Bytes {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap().into()
}

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}
