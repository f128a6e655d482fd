use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::tree::Tree;
use std::io::BufRead;

/// Deserialization of an object payload, header already consumed
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self>
    where
        Self: Sized;
}

/// A parsed loose object
#[derive(Debug)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
    /// Annotated tags are recognized but never dereferenced to their target
    Tag,
}
