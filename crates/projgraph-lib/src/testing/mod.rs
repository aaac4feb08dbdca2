//! Test support for solution trees
//!
//! - [`TempDirFixture`]: a throwaway directory holding descriptors and
//!   manifests written by the builders below
//! - [`ProjectXml`] / [`solution_text`]: descriptor and manifest text
//! - [`MemoryReader`]: a [`DescriptorReader`](crate::descriptor::DescriptorReader)
//!   over in-memory descriptors that counts its reads

pub mod filesystem;
pub mod memory;
pub mod xml;

pub use filesystem::TempDirFixture;
pub use memory::MemoryReader;
pub use xml::{ProjectXml, solution_text};
