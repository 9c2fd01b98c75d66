#![doc(html_root_url = "https://docs.rs/sipmatch/0.1.0")]
#![warn(missing_docs)]
/*!
Interchangeable strategies for testing whether a 4-byte token, read at an
arbitrary position in an input buffer, is one of 15 fixed SIP keyword
prefixes (`SIP/`, `INVI`, `ACK `, ...).

Every strategy implements the same [Matcher] contract over the same key set
and returns the same boolean for every input; they differ only in the data
structure built at construction and the instruction profile of the lookup:

* [ScanMatcher], [IterScanMatcher], [UnrolledMatcher] — linear scans.
* [BinarySearchMatcher], [DecisionTreeMatcher] — comparison searches.
* [OrderedSetMatcher], [HashSetMatcher] — standard-collection baselines.
* [SseMatcher], [SseReduceMatcher], [Avx2Matcher] — lane-parallel compares.
* [NativeTableMatcher], [PortableTableMatcher] — direct-mapped 16 slot
  perfect hash tables.

### Install

Simply configure your `Cargo.toml`:

```toml
[dependencies]
sipmatch = "0.1"
```

### Example

```
use sipmatch::{Matcher, PortableTableMatcher, UnrolledMatcher};

let scan = UnrolledMatcher::default();
assert!(scan.matches(b"INVITE sip:bob@example.com SIP/2.0", 0));
assert!(!scan.matches(b"GET / HTTP/1.1", 0));

let table = PortableTableMatcher::new()?;
assert!(table.matches(b"REGISTER sip:example.com SIP/2.0", 0));
assert!(table.matches(b"xxINFO", 2));
# Ok::<(), sipmatch::Error>(())
```

### Contract

[Matcher::matches] asserts that 4 bytes are readable at the given index;
[Matcher::matches_unchecked] skips the check and leaves the guarantee to the
caller. Matchers are immutable after construction, so a constructed matcher
may serve concurrent lookups without locking.
*/

mod collect;
mod error;
mod keys;
mod kit;
mod matcher;
mod perfect;
mod scan;
mod search;
mod simd;

#[cfg(test)]
pub mod test_utils;

pub use collect::{HashSetMatcher, OrderedSetMatcher};
pub use error::{Error, Result};
pub use keys::{fold_be, fold_ne, CANONICAL_KEYS, KEYWORDS, KEY_COUNT, NATIVE_KEYS};
pub use matcher::Matcher;
pub use perfect::{
    NativeTableMatcher, PerfectTable, PortableTableMatcher, CANONICAL_MULTIPLIER, NATIVE_MULTIPLIER,
};
pub use scan::{IterScanMatcher, ScanMatcher, UnrolledMatcher};
pub use search::{BinarySearchMatcher, DecisionTreeMatcher};
pub use simd::{Avx2Matcher, SseMatcher, SseReduceMatcher};

#[cfg(test)]
mod tests {
    #[test]
    fn test_readme_deps() {
        version_sync::assert_markdown_deps_updated!("README.md");
    }

    #[test]
    fn test_html_root_url() {
        version_sync::assert_html_root_url_updated!("src/lib.rs");
    }
}
