#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fixed-capacity thread-safe LRU cache / 固定容量线程安全 LRU 缓存
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - put: O(1)
//! - contains / peek: O(1)
//! - rm / pop: O(1)
//!
//! Recency tracking uses a doubly-linked list over a stable-index slot
//! arena, with a hash index for O(1) key lookup. [`Lru`] serializes every
//! call under one mutex; [`RawLru`] is the unsynchronized core for
//! single-threaded use.
//! 近期性跟踪基于稳定索引槽位数组上的双向链表，并用哈希索引实现
//! O(1) 键查找。[`Lru`] 用一把互斥锁串行化所有调用；[`RawLru`] 是
//! 供单线程使用的核心。
//!
//! # Examples
//! ```
//! use sync_lru::Lru;
//!
//! let cache = Lru::new(2);
//! cache.put("k1", 1);
//! cache.put("k2", 2);
//! assert_eq!(cache.get(&"k1"), Some(1));
//!
//! // k2 is now least recently used and gets evicted
//! cache.put("k3", 3);
//! assert!(!cache.contains(&"k2"));
//! ```

mod lru;
mod raw;

pub use lru::Lru;
pub use raw::{Iter, RawLru};
