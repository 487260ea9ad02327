//! Thread-safe LRU cache / 线程安全 LRU 缓存
//!
//! One mutex guards list and index jointly, so every public call is a
//! single critical section and all calls on one instance linearize.
//! 一把互斥锁同时保护链表与索引，每个公开调用都是单个临界区，
//! 同一实例上的所有调用可线性化。

use std::{borrow::Borrow, hash::Hash};

use parking_lot::Mutex;

use crate::RawLru;

/// Fixed-capacity thread-safe LRU cache
/// 固定容量线程安全 LRU 缓存
///
/// Read paths hand back owned values (`V: Clone`), so no borrow outlives
/// the lock. Share across threads with `Arc`.
/// 读路径返回值的所有权（`V: Clone`），借用不会跨越锁释放。
/// 跨线程共享请使用 `Arc`。
pub struct Lru<K: Hash + Eq, V>(Mutex<RawLru<K, V>>);

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Create with capacity (min 1)
  /// 创建，指定容量（最小 1）
  #[inline]
  pub fn new(cap: usize) -> Self {
    Self(Mutex::new(RawLru::new(cap)))
  }

  /// Get value and mark key most recently used
  /// 获取值并将键标记为最近使用
  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.0.lock().get(key).cloned()
  }

  /// Peek value without touching recency order
  /// 查看值，不改变近期性顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.0.lock().peek(key).cloned()
  }

  /// Membership test, does not touch recency order
  /// 成员测试，不改变近期性顺序
  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.lock().contains(key)
  }

  /// Insert or update, returns the evicted entry if one was displaced
  /// 插入或更新，若有条目被淘汰则返回它
  #[inline]
  pub fn put(&self, key: K, val: V) -> Option<(K, V)>
  where
    K: Clone,
  {
    self.0.lock().put(key, val)
  }

  /// Remove by key, returns the value if present
  /// 按键删除，存在则返回值
  #[inline]
  pub fn rm<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.lock().rm(key)
  }

  /// Remove and return the least recently used entry
  /// 删除并返回最久未用条目
  #[inline]
  pub fn pop(&self) -> Option<(K, V)> {
    self.0.lock().pop()
  }

  /// Drop all entries, capacity unchanged
  /// 清空所有条目，容量不变
  #[inline]
  pub fn clear(&self) {
    self.0.lock().clear();
  }

  /// Resident entry count / 驻留条目数
  #[inline]
  pub fn len(&self) -> usize {
    self.0.lock().len()
  }

  /// Check if cache is empty / 检查缓存是否为空
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.lock().is_empty()
  }

  /// Fixed capacity / 固定容量
  #[inline]
  pub fn cap(&self) -> usize {
    self.0.lock().cap()
  }
}
