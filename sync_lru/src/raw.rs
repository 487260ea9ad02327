//! Arena-backed LRU core / 基于槽位数组的 LRU 核心
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - put: O(1)
//! - peek / contains: O(1)
//! - rm / pop: O(1)
//!
//! Recency list is a doubly-linked list threaded through a slot arena with
//! stable u32 indices, so move-to-front never invalidates other positions.
//! 近期性链表是穿过槽位数组的双向链表，槽位索引为稳定 u32，
//! 因此移到队首不会使其他位置失效。

use std::{borrow::Borrow, hash::Hash, mem};

use gxhash::{HashMap, HashMapExt};

/// List terminator and "no slot" marker / 链表终止符与空槽标记
const NIL: u32 = u32::MAX;

/// Arena indices are u32, NIL is reserved / 槽位索引为 u32，NIL 保留
const MAX_CAP: usize = (NIL - 1) as usize;

/// One resident entry with its list links / 一个驻留条目及其链表指针
struct Slot<K, V> {
  key: K,
  val: V,
  prev: u32,
  next: u32,
}

/// Unsynchronized LRU cache with fixed capacity
/// 无同步的固定容量 LRU 缓存
///
/// Head of the list is most recently used, tail is least recently used.
/// The index maps each key to its slot, list and index always agree.
/// 链表头为最近使用，尾为最久未用。索引将键映射到槽位，链表与索引始终一致。
pub struct RawLru<K: Hash + Eq, V> {
  slots: Vec<Slot<K, V>>,
  index: HashMap<K, u32>,
  head: u32,
  tail: u32,
  cap: usize,
}

impl<K: Hash + Eq, V> RawLru<K, V> {
  /// Create with capacity (clamped to 1..=u32::MAX-1)
  /// 创建，指定容量（夹取到 1..=u32::MAX-1）
  #[inline]
  pub fn new(cap: usize) -> Self {
    Self {
      slots: Vec::new(),
      index: HashMap::new(),
      head: NIL,
      tail: NIL,
      cap: cap.clamp(1, MAX_CAP),
    }
  }

  /// Get value and mark key most recently used
  /// 获取值并将键标记为最近使用
  #[inline]
  pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    self.move_front(idx);
    Some(&self.slots[idx as usize].val)
  }

  /// Peek value without touching recency order
  /// 查看值，不改变近期性顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let &idx = self.index.get(key)?;
    Some(&self.slots[idx as usize].val)
  }

  /// Membership test, does not touch recency order
  /// 成员测试，不改变近期性顺序
  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.index.contains_key(key)
  }

  /// Insert or update, returns the evicted entry if one was displaced
  /// 插入或更新，若有条目被淘汰则返回它
  ///
  /// Existing key: value overwritten in place, key becomes most recently
  /// used, size unchanged. New key at capacity: the least recently used
  /// entry is evicted first, capacity is never exceeded.
  /// 已存在的键：原地覆盖值，键成为最近使用，大小不变。
  /// 容量已满时插入新键：先淘汰最久未用条目，容量永不超出。
  pub fn put(&mut self, key: K, val: V) -> Option<(K, V)>
  where
    K: Clone,
  {
    if let Some(&idx) = self.index.get(&key) {
      self.slots[idx as usize].val = val;
      self.move_front(idx);
      return None;
    }

    if self.slots.len() >= self.cap {
      // Recycle the tail slot in place, no reallocation at steady state
      // 原地复用尾部槽位，稳态下不重新分配
      let idx = self.tail;
      self.unlink(idx);
      let slot = &mut self.slots[idx as usize];
      let old_key = mem::replace(&mut slot.key, key.clone());
      let old_val = mem::replace(&mut slot.val, val);
      self.index.remove(&old_key);
      self.index.insert(key, idx);
      self.push_front(idx);
      return Some((old_key, old_val));
    }

    let idx = self.slots.len() as u32;
    self.slots.push(Slot {
      key: key.clone(),
      val,
      prev: NIL,
      next: NIL,
    });
    self.index.insert(key, idx);
    self.push_front(idx);
    None
  }

  /// Remove by key, returns the value if present
  /// 按键删除，存在则返回值
  pub fn rm<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.remove(key)?;
    self.unlink(idx);
    Some(self.rm_slot(idx).val)
  }

  /// Remove and return the least recently used entry
  /// 删除并返回最久未用条目
  pub fn pop(&mut self) -> Option<(K, V)> {
    if self.tail == NIL {
      return None;
    }
    let idx = self.tail;
    self.index.remove(&self.slots[idx as usize].key);
    self.unlink(idx);
    let slot = self.rm_slot(idx);
    Some((slot.key, slot.val))
  }

  /// Drop all entries, capacity unchanged
  /// 清空所有条目，容量不变
  #[inline]
  pub fn clear(&mut self) {
    self.slots.clear();
    self.index.clear();
    self.head = NIL;
    self.tail = NIL;
  }

  /// Resident entry count / 驻留条目数
  #[inline]
  pub fn len(&self) -> usize {
    self.slots.len()
  }

  /// Check if cache is empty / 检查缓存是否为空
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Fixed capacity / 固定容量
  #[inline]
  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Iterate entries in recency order, most recently used first
  /// 按近期性顺序迭代条目，最近使用在前
  ///
  /// Does not touch recency order.
  /// 不改变近期性顺序。
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      lru: self,
      idx: self.head,
    }
  }

  /// Detach slot from the recency list / 将槽位从近期性链表摘下
  fn unlink(&mut self, idx: u32) {
    let (prev, next) = {
      let s = &self.slots[idx as usize];
      (s.prev, s.next)
    };
    if prev == NIL {
      self.head = next;
    } else {
      self.slots[prev as usize].next = next;
    }
    if next == NIL {
      self.tail = prev;
    } else {
      self.slots[next as usize].prev = prev;
    }
  }

  /// Attach a detached slot at the head / 将已摘下的槽位接到链表头
  fn push_front(&mut self, idx: u32) {
    let head = self.head;
    {
      let s = &mut self.slots[idx as usize];
      s.prev = NIL;
      s.next = head;
    }
    if head == NIL {
      self.tail = idx;
    } else {
      self.slots[head as usize].prev = idx;
    }
    self.head = idx;
  }

  /// Splice slot to the head of the list / 将槽位拼接到链表头
  #[inline]
  fn move_front(&mut self, idx: u32) {
    if self.head != idx {
      self.unlink(idx);
      self.push_front(idx);
    }
  }

  /// Take an unlinked slot out of the arena
  /// 从槽位数组中取出已摘下的槽位
  ///
  /// swap_remove keeps the arena dense; the slot moved into `idx` gets its
  /// neighbor links and index entry rewritten.
  /// swap_remove 保持数组紧凑；被换入 `idx` 的槽位需改写其邻居指针与索引项。
  fn rm_slot(&mut self, idx: u32) -> Slot<K, V> {
    debug_assert!(!self.slots.is_empty());
    let last = (self.slots.len() - 1) as u32;
    let slot = self.slots.swap_remove(idx as usize);
    if idx != last {
      let (prev, next) = {
        let s = &self.slots[idx as usize];
        (s.prev, s.next)
      };
      if prev == NIL {
        self.head = idx;
      } else {
        self.slots[prev as usize].next = idx;
      }
      if next == NIL {
        self.tail = idx;
      } else {
        self.slots[next as usize].prev = idx;
      }
      if let Some(i) = self.index.get_mut(&self.slots[idx as usize].key) {
        *i = idx;
      }
    }
    slot
  }
}

/// Recency-order iterator, most recently used first
/// 近期性顺序迭代器，最近使用在前
pub struct Iter<'a, K: Hash + Eq, V> {
  lru: &'a RawLru<K, V>,
  idx: u32,
}

impl<'a, K: Hash + Eq, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.idx == NIL {
      return None;
    }
    let s = &self.lru.slots[self.idx as usize];
    self.idx = s.next;
    Some((&s.key, &s.val))
  }
}
