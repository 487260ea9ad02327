//! Demonstration driver / 演示程序
//!
//! Capacity-3 cache walked through put, get, eviction and membership.
//! 容量为 3 的缓存，演示 put、get、淘汰与成员测试。

use sync_lru::Lru;

fn main() {
  let cache = Lru::new(3);
  cache.put(1, "one");
  cache.put(2, "two");
  cache.put(3, "three");

  // Touch 2, order is now 2, 3, 1
  // 访问 2，顺序变为 2, 3, 1
  if let Some(v) = cache.get(&2) {
    println!("get(2) = {v}");
  }

  // Capacity exceeded, key 1 is the current LRU
  // 容量超出，键 1 是当前最久未用
  if let Some((k, v)) = cache.put(4, "four") {
    println!("evicted ({k}, {v})");
  }

  println!("contains(1) = {}", cache.contains(&1));
  println!("contains(3) = {}", cache.contains(&3));
  println!("len = {}", cache.len());
}
