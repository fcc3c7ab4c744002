#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use skipset::{Config, SkipList};
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let (seed, ops) = data.split_at(8);
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(seed);
    let seed = u64::from_le_bytes(seed_bytes);

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = Config::new()
        .with_seed(seed)
        .with_max_level(rng.gen_range(1..=skipset::MAX_HEIGHT));
    let mut list = SkipList::with_config(config).unwrap();
    let mut model: BTreeMap<u8, usize> = BTreeMap::new();

    for op in ops {
        let target = op >> 2;
        match op & 0b11 {
            0 | 1 => {
                list.add(target);
                *model.entry(target).or_default() += 1;
            }
            2 => {
                let expected = match model.get_mut(&target) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&target);
                        }
                        true
                    }
                    None => false,
                };
                assert_eq!(list.erase(&target), expected);
            }
            _ => assert_eq!(list.search(&target), model.contains_key(&target)),
        }

        assert!(list.level() >= 1 && list.level() <= list.max_level());
    }

    assert_eq!(list.len(), model.values().sum::<usize>());
});
