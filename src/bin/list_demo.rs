use anyhow::{Context, Result};
use log::info;
use sequential_list::SequentialList;

const DEFAULT_ELEMENTS: u32 = 5;

fn element_count() -> Result<u32> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_ELEMENTS),
        Some(arg) => arg
            .parse()
            .with_context(|| format!("element count must be a non-negative integer, got {:?}", arg)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let count = element_count()?;

    let mut list = SequentialList::new();
    let mut value = 1u64;
    for _ in 0..count {
        list.append(value);
        value = value.saturating_mul(10).saturating_add(1);
    }
    info!("appended {} elements: {}", list.size(), list);

    let mut popped = Vec::new();
    while !list.is_empty() {
        popped.push(list.pop()?);
    }
    info!("popped in order {:?}, list is now {}", popped, list);

    for x in 1..=4 {
        list.append(x);
    }
    list.insert_at(5, 2)?;
    info!("after insert_at(5, 2): {}", list);

    list.unshift(0);
    info!("after unshift(0): {}, element at 3 is {}", list, list.get(3)?);

    let head = list.shift()?;
    info!("shifted {}, index of 5 is {}", head, list.index_of(&5)?);

    if let Err(err) = list.index_of(&42) {
        info!("index_of(42) failed as expected: {}", err);
    }
    Ok(())
}
