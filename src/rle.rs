//! Run-length encoding of packed pixels

/// Longest run a single entry can hold
pub const MAX_RUN: usize = 0xFFFF;

/// `count` repeats of `value`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Run {
    pub count: u16,
    pub value: u16,
}

impl Run {
    pub fn new(count: u16, value: u16) -> Self {
        Self { count, value }
    }
}

/// Push a run of any length, split into entries of at most MAX_RUN
fn push_run(runs: &mut Vec<Run>, mut count: usize, value: u16) {
    while count > MAX_RUN {
        runs.push(Run::new(MAX_RUN as u16, value));
        count -= MAX_RUN;
    }
    if count > 0 {
        runs.push(Run::new(count as u16, value));
    }
}

/// Compress pixels into runs of equal consecutive values
///
/// Runs longer than MAX_RUN are split.  Empty input gives no runs.
pub fn encode_rle(pixels: &[u16]) -> Vec<Run> {
    let mut runs = vec![];
    let mut iter = pixels.iter();
    let mut current = match iter.next() {
        Some(&v) => v,
        None => return runs,
    };
    let mut count = 1;
    for &v in iter {
        if v == current {
            count += 1;
        } else {
            push_run(&mut runs, count, current);
            current = v;
            count = 1;
        }
    }
    push_run(&mut runs, count, current);
    log::debug!("ENCODE RLE: {} pixels -> {} runs", pixels.len(), runs.len());
    runs
}

/// Expand runs back into pixels
pub fn expand_rle(runs: &[Run]) -> Vec<u16> {
    let n = runs.iter().map(|r| usize::from(r.count)).sum();
    let mut out = Vec::with_capacity(n);
    for r in runs {
        out.extend(std::iter::repeat(r.value).take(usize::from(r.count)));
    }
    out
}
