
extern crate splashraster;

use splashraster::{Run, MAX_RUN};

/// Small deterministic generator for run lengths and values
struct Lcg(u64);
impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_pixels(rng: &mut Lcg, runs: usize, max_len: u64) -> Vec<u16> {
    let mut v = vec![];
    for _ in 0 .. runs {
        let len = 1 + rng.next() % max_len;
        // Few distinct values so neighbouring runs often merge
        let value = (rng.next() % 4) as u16 * 0x1111;
        v.extend(std::iter::repeat(value).take(len as usize));
    }
    v
}

fn check_runs(pixels: &[u16], runs: &[Run]) {
    assert_eq!(splashraster::expand_rle(runs), pixels);
    assert!(runs.iter().all(|r| r.count >= 1));
    // Neighbouring runs only share a value after a full-length run
    for w in runs.windows(2) {
        if w[0].value == w[1].value {
            assert_eq!(usize::from(w[0].count), MAX_RUN);
        }
    }
}

#[test]
fn mixed_runs() {
    let (a, b, c) = (0xF79D, 0x1C9F, 0x0000);
    let runs = splashraster::encode_rle(&[a, a, a, b, b, c]);
    assert_eq!(runs, vec![Run::new(3, a), Run::new(2, b), Run::new(1, c)]);
}

#[test]
fn empty_input() {
    assert!(splashraster::encode_rle(&[]).is_empty());
    assert!(splashraster::expand_rle(&[]).is_empty());
}

#[test]
fn round_trip_short_runs() {
    let mut rng = Lcg(1);
    for _ in 0 .. 200 {
        let n = (rng.next() % 50) as usize;
        let pixels = random_pixels(&mut rng, n, 12);
        let runs = splashraster::encode_rle(&pixels);
        check_runs(&pixels, &runs);
    }
}

#[test]
fn round_trip_long_runs() {
    let mut rng = Lcg(99);
    for _ in 0 .. 10 {
        let n = 1 + (rng.next() % 6) as usize;
        let pixels = random_pixels(&mut rng, n, 3 * MAX_RUN as u64);
        let runs = splashraster::encode_rle(&pixels);
        check_runs(&pixels, &runs);
    }
}

#[test]
fn long_run_split() {
    let pixels = vec![7u16; 2 * MAX_RUN + 10];
    let runs = splashraster::encode_rle(&pixels);
    assert_eq!(runs, vec![Run::new(0xFFFF, 7), Run::new(0xFFFF, 7), Run::new(10, 7)]);
    check_runs(&pixels, &runs);
}

#[test]
fn full_splash_background() {
    let bg = splashraster::Palette::default().background565();
    let pixels = vec![bg; 320 * 240];
    let runs = splashraster::encode_rle(&pixels);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1], Run::new((320 * 240 - MAX_RUN) as u16, bg));
}
